//! # Driver Layer (Presentation)
//!
//! CLIやその他の外部インターフェースを提供
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **workflow**: ディールの解決・求解・保存のオーケストレーション（依存性注入もここで行う）

pub mod cli;
pub mod workflow;

pub use cli::Args;
pub use workflow::{SolveWorkflow, WorkflowSummary};
