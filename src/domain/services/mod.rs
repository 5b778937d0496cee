//! # Domain Services
//!
//! 局面をまたぐビジネスロジック
//!
//! - **move_generator**: 合法手の列挙
//! - **heuristic**: 局面評価
//! - **solver**: 最良優先探索
//! - **verifier**: 解の検証
//! - **dealer**: ディール生成

pub mod dealer;
pub mod heuristic;
pub mod move_generator;
pub(crate) mod search_node;
pub mod solver;
pub mod verifier;
