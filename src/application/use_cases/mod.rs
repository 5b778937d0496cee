//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **DiscoverDealsUseCase**: ディールファイルの発見
//! - **LoadDealUseCase**: ディールの読み込み
//! - **SolveDealUseCase**: 求解と解の検証
//! - **SaveSolutionUseCase**: 求解記録の保存

pub mod discover_deals;
pub mod load_deal;
pub mod save_solution;
pub mod solve_deal;
