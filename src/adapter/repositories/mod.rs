//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod json_solution_repository;
pub mod text_deal_repository;
