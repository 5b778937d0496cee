//! # FreeCell Solver
//!
//! FreeCell のディールを最良優先探索で解くツール
//!
//! クリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: カード・局面・手のルール、探索と検証（外部依存なし）
//! - **Application層**: ディールの読み込み・求解・記録保存のユースケース
//! - **Adapter層**: 設定ファイル、ディールファイル、JSON記録などファイルシステムとの統合
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
