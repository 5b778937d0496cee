//! # Domain Layer
//!
//! このモジュールは FreeCell の核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部システムに依存しない（ファイルや CLI について何も知らない）
//! - 純粋なゲームロジックと探索アルゴリズム
//!
//! ## 構成要素
//!
//! - **entities**: エンティティとバリューオブジェクト（Card, Game, Action など）
//! - **errors**: ドメインエラー
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（合法手生成、評価関数、探索、検証、ディール生成）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
