//! # Domain Entities
//!
//! エンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **Card**: カード（スート・ランク）
//! - **Action**: 1手分の移動
//! - **Game**: 局面とルール
//! - **SolutionRecord**: 求解記録

pub mod action;
pub mod card;
pub mod game;
pub mod solution_record;
