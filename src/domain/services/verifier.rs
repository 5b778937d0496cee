//! # Solution Verifier
//!
//! 解の手順を初期局面から再生して検証するサービス

use crate::domain::entities::action::Action;
use crate::domain::entities::game::Game;
use crate::domain::errors::MoveError;

/// 解の検証サービス
pub struct SolutionVerifier;

impl SolutionVerifier {
    /// 手順を順に適用し、最終局面がクリア状態であることを確認する
    ///
    /// # Returns
    ///
    /// 最終局面
    ///
    /// # Errors
    ///
    /// 途中に不正な手がある場合、または最後にクリアしていない場合にエラーを返す
    pub fn verify(initial: &Game, actions: &[Action]) -> Result<Game, MoveError> {
        let mut game = initial.clone();
        for action in actions {
            game = game.apply(action)?;
        }

        if !game.is_won() {
            return Err(MoveError::NotWon {
                remaining: game.cards_remaining(),
            });
        }

        Ok(game)
    }
}
