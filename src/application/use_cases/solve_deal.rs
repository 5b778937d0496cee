//! # Solve Deal Use Case
//!
//! 求解ユースケース（探索と解の検証）

use anyhow::{Context, Result};
use log::{info, warn};

use crate::application::dto::solve_config::SolveConfig;
use crate::domain::entities::game::Game;
use crate::domain::services::solver::{SolveOutcome, SolveStatus, Solver};
use crate::domain::services::verifier::SolutionVerifier;

/// 求解ユースケース
///
/// 探索は CPU バウンドなのでブロッキングスレッドで実行する
pub struct SolveDealUseCase {
    config: SolveConfig,
}

impl SolveDealUseCase {
    pub fn new(config: SolveConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolveConfig {
        &self.config
    }

    /// 局面を解く
    ///
    /// # Errors
    ///
    /// 探索タスクの実行に失敗した場合、または検証が有効で解が不正だった場合にエラーを返す
    pub async fn execute(&self, game: Game) -> Result<SolveOutcome> {
        let initial = game.clone();
        let options = self.config.solver_options();

        let outcome = tokio::task::spawn_blocking(move || Solver::new(game, options).solve())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?;

        match &outcome.status {
            SolveStatus::Solved(actions) => {
                info!(
                    "Solved in {} moves ({} nodes, {:.2?})",
                    actions.len(),
                    outcome.nodes_explored,
                    outcome.elapsed
                );
                if self.config.verify {
                    SolutionVerifier::verify(&initial, actions)
                        .context("Solver produced an invalid solution")?;
                }
            }
            SolveStatus::Exhausted => {
                warn!(
                    "No solution exists ({} nodes explored)",
                    outcome.nodes_explored
                );
            }
            SolveStatus::BudgetExceeded => {
                warn!(
                    "No solution found within {} nodes",
                    outcome.nodes_explored
                );
            }
        }

        Ok(outcome)
    }
}
