//! # Save Solution Use Case
//!
//! 求解記録の保存ユースケース

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::entities::game::Game;
use crate::domain::entities::solution_record::SolutionRecord;
use crate::domain::repositories::solution_repository::SolutionRepository;
use crate::domain::services::solver::SolveOutcome;

/// 求解記録の保存ユースケース
pub struct SaveSolutionUseCase<S: SolutionRepository> {
    solution_repository: Arc<S>,
}

impl<S: SolutionRepository> SaveSolutionUseCase<S> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `solution_repository` - 求解記録リポジトリ
    pub fn new(solution_repository: Arc<S>) -> Self {
        Self {
            solution_repository,
        }
    }

    /// 探索結果から記録を作成して保存する
    ///
    /// # Arguments
    ///
    /// * `output_dir` - 保存先ディレクトリ
    /// * `deal_source` - ディールの出所
    /// * `initial` - 初期局面
    /// * `outcome` - 探索結果
    ///
    /// # Returns
    ///
    /// 保存したファイルのパス
    pub async fn execute(
        &self,
        output_dir: &str,
        deal_source: &str,
        initial: &Game,
        outcome: &SolveOutcome,
    ) -> Result<PathBuf> {
        let record = SolutionRecord::from_outcome(
            uuid::Uuid::new_v4().to_string(),
            deal_source.to_string(),
            current_hostname(),
            initial.to_string(),
            outcome,
        );

        self.solution_repository.save(output_dir, &record).await
    }
}

fn current_hostname() -> String {
    hostname::get()
        .unwrap_or_else(|_| "unknown".into())
        .to_string_lossy()
        .to_string()
}
