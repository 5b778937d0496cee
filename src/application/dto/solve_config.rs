//! # Solve Configuration DTO
//!
//! 求解設定のData Transfer Object

use crate::domain::services::heuristic::HeuristicWeights;
use crate::domain::services::solver::SolverOptions;

/// 求解設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveConfig {
    /// 展開するノード数の上限
    pub max_nodes: u64,
    /// 進捗ログの間隔（ノード数）
    pub progress_interval: u64,
    /// 評価関数の重み
    pub weights: HeuristicWeights,
    /// 見つかった解を再生して検証するかどうか
    pub verify: bool,
}

impl SolveConfig {
    /// 新しい求解設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use freecell_solver::application::dto::solve_config::SolveConfig;
    /// use freecell_solver::domain::services::heuristic::HeuristicWeights;
    ///
    /// let config = SolveConfig::new(
    ///     200_000,   // ノード上限
    ///     10_000,    // 進捗ログ間隔
    ///     HeuristicWeights::default(),
    ///     true,      // 解を検証する
    /// );
    ///
    /// assert_eq!(config.solver_options().max_nodes, 200_000);
    /// assert!(config.verify);
    /// ```
    pub fn new(
        max_nodes: u64,
        progress_interval: u64,
        weights: HeuristicWeights,
        verify: bool,
    ) -> Self {
        Self {
            max_nodes,
            progress_interval,
            weights,
            verify,
        }
    }

    /// ソルバーに渡す設定へ変換
    pub fn solver_options(&self) -> SolverOptions {
        SolverOptions {
            max_nodes: self.max_nodes,
            progress_interval: self.progress_interval,
            weights: self.weights,
        }
    }
}

impl Default for SolveConfig {
    fn default() -> Self {
        let options = SolverOptions::default();
        Self::new(
            options.max_nodes,
            options.progress_interval,
            options.weights,
            true,
        )
    }
}
