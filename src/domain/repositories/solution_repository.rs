//! # Solution Repository Trait
//!
//! 求解記録の永続化を抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::solution_record::SolutionRecord;

/// 求解記録リポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SolutionRepository: Send + Sync {
    /// 記録を保存する
    ///
    /// # Arguments
    ///
    /// * `dir` - 保存先ディレクトリ
    /// * `record` - 保存する求解記録
    ///
    /// # Returns
    ///
    /// 書き込んだファイルのパス
    ///
    /// # Errors
    ///
    /// ファイルの書き込みに失敗した場合にエラーを返す
    async fn save(&self, dir: &str, record: &SolutionRecord) -> Result<PathBuf>;
}
