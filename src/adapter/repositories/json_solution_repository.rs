//! JSON Solution Repository Implementation
//!
//! SolutionRepositoryのJSON実装（求解記録を `<dir>/<run_id>.json` に保存）

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use std::fs;
use std::path::PathBuf;

use crate::domain::entities::solution_record::SolutionRecord;
use crate::domain::repositories::solution_repository::SolutionRepository;

/// JSONファイルベースの求解記録リポジトリ
pub struct JsonSolutionRepository;

impl JsonSolutionRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// 記録を保存する（同期処理）
    fn save_sync(dir: &str, record: &SolutionRecord) -> Result<PathBuf> {
        let dir = PathBuf::from(shellexpand::tilde(dir).as_ref());
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create solutions directory: {}", dir.display()))?;

        let path = dir.join(format!("{}.json", record.run_id));
        let json =
            serde_json::to_string_pretty(record).context("Failed to serialize solution record")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write solution file: {}", path.display()))?;

        info!(
            "Saved solution record {} ({} moves) to {}",
            record.run_id,
            record.move_count,
            path.display()
        );

        Ok(path)
    }
}

#[async_trait]
impl SolutionRepository for JsonSolutionRepository {
    async fn save(&self, dir: &str, record: &SolutionRecord) -> Result<PathBuf> {
        let dir = dir.to_string();
        let record = record.clone();
        tokio::task::spawn_blocking(move || Self::save_sync(&dir, &record))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for JsonSolutionRepository {
    fn default() -> Self {
        Self::new()
    }
}
