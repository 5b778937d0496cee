//! Configuration
//!
//! JSON 設定ファイルの読み込み

use anyhow::{bail, Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::application::dto::solve_config::SolveConfig;
use crate::domain::services::heuristic::HeuristicWeights;
use crate::domain::services::solver::{DEFAULT_MAX_NODES, DEFAULT_PROGRESS_INTERVAL};

pub const DEFAULT_SOLUTIONS_DIR: &str = "./solutions";

/// 設定ファイルの内容（全フィールド省略可）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub max_nodes: u64,
    pub progress_interval: u64,
    pub heuristic: HeuristicWeights,
    pub solutions_dir: String,
    pub verify_solutions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            heuristic: HeuristicWeights::default(),
            solutions_dir: DEFAULT_SOLUTIONS_DIR.to_string(),
            verify_solutions: true,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let content = fs::read_to_string(expanded.as_ref())
            .with_context(|| format!("Failed to read config file: {}", expanded))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", expanded))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", expanded))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(field) = self.heuristic.oversized_field() {
            bail!("heuristic.{} is too large", field);
        }
        Ok(())
    }

    /// ファイルがなければデフォルト設定を返す
    pub fn load_or_default(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        if !Path::new(expanded.as_ref()).exists() {
            info!("No config file at {}, using defaults", expanded);
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn solve_config(&self) -> SolveConfig {
        SolveConfig::new(
            self.max_nodes,
            self.progress_interval,
            self.heuristic,
            self.verify_solutions,
        )
    }

    /// `~` を展開した保存先ディレクトリ
    pub fn solutions_dir(&self) -> String {
        shellexpand::tilde(&self.solutions_dir).into_owned()
    }
}
