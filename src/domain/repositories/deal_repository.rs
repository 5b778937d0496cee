//! # Deal Repository Trait
//!
//! ディールファイルの発見と読み込みを抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::game::Game;

/// ディールリポジトリ
///
/// ディールの発見と初期局面への変換を担当するリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DealRepository: Send + Sync {
    /// ディールファイルを発見する
    ///
    /// # Arguments
    ///
    /// * `deal_dir` - ディールディレクトリのパス
    ///
    /// # Returns
    ///
    /// 発見されたディールファイルのパスのリスト（ソート済み）
    async fn discover_deal_files(&self, deal_dir: &str) -> Result<Vec<PathBuf>>;

    /// ディールファイルを読み込んで初期局面を作る
    ///
    /// # Arguments
    ///
    /// * `path` - ディールファイルのパス
    ///
    /// # Errors
    ///
    /// ファイルが読めない、またはディールとして不正な場合にエラーを返す
    async fn load_deal(&self, path: &Path) -> Result<Game>;
}
