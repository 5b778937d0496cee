//! # Discover Deals Use Case
//!
//! ディールファイル発見ユースケース

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::repositories::deal_repository::DealRepository;

/// ディールファイル発見ユースケース
///
/// 指定されたディレクトリからディールファイルを発見する
pub struct DiscoverDealsUseCase<R: DealRepository> {
    deal_repository: Arc<R>,
}

impl<R: DealRepository> DiscoverDealsUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `deal_repository` - ディールリポジトリ
    pub fn new(deal_repository: Arc<R>) -> Self {
        Self { deal_repository }
    }

    /// ディールファイルを発見する
    ///
    /// # Arguments
    ///
    /// * `deal_dir` - ディールディレクトリのパス
    ///
    /// # Errors
    ///
    /// ディレクトリの読み取りに失敗した場合にエラーを返す
    pub async fn execute(&self, deal_dir: &str) -> Result<Vec<PathBuf>> {
        self.deal_repository.discover_deal_files(deal_dir).await
    }
}
