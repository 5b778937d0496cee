//! # Load Deal Use Case
//!
//! ディール読み込みユースケース

use anyhow::{Context, Result};
use log::info;
use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::game::Game;
use crate::domain::repositories::deal_repository::DealRepository;

/// ディール読み込みユースケース
pub struct LoadDealUseCase<R: DealRepository> {
    deal_repository: Arc<R>,
}

impl<R: DealRepository> LoadDealUseCase<R> {
    pub fn new(deal_repository: Arc<R>) -> Self {
        Self { deal_repository }
    }

    /// ディールを読み込んで初期局面を返す
    ///
    /// # Errors
    ///
    /// 読み込みに失敗した場合、または局面が整合していない場合にエラーを返す
    pub async fn execute(&self, path: &Path) -> Result<Game> {
        let game = self.deal_repository.load_deal(path).await?;

        game.validate()
            .with_context(|| format!("Inconsistent deal: {}", path.display()))?;

        info!(
            "Loaded deal {} ({} cards to play)",
            path.display(),
            game.cards_remaining()
        );

        Ok(game)
    }
}
