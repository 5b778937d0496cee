//! Text Deal Repository Implementation
//!
//! DealRepositoryのテキストファイル実装
//!
//! ディールファイルの形式:
//!
//! ```text
//! # コメント
//! foundations: 0 0 0 0      (省略可。♣ ♦ ♥ ♠ の順)
//! KS 3D 10H AC 7C QH 2S 9D
//! ...
//! ```
//!
//! カードは配る順（1行目の左から）に並べる。i 枚目が `i % 8` 列目に配られるので、
//! 卓の見た目どおり1行ずつ書けばそのまま再現される。

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::entities::card::Card;
use crate::domain::entities::game::{Game, FOUNDATION_COUNT};
use crate::domain::errors::DealError;
use crate::domain::repositories::deal_repository::DealRepository;

const FOUNDATIONS_HEADER: &str = "foundations:";
const DEAL_EXTENSIONS: [&str; 2] = ["txt", "deal"];

/// テキストファイルベースのディールリポジトリ
pub struct TextDealRepository;

impl TextDealRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// ディールファイルを発見する（内部実装）
    fn discover_deal_files_internal(deal_dir: &str) -> Result<Vec<PathBuf>> {
        let expanded_path = shellexpand::tilde(deal_dir);
        let deal_dir = PathBuf::from(expanded_path.as_ref());

        if !deal_dir.exists() {
            warn!("Deal directory does not exist: {}", deal_dir.display());
            return Ok(Vec::new());
        }

        let mut deal_files: Vec<PathBuf> = WalkDir::new(&deal_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .map(|entry| entry.into_path())
            .filter(|path| {
                path.is_file()
                    && path
                        .extension()
                        .and_then(|s| s.to_str())
                        .is_some_and(|ext| DEAL_EXTENSIONS.contains(&ext))
            })
            .collect();
        deal_files.sort();

        info!(
            "Found {} deal files in {}",
            deal_files.len(),
            deal_dir.display()
        );

        Ok(deal_files)
    }

    /// ディールファイルを読み込む（同期処理）
    fn load_deal_sync(path: &Path) -> Result<Game> {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        let content = fs::read_to_string(&expanded)
            .with_context(|| format!("Failed to read deal file: {}", expanded))?;

        parse_deal(&content).with_context(|| format!("Invalid deal file: {}", expanded))
    }
}

/// ディールのテキスト表現をパースする
pub fn parse_deal(content: &str) -> Result<Game, DealError> {
    let mut foundations = [0u8; FOUNDATION_COUNT];
    let mut cards = Vec::new();

    for (index, raw_line) in content.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        if let Some(values) = strip_header(line) {
            if !cards.is_empty() {
                return Err(DealError::InvalidHeader {
                    line: line_number,
                    content: line.to_string(),
                });
            }
            foundations = parse_foundations(values).ok_or_else(|| DealError::InvalidHeader {
                line: line_number,
                content: line.to_string(),
            })?;
            continue;
        }

        for token in line.split_whitespace() {
            let card = token.parse::<Card>().map_err(|source| DealError::Parse {
                line: line_number,
                source,
            })?;
            cards.push(card);
        }
    }

    Game::with_foundations(&cards, foundations)
}

/// 局面をディールファイル形式に書き出す（列を行ごとに並べ直す）
///
/// 列の高さが配り方と一致する初期局面でのみ [`parse_deal`] で元に戻る
pub fn format_deal(game: &Game) -> String {
    let mut text = String::new();
    if game.foundations.iter().any(|&f| f > 0) {
        let heights: Vec<String> = game.foundations.iter().map(u8::to_string).collect();
        text.push_str(&format!("{} {}\n", FOUNDATIONS_HEADER, heights.join(" ")));
    }

    let rows = game.columns.iter().map(Vec::len).max().unwrap_or(0);
    for row in 0..rows {
        let line: Vec<String> = game
            .columns
            .iter()
            .filter_map(|column| column.get(row))
            .map(|card| format!("{}{}", rank_token(card), card.suit().letter()))
            .collect();
        text.push_str(&line.join(" "));
        text.push('\n');
    }
    text
}

fn rank_token(card: &Card) -> String {
    match card.rank() {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        rank => rank.to_string(),
    }
}

fn strip_header(line: &str) -> Option<&str> {
    let prefix = line.get(..FOUNDATIONS_HEADER.len())?;
    if prefix.eq_ignore_ascii_case(FOUNDATIONS_HEADER) {
        Some(&line[FOUNDATIONS_HEADER.len()..])
    } else {
        None
    }
}

fn parse_foundations(values: &str) -> Option<[u8; FOUNDATION_COUNT]> {
    let heights: Vec<u8> = values
        .split_whitespace()
        .map(|v| v.parse().ok())
        .collect::<Option<_>>()?;
    heights.try_into().ok()
}

#[async_trait]
impl DealRepository for TextDealRepository {
    async fn discover_deal_files(&self, deal_dir: &str) -> Result<Vec<PathBuf>> {
        let deal_dir = deal_dir.to_string();
        tokio::task::spawn_blocking(move || Self::discover_deal_files_internal(&deal_dir))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn load_deal(&self, path: &Path) -> Result<Game> {
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::load_deal_sync(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for TextDealRepository {
    fn default() -> Self {
        Self::new()
    }
}
