//! # Domain Errors
//!
//! ドメイン層のエラー型

use thiserror::Error;

use crate::domain::entities::action::Action;
use crate::domain::entities::card::Card;

/// カード表記・値に関するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("invalid card notation: {0:?}")]
    InvalidNotation(String),

    #[error("rank out of range (expected 1..=13): {0}")]
    InvalidRank(u8),

    #[error("invalid card encoding: {0:#04x}")]
    InvalidEncoding(u8),
}

/// ディール（初期配置）に関するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DealError {
    #[error("expected {expected} cards, found {found}")]
    WrongCardCount { expected: usize, found: usize },

    #[error("duplicate card: {0}")]
    DuplicateCard(Card),

    #[error("missing card: {0}")]
    MissingCard(Card),

    #[error("card {card} is already on its foundation ({foundation})")]
    CardOnFoundation { card: Card, foundation: u8 },

    #[error("invalid foundation height: {0}")]
    InvalidFoundation(u8),

    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: CardError,
    },

    #[error("line {line}: invalid foundations header: {content:?}")]
    InvalidHeader { line: usize, content: String },

    #[error(transparent)]
    Card(#[from] CardError),
}

/// 移動に関するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("illegal move `{action}`: {reason}")]
    IllegalMove { action: Action, reason: String },

    #[error("solution ends without winning the game ({remaining} cards left)")]
    NotWon { remaining: usize },
}

impl MoveError {
    pub(crate) fn illegal(action: &Action, reason: impl Into<String>) -> Self {
        MoveError::IllegalMove {
            action: action.clone(),
            reason: reason.into(),
        }
    }
}
