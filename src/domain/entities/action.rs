//! # Action Value Object
//!
//! 1手分の移動を表すバリューオブジェクト

use std::fmt;

use serde::{Deserialize, Serialize};

use super::card::Suit;

/// 移動の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    ColumnToFoundation,
    FreecellToFoundation,
    ColumnToFreecell,
    FreecellToColumn,
    ColumnToColumn,
}

/// 移動
///
/// `source` / `dest` は 0 始まりのインデックス。
/// ファウンデーションへの移動では `dest` はスートのインデックス。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub action_type: ActionType,
    pub source: usize,
    pub dest: usize,
    /// 移動するカード枚数（列→列以外は常に 1）
    pub count: usize,
}

impl Action {
    pub fn column_to_foundation(column: usize, suit: Suit) -> Self {
        Self {
            action_type: ActionType::ColumnToFoundation,
            source: column,
            dest: suit.index(),
            count: 1,
        }
    }

    pub fn freecell_to_foundation(cell: usize, suit: Suit) -> Self {
        Self {
            action_type: ActionType::FreecellToFoundation,
            source: cell,
            dest: suit.index(),
            count: 1,
        }
    }

    pub fn column_to_freecell(column: usize, cell: usize) -> Self {
        Self {
            action_type: ActionType::ColumnToFreecell,
            source: column,
            dest: cell,
            count: 1,
        }
    }

    pub fn freecell_to_column(cell: usize, column: usize) -> Self {
        Self {
            action_type: ActionType::FreecellToColumn,
            source: cell,
            dest: column,
            count: 1,
        }
    }

    pub fn column_to_column(source: usize, dest: usize, count: usize) -> Self {
        Self {
            action_type: ActionType::ColumnToColumn,
            source,
            dest,
            count,
        }
    }

    /// ファウンデーションへの移動かどうか
    pub fn is_foundation_move(&self) -> bool {
        matches!(
            self.action_type,
            ActionType::ColumnToFoundation | ActionType::FreecellToFoundation
        )
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let foundation = || {
            Suit::from_index(self.dest)
                .map(|s| s.symbol().to_string())
                .unwrap_or_else(|| format!("#{}", self.dest + 1))
        };

        match self.action_type {
            ActionType::ColumnToFoundation => {
                write!(f, "column {} -> foundation {}", self.source + 1, foundation())
            }
            ActionType::FreecellToFoundation => {
                write!(f, "freecell {} -> foundation {}", self.source + 1, foundation())
            }
            ActionType::ColumnToFreecell => {
                write!(f, "column {} -> freecell {}", self.source + 1, self.dest + 1)
            }
            ActionType::FreecellToColumn => {
                write!(f, "freecell {} -> column {}", self.source + 1, self.dest + 1)
            }
            ActionType::ColumnToColumn if self.count > 1 => write!(
                f,
                "column {} -> column {} ({} cards)",
                self.source + 1,
                self.dest + 1,
                self.count
            ),
            ActionType::ColumnToColumn => {
                write!(f, "column {} -> column {}", self.source + 1, self.dest + 1)
            }
        }
    }
}
