//! # Heuristic
//!
//! 探索で使う局面評価（値が小さいほどゴールに近い）

use serde::{Deserialize, Serialize};

use crate::domain::entities::game::{Game, DECK_SIZE};

/// 評価関数の重み
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicWeights {
    /// ファウンデーション未到達のカード1枚あたりのコスト
    pub remaining_card: i32,
    /// 列内で正しく並んだ隣接ペア1組あたりのボーナス
    pub ordered_pair: i32,
    /// 埋まっているフリーセル1つあたりのペナルティ
    pub occupied_freecell: i32,
    /// 自分より大きいランクの下敷きになっているカード1枚あたりのペナルティ
    pub blocked_card: i32,
}

impl HeuristicWeights {
    /// 52枚分のコストが `i32` に収まらない重みのフィールド名
    pub fn oversized_field(&self) -> Option<&'static str> {
        [
            ("remaining_card", self.remaining_card),
            ("ordered_pair", self.ordered_pair),
            ("occupied_freecell", self.occupied_freecell),
            ("blocked_card", self.blocked_card),
        ]
        .into_iter()
        .find(|(_, weight)| weight.checked_mul(DECK_SIZE as i32).is_none())
        .map(|(name, _)| name)
    }
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            remaining_card: 10,
            ordered_pair: 3,
            occupied_freecell: 5,
            blocked_card: 5,
        }
    }
}

/// 局面のスコアを計算
pub fn score(game: &Game, weights: &HeuristicWeights) -> i32 {
    let mut ordered_pairs = 0;
    let mut blocked = 0;

    for column in &game.columns {
        for pair in column.windows(2) {
            if game.can_stack_on(&pair[0], &pair[1]) {
                ordered_pairs += 1;
            }
            if pair[0].rank() < pair[1].rank() {
                blocked += 1;
            }
        }
    }

    let occupied = game.freecells.len() - game.count_free_cells();

    // 重みは設定ファイル由来で範囲が保証されない
    weights
        .remaining_card
        .saturating_mul(game.cards_remaining() as i32)
        .saturating_sub(weights.ordered_pair.saturating_mul(ordered_pairs))
        .saturating_add(weights.occupied_freecell.saturating_mul(occupied as i32))
        .saturating_add(weights.blocked_card.saturating_mul(blocked))
}
