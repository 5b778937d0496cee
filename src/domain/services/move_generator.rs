//! # Move Generation
//!
//! 局面から合法手を列挙するドメインサービス

use crate::domain::entities::action::Action;
use crate::domain::entities::game::Game;

/// 合法手を列挙する
///
/// 並び順は探索の優先度を兼ねる:
///
/// 1. ファウンデーションへの移動
/// 2. 列から列への移動
/// 3. 列からフリーセルへの移動
/// 4. フリーセルから列への移動
///
/// 空き列・空きフリーセルは互いに区別できないため、最初の1つだけを移動先にする。
pub fn legal_moves(game: &Game) -> Vec<Action> {
    let mut moves = Vec::new();

    for (i, column) in game.columns.iter().enumerate() {
        if let Some(card) = column.last() {
            if game.can_move_to_foundation(card) {
                moves.push(Action::column_to_foundation(i, card.suit()));
            }
        }
    }

    for (i, cell) in game.freecells.iter().enumerate() {
        if let Some(card) = cell {
            if game.can_move_to_foundation(card) {
                moves.push(Action::freecell_to_foundation(i, card.suit()));
            }
        }
    }

    let first_empty_column = game.columns.iter().position(Vec::is_empty);
    let capacity = game.max_movable_sequence(false);
    let capacity_to_empty = game.max_movable_sequence(true);

    for (src, source) in game.columns.iter().enumerate() {
        if source.is_empty() {
            continue;
        }
        let run = game.movable_sequence_len(src);

        for (dst, target) in game.columns.iter().enumerate() {
            if src == dst {
                continue;
            }

            match target.last() {
                Some(top) => {
                    // 移動先に載せられる枚数はランクで一意に決まる
                    let fitting = (1..=run.min(capacity))
                        .find(|&count| game.can_stack_on(top, &source[source.len() - count]));
                    if let Some(count) = fitting {
                        moves.push(Action::column_to_column(src, dst, count));
                    }
                }
                None if Some(dst) == first_empty_column => {
                    // 列全体を空き列へ動かしても局面は変わらない
                    for count in (1..=run.min(capacity_to_empty)).take_while(|&c| c < source.len()) {
                        moves.push(Action::column_to_column(src, dst, count));
                    }
                }
                None => {}
            }
        }
    }

    if let Some(cell) = game.freecells.iter().position(Option::is_none) {
        for (src, source) in game.columns.iter().enumerate() {
            if !source.is_empty() {
                moves.push(Action::column_to_freecell(src, cell));
            }
        }
    }

    for (i, cell) in game.freecells.iter().enumerate() {
        let Some(card) = cell else {
            continue;
        };
        for (dst, target) in game.columns.iter().enumerate() {
            match target.last() {
                Some(top) if game.can_stack_on(top, card) => {
                    moves.push(Action::freecell_to_column(i, dst));
                }
                None if Some(dst) == first_empty_column => {
                    moves.push(Action::freecell_to_column(i, dst));
                }
                _ => {}
            }
        }
    }

    moves
}
