//! # Game Entity
//!
//! FreeCell の局面（8列・4フリーセル・4ファウンデーション）とルール

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::action::{Action, ActionType};
use super::card::{Card, Suit, MAX_RANK};
use crate::domain::errors::{DealError, MoveError};

pub const COLUMN_COUNT: usize = 8;
pub const FREECELL_COUNT: usize = 4;
pub const FOUNDATION_COUNT: usize = 4;
pub const DECK_SIZE: usize = 52;

/// FreeCell の局面
///
/// `foundations[suit]` はそのスートで既に積まれた最大ランク（0 = 空）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    pub columns: [Vec<Card>; COLUMN_COUNT],
    pub freecells: [Option<Card>; FREECELL_COUNT],
    pub foundations: [u8; FOUNDATION_COUNT],
}

impl Game {
    /// 52枚のカードを配って初期局面を作成
    ///
    /// i 番目のカードは `i % 8` 列目に配られる（最後に配られたカードが列の一番上）。
    ///
    /// # Errors
    ///
    /// 枚数が 52 でない、または重複がある場合にエラーを返す
    pub fn deal(cards: &[Card]) -> Result<Self, DealError> {
        Self::with_foundations(cards, [0; FOUNDATION_COUNT])
    }

    /// ファウンデーションが途中まで積まれた局面を作成
    ///
    /// `cards` は各スートでファウンデーションより上のランクをちょうど1枚ずつ含む必要がある
    pub fn with_foundations(
        cards: &[Card],
        foundations: [u8; FOUNDATION_COUNT],
    ) -> Result<Self, DealError> {
        if let Some(&height) = foundations.iter().find(|&&h| h > MAX_RANK) {
            return Err(DealError::InvalidFoundation(height));
        }

        let expected: usize = foundations
            .iter()
            .map(|&h| (MAX_RANK - h) as usize)
            .sum();
        if cards.len() != expected {
            return Err(DealError::WrongCardCount {
                expected,
                found: cards.len(),
            });
        }

        let mut game = Game {
            foundations,
            ..Game::default()
        };
        for (i, card) in cards.iter().enumerate() {
            game.columns[i % COLUMN_COUNT].push(*card);
        }

        game.validate()?;
        Ok(game)
    }

    /// 局面の整合性を検証
    ///
    /// 各スートについて、ファウンデーションより上のランクが盤面にちょうど1枚ずつ存在すること
    pub fn validate(&self) -> Result<(), DealError> {
        if let Some(&height) = self.foundations.iter().find(|&&h| h > MAX_RANK) {
            return Err(DealError::InvalidFoundation(height));
        }

        let mut seen = HashSet::new();
        for card in self.board_cards() {
            let foundation = self.foundations[card.suit().index()];
            if card.rank() <= foundation {
                return Err(DealError::CardOnFoundation {
                    card: *card,
                    foundation,
                });
            }
            if !seen.insert(*card) {
                return Err(DealError::DuplicateCard(*card));
            }
        }

        for suit in Suit::ALL {
            for rank in self.foundations[suit.index()] + 1..=MAX_RANK {
                let card = Card::new(rank, suit)?;
                if !seen.contains(&card) {
                    return Err(DealError::MissingCard(card));
                }
            }
        }

        Ok(())
    }

    /// 列とフリーセル上のカード
    pub fn board_cards(&self) -> impl Iterator<Item = &Card> {
        self.columns
            .iter()
            .flatten()
            .chain(self.freecells.iter().flatten())
    }

    pub fn is_won(&self) -> bool {
        self.foundations.iter().all(|&f| f == MAX_RANK)
    }

    pub fn count_free_cells(&self) -> usize {
        self.freecells.iter().filter(|c| c.is_none()).count()
    }

    pub fn count_empty_columns(&self) -> usize {
        self.columns.iter().filter(|c| c.is_empty()).count()
    }

    /// ファウンデーションに未到達のカード枚数
    pub fn cards_remaining(&self) -> usize {
        DECK_SIZE.saturating_sub(self.foundations.iter().map(|&f| f as usize).sum::<usize>())
    }

    pub fn top_card(&self, column: usize) -> Option<&Card> {
        self.columns.get(column).and_then(|c| c.last())
    }

    /// 列の一番上から続く、色違い・降順に並んだカードの枚数
    pub fn movable_sequence_len(&self, column: usize) -> usize {
        let Some(cards) = self.columns.get(column) else {
            return 0;
        };
        if cards.is_empty() {
            return 0;
        }

        1 + cards
            .windows(2)
            .rev()
            .take_while(|w| self.can_stack_on(&w[0], &w[1]))
            .count()
    }

    /// 一度に移動できる最大枚数（スーパームーブ）
    ///
    /// `(空きフリーセル + 1) * 2^空き列`。移動先が空き列の場合はその列を数えない。
    pub fn max_movable_sequence(&self, to_empty_column: bool) -> usize {
        let free_cells = self.count_free_cells();
        let mut empty_columns = self.count_empty_columns();

        if to_empty_column && empty_columns > 0 {
            empty_columns -= 1;
        }

        ((free_cells + 1) << empty_columns).min(MAX_RANK as usize)
    }

    pub fn can_move_to_foundation(&self, card: &Card) -> bool {
        self.foundations[card.suit().index()].checked_add(1) == Some(card.rank())
    }

    /// `above` を `below` の上に置けるか（色違いかつランクが1つ小さい）
    pub fn can_stack_on(&self, below: &Card, above: &Card) -> bool {
        below.color() != above.color() && above.rank() + 1 == below.rank()
    }

    /// 移動を適用した新しい局面を返す
    ///
    /// # Errors
    ///
    /// 移動がルール上許されない場合に [`MoveError::IllegalMove`] を返す
    pub fn apply(&self, action: &Action) -> Result<Game, MoveError> {
        if action.action_type != ActionType::ColumnToColumn && action.count != 1 {
            return Err(MoveError::illegal(action, "only one card can be moved"));
        }

        let mut next = self.clone();

        match action.action_type {
            ActionType::ColumnToFoundation => {
                let card = *self.source_column_top(action)?;
                self.check_foundation(action, &card)?;
                next.columns[action.source].pop();
                next.foundations[card.suit().index()] = card.rank();
            }
            ActionType::FreecellToFoundation => {
                let card = self.source_freecell(action)?;
                self.check_foundation(action, &card)?;
                next.freecells[action.source] = None;
                next.foundations[card.suit().index()] = card.rank();
            }
            ActionType::ColumnToFreecell => {
                let card = *self.source_column_top(action)?;
                match self.freecells.get(action.dest) {
                    None => return Err(MoveError::illegal(action, "no such freecell")),
                    Some(Some(_)) => return Err(MoveError::illegal(action, "freecell is occupied")),
                    Some(None) => {}
                }
                next.columns[action.source].pop();
                next.freecells[action.dest] = Some(card);
            }
            ActionType::FreecellToColumn => {
                let card = self.source_freecell(action)?;
                let target = self
                    .columns
                    .get(action.dest)
                    .ok_or_else(|| MoveError::illegal(action, "no such column"))?;
                if let Some(top) = target.last() {
                    if !self.can_stack_on(top, &card) {
                        return Err(MoveError::illegal(action, format!("{card} cannot go on {top}")));
                    }
                }
                next.freecells[action.source] = None;
                next.columns[action.dest].push(card);
            }
            ActionType::ColumnToColumn => {
                self.check_column_to_column(action)?;
                let source = &mut next.columns[action.source];
                let moving = source.split_off(source.len() - action.count);
                next.columns[action.dest].extend(moving);
            }
        }

        Ok(next)
    }

    fn source_column_top(&self, action: &Action) -> Result<&Card, MoveError> {
        self.columns
            .get(action.source)
            .ok_or_else(|| MoveError::illegal(action, "no such column"))?
            .last()
            .ok_or_else(|| MoveError::illegal(action, "column is empty"))
    }

    fn source_freecell(&self, action: &Action) -> Result<Card, MoveError> {
        self.freecells
            .get(action.source)
            .copied()
            .ok_or_else(|| MoveError::illegal(action, "no such freecell"))?
            .ok_or_else(|| MoveError::illegal(action, "freecell is empty"))
    }

    fn check_foundation(&self, action: &Action, card: &Card) -> Result<(), MoveError> {
        if action.dest != card.suit().index() {
            return Err(MoveError::illegal(action, format!("{card} belongs to another foundation")));
        }
        if !self.can_move_to_foundation(card) {
            return Err(MoveError::illegal(
                action,
                format!(
                    "{card} cannot go on foundation at {}",
                    self.foundations[card.suit().index()]
                ),
            ));
        }
        Ok(())
    }

    fn check_column_to_column(&self, action: &Action) -> Result<(), MoveError> {
        if action.source == action.dest {
            return Err(MoveError::illegal(action, "source and destination are the same"));
        }
        if action.count == 0 {
            return Err(MoveError::illegal(action, "nothing to move"));
        }

        let source = self
            .columns
            .get(action.source)
            .ok_or_else(|| MoveError::illegal(action, "no such column"))?;
        let target = self
            .columns
            .get(action.dest)
            .ok_or_else(|| MoveError::illegal(action, "no such column"))?;

        if action.count > self.movable_sequence_len(action.source) {
            return Err(MoveError::illegal(action, "cards are not in sequence"));
        }

        let capacity = self.max_movable_sequence(target.is_empty());
        if action.count > capacity {
            return Err(MoveError::illegal(
                action,
                format!("only {capacity} cards can be moved at once"),
            ));
        }

        let bottom = &source[source.len() - action.count];
        if let Some(top) = target.last() {
            if !self.can_stack_on(top, bottom) {
                return Err(MoveError::illegal(action, format!("{bottom} cannot go on {top}")));
            }
        }

        Ok(())
    }

    /// 列の順序とフリーセルの順序を無視した正規化表現
    ///
    /// 各列を 0 区切りで並べる（有効なカードのエンコードは 0 にならない）
    pub fn canonical_key(&self) -> Vec<u8> {
        let mut columns: Vec<Vec<u8>> = self
            .columns
            .iter()
            .map(|col| col.iter().map(Card::encode).collect())
            .collect();
        columns.sort();

        let mut freecells: Vec<u8> = self
            .freecells
            .iter()
            .map(|cell| cell.map(|c| c.encode()).unwrap_or(0))
            .collect();
        freecells.sort();

        let mut key = Vec::with_capacity(DECK_SIZE + COLUMN_COUNT + FREECELL_COUNT + FOUNDATION_COUNT);
        for column in columns {
            key.extend(column);
            key.push(0);
        }
        key.extend(freecells);
        key.extend(self.foundations);
        key
    }

    /// 正規化表現のハッシュ値（探索済み判定用）
    pub fn hash_key(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.canonical_key().hash(&mut hasher);
        hasher.finish()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1行目: フリーセルとファウンデーション
        for cell in &self.freecells {
            match cell {
                Some(card) => write!(f, "{:>4}", card)?,
                None => write!(f, "  --")?,
            }
        }
        for &height in &self.foundations {
            write!(f, "{:>4}", height)?;
        }
        writeln!(f)?;
        writeln!(f)?;

        let max_rows = self.columns.iter().map(Vec::len).max().unwrap_or(0);
        for row in 0..max_rows {
            let line: String = self
                .columns
                .iter()
                .map(|col| match col.get(row) {
                    Some(card) => format!("{:>4}", card),
                    None => "    ".to_string(),
                })
                .collect();
            writeln!(f, "{}", line.trim_end())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::card::full_deck;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(card).collect()
    }

    /// 8列すべてに1枚ずつ置いた局面（フリーセルの占有数を指定）
    fn crowded_game(occupied_cells: usize, empty_columns: usize) -> Game {
        let mut game = Game::default();
        for (i, column) in game.columns.iter_mut().enumerate() {
            if i >= COLUMN_COUNT - empty_columns {
                break;
            }
            column.push(card("AS"));
        }
        for cell in game.freecells.iter_mut().take(occupied_cells) {
            *cell = Some(card("AS"));
        }
        game
    }

    #[test]
    fn test_deal_round_robin() {
        let deck = full_deck();
        let game = Game::deal(&deck).unwrap();

        let heights: Vec<usize> = game.columns.iter().map(Vec::len).collect();
        assert_eq!(heights, vec![7, 7, 7, 7, 6, 6, 6, 6]);
        assert_eq!(game.columns[0][0], deck[0]);
        assert_eq!(game.columns[1][0], deck[1]);
        assert_eq!(game.columns[0][1], deck[8]);
        assert_eq!(game.top_card(3), Some(&deck[51]));
        assert_eq!(game.cards_remaining(), 52);
        assert!(!game.is_won());
    }

    #[test]
    fn test_deal_wrong_count() {
        let deck = full_deck();
        assert_eq!(
            Game::deal(&deck[..51]),
            Err(DealError::WrongCardCount {
                expected: 52,
                found: 51
            })
        );
    }

    #[test]
    fn test_deal_duplicate() {
        let mut deck = full_deck();
        deck[1] = deck[0];
        assert_eq!(Game::deal(&deck), Err(DealError::DuplicateCard(deck[0])));
    }

    #[test]
    fn test_with_foundations() {
        let game = Game::with_foundations(&cards("KC KD QH KH KS"), [12, 12, 11, 12]).unwrap();
        assert_eq!(game.cards_remaining(), 5);
        assert_eq!(game.columns[4], cards("KS"));
    }

    #[test]
    fn test_with_foundations_rejects_card_on_foundation() {
        let result = Game::with_foundations(&cards("KC KD QH KH QS"), [12, 12, 11, 12]);
        assert_eq!(
            result,
            Err(DealError::CardOnFoundation {
                card: card("QS"),
                foundation: 12
            })
        );
    }

    #[test]
    fn test_with_foundations_rejects_invalid_height() {
        assert_eq!(
            Game::with_foundations(&[], [13, 13, 13, 14]),
            Err(DealError::InvalidFoundation(14))
        );
    }

    #[test]
    fn test_validate_missing_card() {
        let mut game = Game::with_foundations(&cards("KC KD KH KS"), [12; 4]).unwrap();
        game.columns[0].clear();
        assert_eq!(game.validate(), Err(DealError::MissingCard(card("KC"))));
    }

    #[test]
    fn test_is_won() {
        let game = Game::with_foundations(&[], [13; 4]).unwrap();
        assert!(game.is_won());
        assert_eq!(game.cards_remaining(), 0);
    }

    #[test]
    fn test_unvalidated_foundations_do_not_overflow() {
        let game = Game {
            foundations: [u8::MAX; 4],
            ..Game::default()
        };

        assert_eq!(game.cards_remaining(), 0);
        assert!(!game.can_move_to_foundation(&card("KS")));
    }

    #[test]
    fn test_max_movable_sequence_one_empty_column() {
        let game = crowded_game(0, 1);
        assert_eq!(game.max_movable_sequence(false), 10);
        assert_eq!(game.max_movable_sequence(true), 5);
    }

    #[test]
    fn test_max_movable_sequence_capped() {
        let game = crowded_game(1, 5);
        assert_eq!(game.max_movable_sequence(false), 13);
    }

    #[test]
    fn test_max_movable_sequence_no_empty_column() {
        assert_eq!(crowded_game(3, 0).max_movable_sequence(false), 2);
        assert_eq!(crowded_game(4, 0).max_movable_sequence(false), 1);
    }

    #[test]
    fn test_can_stack_on() {
        let game = Game::default();
        assert!(game.can_stack_on(&card("5D"), &card("4C")));
        assert!(game.can_stack_on(&card("5S"), &card("4H")));
        assert!(!game.can_stack_on(&card("5D"), &card("4H")));
        assert!(!game.can_stack_on(&card("5D"), &card("3C")));
        assert!(!game.can_stack_on(&card("4C"), &card("5D")));
    }

    #[test]
    fn test_movable_sequence_len() {
        let mut game = Game::default();
        game.columns[0] = cards("3C 8D 7S 6H");
        game.columns[1] = cards("4D 5S");
        assert_eq!(game.movable_sequence_len(0), 3);
        assert_eq!(game.movable_sequence_len(1), 1);
        assert_eq!(game.movable_sequence_len(2), 0);
        assert_eq!(game.movable_sequence_len(42), 0);
    }

    #[test]
    fn test_apply_column_to_foundation() {
        let mut game = Game::default();
        game.columns[0] = cards("AH");
        game.foundations = [13, 13, 0, 13];
        // 検証しない局面（♥の2〜Kは省略）でも移動の適用はできる
        let next = game
            .apply(&Action::column_to_foundation(0, Suit::Hearts))
            .unwrap();
        assert_eq!(next.foundations[Suit::Hearts.index()], 1);
        assert!(next.columns[0].is_empty());
        // 元の局面は変更されない
        assert_eq!(game.columns[0].len(), 1);
    }

    #[test]
    fn test_apply_rejects_wrong_foundation() {
        let mut game = Game::default();
        game.columns[0] = cards("2H");
        let err = game
            .apply(&Action::column_to_foundation(0, Suit::Hearts))
            .unwrap_err();
        assert!(matches!(err, MoveError::IllegalMove { .. }));

        let mut game = Game::default();
        game.columns[0] = cards("AH");
        assert!(game
            .apply(&Action::column_to_foundation(0, Suit::Spades))
            .is_err());
    }

    #[test]
    fn test_apply_freecell_round_trip() {
        let mut game = Game::default();
        game.columns[0] = cards("5D");
        game.columns[1] = cards("6S");

        let next = game.apply(&Action::column_to_freecell(0, 2)).unwrap();
        assert_eq!(next.freecells[2], Some(card("5D")));
        assert!(next.columns[0].is_empty());

        let next = next.apply(&Action::freecell_to_column(2, 1)).unwrap();
        assert_eq!(next.columns[1], cards("6S 5D"));
        assert_eq!(next.count_free_cells(), 4);
    }

    #[test]
    fn test_apply_rejects_occupied_freecell() {
        let mut game = Game::default();
        game.columns[0] = cards("5D 4C");
        let next = game.apply(&Action::column_to_freecell(0, 0)).unwrap();
        assert!(next.apply(&Action::column_to_freecell(0, 0)).is_err());
        assert!(next.apply(&Action::column_to_freecell(0, 4)).is_err());
    }

    #[test]
    fn test_apply_freecell_to_column_requires_stacking() {
        let mut game = Game::default();
        game.freecells[0] = Some(card("5H"));
        game.columns[0] = cards("6D");
        assert!(game.apply(&Action::freecell_to_column(0, 0)).is_err());
        assert!(game.apply(&Action::freecell_to_column(0, 1)).is_ok());
        assert!(game.apply(&Action::freecell_to_column(1, 1)).is_err());
    }

    #[test]
    fn test_apply_column_to_column_supermove() {
        let mut game = crowded_game(0, 0);
        game.columns[0] = cards("9C 8D 7S 6H");
        game.columns[1] = cards("KD 9S");
        game.freecells = [None, None, None, Some(card("AS"))];

        let next = game.apply(&Action::column_to_column(0, 1, 3)).unwrap();
        assert_eq!(next.columns[0], cards("9C"));
        assert_eq!(next.columns[1], cards("KD 9S 8D 7S 6H"));
    }

    #[test]
    fn test_apply_column_to_column_respects_capacity() {
        let mut game = crowded_game(4, 0);
        game.columns[0] = cards("9C 8D 7S 6H");
        game.columns[1] = cards("9S");

        // フリーセルが全て埋まっていると1枚ずつしか動かせない
        assert!(game.apply(&Action::column_to_column(0, 1, 3)).is_err());

        game.columns[1] = cards("7C");
        assert!(game.apply(&Action::column_to_column(0, 1, 1)).is_ok());
    }

    #[test]
    fn test_apply_column_to_column_rejects_unordered_or_unstackable() {
        let mut game = Game::default();
        game.columns[0] = cards("9C 7S 6H");
        game.columns[1] = cards("8D");
        game.columns[2] = cards("QS");
        assert!(game.apply(&Action::column_to_column(0, 1, 3)).is_err());
        assert!(game.apply(&Action::column_to_column(0, 2, 2)).is_err());
        assert!(game.apply(&Action::column_to_column(0, 1, 2)).is_ok());
        assert!(game.apply(&Action::column_to_column(0, 0, 1)).is_err());
        assert!(game.apply(&Action::column_to_column(0, 1, 0)).is_err());
    }

    #[test]
    fn test_apply_rejects_multi_card_freecell_move() {
        let mut game = Game::default();
        game.columns[0] = cards("5D 4C");
        let mut action = Action::column_to_freecell(0, 0);
        action.count = 2;
        assert!(game.apply(&action).is_err());
    }

    #[test]
    fn test_canonical_key_ignores_column_and_freecell_order() {
        let game = Game::deal(&full_deck()).unwrap();

        let mut swapped = game.clone();
        swapped.columns.swap(0, 5);
        swapped.columns.swap(2, 7);
        assert_eq!(game.canonical_key(), swapped.canonical_key());
        assert_eq!(game.hash_key(), swapped.hash_key());

        let a = game.apply(&Action::column_to_freecell(0, 0)).unwrap();
        let b = game.apply(&Action::column_to_freecell(0, 3)).unwrap();
        assert_eq!(a.hash_key(), b.hash_key());
        assert_ne!(a.hash_key(), game.hash_key());
    }

    #[test]
    fn test_canonical_key_distinguishes_column_boundaries() {
        let mut a = Game::default();
        a.columns[0] = cards("5D 4C");
        let mut b = Game::default();
        b.columns[0] = cards("5D");
        b.columns[1] = cards("4C");
        assert_ne!(a.canonical_key(), b.canonical_key());
    }

    #[test]
    fn test_display() {
        let mut game = Game::default();
        game.columns[0] = cards("KS QH");
        game.columns[2] = cards("10D");
        game.freecells[1] = Some(card("AC"));
        game.foundations = [0, 2, 0, 0];

        let text = game.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  --  A♣  --  --   0   2   0   0");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "  K♠     10♦");
        assert_eq!(lines[3], "  Q♥");
    }
}
