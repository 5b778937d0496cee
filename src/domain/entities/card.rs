//! # Card Entity
//!
//! トランプのカード（スート・ランク）を表すバリューオブジェクト

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::CardError;

/// 最大ランク（キング）
pub const MAX_RANK: u8 = 13;

/// カードの色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
}

/// スート
///
/// 並び順（インデックス）はファウンデーションの位置として使用するため固定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Suit> {
        Suit::ALL.get(index).copied()
    }

    pub fn color(self) -> Color {
        match self {
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Diamonds | Suit::Hearts => Color::Red,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    pub fn letter(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'C' | '♣' => Some(Suit::Clubs),
            'D' | '♦' => Some(Suit::Diamonds),
            'H' | '♥' => Some(Suit::Hearts),
            'S' | '♠' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// カード
///
/// `rank` は 1（エース）から 13（キング）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    /// 新しいカードを作成
    ///
    /// # Errors
    ///
    /// ランクが 1..=13 の範囲外の場合にエラーを返す
    pub fn new(rank: u8, suit: Suit) -> Result<Self, CardError> {
        if !(1..=MAX_RANK).contains(&rank) {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self { rank, suit })
    }

    #[inline]
    pub fn rank(&self) -> u8 {
        self.rank
    }

    #[inline]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn color(&self) -> Color {
        self.suit.color()
    }

    pub fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    /// 1バイトにエンコード（`rank | suit << 4`）
    ///
    /// 有効なカードは 0 にならないので、0 を「空」として使える
    #[inline]
    pub fn encode(&self) -> u8 {
        self.rank | ((self.suit as u8) << 4)
    }

    /// [`Card::encode`] の逆変換
    pub fn decode(value: u8) -> Result<Self, CardError> {
        let suit = Suit::from_index((value >> 4) as usize).ok_or(CardError::InvalidEncoding(value))?;
        Card::new(value & 0x0F, suit).map_err(|_| CardError::InvalidEncoding(value))
    }

    fn rank_label(&self) -> &'static str {
        const LABELS: [&str; 14] = [
            "?", "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
        ];
        LABELS[self.rank as usize]
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 幅指定（{:>4}）を効かせるため pad を使う
        f.pad(&format!("{}{}", self.rank_label(), self.suit.symbol()))
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CardError::InvalidNotation(s.to_string());

        let text = s.trim();
        let suit_char = text.chars().last().ok_or_else(invalid)?;
        let suit = Suit::from_char(suit_char).ok_or_else(invalid)?;
        let rank_text = &text[..text.len() - suit_char.len_utf8()];

        let rank = match rank_text.to_ascii_uppercase().as_str() {
            "A" => 1,
            "T" => 10,
            "J" => 11,
            "Q" => 12,
            "K" => 13,
            digits if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
                digits.parse::<u8>().map_err(|_| invalid())?
            }
            _ => return Err(invalid()),
        };

        Card::new(rank, suit).map_err(|_| invalid())
    }
}

/// 52枚のフルデッキ（スート順、ランク昇順）
pub fn full_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| (1..=MAX_RANK).map(move |rank| Card { rank, suit }))
        .collect()
}
