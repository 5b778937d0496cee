//! # Dealer
//!
//! ランダムなディールの生成

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::domain::entities::card::{full_deck, MAX_RANK};
use crate::domain::entities::game::{Game, FOUNDATION_COUNT};
use crate::domain::errors::DealError;

/// シードから再現可能な乱数生成器を作る
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// シード未指定時に使うランダムなシード
pub fn random_seed() -> u64 {
    rand::random()
}

/// 52枚をシャッフルして配る
pub fn random_deal<R: Rng + ?Sized>(rng: &mut R) -> Result<Game, DealError> {
    let mut deck = full_deck();
    deck.shuffle(rng);
    Game::deal(&deck)
}

/// 各スートのファウンデーションを `prefilled` まで積んだ状態から配る
///
/// 残りのカードだけをシャッフルするので、`prefilled` が大きいほど易しいディールになる
pub fn partial_deal<R: Rng + ?Sized>(prefilled: u8, rng: &mut R) -> Result<Game, DealError> {
    if prefilled > MAX_RANK {
        return Err(DealError::InvalidFoundation(prefilled));
    }

    let mut cards: Vec<_> = full_deck()
        .into_iter()
        .filter(|card| card.rank() > prefilled)
        .collect();
    cards.shuffle(rng);

    Game::with_foundations(&cards, [prefilled; FOUNDATION_COUNT])
}
