//! Deck construction and shuffling.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// Number of decks combined into a shoe by default.
pub const DEFAULT_DECKS: u8 = 3;

/// Builds `multiplier` standard decks in order (suit by suit, ace to king).
#[must_use]
pub fn new_deck(multiplier: u8) -> Vec<Card> {
    let mut cards = Vec::with_capacity(usize::from(multiplier) * DECK_SIZE);

    for _ in 0..multiplier {
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }
    }

    cards
}

/// Builds and shuffles a shoe of `multiplier` decks.
pub fn new_shoe(multiplier: u8, rng: &mut ChaCha8Rng) -> VecDeque<Card> {
    let mut cards = new_deck(multiplier);
    cards.shuffle(rng);
    cards.into()
}
