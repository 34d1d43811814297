//! Hand representation and scoring.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Placeholder shown in place of a concealed card.
pub const HIDDEN: &str = "**HIDDEN**";

/// An ordered hand of cards.
///
/// Scores are derived from the cards on every call and never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards in order.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Renders every card, comma separated.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Renders the first card and conceals the rest.
    #[must_use]
    pub fn render_hidden(&self) -> String {
        match self.cards.first() {
            None => String::new(),
            Some(card) if self.cards.len() == 1 => card.to_string(),
            Some(card) => alloc::format!("{card}, {HIDDEN}"),
        }
    }

    /// Hand total with every ace counted as 1.
    #[must_use]
    pub fn min_score(&self) -> u8 {
        self.cards
            .iter()
            .fold(0u8, |total, card| total.saturating_add(card.points()))
    }

    /// Best hand total.
    ///
    /// A total of 11 or less with at least one ace promotes exactly one ace
    /// to 11. A second promotion would always bust, so no ace tracking is
    /// needed.
    #[must_use]
    pub fn score(&self) -> u8 {
        let min_score = self.min_score();
        if min_score > 11 {
            return min_score;
        }
        if self.cards.iter().any(Card::is_ace) {
            min_score + 10
        } else {
            min_score
        }
    }

    /// Returns whether an ace is currently counted as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.score() != self.min_score()
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > 21
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score() == 21
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
