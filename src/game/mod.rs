//! Game state and transitions.

use alloc::collections::VecDeque;

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE};
use crate::deck::new_shoe;
use crate::hand::Hand;
use crate::options::GameOptions;

mod actions;
mod dealer;
pub mod state;

pub use dealer::DealerAction;
pub use state::Phase;

/// A complete snapshot of a blackjack hand in progress.
///
/// Every transition borrows the current snapshot and returns a new one, so a
/// state value is never changed once built. The control loop owns the live
/// state and replaces it with each result:
///
/// ```
/// use bjcore::{GameOptions, GameState, Phase};
///
/// let state = GameState::new(GameOptions::default(), 42).shuffle();
/// let state = state.deal()?;
/// let state = state.stand()?;
/// assert_eq!(state.phase(), Phase::DealerTurn);
/// # Ok::<(), Box<dyn core::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Game options.
    options: GameOptions,
    /// Cards left in the shoe, drawn from the front.
    deck: VecDeque<Card>,
    /// Current phase.
    phase: Phase,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand.
    dealer: Hand,
    /// Generator used by the next shuffle.
    rng: ChaCha8Rng,
}

impl GameState {
    /// Creates a fresh state with an empty shoe and empty hands.
    ///
    /// Call [`GameState::shuffle`] before the first deal.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            deck: VecDeque::new(),
            phase: Phase::PlayerTurn,
            player: Hand::new(),
            dealer: Hand::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Replaces the shoe with the given cards, first card drawn first.
    #[must_use]
    pub fn with_deck(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.deck = cards.into_iter().collect();
        self
    }

    /// Returns a state holding a freshly shuffled shoe.
    ///
    /// Hands and phase are carried over unchanged.
    #[must_use]
    pub fn shuffle(&self) -> Self {
        let mut next = self.clone();
        next.deck = new_shoe(next.options.decks, &mut next.rng);
        debug!("shuffled {} decks ({} cards)", next.options.decks, next.deck.len());
        next
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the cards left in the shoe.
    #[must_use]
    pub const fn deck(&self) -> &VecDeque<Card> {
        &self.deck
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the hand that draws in the current phase.
    ///
    /// Returns `None` once the hand is over.
    #[must_use]
    pub const fn current_hand(&self) -> Option<&Hand> {
        match self.phase {
            Phase::PlayerTurn => Some(&self.player),
            Phase::DealerTurn => Some(&self.dealer),
            Phase::HandOver => None,
        }
    }

    /// Returns whether either opening hand is a natural blackjack.
    #[must_use]
    pub fn has_natural(&self) -> bool {
        self.player.is_blackjack() || self.dealer.is_blackjack()
    }

    /// Returns whether the shoe needs reshuffling based on penetration.
    ///
    /// Returns `true` if the remaining cards are below the penetration threshold.
    /// If penetration is 0, always returns `false`.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        if self.options.penetration == 0.0 {
            return false;
        }

        let total_cards = usize::from(self.options.decks) * DECK_SIZE;
        if total_cards == 0 {
            return true;
        }
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let used_ratio = 1.0 - (self.deck.len() as f64 / total_cards as f64);

        used_ratio >= self.options.penetration
    }
}
