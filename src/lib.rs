//! A single-player blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`GameState`] value that holds the shoe, both hands
//! and the current [`Phase`]. Every action (shuffle, deal, hit, stand, end
//! hand) borrows a state and returns a new one, leaving the input untouched.
//!
//! # Example
//!
//! ```no_run
//! use bjcore::{GameOptions, GameState, Phase};
//!
//! let mut state = GameState::new(GameOptions::default(), 42).shuffle();
//! state = state.deal()?;
//! while state.phase() == Phase::PlayerTurn && state.player().score() < 17 {
//!     state = state.hit()?;
//! }
//! if state.phase() == Phase::PlayerTurn {
//!     state = state.stand()?;
//! }
//! state = state.dealer_play()?;
//! let (_state, report) = state.end_hand();
//! println!("{report}");
//! # Ok::<(), Box<dyn core::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::{DEFAULT_DECKS, new_deck, new_shoe};
pub use error::{ActionError, DealError};
pub use game::{DealerAction, GameState, Phase};
pub use hand::Hand;
pub use options::GameOptions;
pub use result::{HandReport, Outcome};
