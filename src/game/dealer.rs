use crate::error::ActionError;
use crate::hand::Hand;

use super::{GameState, Phase};

/// The dealer's decision for a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerAction {
    /// Draw another card.
    Hit,
    /// Stop drawing.
    Stand,
}

impl DealerAction {
    /// Applies the fixed dealer rule to a hand.
    ///
    /// The dealer draws on 16 or less. A soft 17 (an ace counted as 11) is
    /// also drawn on unless `stand_on_soft_17` is set.
    #[must_use]
    pub fn decide(hand: &Hand, stand_on_soft_17: bool) -> Self {
        let score = hand.score();
        let soft_17 = score == 17 && hand.min_score() != 17;

        if score <= 16 || (soft_17 && !stand_on_soft_17) {
            Self::Hit
        } else {
            Self::Stand
        }
    }
}

impl GameState {
    /// Returns the dealer's next decision, or `None` outside the dealer's turn.
    #[must_use]
    pub fn dealer_action(&self) -> Option<DealerAction> {
        (self.phase == Phase::DealerTurn)
            .then(|| DealerAction::decide(&self.dealer, self.options.stand_on_soft_17))
    }

    /// Applies one dealer decision.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] outside the dealer's turn, or
    /// [`ActionError::NoCards`] if the dealer must draw from an empty shoe.
    pub fn dealer_step(&self) -> Result<Self, ActionError> {
        match self.dealer_action() {
            Some(DealerAction::Hit) => self.hit(),
            Some(DealerAction::Stand) => self.stand(),
            None => Err(ActionError::InvalidState),
        }
    }

    /// Plays the dealer's hand out until the hand is over.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] outside the dealer's turn, or
    /// [`ActionError::NoCards`] if the dealer must draw from an empty shoe.
    pub fn dealer_play(&self) -> Result<Self, ActionError> {
        let mut state = self.dealer_step()?;
        while state.phase == Phase::DealerTurn {
            state = state.dealer_step()?;
        }
        Ok(state)
    }
}
