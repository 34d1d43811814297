use alloc::vec::Vec;
use core::mem;

use log::{debug, info};

use crate::card::Card;
use crate::error::{ActionError, DealError};
use crate::hand::Hand;
use crate::result::HandReport;

use super::{GameState, Phase};

/// Cards drawn by the opening deal.
const OPENING_CARDS: usize = 4;

impl GameState {
    /// Moves to the next phase in place.
    fn advance(&mut self) -> Result<(), ActionError> {
        self.phase = self.phase.next().ok_or(ActionError::InvalidState)?;
        Ok(())
    }

    /// Deals a new hand: player, dealer, player, dealer.
    ///
    /// Both hands are reset first and the phase returns to
    /// [`Phase::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than four cards remain.
    /// Nothing is drawn in that case.
    pub fn deal(&self) -> Result<Self, DealError> {
        let mut next = self.clone();
        let available = next.deck.len().min(OPENING_CARDS);
        let [player_first, dealer_first, player_second, dealer_second]: [Card; OPENING_CARDS] =
            next.deck
                .drain(..available)
                .collect::<Vec<_>>()
                .try_into()
                .map_err(|_| DealError::NotEnoughCards)?;

        next.player = Hand::from_cards([player_first, player_second]);
        next.dealer = Hand::from_cards([dealer_first, dealer_second]);
        next.phase = Phase::PlayerTurn;

        debug!(
            "dealt player [{}] dealer [{}], {} cards left",
            next.player,
            next.dealer.render_hidden(),
            next.deck.len()
        );
        Ok(next)
    }

    /// Draws a card into the current hand.
    ///
    /// A hand that goes over 21 ends its turn as if it had stood.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] once the hand is over, or
    /// [`ActionError::NoCards`] if the shoe is empty.
    pub fn hit(&self) -> Result<Self, ActionError> {
        let mut next = self.clone();
        let hand = match next.phase {
            Phase::PlayerTurn => &mut next.player,
            Phase::DealerTurn => &mut next.dealer,
            Phase::HandOver => return Err(ActionError::InvalidState),
        };
        let card = next.deck.pop_front().ok_or(ActionError::NoCards)?;
        hand.add_card(card);
        let score = hand.score();

        debug!("{:?} drew {card}, score {score}", next.phase);
        if score > 21 {
            next.advance()?;
        }
        Ok(next)
    }

    /// Ends the current turn.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] if the hand is already over.
    pub fn stand(&self) -> Result<Self, ActionError> {
        let mut next = self.clone();
        next.advance()?;
        debug!("{:?} stands", self.phase);
        Ok(next)
    }

    /// Scores the hand and clears both hands for the next deal.
    ///
    /// The shoe and the phase are left as they are. The report is also
    /// logged at `info` level.
    #[must_use]
    pub fn end_hand(&self) -> (Self, HandReport) {
        let mut next = self.clone();
        let report = HandReport::new(mem::take(&mut next.player), mem::take(&mut next.dealer));

        info!(
            "hand over: player {} [{}] dealer {} [{}]: {}",
            report.player_score, report.player, report.dealer_score, report.dealer, report.outcome
        );
        (next, report)
    }
}
