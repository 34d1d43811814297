//! Hand result types produced when a hand ends.

use core::fmt;

use crate::hand::Hand;

/// How a finished hand was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player went over 21 (dealer wins).
    PlayerBust,
    /// Dealer went over 21 (player wins).
    DealerBust,
    /// Player has the higher total.
    PlayerWins,
    /// Dealer has the higher total.
    DealerWins,
    /// Equal totals.
    Draw,
}

impl Outcome {
    /// Decides the outcome from the final scores.
    ///
    /// A player bust is checked first, so it loses even when the dealer
    /// also busts.
    #[must_use]
    pub const fn decide(player_score: u8, dealer_score: u8) -> Self {
        if player_score > 21 {
            Self::PlayerBust
        } else if dealer_score > 21 {
            Self::DealerBust
        } else if player_score > dealer_score {
            Self::PlayerWins
        } else if dealer_score > player_score {
            Self::DealerWins
        } else {
            Self::Draw
        }
    }

    /// Returns whether the player won.
    #[must_use]
    pub const fn player_won(self) -> bool {
        matches!(self, Self::DealerBust | Self::PlayerWins)
    }

    /// Returns whether the dealer won.
    #[must_use]
    pub const fn dealer_won(self) -> bool {
        matches!(self, Self::PlayerBust | Self::DealerWins)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::PlayerBust => "You Busted, You Lost!",
            Self::DealerBust => "Dealer Busted, You Win!",
            Self::PlayerWins => "You Win!",
            Self::DealerWins => "You Lost! Try Again",
            Self::Draw => "Draw",
        };
        f.write_str(message)
    }
}

/// Final hands, scores and outcome of a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandReport {
    /// The player's final hand.
    pub player: Hand,
    /// The dealer's final hand.
    pub dealer: Hand,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
    /// The decided outcome.
    pub outcome: Outcome,
}

impl HandReport {
    /// Scores both hands and decides the outcome.
    #[must_use]
    pub fn new(player: Hand, dealer: Hand) -> Self {
        let player_score = player.score();
        let dealer_score = dealer.score();
        Self {
            player,
            dealer,
            player_score,
            dealer_score,
            outcome: Outcome::decide(player_score, dealer_score),
        }
    }
}

impl fmt::Display for HandReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==FINAL HANDS==")?;
        writeln!(f, "Your Cards: {}", self.player)?;
        writeln!(f, "Your Score: {}", self.player_score)?;
        writeln!(f, "Dealer's Cards: {}", self.dealer)?;
        writeln!(f, "Dealer's Score: {}", self.dealer_score)?;
        write!(f, "{}", self.outcome)
    }
}
