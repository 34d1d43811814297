//! Hand phase.

/// Phase of the current hand.
///
/// Phases only move forward; a new deal resets to [`Phase::PlayerTurn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Phase {
    /// The player is drawing.
    #[default]
    PlayerTurn,
    /// The dealer plays out their hand.
    DealerTurn,
    /// Both turns are done and the hand can be ended.
    HandOver,
}

impl Phase {
    /// Returns the following phase, or `None` after [`Phase::HandOver`].
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::PlayerTurn => Some(Self::DealerTurn),
            Self::DealerTurn => Some(Self::HandOver),
            Self::HandOver => None,
        }
    }
}
