//! Game configuration options.

use crate::deck::DEFAULT_DECKS;

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcore::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_stand_on_soft_17(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameOptions {
    /// Number of decks combined into the shoe.
    pub decks: u8,
    /// Whether dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Deck penetration (fraction of the shoe played before reshuffle).
    /// 0 to disable reshuffling.
    pub penetration: f64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: DEFAULT_DECKS,
            stand_on_soft_17: false,
            penetration: 0.75,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(true);
    /// assert!(options.stand_on_soft_17);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the deck penetration.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::GameOptions;
    ///
    /// let options = GameOptions::default().with_penetration(0.80);
    /// assert_eq!(options.penetration, 0.80);
    /// ```
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }
}
