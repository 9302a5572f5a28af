//! Game configuration options.

use core::time::Duration;

use crate::error::ConfigError;

/// Number of rounds a game lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum RoundCount {
    /// Five rounds.
    #[default]
    Five,
    /// Ten rounds.
    Ten,
    /// Twenty rounds.
    Twenty,
}

impl RoundCount {
    /// Every round count a game can be configured with, shortest first.
    pub const ALL: [Self; 3] = [Self::Five, Self::Ten, Self::Twenty];

    /// Returns the number of rounds.
    #[must_use]
    pub const fn rounds(self) -> u32 {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::Twenty => 20,
        }
    }
}

impl TryFrom<u32> for RoundCount {
    type Error = ConfigError;

    fn try_from(rounds: u32) -> Result<Self, Self::Error> {
        match rounds {
            5 => Ok(Self::Five),
            10 => Ok(Self::Ten),
            20 => Ok(Self::Twenty),
            other => Err(ConfigError::UnsupportedRoundCount(other)),
        }
    }
}

/// Default pause between invoking a lifecycle transition and its effects.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bankit::{GameOptions, RoundCount};
/// use core::time::Duration;
///
/// let options = GameOptions::default()
///     .with_round_count(RoundCount::Ten)
///     .with_settle_delay(Duration::from_millis(150));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Round count selected when the game is created.
    pub round_count: RoundCount,
    /// Pause before a lifecycle transition takes effect.
    pub settle_delay: Duration,
    /// Minimum roster size required to start.
    pub min_players: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            round_count: RoundCount::Five,
            settle_delay: DEFAULT_SETTLE_DELAY,
            min_players: 2,
        }
    }
}

impl GameOptions {
    /// Sets the initial round count.
    ///
    /// # Example
    ///
    /// ```
    /// use bankit::{GameOptions, RoundCount};
    ///
    /// let options = GameOptions::default().with_round_count(RoundCount::Twenty);
    /// assert_eq!(options.round_count, RoundCount::Twenty);
    /// ```
    #[must_use]
    pub const fn with_round_count(mut self, round_count: RoundCount) -> Self {
        self.round_count = round_count;
        self
    }

    /// Sets the settle delay used by lifecycle transitions.
    ///
    /// # Example
    ///
    /// ```
    /// use bankit::GameOptions;
    /// use core::time::Duration;
    ///
    /// let options = GameOptions::default().with_settle_delay(Duration::ZERO);
    /// assert_eq!(options.settle_delay, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Sets the minimum number of players needed to start.
    ///
    /// Values below 1 are clamped to 1; a game always needs somebody to roll.
    ///
    /// # Example
    ///
    /// ```
    /// use bankit::GameOptions;
    ///
    /// let options = GameOptions::default().with_min_players(3);
    /// assert_eq!(options.min_players, 3);
    /// ```
    #[must_use]
    pub const fn with_min_players(mut self, min_players: usize) -> Self {
        self.min_players = if min_players == 0 { 1 } else { min_players };
        self
    }
}
