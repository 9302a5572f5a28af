//! Error types for game operations.
//!
//! Every failing intent leaves the game untouched, so a View that ignores
//! these errors sees the operation as a no-op.

use thiserror::Error;

/// Errors that can occur while setting up a game (roster and round count).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Player name is empty after trimming.
    #[error("player name is empty")]
    EmptyName,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Roster index is out of bounds.
    #[error("roster index {0} out of bounds")]
    IndexOutOfBounds(usize),
    /// Player is already at the edge of the roster.
    #[error("player is already at the roster boundary")]
    AtBoundary,
    /// The roster is locked once a game has started.
    #[error("game already in progress")]
    GameInProgress,
}

/// Errors that can occur during turn actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// Game has not started or is transitioning.
    #[error("game is not in progress")]
    NotInProgress,
    /// Game is over.
    #[error("game is over")]
    GameOver,
    /// Nothing in the pot to bank.
    #[error("pot is empty")]
    EmptyPot,
}

/// Errors that can occur during lifecycle transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// Too few players to start.
    #[error("need at least {required} players, found {found}")]
    NotEnoughPlayers {
        /// Minimum roster size.
        required: usize,
        /// Current roster size.
        found: usize,
    },
    /// Game has already started.
    #[error("game already started")]
    AlreadyStarted,
    /// Game has not started.
    #[error("game not started")]
    NotStarted,
    /// A newer transition replaced this one.
    #[error("transition superseded by a newer one")]
    Superseded,
    /// No transition is pending.
    #[error("no transition pending")]
    NothingPending,
}

/// Errors that can occur while configuring a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Round count is not one of the offered choices.
    #[error("unsupported round count {0} (expected 5, 10 or 20)")]
    UnsupportedRoundCount(u32),
}
