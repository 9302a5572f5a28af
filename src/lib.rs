//! A "Bank It!" dice scoring engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that tracks the roster, the shared pot,
//! round progression, and the win condition. Rendering and input are left to
//! a View that reads [`Game::snapshot`] and forwards intents.
//!
//! Lifecycle transitions (start, play again, return to menu) are deferred:
//! each returns a [`PendingTransition`] that the View completes after the
//! settle delay, with its own timer or with `Game::settle` under the
//! `tokio` feature. Starting a new transition supersedes any older one.
//!
//! # Example
//!
//! ```
//! use bankit::{Game, GameOptions};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.add_player("Alice").unwrap();
//! game.add_player("Bob").unwrap();
//!
//! let pending = game.start_game().unwrap();
//! game.complete_transition(pending).unwrap();
//!
//! game.handle_number_select(7).unwrap();
//! assert_eq!(game.total_points(), 50);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod dice;
pub mod error;
pub mod event;
pub mod game;
pub mod options;
pub mod player;
pub mod result;
mod sync;

// Re-export main types
pub use dice::{DiceRoll, SELECTABLE_NUMBERS};
pub use error::{ConfigError, SetupError, TransitionError, TurnError};
pub use event::{GameEvent, SubscriptionId};
pub use game::{Game, GameSnapshot, GameState, PendingTransition, Phase, TransitionKind};
pub use options::{GameOptions, RoundCount};
pub use player::{Player, PlayerId};
pub use result::{GameResult, Standing};
