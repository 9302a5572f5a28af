//! Game engine and state management.

use core::sync::atomic::AtomicU32;

use alloc::boxed::Box;
use alloc::vec::Vec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::dice::{DIE_FACES, DiceRoll};
use crate::event::{GameEvent, Subscribers, SubscriptionId};
use crate::options::{GameOptions, RoundCount};
use crate::player::Player;
use crate::result::{self, GameResult, Standing};

mod lifecycle;
mod roster;
pub mod state;
mod turn;
mod view;

pub use state::{GameSnapshot, GameState, PendingTransition, Phase, TransitionKind};

/// A "Bank It!" game engine that owns the roster, rounds, and the shared pot.
///
/// All intents take `&self`; share the game with a View and a timer task by
/// reference or behind an `Arc`. Use [`Game::subscribe`] to be told when
/// something changed.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Next player ID to assign.
    next_id: AtomicU32,
    /// Change listeners.
    subscribers: Mutex<Subscribers>,
    /// Dice random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given dice seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bankit::{Game, GameOptions, Phase};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.phase(), Phase::NotStarted);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let state = GameState::new(options.round_count);

        Self {
            options,
            state: Mutex::new(state),
            next_id: AtomicU32::new(1),
            subscribers: Mutex::new(Subscribers::default()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Registers a callback that runs after every state change.
    ///
    /// Callbacks run after every lock is released, so they may read the game
    /// or subscribe and unsubscribe. A callback added from inside a callback
    /// only sees events from the next notification on.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&GameEvent) + Send + Sync + 'static,
    {
        self.subscribers.lock().insert(Box::new(callback))
    }

    /// Removes a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.lock().remove(id)
    }

    pub(crate) fn notify(&self, events: &[GameEvent]) {
        if events.is_empty() {
            return;
        }

        let callbacks = self.subscribers.lock().snapshot();
        for event in events {
            for callback in &callbacks {
                callback(event);
            }
        }
    }

    /// Rolls two dice.
    ///
    /// The roll does not touch the game; pass it to [`Game::handle_roll`].
    pub fn roll_dice(&self) -> DiceRoll {
        let mut rng = self.rng.lock();
        let first = rng.random_range(1..=DIE_FACES);
        let second = rng.random_range(1..=DIE_FACES);
        drop(rng);
        DiceRoll::new(first, second)
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.state.lock().phase()
    }

    /// Returns everything a View needs to render.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(&*self.state.lock())
    }

    /// Returns the configured round count.
    pub fn round_count(&self) -> RoundCount {
        self.state.lock().round_count
    }

    /// Returns the 1-based current round.
    pub fn current_round(&self) -> u32 {
        self.state.lock().current_round
    }

    /// Returns the shared pot.
    pub fn total_points(&self) -> u64 {
        self.state.lock().total_points
    }

    /// Returns a copy of the roster in turn order.
    pub fn players(&self) -> Vec<Player> {
        self.state.lock().players.clone()
    }

    /// Returns the number of players on the roster.
    pub fn player_count(&self) -> usize {
        self.state.lock().players.len()
    }

    /// Returns the index of the player whose turn it is.
    pub fn current_player_index(&self) -> usize {
        self.state.lock().current_player_index
    }

    /// Returns the player whose turn it is.
    ///
    /// Returns `None` if the roster is empty.
    pub fn current_player(&self) -> Option<Player> {
        self.state.lock().current_player().cloned()
    }

    /// Returns whether a game is running.
    pub fn is_game_started(&self) -> bool {
        self.state.lock().is_game_started
    }

    /// Returns whether the game has ended. Re-evaluated on every call.
    pub fn is_game_over(&self) -> bool {
        self.state.lock().is_game_over()
    }

    /// Returns whether doubling is active.
    pub fn is_round_three_or_later(&self) -> bool {
        self.state.lock().is_round_three_or_later()
    }

    /// Returns whether a lifecycle transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        self.state.lock().is_transitioning()
    }

    /// Returns the in-flight transition, if any.
    pub fn pending_transition(&self) -> Option<PendingTransition> {
        self.state.lock().pending_transition()
    }

    /// Returns players ranked by banked points, best first.
    pub fn standings(&self) -> Vec<Standing> {
        result::rank(&self.state.lock().players)
    }

    /// Returns the final result.
    ///
    /// Returns `None` until the game is over.
    pub fn result(&self) -> Option<GameResult> {
        let state = self.state.lock();
        if !state.is_game_over() {
            return None;
        }

        let standings = result::rank(&state.players);
        let rounds_played = state.round_count.rounds();
        drop(state);

        Some(GameResult {
            winner: standings.first().cloned(),
            standings,
            rounds_played,
        })
    }
}
