//! Game state types.

use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

use crate::options::RoundCount;
use crate::player::Player;

/// Lifecycle phase, derived from the stored flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Roster setup; no game running.
    NotStarted,
    /// Waiting for a start transition to settle.
    Starting,
    /// Players are taking turns.
    InProgress,
    /// Waiting for a "play again" transition to settle.
    Resetting,
    /// Waiting for a return-to-menu transition to settle.
    ReturningToMenu,
    /// The final round has ended.
    GameOver,
}

/// The three deferred lifecycle operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Start a new game with the current roster.
    Start,
    /// Play again with the same roster.
    Reset,
    /// Drop the roster and go back to setup.
    ReturnToMenu,
}

/// Token for a transition that has begun but not yet taken effect.
///
/// Hand it back to [`Game::complete_transition`](super::Game::complete_transition)
/// once [`delay`](Self::delay) has elapsed. Only the most recent token is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTransition {
    /// Which transition this is.
    pub kind: TransitionKind,
    /// Monotonic sequence number; a newer transition invalidates older ones.
    pub generation: u64,
    /// How long to wait before completing.
    pub delay: Duration,
}

/// All mutable game data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Target number of rounds.
    pub round_count: RoundCount,
    /// 1-based current round.
    pub current_round: u32,
    /// Roster in turn order.
    pub players: Vec<Player>,
    /// Whose turn it is.
    pub current_player_index: usize,
    /// The shared pot for the current round.
    pub total_points: u64,
    /// Whether a game is running (or over but not yet dismissed).
    pub is_game_started: bool,
    /// Set when the final round ends.
    pub is_game_finished: bool,
    /// Whether the player setup pane is visible.
    pub show_player_setup: bool,
    /// Whether the rules modal is visible.
    pub show_rules: bool,
    /// Text in the "new player" input.
    pub new_player_name: String,
    pub(crate) pending: Option<PendingTransition>,
    pub(crate) generation: u64,
}

impl GameState {
    /// Creates pre-start defaults.
    #[must_use]
    pub const fn new(round_count: RoundCount) -> Self {
        Self {
            round_count,
            current_round: 1,
            players: Vec::new(),
            current_player_index: 0,
            total_points: 0,
            is_game_started: false,
            is_game_finished: false,
            show_player_setup: false,
            show_rules: false,
            new_player_name: String::new(),
            pending: None,
            generation: 0,
        }
    }

    /// Returns whether a lifecycle transition is in flight.
    #[must_use]
    pub const fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the in-flight transition, if any.
    #[must_use]
    pub const fn pending_transition(&self) -> Option<PendingTransition> {
        self.pending
    }

    /// Returns whether the game has ended.
    ///
    /// Always `false` while a transition is in flight.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        (self.current_round > self.round_count.rounds() || self.is_game_finished)
            && !self.is_transitioning()
    }

    /// Returns whether doubling is active (round 3 onwards).
    #[must_use]
    pub const fn is_round_three_or_later(&self) -> bool {
        self.current_round >= 3
    }

    /// Returns the lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self.pending {
            Some(PendingTransition {
                kind: TransitionKind::Start,
                ..
            }) => Phase::Starting,
            Some(PendingTransition {
                kind: TransitionKind::Reset,
                ..
            }) => Phase::Resetting,
            Some(PendingTransition {
                kind: TransitionKind::ReturnToMenu,
                ..
            }) => Phase::ReturningToMenu,
            None if !self.is_game_started => Phase::NotStarted,
            None if self.is_game_over() => Phase::GameOver,
            None => Phase::InProgress,
        }
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    /// Rewinds to round one with an empty pot and zeroed scores.
    pub(crate) fn reset_progress(&mut self) {
        self.current_round = 1;
        self.total_points = 0;
        self.current_player_index = 0;
        self.is_game_finished = false;
        for player in &mut self.players {
            player.reset_stats();
        }
    }
}

/// Everything a View reads to render one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Lifecycle phase.
    pub phase: Phase,
    /// Target number of rounds.
    pub round_count: u32,
    /// 1-based current round.
    pub current_round: u32,
    /// Roster in turn order.
    pub players: Vec<Player>,
    /// Whose turn it is.
    pub current_player_index: usize,
    /// The shared pot.
    pub total_points: u64,
    /// Whether a game is running.
    pub is_game_started: bool,
    /// Whether the game has ended.
    pub is_game_over: bool,
    /// Whether doubling is active.
    pub is_round_three_or_later: bool,
    /// Whether a lifecycle transition is in flight.
    pub is_transitioning: bool,
    /// Whether the player setup pane is visible.
    pub show_player_setup: bool,
    /// Whether the rules modal is visible.
    pub show_rules: bool,
    /// Text in the "new player" input.
    pub new_player_name: String,
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        Self {
            phase: state.phase(),
            round_count: state.round_count.rounds(),
            current_round: state.current_round,
            players: state.players.clone(),
            current_player_index: state.current_player_index,
            total_points: state.total_points,
            is_game_started: state.is_game_started,
            is_game_over: state.is_game_over(),
            is_round_three_or_later: state.is_round_three_or_later(),
            is_transitioning: state.is_transitioning(),
            show_player_setup: state.show_player_setup,
            show_rules: state.show_rules,
            new_player_name: state.new_player_name.clone(),
        }
    }
}
