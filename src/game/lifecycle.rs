use alloc::vec::Vec;

use crate::error::TransitionError;
use crate::event::GameEvent;

use super::state::{PendingTransition, TransitionKind};
use super::{Game, GameState};

impl Game {
    /// Registers a new in-flight transition, superseding any older one.
    fn begin_transition(
        &self,
        state: &mut GameState,
        kind: TransitionKind,
        events: &mut Vec<GameEvent>,
    ) -> PendingTransition {
        if let Some(old) = state.pending.take() {
            log::warn!("{:?} transition superseded by {kind:?}", old.kind);
            events.push(GameEvent::TransitionSuperseded(old.kind));
        }

        state.generation += 1;
        let pending = PendingTransition {
            kind,
            generation: state.generation,
            delay: self.options.settle_delay,
        };
        state.pending = Some(pending);
        events.push(GameEvent::TransitionStarted(kind));
        pending
    }

    const fn ensure_running(state: &GameState) -> Result<(), TransitionError> {
        if state.is_game_started || state.is_transitioning() {
            Ok(())
        } else {
            Err(TransitionError::NotStarted)
        }
    }

    /// Starts a game with the current roster.
    ///
    /// Scores, round, and pot are reset straight away and the setup pane is
    /// hidden; the game becomes playable once the returned transition is
    /// completed.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already started or the roster is
    /// smaller than [`GameOptions::min_players`](crate::GameOptions::min_players).
    pub fn start_game(&self) -> Result<PendingTransition, TransitionError> {
        let mut events = Vec::new();
        let mut state = self.state.lock();
        if state.is_game_started {
            return Err(TransitionError::AlreadyStarted);
        }

        let found = state.players.len();
        let required = self.options.min_players;
        if found < required {
            return Err(TransitionError::NotEnoughPlayers { required, found });
        }

        state.show_player_setup = false;
        state.reset_progress();
        let pending = self.begin_transition(&mut state, TransitionKind::Start, &mut events);
        drop(state);

        self.notify(&events);
        Ok(pending)
    }

    /// Plays again with the same roster.
    ///
    /// # Errors
    ///
    /// Returns an error if no game is running or in flight.
    pub fn reset_game(&self) -> Result<PendingTransition, TransitionError> {
        self.begin_deferred(TransitionKind::Reset)
    }

    /// Abandons the game and clears the roster.
    ///
    /// # Errors
    ///
    /// Returns an error if no game is running or in flight.
    pub fn return_to_menu(&self) -> Result<PendingTransition, TransitionError> {
        self.begin_deferred(TransitionKind::ReturnToMenu)
    }

    fn begin_deferred(&self, kind: TransitionKind) -> Result<PendingTransition, TransitionError> {
        let mut events = Vec::new();
        let pending = {
            let mut state = self.state.lock();
            Self::ensure_running(&state)?;
            self.begin_transition(&mut state, kind, &mut events)
        };
        self.notify(&events);
        Ok(pending)
    }

    /// Applies a transition once its settle delay has elapsed.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::Superseded`] if a newer transition has been
    /// started since, or [`TransitionError::NothingPending`] if this one was
    /// already completed.
    pub fn complete_transition(
        &self,
        pending: PendingTransition,
    ) -> Result<TransitionKind, TransitionError> {
        {
            let mut state = self.state.lock();
            if pending.generation != state.generation {
                return Err(TransitionError::Superseded);
            }
            if state.pending != Some(pending) {
                return Err(TransitionError::NothingPending);
            }
            state.pending = None;

            match pending.kind {
                TransitionKind::Start => {
                    state.is_game_started = true;
                }
                TransitionKind::Reset => {
                    state.reset_progress();
                    state.is_game_started = true;
                }
                TransitionKind::ReturnToMenu => {
                    state.players.clear();
                    state.reset_progress();
                    state.is_game_started = false;
                }
            }
        }

        log::info!("{:?} transition completed", pending.kind);
        self.notify(&[GameEvent::TransitionCompleted(pending.kind)]);
        Ok(pending.kind)
    }

    /// Waits out the settle delay on the current thread, then completes.
    ///
    /// # Errors
    ///
    /// Same as [`Game::complete_transition`].
    #[cfg(feature = "std")]
    pub fn settle_blocking(
        &self,
        pending: PendingTransition,
    ) -> Result<TransitionKind, TransitionError> {
        std::thread::sleep(pending.delay);
        self.complete_transition(pending)
    }

    /// Waits out the settle delay on the tokio timer, then completes.
    ///
    /// Spawn one of these per transition; a superseded one resolves to
    /// [`TransitionError::Superseded`] without touching the game.
    ///
    /// # Errors
    ///
    /// Same as [`Game::complete_transition`].
    #[cfg(feature = "tokio")]
    #[cfg_attr(docsrs, doc(cfg(feature = "tokio")))]
    pub async fn settle(
        &self,
        pending: PendingTransition,
    ) -> Result<TransitionKind, TransitionError> {
        tokio::time::sleep(pending.delay).await;
        self.complete_transition(pending)
    }
}
