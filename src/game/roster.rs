use core::sync::atomic::Ordering;

use alloc::vec::Vec;

use crate::error::SetupError;
use crate::event::GameEvent;
use crate::options::RoundCount;
use crate::player::{Player, PlayerId};

use super::{Game, GameState};

impl GameState {
    const fn ensure_setup(&self) -> Result<(), SetupError> {
        if self.is_game_started || self.is_transitioning() {
            return Err(SetupError::GameInProgress);
        }
        Ok(())
    }
}

impl Game {
    fn push_player(
        &self,
        state: &mut GameState,
        name: &str,
        events: &mut Vec<GameEvent>,
    ) -> Result<PlayerId, SetupError> {
        state.ensure_setup()?;
        if name.trim().is_empty() {
            return Err(SetupError::EmptyName);
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let player = Player::new(id, name).ok_or(SetupError::EmptyName)?;
        log::debug!("player {id} ({}) joined", player.name);
        state.players.push(player);
        events.push(GameEvent::PlayerAdded(id));
        Ok(id)
    }

    /// Adds a player to the end of the roster.
    ///
    /// Returns the assigned player ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed name is empty or a game is running.
    pub fn add_player(&self, name: &str) -> Result<PlayerId, SetupError> {
        let mut events = Vec::new();
        let result = {
            let mut state = self.state.lock();
            self.push_player(&mut state, name, &mut events)
        };
        self.notify(&events);
        result
    }

    /// Adds a player named by the "new player" input, then clears the input.
    ///
    /// # Errors
    ///
    /// Same as [`Game::add_player`]; the input is kept on failure.
    pub fn submit_new_player(&self) -> Result<PlayerId, SetupError> {
        let mut events = Vec::new();
        let result = {
            let mut state = self.state.lock();
            let name = core::mem::take(&mut state.new_player_name);
            let result = self.push_player(&mut state, &name, &mut events);
            if result.is_ok() {
                events.push(GameEvent::ViewChanged);
            } else {
                state.new_player_name = name;
            }
            result
        };
        self.notify(&events);
        result
    }

    /// Removes a player from the roster.
    ///
    /// # Errors
    ///
    /// Returns an error if no player has this ID or a game is running.
    pub fn remove_player(&self, player_id: PlayerId) -> Result<Player, SetupError> {
        let result = {
            let mut state = self.state.lock();
            state.ensure_setup()?;
            let index = state
                .players
                .iter()
                .position(|p| p.id == player_id)
                .ok_or(SetupError::PlayerNotFound)?;
            state.players.remove(index)
        };
        log::debug!("player {player_id} left");
        self.notify(&[GameEvent::PlayerRemoved(player_id)]);
        Ok(result)
    }

    /// Swaps the player at `index` with the one before it.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of bounds or already first, or a
    /// game is running.
    pub fn move_player_up(&self, index: usize) -> Result<(), SetupError> {
        {
            let mut state = self.state.lock();
            state.ensure_setup()?;
            if index >= state.players.len() {
                return Err(SetupError::IndexOutOfBounds(index));
            }
            if index == 0 {
                return Err(SetupError::AtBoundary);
            }
            state.players.swap(index, index - 1);
        }
        self.notify(&[GameEvent::RosterReordered]);
        Ok(())
    }

    /// Swaps the player at `index` with the one after it.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of bounds or already last, or a
    /// game is running.
    pub fn move_player_down(&self, index: usize) -> Result<(), SetupError> {
        {
            let mut state = self.state.lock();
            state.ensure_setup()?;
            let len = state.players.len();
            if index >= len {
                return Err(SetupError::IndexOutOfBounds(index));
            }
            if index + 1 == len {
                return Err(SetupError::AtBoundary);
            }
            state.players.swap(index, index + 1);
        }
        self.notify(&[GameEvent::RosterReordered]);
        Ok(())
    }

    /// Chooses how many rounds the next game lasts.
    ///
    /// # Errors
    ///
    /// Returns an error if a game is running.
    pub fn set_round_count(&self, round_count: RoundCount) -> Result<(), SetupError> {
        {
            let mut state = self.state.lock();
            state.ensure_setup()?;
            if state.round_count == round_count {
                return Ok(());
            }
            state.round_count = round_count;
        }
        self.notify(&[GameEvent::RoundCountChanged(round_count)]);
        Ok(())
    }
}
