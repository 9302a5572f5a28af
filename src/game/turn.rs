use alloc::vec::Vec;

use crate::dice::{DiceRoll, SEVEN, SEVEN_BONUS};
use crate::error::TurnError;
use crate::event::GameEvent;
use crate::player::PlayerId;

use super::{Game, GameState};

impl GameState {
    const fn ensure_turn_allowed(&self) -> Result<(), TurnError> {
        if self.is_game_over() {
            return Err(TurnError::GameOver);
        }

        if !self.is_game_started || self.is_transitioning() {
            return Err(TurnError::NotInProgress);
        }

        Ok(())
    }

    /// Applies the scoring rule for a selected number and passes the turn.
    pub(crate) fn select_number(
        &mut self,
        number: u64,
        events: &mut Vec<GameEvent>,
    ) -> Result<u64, TurnError> {
        self.ensure_turn_allowed()?;

        let pot = self.total_points;
        self.total_points = if number == SEVEN {
            pot.saturating_add(SEVEN_BONUS)
        } else if number == pot && self.is_round_three_or_later() {
            pot.saturating_mul(2)
        } else {
            pot.saturating_add(number)
        };
        events.push(GameEvent::PotChanged {
            total_points: self.total_points,
        });

        self.move_to_next_player(events);
        Ok(self.total_points)
    }

    /// Banks the pot for the current player.
    pub(crate) fn bank(
        &mut self,
        events: &mut Vec<GameEvent>,
    ) -> Result<(PlayerId, u64), TurnError> {
        self.ensure_turn_allowed()?;
        if self.total_points == 0 {
            return Err(TurnError::EmptyPot);
        }

        let amount = self.total_points;
        let player = self
            .players
            .get_mut(self.current_player_index)
            .ok_or(TurnError::NotInProgress)?;
        player.bank(amount);
        let player_id = player.id;
        events.push(GameEvent::Banked { player_id, amount });

        self.move_to_next_player(events);
        self.check_round_end(events);
        Ok((player_id, amount))
    }

    /// Finishes every player without paying out the pot.
    pub(crate) fn clear(&mut self, events: &mut Vec<GameEvent>) -> Result<(), TurnError> {
        self.ensure_turn_allowed()?;

        for player in &mut self.players {
            player.has_finished = true;
        }
        events.push(GameEvent::RoundCleared);

        self.check_round_end(events);
        Ok(())
    }

    /// Advances to the next unfinished player, scanning at most one lap.
    ///
    /// Leaves the index unchanged when everybody has finished.
    pub(crate) fn move_to_next_player(&mut self, events: &mut Vec<GameEvent>) {
        let len = self.players.len();
        if len == 0 {
            return;
        }

        let start = self.current_player_index % len;
        let next = (1..=len)
            .map(|step| (start + step) % len)
            .find(|&index| !self.players[index].has_finished);

        if let Some(index) = next.filter(|&index| index != self.current_player_index) {
            self.current_player_index = index;
            events.push(GameEvent::TurnChanged {
                player_index: index,
            });
        }
    }

    /// Ends the round once every player has finished.
    pub(crate) fn check_round_end(&mut self, events: &mut Vec<GameEvent>) {
        if self.players.is_empty() || !self.players.iter().all(|p| p.has_finished) {
            return;
        }

        if self.current_round >= self.round_count.rounds() {
            self.is_game_finished = true;
            log::info!("game finished after round {}", self.current_round);
            events.push(GameEvent::GameFinished);
            return;
        }

        self.current_round += 1;
        for player in &mut self.players {
            player.has_finished = false;
        }
        self.move_to_next_player(events);
        self.total_points = 0;

        log::debug!("round {} started", self.current_round);
        events.push(GameEvent::RoundStarted(self.current_round));
        events.push(GameEvent::PotChanged { total_points: 0 });
    }
}

impl Game {
    /// Adds a selected number to the pot and passes the turn.
    ///
    /// A seven always adds a flat 50. From round 3, selecting the current pot
    /// value doubles it. Anything else is added as-is. Returns the new pot.
    ///
    /// Note: the rules shown to players say a seven ends the round after
    /// round 3; the engine deliberately keeps the flat bonus in every round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, not started, or transitioning.
    pub fn handle_number_select(&self, number: u64) -> Result<u64, TurnError> {
        let mut events = Vec::new();
        let result = self.state.lock().select_number(number, &mut events);
        if let Ok(pot) = result {
            log::debug!("selected {number}, pot is now {pot}");
        }
        self.notify(&events);
        result
    }

    /// Selects the total of a dice roll.
    ///
    /// Doubles are not special here: only selecting the current pot value
    /// doubles it, which is what [`Game::double_pot`] does.
    ///
    /// # Errors
    ///
    /// Same as [`Game::handle_number_select`].
    pub fn handle_roll(&self, roll: DiceRoll) -> Result<u64, TurnError> {
        self.handle_number_select(roll.total())
    }

    /// The "Double" button: selects the current pot value.
    ///
    /// From round 3 this doubles the pot; before that it adds the pot to itself.
    ///
    /// # Errors
    ///
    /// Same as [`Game::handle_number_select`].
    pub fn double_pot(&self) -> Result<u64, TurnError> {
        let mut events = Vec::new();
        let result = {
            let mut state = self.state.lock();
            let pot = state.total_points;
            state.select_number(pot, &mut events)
        };
        self.notify(&events);
        result
    }

    /// Banks the pot into the current player's score and finishes them for
    /// the round. Returns who banked and how much.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, not in progress, or the pot is empty.
    pub fn bank_points(&self) -> Result<(PlayerId, u64), TurnError> {
        let mut events = Vec::new();
        let result = self.state.lock().bank(&mut events);
        if let Ok((player_id, amount)) = result {
            log::debug!("player {player_id} banked {amount}");
        }
        self.notify(&events);
        result
    }

    /// Force-ends the round: every player is finished and nobody is paid.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, not started, or transitioning.
    pub fn clear_round(&self) -> Result<(), TurnError> {
        let mut events = Vec::new();
        let result = self.state.lock().clear(&mut events);
        self.notify(&events);
        result
    }
}
