use alloc::string::String;

use crate::event::GameEvent;

use super::Game;

impl Game {
    fn update_view(&self, apply: impl FnOnce(&mut super::GameState) -> bool) {
        let changed = apply(&mut self.state.lock());
        if changed {
            self.notify(&[GameEvent::ViewChanged]);
        }
    }

    /// Shows or hides the player setup pane.
    pub fn set_show_player_setup(&self, show: bool) {
        self.update_view(|state| {
            core::mem::replace(&mut state.show_player_setup, show) != show
        });
    }

    /// Shows or hides the rules modal.
    pub fn set_show_rules(&self, show: bool) {
        self.update_view(|state| {
            core::mem::replace(&mut state.show_rules, show) != show
        });
    }

    /// Replaces the text in the "new player" input.
    pub fn set_new_player_name(&self, name: &str) {
        self.update_view(|state| {
            if state.new_player_name == name {
                return false;
            }
            state.new_player_name = String::from(name);
            true
        });
    }

    /// Returns whether the player setup pane is visible.
    pub fn show_player_setup(&self) -> bool {
        self.state.lock().show_player_setup
    }

    /// Returns whether the rules modal is visible.
    pub fn show_rules(&self) -> bool {
        self.state.lock().show_rules
    }

    /// Returns the text in the "new player" input.
    pub fn new_player_name(&self) -> String {
        self.state.lock().new_player_name.clone()
    }
}
