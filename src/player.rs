//! Player representation.

extern crate alloc;

use alloc::string::String;

/// Opaque, unique player identifier.
pub type PlayerId = u32;

/// A player on the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Unique identifier assigned on creation.
    pub id: PlayerId,
    /// Display name, trimmed and never empty.
    pub name: String,
    /// Points banked across all rounds.
    pub points: u64,
    /// Whether the player has banked (or been cleared) this round.
    pub has_finished: bool,
}

impl Player {
    /// Creates a player from a raw name.
    ///
    /// Returns `None` if the name is empty after trimming.
    #[must_use]
    pub fn new(id: PlayerId, name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        Some(Self {
            id,
            name: String::from(name),
            points: 0,
            has_finished: false,
        })
    }

    /// Clears banked points and the finished flag.
    pub(crate) const fn reset_stats(&mut self) {
        self.points = 0;
        self.has_finished = false;
    }

    /// Adds a banked pot to the player's score.
    pub(crate) const fn bank(&mut self, amount: u64) {
        self.points = self.points.saturating_add(amount);
        self.has_finished = true;
    }
}
