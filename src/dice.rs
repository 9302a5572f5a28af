//! Dice rolls and selectable numbers.

/// Numbers a View offers for selection: every two-dice total.
pub const SELECTABLE_NUMBERS: [u64; 11] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

/// The total that always pays the flat bonus.
pub const SEVEN: u64 = 7;

/// Flat bonus added to the pot when a seven is selected.
pub const SEVEN_BONUS: u64 = 50;

/// Number of faces on each die.
pub const DIE_FACES: u8 = 6;

/// A roll of two six-sided dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiceRoll {
    /// First die (1..=6).
    pub first: u8,
    /// Second die (1..=6).
    pub second: u8,
}

impl DiceRoll {
    /// Creates a roll from two faces.
    ///
    /// Note: faces are not validated. Values outside 1..=6 are accepted and
    /// simply summed.
    #[must_use]
    pub const fn new(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    /// Returns the sum of both dice.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.first as u64 + self.second as u64
    }

    /// Returns whether both dice show the same face.
    #[must_use]
    pub const fn is_doubles(&self) -> bool {
        self.first == self.second
    }
}
