//! Final standings for the results screen.

extern crate alloc;

use core::cmp::Reverse;

use alloc::string::String;
use alloc::vec::Vec;

use crate::player::{Player, PlayerId};

/// A player's position in the standings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// 1-based placement.
    pub place: usize,
    /// The player ID.
    pub player_id: PlayerId,
    /// The player's name.
    pub name: String,
    /// Banked points.
    pub points: u64,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// All players, best first.
    pub standings: Vec<Standing>,
    /// The player in first place, if anybody played.
    pub winner: Option<Standing>,
    /// Rounds that were configured for the game.
    pub rounds_played: u32,
}

/// Ranks players by points, highest first. Ties keep roster order.
pub(crate) fn rank(players: &[Player]) -> Vec<Standing> {
    let mut sorted: Vec<&Player> = players.iter().collect();
    sorted.sort_by_key(|player| Reverse(player.points));

    sorted
        .into_iter()
        .enumerate()
        .map(|(index, player)| Standing {
            place: index + 1,
            player_id: player.id,
            name: player.name.clone(),
            points: player.points,
        })
        .collect()
}
