//! Change notifications for Views.

extern crate alloc;

use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::game::state::TransitionKind;
use crate::options::RoundCount;
use crate::player::PlayerId;

/// Handle returned by [`Game::subscribe`](crate::Game::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u32);

/// A state change that a View may want to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameEvent {
    /// A player joined the roster.
    PlayerAdded(PlayerId),
    /// A player left the roster.
    PlayerRemoved(PlayerId),
    /// Two neighbouring players swapped places.
    RosterReordered,
    /// The round count changed.
    RoundCountChanged(RoundCount),
    /// The pot changed.
    PotChanged {
        /// New pot value.
        total_points: u64,
    },
    /// Another player is up.
    TurnChanged {
        /// Index of the current player.
        player_index: usize,
    },
    /// A player banked the pot.
    Banked {
        /// Who banked.
        player_id: PlayerId,
        /// How much was banked.
        amount: u64,
    },
    /// Every player was force-finished.
    RoundCleared,
    /// A new round began.
    RoundStarted(u32),
    /// The final round ended.
    GameFinished,
    /// A lifecycle transition began.
    TransitionStarted(TransitionKind),
    /// A lifecycle transition took effect.
    TransitionCompleted(TransitionKind),
    /// A pending transition was replaced by a newer one.
    TransitionSuperseded(TransitionKind),
    /// Setup pane, rules modal or the new player name changed.
    ViewChanged,
}

pub(crate) type Callback = Arc<dyn Fn(&GameEvent) + Send + Sync>;

/// Registered callbacks.
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u32,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl Subscribers {
    pub(crate) fn insert(
        &mut self,
        callback: Box<dyn Fn(&GameEvent) + Send + Sync>,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push((id, Arc::from(callback)));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Clones the callbacks so they can run without the lock held.
    pub(crate) fn snapshot(&self) -> Vec<Callback> {
        self.entries.iter().map(|(_, cb)| Arc::clone(cb)).collect()
    }
}
