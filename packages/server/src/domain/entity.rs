//! Entities

use super::value_object::{ConnectionToken, PlayerName, Timestamp};

/// A connected participant and its per-round flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub token: ConnectionToken,
    pub name: PlayerName,
    pub joined_at: Timestamp,
    /// Set only for the current round's drawer.
    pub is_drawer: bool,
    /// Set once the player has drawn in the current rotation cycle.
    pub was_drawer: bool,
}

impl Player {
    pub fn new(token: ConnectionToken, name: PlayerName, joined_at: Timestamp) -> Self {
        Self {
            token,
            name,
            joined_at,
            is_drawer: false,
            was_drawer: false,
        }
    }

    /// Eligible to be picked as the next drawer in this rotation cycle.
    pub fn is_eligible_drawer(&self) -> bool {
        !self.is_drawer && !self.was_drawer
    }
}
