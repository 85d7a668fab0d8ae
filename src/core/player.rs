//! Player and game identification.
//!
//! ## PlayerId / GameId
//!
//! Opaque identifiers allocated by the persistence collaborator. The engine
//! never interprets them; it only threads them through to the hand-off.
//!
//! ## PlayerProfile
//!
//! One roster entry as the persistence collaborator hands it over at match
//! setup: identifier plus display name.

use serde::{Deserialize, Serialize};

/// Opaque identifier of a persisted player record.
///
/// ```
/// use tenpin::PlayerId;
///
/// let id = PlayerId::new(7);
/// assert_eq!(id.value(), 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub i64);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw identifier value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {}", self.0)
    }
}

/// Opaque handle to a persisted game record.
///
/// Assigned by the persistence collaborator before play starts, or left
/// unset on a [`PlayerGame`](crate::PlayerGame) for a practice game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameId(pub i64);

impl GameId {
    /// Create a new game handle.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw identifier value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "game {}", self.0)
    }
}

/// One roster entry: a player's identity as handed over at match setup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Persisted player identifier.
    pub id: PlayerId,
    /// Display name shown on the scoreboard.
    pub name: String,
}

impl PlayerProfile {
    /// Create a roster entry.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
