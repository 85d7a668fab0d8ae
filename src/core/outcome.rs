//! Roll outcome descriptors.
//!
//! Every accepted roll produces a fixed-shape descriptor. The engine keeps
//! no memory of descriptors it has issued; they are read-only output for
//! the caller. The presentation layer drives celebrations, turn indicators,
//! and the end-of-match transition from these fields alone.

use serde::{Deserialize, Serialize};

/// What a single accepted roll meant for one player's game.
///
/// Returned by [`PlayerGame::submit_roll`](crate::PlayerGame::submit_roll).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// All ten pins on a frame's first delivery, or on a tenth-frame bonus
    /// delivery.
    pub is_strike: bool,

    /// Ten pins across the frame's first two deliveries (first not a
    /// strike).
    pub is_spare: bool,

    /// The active frame accepts no further rolls.
    pub frame_complete: bool,

    /// The player's whole game is finished.
    pub game_complete: bool,
}

impl RollOutcome {
    /// Check whether this roll should trigger any celebration.
    #[must_use]
    pub fn is_mark(&self) -> bool {
        self.is_strike || self.is_spare
    }
}

/// A [`RollOutcome`] augmented with match-level context.
///
/// Returned by [`Match::record_roll`](crate::Match::record_roll); the sole
/// signal the presentation layer consumes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Display name of the player who rolled.
    pub player_name: String,

    /// All ten pins on a frame's first delivery, or on a tenth-frame bonus
    /// delivery.
    pub is_strike: bool,

    /// Ten pins across the frame's first two deliveries.
    pub is_spare: bool,

    /// The acting player's frame accepts no further rolls.
    pub frame_complete: bool,

    /// The acting player's whole game is finished.
    pub game_complete: bool,

    /// Every player in the match is finished.
    pub all_games_complete: bool,
}

impl MatchOutcome {
    /// Flatten a per-player outcome into the match-level descriptor.
    pub(crate) fn from_roll(
        player_name: impl Into<String>,
        outcome: RollOutcome,
        all_games_complete: bool,
    ) -> Self {
        Self {
            player_name: player_name.into(),
            is_strike: outcome.is_strike,
            is_spare: outcome.is_spare,
            frame_complete: outcome.frame_complete,
            game_complete: outcome.game_complete,
            all_games_complete,
        }
    }
}
