//! Error taxonomy.
//!
//! Two failure families exist: invalid roll submissions (a user-input
//! problem; the caller re-prompts) and misuse of the scheduler or store.
//! Score queries never fail: "not computable yet" is an expected state
//! during live play and is modeled as `Option::None`.
//!
//! A failed operation never leaves partial state behind.

use thiserror::Error;

use super::player::GameId;

/// A roll submission the frame engine refused. No state was mutated.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum RollError {
    /// The player's game already has its completion flag set.
    #[error("game already complete")]
    GameComplete,

    /// Pin count outside 0-10.
    #[error("pins out of range: {0}")]
    PinsOutOfRange(u8),

    /// More pins than are standing in the active frame.
    #[error("{pins} pins rolled but only {standing} standing")]
    ExceedsPinsStanding {
        /// Pins submitted.
        pins: u8,
        /// Legal upper bound for this roll.
        standing: u8,
    },
}

/// A scheduler operation that could not be carried out.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    /// `record_roll` on a match with an empty roster. A setup error by the
    /// caller, not a recoverable runtime condition.
    #[error("no active player: the roster is empty")]
    NoActivePlayer,

    /// `add_player` after the first roll was recorded.
    #[error("roster is frozen once play has started")]
    RosterFrozen,

    /// Persistence hand-off requested before every player finished.
    #[error("match is still in progress")]
    MatchNotComplete,

    /// The active player's engine refused the roll. The turn did not
    /// advance.
    #[error(transparent)]
    Roll(#[from] RollError),

    /// The persistence collaborator failed during setup or hand-off.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A failure reported by the persistence collaborator.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A game handle the store has no record of.
    #[error("unknown {0}")]
    UnknownGame(GameId),

    /// Backend-specific failure (I/O, constraint violation, ...).
    #[error("store backend: {0}")]
    Backend(String),
}
