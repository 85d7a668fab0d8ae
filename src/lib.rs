//! # tenpin
//!
//! A ten-pin bowling scoring engine for live multi-player match tracking.
//!
//! ## Design Principles
//!
//! 1. **Scoring is the core**: the per-player frame state machine and the
//!    turn scheduler carry all the invariants. Persistence and presentation
//!    are collaborators behind narrow contracts.
//!
//! 2. **Synchronous and single-threaded**: every operation is a plain
//!    function call that fully resolves before returning. There is exactly
//!    one ball in flight at a time.
//!
//! 3. **All-or-nothing submission**: a rejected roll leaves the engine
//!    exactly as it was. "Not computable yet" is an expected state during
//!    live play and is reported as `None`, never as an error.
//!
//! ## Architecture
//!
//! A roll value enters the [`Match`] scheduler, which dispatches it to the
//! active [`PlayerGame`]. The engine mutates its own frames and returns a
//! [`RollOutcome`]; the scheduler inspects it to rotate the turn (skipping
//! finished players) and to detect match completion, then hands the caller
//! a [`MatchOutcome`], the sole signal the presentation layer needs.
//!
//! Once every player is complete, the match is translated into relational
//! rows through the [`ScoreStore`] contract.
//!
//! ## Modules
//!
//! - `core`: player/game identifiers, error taxonomy, outcome descriptors
//! - `scoring`: frames and the per-player frame engine
//! - `matchplay`: the multi-player turn scheduler and persistence hand-off
//! - `store`: the persistence contract, an in-memory store, aggregates

pub mod core;
pub mod scoring;
pub mod matchplay;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    GameId, PlayerId, PlayerProfile,
    MatchError, RollError, StoreError,
    MatchOutcome, RollOutcome,
};

pub use crate::scoring::{Frame, PlayerGame, FRAMES_PER_GAME, PIN_COUNT};

pub use crate::matchplay::{Match, Standing};

pub use crate::store::{FrameRecord, GameRecord, MemoryStore, PlayerStats, ScoreStore};
