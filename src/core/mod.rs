//! Core engine types: identifiers, errors, outcome descriptors.
//!
//! This module contains the building blocks shared by the frame engine,
//! the match scheduler, and the persistence contract.

pub mod player;
pub mod error;
pub mod outcome;

pub use player::{GameId, PlayerId, PlayerProfile};
pub use error::{MatchError, RollError, StoreError};
pub use outcome::{MatchOutcome, RollOutcome};
