//! The match scheduler: turn order over a group of players.
//!
//! ## Key Types
//!
//! - `Match`: ordered players, roll routing, turn rotation, winner
//! - `Standing`: one row of the end-of-match summary
//!
//! Setup from a roster and the completion hand-off to a
//! [`ScoreStore`](crate::store::ScoreStore) live in `persist`.

pub mod scheduler;
mod persist;

pub use scheduler::{Match, Standing};
