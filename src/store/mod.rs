//! Persistence contract and reference store.
//!
//! ## Key Types
//!
//! - `ScoreStore`: the narrow contract the engine hands finished games to
//! - `GameRecord` / `FrameRecord`: the relational row shapes
//! - `MemoryStore`: in-memory reference implementation
//! - `PlayerStats`: career aggregates over stored games

pub mod record;
pub mod memory;
pub mod stats;

pub use record::{FrameRecord, GameRecord, ScoreStore};
pub use memory::MemoryStore;
pub use stats::PlayerStats;
