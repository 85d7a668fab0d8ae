//! The frame engine: frames and per-player game state.
//!
//! ## Key Types
//!
//! - `Frame`: one scoring unit's 0-3 rolls with strike/spare queries
//! - `PlayerGame`: one player's ten frames, roll validation, bonus
//!   look-ahead scoring, and turn/legality queries

pub mod frame;
pub mod game;

pub use frame::{Frame, FRAMES_PER_GAME, PIN_COUNT};
pub use game::PlayerGame;
