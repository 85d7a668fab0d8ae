//! The persistence contract.
//!
//! The engine hands finished games to a relational store through three
//! operations and two row shapes. Implementations own schema, transactions,
//! and connection handling; the engine only translates frames into rows.

use serde::{Deserialize, Serialize};

use crate::core::{GameId, PlayerId, StoreError};
use crate::scoring::Frame;

/// One persisted game row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Handle of this row.
    pub game_id: GameId,
    /// Owning player.
    pub player_id: PlayerId,
    /// Final total, written at match completion (0 until then).
    pub final_score: u16,
}

/// One persisted frame row: up to three roll slots, unplayed slots empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRecord {
    /// 1-based frame position (1-10).
    pub frame_number: u8,
    /// First delivery.
    pub roll1: u8,
    /// Second delivery, if played.
    pub roll2: Option<u8>,
    /// Third delivery (tenth frame only), if earned and played.
    pub roll3: Option<u8>,
}

impl FrameRecord {
    /// Translate a frame into its row shape. `None` for a frame with no
    /// rolls (never the case in a finished game).
    #[must_use]
    pub fn from_frame(frame_number: u8, frame: &Frame) -> Option<Self> {
        let rolls = frame.rolls();
        let &roll1 = rolls.first()?;
        Some(Self {
            frame_number,
            roll1,
            roll2: rolls.get(1).copied(),
            roll3: rolls.get(2).copied(),
        })
    }
}

/// The persistence collaborator, as the engine sees it.
///
/// The engine calls [`create_game`](Self::create_game) at match setup and
/// the other two operations at match completion; see
/// [`Match::persist`](crate::Match::persist).
pub trait ScoreStore {
    /// Allocate a game row for a player and return its handle.
    fn create_game(&mut self, player: PlayerId) -> Result<GameId, StoreError>;

    /// Write the final total of a finished game.
    fn update_game_score(&mut self, game: GameId, final_score: u16) -> Result<(), StoreError>;

    /// Append one frame row to a game.
    fn append_frame_record(&mut self, game: GameId, record: FrameRecord)
        -> Result<(), StoreError>;
}
