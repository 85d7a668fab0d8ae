//! In-memory score store.
//!
//! The reference [`ScoreStore`]: practice matches, tests, and a template
//! for real backends. Game rows keep insertion order; frame rows are keyed
//! by game handle.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::record::{FrameRecord, GameRecord, ScoreStore};
use super::stats::PlayerStats;
use crate::core::{GameId, PlayerId, StoreError};

/// An in-memory [`ScoreStore`] with monotonic handle allocation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    games: Vec<GameRecord>,
    frames: FxHashMap<GameId, Vec<FrameRecord>>,
    next_game_id: i64,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a game row by handle.
    #[must_use]
    pub fn game(&self, game_id: GameId) -> Option<&GameRecord> {
        self.games.iter().find(|record| record.game_id == game_id)
    }

    /// A player's game rows, oldest first.
    pub fn games_for(&self, player: PlayerId) -> impl Iterator<Item = &GameRecord> {
        self.games
            .iter()
            .filter(move |record| record.player_id == player)
    }

    /// A game's frame rows, in append order.
    #[must_use]
    pub fn frames_for(&self, game_id: GameId) -> &[FrameRecord] {
        self.frames.get(&game_id).map_or(&[], Vec::as_slice)
    }

    /// Aggregate statistics over everything stored for a player.
    #[must_use]
    pub fn player_stats(&self, player: PlayerId) -> PlayerStats {
        PlayerStats::from_games(
            self.games_for(player)
                .map(|record| (record.final_score, self.frames_for(record.game_id))),
        )
    }

    fn get_mut(&mut self, game_id: GameId) -> Result<&mut GameRecord, StoreError> {
        self.games
            .iter_mut()
            .find(|record| record.game_id == game_id)
            .ok_or(StoreError::UnknownGame(game_id))
    }
}

impl ScoreStore for MemoryStore {
    fn create_game(&mut self, player: PlayerId) -> Result<GameId, StoreError> {
        self.next_game_id += 1;
        let game_id = GameId::new(self.next_game_id);
        self.games.push(GameRecord {
            game_id,
            player_id: player,
            final_score: 0,
        });
        Ok(game_id)
    }

    fn update_game_score(&mut self, game: GameId, final_score: u16) -> Result<(), StoreError> {
        self.get_mut(game)?.final_score = final_score;
        Ok(())
    }

    fn append_frame_record(
        &mut self,
        game: GameId,
        record: FrameRecord,
    ) -> Result<(), StoreError> {
        // Frames must belong to an allocated game.
        let _ = self.get_mut(game)?;
        self.frames.entry(game).or_default().push(record);
        Ok(())
    }
}
