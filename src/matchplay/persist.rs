//! Persistence hand-off.
//!
//! The scheduler touches the persistence collaborator at exactly two
//! points: match setup (one game row per roster entry, allocated before the
//! first ball) and match completion (frame rows plus the final score).
//! Everything in between lives purely in memory.

use tracing::info;

use crate::core::{MatchError, PlayerProfile};
use crate::store::{FrameRecord, ScoreStore};

use super::scheduler::Match;

impl Match {
    /// Build a match from the persistence collaborator's roster, allocating
    /// a fresh game record for every player.
    pub fn from_roster<S: ScoreStore>(
        roster: Vec<PlayerProfile>,
        store: &mut S,
    ) -> Result<Self, MatchError> {
        let mut game_match = Match::new();
        for profile in roster {
            let game_id = store.create_game(profile.id)?;
            game_match.add_player(profile, Some(game_id))?;
        }
        Ok(game_match)
    }

    /// Write every player's finished game to the store: one frame record
    /// per frame (unplayed roll slots stay empty), then the final score.
    ///
    /// Legal only once [`is_match_complete`](Self::is_match_complete) is
    /// true. Players without a game record (practice games) get one
    /// allocated here.
    pub fn persist<S: ScoreStore>(&mut self, store: &mut S) -> Result<(), MatchError> {
        if !self.is_match_complete() {
            return Err(MatchError::MatchNotComplete);
        }

        for game in self.players_mut() {
            let game_id = match game.game_id() {
                Some(id) => id,
                None => {
                    let id = store.create_game(game.player_id())?;
                    game.assign_game_id(id);
                    id
                }
            };

            for (index, frame) in game.frames().iter().enumerate() {
                let Some(record) = FrameRecord::from_frame(index as u8 + 1, frame) else {
                    continue;
                };
                store.append_frame_record(game_id, record)?;
            }

            let final_score = game.total_score().unwrap_or(0);
            store.update_game_score(game_id, final_score)?;
            info!(player = %game.player_name(), %game_id, final_score, "game persisted");
        }

        Ok(())
    }
}
