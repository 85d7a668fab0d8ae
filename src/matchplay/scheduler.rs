//! The multi-player turn scheduler.
//!
//! `Match` owns the players in join order, routes each incoming roll to the
//! active player's engine, rotates the turn when a frame closes, skips
//! players who have already finished, and reports match completion and the
//! winner.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{GameId, MatchError, MatchOutcome, PlayerId, PlayerProfile};
use crate::scoring::PlayerGame;

/// An ordered group of players bowling one match.
///
/// The active-player cursor always refers to a player with work remaining
/// while any exist; once every game is complete the match is frozen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    players: Vec<PlayerGame>,
    /// 0-based index of the player the next roll belongs to.
    current: usize,
    /// Set once the first roll lands; freezes the roster.
    started: bool,
}

impl Match {
    /// Create a match with an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Roster ===

    /// Append a player to the turn order.
    ///
    /// The roster is fixed at match start: once any roll has been recorded
    /// this fails with [`MatchError::RosterFrozen`].
    pub fn add_player(
        &mut self,
        profile: PlayerProfile,
        game_id: Option<GameId>,
    ) -> Result<(), MatchError> {
        if self.started {
            return Err(MatchError::RosterFrozen);
        }

        let mut game = PlayerGame::new(profile.id, profile.name);
        if let Some(id) = game_id {
            game.assign_game_id(id);
        }
        self.players.push(game);
        Ok(())
    }

    /// Players in join order.
    #[must_use]
    pub fn players(&self) -> &[PlayerGame] {
        &self.players
    }

    pub(crate) fn players_mut(&mut self) -> &mut [PlayerGame] {
        &mut self.players
    }

    /// Number of players in the match.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The player the next roll belongs to, if any remain.
    #[must_use]
    pub fn current_player(&self) -> Option<&PlayerGame> {
        self.players.get(self.current)
    }

    // === Play ===

    /// Record a roll for the active player and rotate the turn if their
    /// frame closed.
    ///
    /// Fails with [`MatchError::NoActivePlayer`] on an empty roster and
    /// propagates the engine's [`RollError`](crate::RollError) unchanged;
    /// neither failure advances the turn or mutates any state.
    pub fn record_roll(&mut self, pins: u8) -> Result<MatchOutcome, MatchError> {
        let Some(active) = self.players.get_mut(self.current) else {
            return Err(MatchError::NoActivePlayer);
        };

        let outcome = active.submit_roll(pins)?;
        self.started = true;

        let player_name = active.player_name().to_owned();
        debug!(
            player = %player_name,
            pins,
            strike = outcome.is_strike,
            spare = outcome.is_spare,
            "roll recorded"
        );
        if outcome.game_complete {
            info!(player = %player_name, score = active.total_score(), "game complete");
        }

        // Rotate whenever a frame closes, even if that roll also finished
        // the player's whole game.
        if outcome.frame_complete {
            self.advance_turn();
        }

        let all_games_complete = self.is_match_complete();
        if all_games_complete {
            info!("all games complete");
        }

        Ok(MatchOutcome::from_roll(player_name, outcome, all_games_complete))
    }

    /// Move the cursor to the next player with work remaining.
    ///
    /// One bounded lap over the roster: if every player is finished the
    /// cursor is left wherever the scan ended and is no longer meaningful.
    fn advance_turn(&mut self) {
        self.current = (self.current + 1) % self.players.len();

        for _ in 0..self.players.len() {
            if !self.players[self.current].is_complete() {
                debug!(next = %self.players[self.current].player_name(), "turn advanced");
                return;
            }
            self.current = (self.current + 1) % self.players.len();
        }
    }

    // === Results ===

    /// Check whether every player has finished their game.
    #[must_use]
    pub fn is_match_complete(&self) -> bool {
        self.players.iter().all(PlayerGame::is_complete)
    }

    /// The player with the strictly highest final score.
    ///
    /// `None` until every game is complete. On a tied top score the player
    /// who joined earliest wins.
    #[must_use]
    pub fn winner(&self) -> Option<&PlayerGame> {
        if self.players.is_empty() || !self.is_match_complete() {
            return None;
        }

        let mut best: Option<(&PlayerGame, u16)> = None;
        for game in &self.players {
            let score = game.total_score().unwrap_or(0);
            // Strictly greater, so the earliest joined player keeps a tie.
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((game, score));
            }
        }

        best.map(|(game, _)| game)
    }

    /// Final per-player results, highest score first (ties keep join
    /// order). `None` until every game is complete.
    #[must_use]
    pub fn standings(&self) -> Option<Vec<Standing>> {
        if !self.is_match_complete() {
            return None;
        }

        let mut standings: Vec<Standing> = self
            .players
            .iter()
            .map(|game| Standing {
                player_id: game.player_id(),
                player_name: game.player_name().to_owned(),
                final_score: game.total_score().unwrap_or(0),
            })
            .collect();
        standings.sort_by(|a, b| b.final_score.cmp(&a.final_score));
        Some(standings)
    }
}

/// One row of the end-of-match summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Persisted player identifier.
    pub player_id: PlayerId,
    /// Display name.
    pub player_name: String,
    /// Final game total.
    pub final_score: u16,
}
