//! The per-player frame engine.
//!
//! `PlayerGame` owns one player's ten-frame roll sequence. It validates
//! each delivery, classifies it (strike, spare, frame completion), and
//! computes frame and running scores with the bonus look-ahead:
//!
//! - a strike scores 10 plus the next two rolls, wherever they land;
//! - a spare scores 10 plus the next roll;
//! - the tenth frame is terminal: its score is the plain sum of its two or
//!   three rolls, with no look-ahead.
//!
//! A frame's score is therefore often unknowable for a while. Queries
//! report that as `None`; the provisional variants substitute zero for the
//! missing bonus rolls so a live scoreboard always has a number to show.

use serde::{Deserialize, Serialize};

use super::frame::{Frame, FRAMES_PER_GAME, PIN_COUNT};
use crate::core::{GameId, PlayerId, RollError, RollOutcome};

/// One player's ten-frame game: state machine, scorer, and legality oracle.
///
/// Created when a player joins a match, mutated only through
/// [`submit_roll`](Self::submit_roll), immutable once complete.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerGame {
    player_id: PlayerId,
    player_name: String,
    /// Persisted game row, if one was allocated. `None` for practice games.
    game_id: Option<GameId>,
    frames: [Frame; FRAMES_PER_GAME],
    /// 0-based index of the frame currently being filled.
    cursor: usize,
    complete: bool,
}

impl PlayerGame {
    /// Create a fresh game for a player.
    pub fn new(player_id: PlayerId, player_name: impl Into<String>) -> Self {
        Self {
            player_id,
            player_name: player_name.into(),
            game_id: None,
            frames: std::array::from_fn(|_| Frame::default()),
            cursor: 0,
            complete: false,
        }
    }

    // === Identity ===

    /// Persisted player identifier.
    #[must_use]
    pub fn player_id(&self) -> PlayerId {
        self.player_id
    }

    /// Display name shown on the scoreboard.
    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Handle to the persisted game record, if one was allocated.
    #[must_use]
    pub fn game_id(&self) -> Option<GameId> {
        self.game_id
    }

    /// Attach the persisted game record allocated for this game.
    pub fn assign_game_id(&mut self, game_id: GameId) {
        self.game_id = Some(game_id);
    }

    // === State Queries ===

    /// Check whether the game accepts no further rolls.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// All ten frames, in order. Later frames may still be empty.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Check whether any roll has been recorded yet.
    #[must_use]
    pub fn has_rolled(&self) -> bool {
        self.cursor > 0 || !self.frames[0].is_empty()
    }

    /// Check whether a frame accepts no further rolls.
    #[must_use]
    pub fn is_frame_complete(&self, frame_index: usize) -> bool {
        self.frames[frame_index].is_complete(frame_index == FRAMES_PER_GAME - 1)
    }

    // === Roll Submission ===

    /// Record a delivery in the active frame.
    ///
    /// Validation is all-or-nothing: on any error the game is exactly as it
    /// was before the call. A roll is refused when the game is already
    /// complete, when `pins` exceeds 10, or when `pins` exceeds the pins
    /// still standing in the active frame
    /// ([`max_pins_for_current_roll`](Self::max_pins_for_current_roll)).
    pub fn submit_roll(&mut self, pins: u8) -> Result<RollOutcome, RollError> {
        if self.complete {
            return Err(RollError::GameComplete);
        }
        if pins > PIN_COUNT {
            return Err(RollError::PinsOutOfRange(pins));
        }
        let standing = self.max_pins_for_current_roll();
        if pins > standing {
            return Err(RollError::ExceedsPinsStanding { pins, standing });
        }

        let mut outcome = RollOutcome::default();
        self.frames[self.cursor].push(pins);

        if self.cursor < FRAMES_PER_GAME - 1 {
            let frame = &self.frames[self.cursor];
            if frame.is_strike() {
                outcome.is_strike = true;
                outcome.frame_complete = true;
                self.cursor += 1;
            } else if frame.roll_count() == 2 {
                outcome.is_spare = frame.is_spare();
                outcome.frame_complete = true;
                self.cursor += 1;
            }
        } else {
            let tenth = &self.frames[FRAMES_PER_GAME - 1];
            match tenth.roll_count() {
                1 => {
                    outcome.is_strike = pins == PIN_COUNT;
                }
                2 => {
                    // A ten on a bonus delivery still counts as a strike
                    // for the scoreboard, without re-triggering bonus
                    // rules.
                    outcome.is_strike = tenth.is_strike() && pins == PIN_COUNT;
                    outcome.is_spare = tenth.is_spare();
                    if !tenth.earns_fill_ball() {
                        outcome.frame_complete = true;
                        outcome.game_complete = true;
                        self.complete = true;
                    }
                }
                _ => {
                    outcome.is_strike = pins == PIN_COUNT;
                    outcome.frame_complete = true;
                    outcome.game_complete = true;
                    self.complete = true;
                }
            }
        }

        Ok(outcome)
    }

    // === Scoring ===

    /// Score contributed by one frame, if it can be known yet.
    ///
    /// `None` while the frame is empty, unfinished, or waiting on bonus
    /// rolls. The tenth frame is the running sum of its recorded rolls;
    /// being terminal it never looks ahead.
    #[must_use]
    pub fn frame_score(&self, frame_index: usize) -> Option<u16> {
        let frame = &self.frames[frame_index];
        if frame.is_empty() {
            return None;
        }

        if frame_index == FRAMES_PER_GAME - 1 {
            return Some(frame.pin_total());
        }

        if frame.is_strike() {
            let mut bonus = self.rolls_after(frame_index).take(2);
            let first = bonus.next()?;
            let second = bonus.next()?;
            return Some(u16::from(PIN_COUNT) + u16::from(first) + u16::from(second));
        }

        if frame.is_spare() {
            let next = self.rolls_after(frame_index).next()?;
            return Some(u16::from(PIN_COUNT) + u16::from(next));
        }

        if frame.roll_count() == 2 {
            return Some(frame.pin_total());
        }

        None
    }

    /// Like [`frame_score`](Self::frame_score), with every roll that has
    /// not happened yet counted as zero.
    ///
    /// Agrees with `frame_score` exactly once that returns `Some`. Used for
    /// the running total a scoreboard shows mid-game.
    #[must_use]
    pub fn provisional_frame_score(&self, frame_index: usize) -> u16 {
        let frame = &self.frames[frame_index];

        if frame_index == FRAMES_PER_GAME - 1 {
            return frame.pin_total();
        }

        if frame.is_strike() {
            let bonus: u16 = self
                .rolls_after(frame_index)
                .take(2)
                .map(u16::from)
                .sum();
            return u16::from(PIN_COUNT) + bonus;
        }

        if frame.is_spare() {
            let next = self.rolls_after(frame_index).next().unwrap_or(0);
            return u16::from(PIN_COUNT) + u16::from(next);
        }

        frame.pin_total()
    }

    /// Total score so far: frame scores summed in order, stopping at the
    /// first frame whose score cannot be known yet.
    ///
    /// `None` only when frame 1 itself is not yet computable.
    #[must_use]
    pub fn total_score(&self) -> Option<u16> {
        let mut total = 0u16;
        let mut any_scored = false;

        for index in 0..FRAMES_PER_GAME {
            match self.frame_score(index) {
                Some(score) => {
                    total += score;
                    any_scored = true;
                }
                None => break,
            }
        }

        any_scored.then_some(total)
    }

    /// Running total with every unresolved bonus counted as zero.
    #[must_use]
    pub fn provisional_total(&self) -> u16 {
        (0..FRAMES_PER_GAME)
            .map(|index| self.provisional_frame_score(index))
            .sum()
    }

    /// Running totals through each frame.
    ///
    /// Scores cannot be known out of order: once one entry is `None`, every
    /// later entry is `None` too.
    #[must_use]
    pub fn cumulative_scores(&self) -> [Option<u16>; FRAMES_PER_GAME] {
        let mut cumulative = [None; FRAMES_PER_GAME];
        let mut running = 0u16;

        for (index, slot) in cumulative.iter_mut().enumerate() {
            match self.frame_score(index) {
                Some(score) => {
                    running += score;
                    *slot = Some(running);
                }
                None => break,
            }
        }

        cumulative
    }

    /// Rolls recorded after a frame, in frame order.
    fn rolls_after(&self, frame_index: usize) -> impl Iterator<Item = u8> + '_ {
        self.frames[frame_index + 1..]
            .iter()
            .flat_map(|frame| frame.rolls().iter().copied())
    }

    // === Turn Position ===

    /// Legal upper bound for the next delivery.
    ///
    /// Ten on a fresh rack (any first roll, or a tenth-frame delivery right
    /// after a strike or spare); otherwise the pins still standing. Zero
    /// once the game is complete.
    #[must_use]
    pub fn max_pins_for_current_roll(&self) -> u8 {
        if self.complete {
            return 0;
        }

        let rolls = self.frames[self.cursor].rolls();
        let Some(&first) = rolls.first() else {
            return PIN_COUNT;
        };

        if self.cursor == FRAMES_PER_GAME - 1 {
            return match rolls {
                // Second delivery: fresh rack only after a strike.
                [PIN_COUNT] => PIN_COUNT,
                [first] => PIN_COUNT - first,
                // Fill ball: fresh rack after a second-delivery strike or
                // a spare; otherwise whatever the second delivery left up
                // (first delivery was a strike).
                [_, PIN_COUNT] => PIN_COUNT,
                [first, second] if first + second == PIN_COUNT => PIN_COUNT,
                [PIN_COUNT, second] => PIN_COUNT - second,
                _ => 0,
            };
        }

        PIN_COUNT - first
    }

    /// Frame the next delivery lands in, 1-based and clamped to 10.
    #[must_use]
    pub fn current_frame_number(&self) -> u8 {
        (self.cursor + 1).min(FRAMES_PER_GAME) as u8
    }

    /// Position of the next delivery within its frame: 1, 2, or 3.
    #[must_use]
    pub fn current_roll_number(&self) -> u8 {
        (self.frames[self.cursor].roll_count() + 1).min(3) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> PlayerGame {
        PlayerGame::new(PlayerId::new(1), "Ada")
    }

    fn roll_all(g: &mut PlayerGame, rolls: &[u8]) {
        for &pins in rolls {
            g.submit_roll(pins).unwrap();
        }
    }

    #[test]
    fn test_strike_outcome_advances_frame() {
        let mut g = game();
        let outcome = g.submit_roll(10).unwrap();
        assert!(outcome.is_strike);
        assert!(outcome.frame_complete);
        assert!(!outcome.game_complete);
        assert_eq!(g.current_frame_number(), 2);
        assert_eq!(g.current_roll_number(), 1);
    }

    #[test]
    fn test_spare_outcome() {
        let mut g = game();
        assert!(!g.submit_roll(6).unwrap().frame_complete);
        let outcome = g.submit_roll(4).unwrap();
        assert!(outcome.is_spare);
        assert!(!outcome.is_strike);
        assert!(outcome.frame_complete);
    }

    #[test]
    fn test_open_frame_outcome() {
        let mut g = game();
        g.submit_roll(3).unwrap();
        let outcome = g.submit_roll(5).unwrap();
        assert!(!outcome.is_spare);
        assert!(outcome.frame_complete);
        assert_eq!(g.frame_score(0), Some(8));
    }

    #[test]
    fn test_rejects_out_of_range() {
        let mut g = game();
        assert_eq!(g.submit_roll(11), Err(RollError::PinsOutOfRange(11)));
        assert!(!g.has_rolled());
    }

    #[test]
    fn test_rejects_more_than_standing() {
        let mut g = game();
        g.submit_roll(7).unwrap();
        assert_eq!(
            g.submit_roll(4),
            Err(RollError::ExceedsPinsStanding { pins: 4, standing: 3 })
        );
        // The failed submission left the frame untouched.
        assert_eq!(g.frames()[0].rolls(), &[7]);
        assert_eq!(g.current_roll_number(), 2);
    }

    #[test]
    fn test_rejects_roll_after_completion() {
        let mut g = game();
        roll_all(&mut g, &[0; 20]);
        assert!(g.is_complete());
        assert_eq!(g.submit_roll(5), Err(RollError::GameComplete));
    }

    #[test]
    fn test_strike_score_looks_ahead_two_rolls() {
        let mut g = game();
        g.submit_roll(10).unwrap();
        assert_eq!(g.frame_score(0), None);
        g.submit_roll(4).unwrap();
        assert_eq!(g.frame_score(0), None);
        g.submit_roll(6).unwrap();
        assert_eq!(g.frame_score(0), Some(20));
    }

    #[test]
    fn test_spare_score_looks_ahead_one_roll() {
        let mut g = game();
        roll_all(&mut g, &[5, 5]);
        assert_eq!(g.frame_score(0), None);
        g.submit_roll(3).unwrap();
        assert_eq!(g.frame_score(0), Some(13));
    }

    #[test]
    fn test_consecutive_strikes_cross_frames() {
        let mut g = game();
        roll_all(&mut g, &[10, 10, 10]);
        // First strike sees the next two strikes.
        assert_eq!(g.frame_score(0), Some(30));
        assert_eq!(g.frame_score(1), None);
    }

    #[test]
    fn test_tenth_frame_open_completes_after_two() {
        let mut g = game();
        roll_all(&mut g, &[0; 18]);
        g.submit_roll(3).unwrap();
        let outcome = g.submit_roll(4).unwrap();
        assert!(outcome.frame_complete);
        assert!(outcome.game_complete);
        assert!(g.is_complete());
        assert_eq!(g.total_score(), Some(7));
    }

    #[test]
    fn test_tenth_frame_spare_earns_fill_ball() {
        let mut g = game();
        roll_all(&mut g, &[0; 18]);
        g.submit_roll(6).unwrap();
        let outcome = g.submit_roll(4).unwrap();
        assert!(outcome.is_spare);
        assert!(!outcome.frame_complete);
        assert!(!g.is_complete());
        let outcome = g.submit_roll(10).unwrap();
        assert!(outcome.is_strike);
        assert!(outcome.game_complete);
        assert_eq!(g.total_score(), Some(20));
    }

    #[test]
    fn test_tenth_frame_strike_then_partial_leaves_pins_standing() {
        let mut g = game();
        roll_all(&mut g, &[0; 18]);
        g.submit_roll(10).unwrap();
        assert_eq!(g.max_pins_for_current_roll(), 10);
        g.submit_roll(5).unwrap();
        // Fill ball is earned, but only five pins are back up.
        assert!(!g.is_complete());
        assert_eq!(g.max_pins_for_current_roll(), 5);
        g.submit_roll(5).unwrap();
        assert!(g.is_complete());
        assert_eq!(g.total_score(), Some(20));
    }

    #[test]
    fn test_tenth_frame_strike_then_gutter_is_not_a_spare() {
        let mut g = game();
        roll_all(&mut g, &[0; 18]);
        g.submit_roll(10).unwrap();
        let outcome = g.submit_roll(0).unwrap();
        assert!(!outcome.is_spare);
        assert!(!outcome.is_strike);
        assert!(!outcome.game_complete);
    }

    #[test]
    fn test_provisional_score_fills_missing_bonus_with_zero() {
        let mut g = game();
        g.submit_roll(10).unwrap();
        assert_eq!(g.frame_score(0), None);
        assert_eq!(g.provisional_frame_score(0), 10);
        g.submit_roll(4).unwrap();
        assert_eq!(g.provisional_frame_score(0), 14);
        assert_eq!(g.provisional_total(), 18);
        g.submit_roll(6).unwrap();
        // Enough rolls exist: provisional and exact agree.
        assert_eq!(g.provisional_frame_score(0), 20);
        assert_eq!(g.frame_score(0), Some(20));
    }

    #[test]
    fn test_total_score_stops_at_unresolved_frame() {
        let mut g = game();
        roll_all(&mut g, &[3, 4, 5, 5]);
        // Frame 2's spare bonus is unknown, so the total is frame 1 alone.
        assert_eq!(g.total_score(), Some(7));
    }

    #[test]
    fn test_total_score_none_before_first_frame_resolves() {
        let mut g = game();
        assert_eq!(g.total_score(), None);
        g.submit_roll(10).unwrap();
        assert_eq!(g.total_score(), None);
    }

    #[test]
    fn test_cumulative_scores_prefix_defined() {
        let mut g = game();
        roll_all(&mut g, &[3, 4, 10, 2, 3]);
        let scores = g.cumulative_scores();
        assert_eq!(scores[0], Some(7));
        assert_eq!(scores[1], Some(22));
        assert_eq!(scores[2], Some(27));
        assert!(scores[3..].iter().all(Option::is_none));
    }

    #[test]
    fn test_max_pins_second_roll() {
        let mut g = game();
        g.submit_roll(7).unwrap();
        assert_eq!(g.max_pins_for_current_roll(), 3);
    }

    #[test]
    fn test_max_pins_zero_when_complete() {
        let mut g = game();
        roll_all(&mut g, &[0; 20]);
        assert_eq!(g.max_pins_for_current_roll(), 0);
    }

    #[test]
    fn test_frame_completion_queries() {
        let mut g = game();
        roll_all(&mut g, &[10, 3, 4]);
        assert!(g.is_frame_complete(0));
        assert!(g.is_frame_complete(1));
        assert!(!g.is_frame_complete(2));
    }

    #[test]
    fn test_game_serialization_round_trip() {
        let mut g = game();
        roll_all(&mut g, &[10, 5, 5, 3]);
        let json = serde_json::to_string(&g).unwrap();
        let deserialized: PlayerGame = serde_json::from_str(&json).unwrap();
        assert_eq!(g, deserialized);
    }
}
