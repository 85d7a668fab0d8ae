//! Per-player aggregate statistics.

use serde::{Deserialize, Serialize};

use super::record::FrameRecord;
use crate::scoring::PIN_COUNT;

/// Career aggregates over a player's stored games.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Games on record.
    pub total_games: u32,
    /// Best final score.
    pub high_score: u16,
    /// Mean final score, rounded to one decimal.
    pub average_score: f64,
    /// First-delivery strikes as a percentage of first deliveries, rounded
    /// to one decimal.
    pub strike_percentage: f64,
}

impl PlayerStats {
    /// Aggregate over `(final_score, frame rows)` pairs, one per game.
    ///
    /// All zeroes when the player has no games on record.
    pub fn from_games<'a>(games: impl IntoIterator<Item = (u16, &'a [FrameRecord])>) -> Self {
        let mut total_games = 0u32;
        let mut high_score = 0u16;
        let mut score_sum = 0u64;
        let mut strikes = 0u64;
        let mut first_rolls = 0u64;

        for (final_score, frames) in games {
            total_games += 1;
            high_score = high_score.max(final_score);
            score_sum += u64::from(final_score);

            for record in frames {
                first_rolls += 1;
                if record.roll1 == PIN_COUNT {
                    strikes += 1;
                }
            }
        }

        if total_games == 0 {
            return Self::default();
        }

        let average_score = round1(score_sum as f64 / f64::from(total_games));
        let strike_percentage = if first_rolls > 0 {
            round1(strikes as f64 / first_rolls as f64 * 100.0)
        } else {
            0.0
        };

        Self {
            total_games,
            high_score,
            average_score,
            strike_percentage,
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
