//! A single scoring frame.
//!
//! A frame holds the pin counts of its deliveries in order: one or two for
//! frames 1-9 (one only on a strike), up to three in the tenth frame when a
//! strike or spare earns the fill ball. `Frame` itself is position-agnostic;
//! completion rules that depend on being the tenth frame take that as a
//! parameter.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Frames per game.
pub const FRAMES_PER_GAME: usize = 10;

/// Pins on a full rack.
pub const PIN_COUNT: u8 = 10;

/// An ordered sequence of up to three rolls.
///
/// Rolls are immutable once recorded; the engine only ever appends.
/// SmallVec keeps the 0-3 rolls inline without heap allocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    rolls: SmallVec<[u8; 3]>,
}

impl Frame {
    /// Record a delivery. Validation happens in the engine before this.
    pub(crate) fn push(&mut self, pins: u8) {
        debug_assert!(self.rolls.len() < 3);
        self.rolls.push(pins);
    }

    /// The recorded rolls, in delivery order.
    #[must_use]
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    /// Number of rolls recorded so far.
    #[must_use]
    pub fn roll_count(&self) -> usize {
        self.rolls.len()
    }

    /// Check whether no roll has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// A recorded roll by 0-based position within the frame.
    #[must_use]
    pub fn roll(&self, index: usize) -> Option<u8> {
        self.rolls.get(index).copied()
    }

    /// Sum of all recorded rolls.
    #[must_use]
    pub fn pin_total(&self) -> u16 {
        self.rolls.iter().map(|&r| u16::from(r)).sum()
    }

    /// All ten pins on the first delivery.
    #[must_use]
    pub fn is_strike(&self) -> bool {
        self.rolls.first() == Some(&PIN_COUNT)
    }

    /// Ten pins across the first two deliveries, first not a strike.
    #[must_use]
    pub fn is_spare(&self) -> bool {
        !self.is_strike()
            && self.rolls.len() >= 2
            && self.rolls[0] + self.rolls[1] == PIN_COUNT
    }

    /// Check whether a tenth-frame fill ball has been earned: a strike on
    /// the first delivery or a spare across the first two.
    #[must_use]
    pub fn earns_fill_ball(&self) -> bool {
        self.is_strike() || self.is_spare()
    }

    /// Check whether the frame accepts no further rolls.
    ///
    /// Frames 1-9 close on a strike or a second roll. The tenth frame
    /// closes after three rolls, or after two when neither a strike nor a
    /// spare earned the fill ball.
    #[must_use]
    pub fn is_complete(&self, is_tenth: bool) -> bool {
        if is_tenth {
            if self.rolls.len() < 2 {
                return false;
            }
            if self.earns_fill_ball() {
                return self.rolls.len() == 3;
            }
            return self.rolls.len() == 2;
        }
        !self.rolls.is_empty() && (self.is_strike() || self.rolls.len() == 2)
    }
}
