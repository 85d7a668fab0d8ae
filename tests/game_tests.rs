//! Frame engine scenario tests.
//!
//! Whole-game sequences through `PlayerGame`: the classic scorecards
//! (perfect game, all gutters, Dutch 200), bonus look-ahead across frames,
//! tenth-frame shapes, and failure atomicity.

use tenpin::{PlayerGame, PlayerId, RollError};

fn game() -> PlayerGame {
    PlayerGame::new(PlayerId::new(1), "Ada")
}

fn roll_all(g: &mut PlayerGame, rolls: &[u8]) {
    for &pins in rolls {
        g.submit_roll(pins).unwrap();
    }
}

/// Twenty gutter balls: every frame scores zero.
#[test]
fn test_all_gutters_scores_zero() {
    let mut g = game();
    roll_all(&mut g, &[0; 20]);

    assert!(g.is_complete());
    assert_eq!(g.total_score(), Some(0));
    assert_eq!(g.cumulative_scores(), [Some(0); 10]);
}

/// Twelve strikes: 300, with exactly three rolls in the tenth frame and
/// every outcome flagged as a strike.
#[test]
fn test_perfect_game() {
    let mut g = game();

    for _ in 0..12 {
        let outcome = g.submit_roll(10).unwrap();
        assert!(outcome.is_strike);
    }

    assert!(g.is_complete());
    assert_eq!(g.total_score(), Some(300));
    assert_eq!(g.frames()[9].rolls(), &[10, 10, 10]);
    let cumulative = g.cumulative_scores();
    assert_eq!(cumulative[0], Some(30));
    assert_eq!(cumulative[9], Some(300));
}

/// Alternating strikes and spares ("Dutch 200").
#[test]
fn test_dutch_200() {
    let mut g = game();
    for _ in 0..5 {
        roll_all(&mut g, &[10, 9, 1]);
    }
    // Tenth frame was the spare; its fill ball is a strike.
    g.submit_roll(10).unwrap();

    assert!(g.is_complete());
    assert_eq!(g.total_score(), Some(200));
}

/// Every frame an identical spare, classic 150 card: [5,5] x 10 plus a
/// final 5.
#[test]
fn test_all_fives() {
    let mut g = game();
    roll_all(&mut g, &[5; 21]);

    assert!(g.is_complete());
    assert_eq!(g.total_score(), Some(150));
}

/// A spare's bonus is exactly the next roll.
#[test]
fn test_spare_bonus_applies_once() {
    let mut g = game();
    roll_all(&mut g, &[5, 5, 3, 4]);

    assert_eq!(g.frame_score(0), Some(13));
    assert_eq!(g.frame_score(1), Some(7));
    assert_eq!(g.cumulative_scores()[1], Some(20));
}

/// A strike's bonus is the next two rolls even when they span frames.
#[test]
fn test_strike_bonus_spans_frames() {
    let mut g = game();
    roll_all(&mut g, &[10, 4, 6, 10]);

    // 10 + 4 + 6 = 20 for the strike, the spare waits on its own bonus.
    assert_eq!(g.frame_score(0), Some(20));
    assert_eq!(g.frame_score(1), None);
}

/// A double's first strike sees through the second to the next first roll.
#[test]
fn test_double_looks_two_frames_ahead() {
    let mut g = game();
    roll_all(&mut g, &[10, 10, 7, 2]);

    assert_eq!(g.frame_score(0), Some(27));
    assert_eq!(g.frame_score(1), Some(19));
    assert_eq!(g.frame_score(2), Some(9));
    assert_eq!(g.total_score(), Some(55));
}

/// Tenth-frame double strike then a partial fill ball.
#[test]
fn test_tenth_frame_double_strike() {
    let mut g = game();
    roll_all(&mut g, &[0; 18]);
    roll_all(&mut g, &[10, 10, 4]);

    assert!(g.is_complete());
    assert_eq!(g.total_score(), Some(24));
}

/// Out-of-range and over-capacity rolls are rejected without touching any
/// frame, and the game continues normally afterwards.
#[test]
fn test_failed_rolls_leave_state_untouched() {
    let mut g = game();
    roll_all(&mut g, &[10, 7]);
    let before = g.clone();

    assert_eq!(g.submit_roll(11), Err(RollError::PinsOutOfRange(11)));
    assert_eq!(g, before);

    assert_eq!(
        g.submit_roll(4),
        Err(RollError::ExceedsPinsStanding { pins: 4, standing: 3 })
    );
    assert_eq!(g, before);

    g.submit_roll(3).unwrap();
    // The strike can now see both bonus rolls.
    assert_eq!(g.frame_score(0), Some(20));
}

/// A completed game rejects everything, including zero.
#[test]
fn test_complete_game_rejects_all_rolls() {
    let mut g = game();
    roll_all(&mut g, &[0; 20]);
    for pins in [0, 5, 10] {
        assert_eq!(g.submit_roll(pins), Err(RollError::GameComplete));
    }
}

/// Frame and roll positions track play, 1-based.
#[test]
fn test_positions_track_play() {
    let mut g = game();
    assert_eq!(g.current_frame_number(), 1);
    assert_eq!(g.current_roll_number(), 1);

    g.submit_roll(4).unwrap();
    assert_eq!(g.current_roll_number(), 2);

    g.submit_roll(4).unwrap();
    assert_eq!(g.current_frame_number(), 2);
    assert_eq!(g.current_roll_number(), 1);

    roll_all(&mut g, &[0; 16]);
    g.submit_roll(10).unwrap();
    assert_eq!(g.current_frame_number(), 10);
    assert_eq!(g.current_roll_number(), 2);
}

/// The provisional scoreboard never goes backwards as rolls land, and
/// matches the exact score once the game is over.
#[test]
fn test_provisional_total_converges() {
    let mut g = game();
    let rolls = [10, 9, 1, 5, 3, 10, 10, 2, 6, 0, 0, 8, 2, 10, 10, 9, 1];
    let mut last = 0;

    for &pins in &rolls {
        g.submit_roll(pins).unwrap();
        let provisional = g.provisional_total();
        assert!(provisional >= last);
        last = provisional;
    }

    assert!(g.is_complete());
    assert_eq!(g.total_score(), Some(g.provisional_total()));
}
