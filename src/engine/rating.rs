//! Team rating and winner selection.
//!
//! Turns a team record into a single number under a rating mode and picks
//! the higher-rated team of a pair. Pure functions over in-memory values.

use tracing::debug;

use crate::types::{RatingMode, RatingResult, TeamRecord};

/// Compute the scalar rating of one team.
///
/// Blend weights are not range-checked here; any real weight yields the
/// plain linear combination.
pub fn compute_rating(record: &TeamRecord, mode: &RatingMode) -> f64 {
    match *mode {
        RatingMode::Single { metric } => record.value(metric),
        RatingMode::Blend {
            offense_weight,
            defense_weight,
        } => offense_weight * record.offense + defense_weight * record.defense,
    }
}

/// Compare two teams and pick a winner.
///
/// The caller must pass two different teams. A tie goes to `b`.
pub fn predict(a: &TeamRecord, b: &TeamRecord, mode: &RatingMode) -> RatingResult {
    debug_assert_ne!(a.team, b.team, "predict called with the same team twice");

    let rating_a = compute_rating(a, mode);
    let rating_b = compute_rating(b, mode);

    let (winner, loser) = if rating_a > rating_b { (a, b) } else { (b, a) };
    let edge = (rating_a - rating_b).abs();

    debug!(
        team_a = %a.team,
        team_b = %b.team,
        mode = %mode,
        rating_a,
        rating_b,
        winner = %winner.team,
        edge = %format!("{edge:.2}"),
        "Matchup rated"
    );

    RatingResult {
        team_a: a.team.clone(),
        rating_a,
        team_b: b.team.clone(),
        rating_b,
        winner: winner.team.clone(),
        loser: loser.team.clone(),
        edge,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
