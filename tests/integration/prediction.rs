//! End-to-end rating and prediction over the fixture table.

use matchup::config::RatingConfig;
use matchup::engine::matchup::{build_report, ModeSelection};
use matchup::engine::rating::{compute_rating, predict};
use matchup::types::{MatchupError, Metric, RatingMode};

use super::fixture_dataset;

#[test]
fn test_fixture_loads_in_file_order_without_duplicates() {
    let ds = fixture_dataset();
    let teams: Vec<&str> = ds.teams().collect();
    assert_eq!(teams, vec!["KC", "PHI", "DAL", "BAL"]);
    // The trailing duplicate KC row is ignored.
    assert_eq!(ds.get("KC").unwrap().record, "8-2");
}

#[test]
fn test_single_metric_prediction() {
    let ds = fixture_dataset();
    let kc = ds.get("KC").unwrap();
    let bal = ds.get("BAL").unwrap();

    let result = predict(kc, bal, &RatingMode::Single { metric: Metric::PsrPoints });
    assert_eq!(result.winner, "KC");
    assert_eq!(result.loser, "BAL");
    assert!((result.edge - 6.3).abs() < 1e-9);
}

#[test]
fn test_blend_tie_goes_to_second_team_in_both_orders() {
    let ds = fixture_dataset();
    let phi = ds.get("PHI").unwrap();
    let dal = ds.get("DAL").unwrap();
    let mode = RatingMode::Blend { offense_weight: 1.0, defense_weight: 1.0 };

    assert_eq!(compute_rating(phi, &mode), 160.0);
    assert_eq!(compute_rating(dal, &mode), 160.0);
    assert_eq!(predict(phi, dal, &mode).winner, "DAL");
    assert_eq!(predict(dal, phi, &mode).winner, "PHI");
}

#[test]
fn test_blend_weights_shift_the_winner() {
    let ds = fixture_dataset();
    let phi = ds.get("PHI").unwrap();
    let dal = ds.get("DAL").unwrap();

    let offense_heavy = RatingMode::Blend { offense_weight: 2.0, defense_weight: 0.0 };
    assert_eq!(predict(dal, phi, &offense_heavy).winner, "PHI");

    let defense_heavy = RatingMode::Blend { offense_weight: 0.0, defense_weight: 2.0 };
    assert_eq!(predict(phi, dal, &defense_heavy).winner, "DAL");
}

#[test]
fn test_report_from_ui_selection() {
    let ds = fixture_dataset();
    let cfg = RatingConfig::default();
    let sel = ModeSelection {
        mode: Some("single".into()),
        metric: Some("PROJ_SB".into()),
        ..Default::default()
    };
    let mode = sel.resolve(&cfg).unwrap();
    let report = build_report(&ds, "DAL", "KC", &mode).unwrap();

    assert_eq!(report.metric_label, "Super Bowl Probability");
    assert_eq!(report.prediction.winner, "KC");
    assert_eq!(report.snapshot[0].record, "5-5");
    assert_eq!(report.advanced[1].team, "KC");
    assert!(report.summary.starts_with("Predicted winner: KC"));
}

#[test]
fn test_same_team_produces_no_report() {
    let ds = fixture_dataset();
    let mode = RatingMode::Single { metric: Metric::Off };
    let err = build_report(&ds, "PHI", "PHI", &mode).unwrap_err();
    assert!(matches!(err, MatchupError::IdenticalTeamsSelected(_)));
}
