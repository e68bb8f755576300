//! Matchup report assembly.
//!
//! Everything the dashboard shows for one comparison: the team snapshot,
//! the rating table, the prediction and the advanced breakdown. This is
//! where the shell-level guards live (distinct teams, weight range), so
//! `rating::predict` is only ever reached with valid input.

use serde::Serialize;
use tracing::{info, warn};

use crate::config::RatingConfig;
use crate::data::dataset::Dataset;
use crate::engine::rating;
use crate::types::{MatchupError, Metric, ModeKind, RatingMode, RatingResult, TeamRecord};

// ---------------------------------------------------------------------------
// Mode selection
// ---------------------------------------------------------------------------

/// Raw rating-mode choices as they arrive from the UI. Unset fields fall
/// back to the configured defaults.
#[derive(Debug, Clone, Default)]
pub struct ModeSelection {
    pub mode: Option<String>,
    pub metric: Option<String>,
    pub offense_weight: Option<f64>,
    pub defense_weight: Option<f64>,
}

impl ModeSelection {
    /// Resolve into a concrete rating mode, checking names and slider bounds.
    pub fn resolve(&self, cfg: &RatingConfig) -> Result<RatingMode, MatchupError> {
        let kind: ModeKind = match &self.mode {
            Some(m) => m.parse()?,
            None => cfg.default_mode.parse()?,
        };

        match kind {
            ModeKind::Single => {
                let metric: Metric = self
                    .metric
                    .as_deref()
                    .unwrap_or(cfg.default_metric.as_str())
                    .parse()?;
                Ok(RatingMode::Single { metric })
            }
            ModeKind::Blend => {
                let offense_weight = self.offense_weight.unwrap_or(cfg.offense_weight);
                let defense_weight = self.defense_weight.unwrap_or(cfg.defense_weight);
                cfg.check_weight("offense", offense_weight)?;
                cfg.check_weight("defense", defense_weight)?;
                Ok(RatingMode::Blend {
                    offense_weight,
                    defense_weight,
                })
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Report rows
// ---------------------------------------------------------------------------

/// Headline row shown above the rating comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSnapshot {
    #[serde(rename = "TEAM")]
    pub team: String,
    #[serde(rename = "RECORD")]
    pub record: String,
    #[serde(rename = "PF")]
    pub points_for: u32,
    #[serde(rename = "PA")]
    pub points_against: u32,
    #[serde(rename = "OFF")]
    pub offense: f64,
    #[serde(rename = "DEF")]
    pub defense: f64,
    #[serde(rename = "PROJ_WINS")]
    pub proj_wins: f64,
}

impl From<&TeamRecord> for TeamSnapshot {
    fn from(r: &TeamRecord) -> Self {
        Self {
            team: r.team.clone(),
            record: r.record.clone(),
            points_for: r.points_for,
            points_against: r.points_against,
            offense: r.offense,
            defense: r.defense,
            proj_wins: r.proj_wins,
        }
    }
}

/// Columns in the collapsible "advanced comparison" table, in display order.
pub const ADVANCED_METRICS: [Metric; 17] = [
    Metric::Over,
    Metric::Pas,
    Metric::Pblk,
    Metric::Recv,
    Metric::Run,
    Metric::Rblk,
    Metric::Rdef,
    Metric::Tack,
    Metric::Prsh,
    Metric::Cov,
    Metric::Spec,
    Metric::SosToDate,
    Metric::SosRemain,
    Metric::ProjPlayoffs,
    Metric::ProjDiv,
    Metric::ProjConf,
    Metric::ProjSb,
];

/// One team's row of the advanced table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvancedRow {
    pub team: String,
    /// `(column, value)` pairs in `ADVANCED_METRICS` order.
    pub values: Vec<(Metric, f64)>,
}

impl From<&TeamRecord> for AdvancedRow {
    fn from(r: &TeamRecord) -> Self {
        Self {
            team: r.team.clone(),
            values: ADVANCED_METRICS.iter().map(|&m| (m, r.value(m))).collect(),
        }
    }
}

/// A team and its computed rating, for the comparison table and chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamRating {
    pub team: String,
    pub rating: f64,
}

/// Everything displayed for one comparison.
#[derive(Debug, Clone, Serialize)]
pub struct MatchupReport {
    pub mode: RatingMode,
    pub metric_label: String,
    pub snapshot: [TeamSnapshot; 2],
    pub comparison: [TeamRating; 2],
    pub prediction: RatingResult,
    pub summary: String,
    pub advanced: [AdvancedRow; 2],
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Compare two teams from the dataset and assemble the full report.
///
/// Selecting the same team twice stops here with `IdenticalTeamsSelected`;
/// no rating is computed.
pub fn build_report(
    dataset: &Dataset,
    team1: &str,
    team2: &str,
    mode: &RatingMode,
) -> Result<MatchupReport, MatchupError> {
    if team1 == team2 {
        warn!(team = team1, "Same team selected twice");
        return Err(MatchupError::IdenticalTeamsSelected(team1.to_string()));
    }

    let a = dataset.require(team1)?;
    let b = dataset.require(team2)?;

    let prediction = rating::predict(a, b, mode);
    let metric_label = mode.label();
    let summary = prediction_text(&prediction, &metric_label);

    info!(
        team1,
        team2,
        mode = %metric_label,
        winner = %prediction.winner,
        edge = %format!("{:.2}", prediction.edge),
        "Matchup predicted"
    );

    Ok(MatchupReport {
        mode: *mode,
        snapshot: [a.into(), b.into()],
        comparison: [
            TeamRating {
                team: prediction.team_a.clone(),
                rating: prediction.rating_a,
            },
            TeamRating {
                team: prediction.team_b.clone(),
                rating: prediction.rating_b,
            },
        ],
        advanced: [a.into(), b.into()],
        metric_label,
        prediction,
        summary,
    })
}

/// Natural-language prediction shown under the chart.
pub fn prediction_text(result: &RatingResult, metric_label: &str) -> String {
    format!(
        "Predicted winner: {}\n\nEdge over {}: {:.2} {} points",
        result.winner, result.loser, result.edge, metric_label
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
