//! Shared types for the matchup predictor.
//!
//! These types form the data model used across all modules: the season
//! row for a team, the closed set of metrics that can be read off it,
//! the rating mode a user picks, and the result of comparing two teams.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Team record
// ---------------------------------------------------------------------------

/// One row of the season table for a single team.
///
/// Column names follow the CSV header verbatim. Probability columns are
/// carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    #[serde(rename = "TEAM")]
    pub team: String,
    /// Win-loss record, e.g. "7-3"
    #[serde(rename = "RECORD")]
    pub record: String,
    #[serde(rename = "PF")]
    pub points_for: u32,
    #[serde(rename = "PA")]
    pub points_against: u32,

    #[serde(rename = "PSR_POINTS")]
    pub psr_points: f64,
    #[serde(rename = "PSR_QB")]
    pub psr_qb: f64,
    #[serde(rename = "OFF")]
    pub offense: f64,
    #[serde(rename = "DEF")]
    pub defense: f64,

    #[serde(rename = "PROJ_WINS")]
    pub proj_wins: f64,
    #[serde(rename = "PROJ_PLAYOFFS")]
    pub proj_playoffs: f64,
    #[serde(rename = "PROJ_DIV")]
    pub proj_div: f64,
    #[serde(rename = "PROJ_CONF")]
    pub proj_conf: f64,
    #[serde(rename = "PROJ_SB")]
    pub proj_sb: f64,

    #[serde(rename = "SOS_TO_DATE")]
    pub sos_to_date: f64,
    #[serde(rename = "SOS_REMAIN")]
    pub sos_remain: f64,

    // Positional sub-grades
    #[serde(rename = "OVER")]
    pub overall: f64,
    #[serde(rename = "PAS")]
    pub passing: f64,
    #[serde(rename = "PBLK")]
    pub pass_block: f64,
    #[serde(rename = "RECV")]
    pub receiving: f64,
    #[serde(rename = "RUN")]
    pub rushing: f64,
    #[serde(rename = "RBLK")]
    pub run_block: f64,
    #[serde(rename = "RDEF")]
    pub run_defense: f64,
    #[serde(rename = "TACK")]
    pub tackling: f64,
    #[serde(rename = "PRSH")]
    pub pass_rush: f64,
    #[serde(rename = "COV")]
    pub coverage: f64,
    #[serde(rename = "SPEC")]
    pub special_teams: f64,
}

impl TeamRecord {
    /// Read a numeric field by metric.
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::PsrPoints => self.psr_points,
            Metric::PsrQb => self.psr_qb,
            Metric::Off => self.offense,
            Metric::Def => self.defense,
            Metric::ProjWins => self.proj_wins,
            Metric::ProjPlayoffs => self.proj_playoffs,
            Metric::ProjDiv => self.proj_div,
            Metric::ProjConf => self.proj_conf,
            Metric::ProjSb => self.proj_sb,
            Metric::SosToDate => self.sos_to_date,
            Metric::SosRemain => self.sos_remain,
            Metric::Over => self.overall,
            Metric::Pas => self.passing,
            Metric::Pblk => self.pass_block,
            Metric::Recv => self.receiving,
            Metric::Run => self.rushing,
            Metric::Rblk => self.run_block,
            Metric::Rdef => self.run_defense,
            Metric::Tack => self.tackling,
            Metric::Prsh => self.pass_rush,
            Metric::Cov => self.coverage,
            Metric::Spec => self.special_teams,
        }
    }

    /// Helper to build a test/sample record with every grade set to 50.
    #[cfg(test)]
    pub fn sample(team: &str) -> Self {
        TeamRecord {
            team: team.to_string(),
            record: "5-5".to_string(),
            points_for: 220,
            points_against: 220,
            psr_points: 50.0,
            psr_qb: 50.0,
            offense: 50.0,
            defense: 50.0,
            proj_wins: 8.5,
            proj_playoffs: 0.5,
            proj_div: 0.25,
            proj_conf: 0.1,
            proj_sb: 0.05,
            sos_to_date: 0.5,
            sos_remain: 0.5,
            overall: 50.0,
            passing: 50.0,
            pass_block: 50.0,
            receiving: 50.0,
            rushing: 50.0,
            run_block: 50.0,
            run_defense: 50.0,
            tackling: 50.0,
            pass_rush: 50.0,
            coverage: 50.0,
            special_teams: 50.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Metric
// ---------------------------------------------------------------------------

/// Named numeric column of the season table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Metric {
    PsrPoints,
    PsrQb,
    Off,
    Def,
    ProjWins,
    ProjPlayoffs,
    ProjDiv,
    ProjConf,
    ProjSb,
    SosToDate,
    SosRemain,
    Over,
    Pas,
    Pblk,
    Recv,
    Run,
    Rblk,
    Rdef,
    Tack,
    Prsh,
    Cov,
    Spec,
}

impl Metric {
    /// Metrics offered in the dashboard's single-metric picker, in display order.
    pub const SELECTABLE: [Metric; 11] = [
        Metric::PsrPoints,
        Metric::PsrQb,
        Metric::Off,
        Metric::Def,
        Metric::ProjWins,
        Metric::ProjPlayoffs,
        Metric::ProjDiv,
        Metric::ProjConf,
        Metric::ProjSb,
        Metric::SosToDate,
        Metric::SosRemain,
    ];

    pub const ALL: [Metric; 22] = [
        Metric::PsrPoints,
        Metric::PsrQb,
        Metric::Off,
        Metric::Def,
        Metric::ProjWins,
        Metric::ProjPlayoffs,
        Metric::ProjDiv,
        Metric::ProjConf,
        Metric::ProjSb,
        Metric::SosToDate,
        Metric::SosRemain,
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
    ];

    /// CSV column name.
    pub fn column(&self) -> &'static str {
        match self {
            Metric::PsrPoints => "PSR_POINTS",
            Metric::PsrQb => "PSR_QB",
            Metric::Off => "OFF",
            Metric::Def => "DEF",
            Metric::ProjWins => "PROJ_WINS",
            Metric::ProjPlayoffs => "PROJ_PLAYOFFS",
            Metric::ProjDiv => "PROJ_DIV",
            Metric::ProjConf => "PROJ_CONF",
            Metric::ProjSb => "PROJ_SB",
            Metric::SosToDate => "SOS_TO_DATE",
            Metric::SosRemain => "SOS_REMAIN",
            Metric::Over => "OVER",
            Metric::Pas => "PAS",
            Metric::Pblk => "PBLK",
            Metric::Recv => "RECV",
            Metric::Run => "RUN",
            Metric::Rblk => "RBLK",
            Metric::Rdef => "RDEF",
            Metric::Tack => "TACK",
            Metric::Prsh => "PRSH",
            Metric::Cov => "COV",
            Metric::Spec => "SPEC",
        }
    }

    /// Human-readable label shown in pickers and chart axes.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::PsrPoints => "PSR Points (overall power)",
            Metric::PsrQb => "PSR QB (QB impact)",
            Metric::Off => "Offense grade",
            Metric::Def => "Defense grade",
            Metric::ProjWins => "Projected Wins",
            Metric::ProjPlayoffs => "Playoff Probability",
            Metric::ProjDiv => "Division Title Probability",
            Metric::ProjConf => "Conference Title Probability",
            Metric::ProjSb => "Super Bowl Probability",
            Metric::SosToDate => "Strength of Schedule To Date",
            Metric::SosRemain => "Strength of Schedule Remaining",
            Metric::Over => "Overall grade",
            Metric::Pas => "Passing grade",
            Metric::Pblk => "Pass blocking grade",
            Metric::Recv => "Receiving grade",
            Metric::Run => "Rushing grade",
            Metric::Rblk => "Run blocking grade",
            Metric::Rdef => "Run defense grade",
            Metric::Tack => "Tackling grade",
            Metric::Prsh => "Pass rush grade",
            Metric::Cov => "Coverage grade",
            Metric::Spec => "Special teams grade",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

/// Resolve a column name (case-insensitive) to a metric.
impl std::str::FromStr for Metric {
    type Err = MatchupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Metric::ALL
            .iter()
            .copied()
            .find(|m| m.column().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MatchupError::FieldNotFound(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Rating mode
// ---------------------------------------------------------------------------

/// How a team record is turned into one comparable number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RatingMode {
    /// Read one metric directly.
    Single { metric: Metric },
    /// `offense_weight * OFF + defense_weight * DEF`
    Blend {
        offense_weight: f64,
        defense_weight: f64,
    },
}

impl RatingMode {
    /// Label used for the rating column, chart axis and prediction text.
    pub fn label(&self) -> String {
        match self {
            RatingMode::Single { metric } => metric.label().to_string(),
            RatingMode::Blend {
                offense_weight,
                defense_weight,
            } => format!("Blend: {offense_weight:.1} × OFF + {defense_weight:.1} × DEF"),
        }
    }
}

impl fmt::Display for RatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The two kinds of rating mode, without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeKind {
    Single,
    Blend,
}

impl std::str::FromStr for ModeKind {
    type Err = MatchupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" | "single metric" => Ok(ModeKind::Single),
            "blend" | "offense + defense blend" => Ok(ModeKind::Blend),
            _ => Err(MatchupError::UnknownMode(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Rating result
// ---------------------------------------------------------------------------

/// Outcome of comparing two teams under one rating mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingResult {
    pub team_a: String,
    pub rating_a: f64,
    pub team_b: String,
    pub rating_b: f64,
    pub winner: String,
    pub loser: String,
    /// Absolute rating difference (always >= 0)
    pub edge: f64,
}

impl RatingResult {
    pub fn winner_rating(&self) -> f64 {
        if self.winner == self.team_a {
            self.rating_a
        } else {
            self.rating_b
        }
    }

    pub fn loser_rating(&self) -> f64 {
        if self.winner == self.team_a {
            self.rating_b
        } else {
            self.rating_a
        }
    }
}

impl fmt::Display for RatingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.2}) over {} ({:.2}), edge {:.2}",
            self.winner,
            self.winner_rating(),
            self.loser,
            self.loser_rating(),
            self.edge,
        )
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types for the matchup predictor.
#[derive(Debug, thiserror::Error)]
pub enum MatchupError {
    #[error("Field not found: {0}")]
    FieldNotFound(String),

    #[error("Please pick two different teams (both were {0})")]
    IdenticalTeamsSelected(String),

    #[error("Team not found: {0}")]
    TeamNotFound(String),

    #[error("Unknown rating mode: {0}")]
    UnknownMode(String),

    #[error("{name} weight {value} is outside [{min}, {max}]")]
    WeightOutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
