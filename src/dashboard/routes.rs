//! Dashboard API route handlers.
//!
//! All endpoints return JSON. State is shared via `Arc<DashboardState>`
//! and never mutated after startup.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::config::RatingConfig;
use crate::data::dataset::Dataset;
use crate::engine::matchup::{self, MatchupReport, ModeSelection};
use crate::types::{MatchupError, Metric, ModeKind, TeamRecord};

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

/// Shared state accessible by all route handlers.
pub struct DashboardState {
    pub dataset: Arc<Dataset>,
    pub rating: RatingConfig,
}

impl DashboardState {
    pub fn new(dataset: Arc<Dataset>, rating: RatingConfig) -> Self {
        Self { dataset, rating }
    }
}

pub type AppState = Arc<DashboardState>;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error body: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Wrapper that maps domain errors to HTTP responses.
#[derive(Debug)]
pub struct ApiError(pub MatchupError);

impl From<MatchupError> for ApiError {
    fn from(e: MatchupError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            MatchupError::TeamNotFound(_) => StatusCode::NOT_FOUND,
            MatchupError::FieldNotFound(_)
            | MatchupError::IdenticalTeamsSelected(_)
            | MatchupError::UnknownMode(_)
            | MatchupError::WeightOutOfRange { .. } => StatusCode::BAD_REQUEST,
            MatchupError::Dataset(_) | MatchupError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let error = match &self.0 {
            MatchupError::IdenticalTeamsSelected(_) => "Please pick two different teams.".to_string(),
            other => other.to_string(),
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub dataset: String,
    pub teams: usize,
    pub loaded_at: String,
    pub uptime_secs: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricOption {
    pub column: Metric,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeightRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub offense_default: f64,
    pub defense_default: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsResponse {
    pub metrics: Vec<MetricOption>,
    pub default_mode: ModeKind,
    pub default_metric: Metric,
    pub weights: WeightRange,
}

/// Query string for `/api/predict`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictQuery {
    pub team1: String,
    pub team2: String,
    pub mode: Option<String>,
    pub metric: Option<String>,
    pub offense_weight: Option<f64>,
    pub defense_weight: Option<f64>,
}

impl PredictQuery {
    fn selection(&self) -> ModeSelection {
        ModeSelection {
            mode: self.mode.clone(),
            metric: self.metric.clone(),
            offense_weight: self.offense_weight,
            defense_weight: self.defense_weight,
        }
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// GET /api/status
pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let loaded_at = state.dataset.loaded_at();
    Json(StatusResponse {
        status: "OK".to_string(),
        dataset: state.dataset.source().to_string(),
        teams: state.dataset.len(),
        loaded_at: loaded_at.to_rfc3339(),
        uptime_secs: (chrono::Utc::now() - loaded_at).num_seconds(),
    })
}

/// GET /api/teams
pub async fn get_teams(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.dataset.teams().map(str::to_string).collect())
}

/// GET /api/teams/:team
pub async fn get_team(
    State(state): State<AppState>,
    Path(team): Path<String>,
) -> Result<Json<TeamRecord>, ApiError> {
    let record = state.dataset.require(&team)?;
    Ok(Json(record.clone()))
}

/// GET /api/metrics
///
/// Defaults are reported in canonical form so the page can match them
/// against option values.
pub async fn get_metrics(
    State(state): State<AppState>,
) -> Result<Json<MetricsResponse>, ApiError> {
    let cfg = &state.rating;
    Ok(Json(MetricsResponse {
        metrics: Metric::SELECTABLE
            .iter()
            .map(|&m| MetricOption {
                column: m,
                label: m.label(),
            })
            .collect(),
        default_mode: cfg.default_mode.parse()?,
        default_metric: cfg.default_metric()?,
        weights: WeightRange {
            min: cfg.weight_min,
            max: cfg.weight_max,
            step: cfg.weight_step,
            offense_default: cfg.offense_weight,
            defense_default: cfg.defense_weight,
        },
    }))
}

/// GET /api/predict
pub async fn get_predict(
    State(state): State<AppState>,
    Query(query): Query<PredictQuery>,
) -> Result<Json<MatchupReport>, ApiError> {
    debug!(team1 = %query.team1, team2 = %query.team2, mode = ?query.mode, "Predict request");
    let mode = query.selection().resolve(&state.rating)?;
    let report = matchup::build_report(&state.dataset, &query.team1, &query.team2, &mode)?;
    Ok(Json(report))
}

/// GET /health
pub async fn health() -> StatusCode {
    StatusCode::OK
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
