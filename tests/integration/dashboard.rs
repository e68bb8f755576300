//! HTTP round trips through the dashboard router.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use tower::ServiceExt;

use matchup::config::AppConfig;
use matchup::dashboard::{build_router, DashboardState};

use super::fixture_dataset;

async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
    let cfg = AppConfig::default();
    let state = Arc::new(DashboardState::new(Arc::new(fixture_dataset()), cfg.rating));
    let resp = build_router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), 100_000).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_teams_listed_from_fixture() {
    let (status, json) = get("/api/teams").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!(["KC", "PHI", "DAL", "BAL"]));
}

#[tokio::test]
async fn test_predict_with_default_mode() {
    let (status, json) = get("/api/predict?team1=KC&team2=BAL").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["prediction"]["winner"], "KC");
    assert_eq!(json["metric_label"], "PSR Points (overall power)");
    let edge = json["prediction"]["edge"].as_f64().unwrap();
    assert!((edge - 6.3).abs() < 1e-9);
    assert_eq!(json["advanced"][0]["values"][0][0], "OVER");
}

#[tokio::test]
async fn test_predict_blend_tie() {
    let (status, json) =
        get("/api/predict?team1=PHI&team2=DAL&mode=blend&offense_weight=1&defense_weight=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["prediction"]["winner"], "DAL");
    assert_eq!(json["prediction"]["loser"], "PHI");
}

#[tokio::test]
async fn test_predict_errors() {
    let (status, _) = get("/api/predict?team1=KC&team2=KC").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get("/api/predict?team1=KC&team2=NYG").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, json) = get("/api/predict?team1=KC&team2=PHI&mode=elo").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Unknown rating mode: elo");
}
