//! End-to-end API integration tests
//!
//! These tests verify the complete HTTP flows over an in-memory store:
//! team CRUD, the current-team pointer, and the lineup default promotion.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use lineupboard_api::api::handlers::{health_check, lineups, teams};
use lineupboard_api::storage::StorageService;
use serde_json::{json, Value};
use tower::util::ServiceExt; // for oneshot

/// Setup test application with routes
fn setup_app() -> Router {
    use axum::routing::{delete, get, post, put};

    let service = Arc::new(StorageService::in_memory());

    Router::new()
        .route("/health", get(health_check))
        .route("/api/teams", post(teams::create_team))
        .route("/api/teams", get(teams::get_teams))
        .route("/api/teams/current", get(teams::get_current_team))
        .route("/api/teams/current", put(teams::set_current_team))
        .route("/api/teams/:id", get(teams::get_team))
        .route("/api/teams/:id", put(teams::update_team))
        .route("/api/teams/:id", delete(teams::delete_team))
        .route("/api/teams/:team_id/lineups", get(lineups::get_lineups))
        .route("/api/teams/:team_id/lineups", post(lineups::create_lineup))
        .route(
            "/api/teams/:team_id/lineups/:lineup_id/default",
            put(lineups::set_default_lineup),
        )
        .route("/api/lineups/:id", put(lineups::update_lineup))
        .route("/api/lineups/:id", delete(lineups::delete_lineup))
        .with_state(service)
}

fn json_request(method: &str, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(payload).unwrap()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn create_team(app: &Router, name: &str) -> String {
    let payload = json!({
        "name": name,
        "age_group": "U12",
        "season": "2026 Spring"
    });

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/teams", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    response_json(response).await["id"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_create_and_fetch_team() {
    let app = setup_app();
    let team_id = create_team(&app, "API Test Team").await;

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/teams/{}", team_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let team = response_json(response).await;
    assert_eq!(team["id"], team_id);
    assert_eq!(team["name"], "API Test Team");
    assert_eq!(team["age_group"], "U12");
}

#[tokio::test]
async fn test_create_team_with_empty_name_is_bad_request() {
    let app = setup_app();

    let payload = json!({
        "name": "",
        "age_group": "U12",
        "season": "2026 Spring"
    });

    let response = app
        .oneshot(json_request("POST", "/api/teams", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("cannot be empty"));
}

#[tokio::test]
async fn test_get_missing_team_is_not_found() {
    let app = setup_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/teams/{}", uuid::Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_current_team_flow() {
    let app = setup_app();
    let team_id = create_team(&app, "Selected Team").await;

    // Initially unset
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/teams/current")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response_json(response).await["team_id"], Value::Null);

    // Select the team
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/teams/current",
            &json!({ "team_id": team_id }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/teams/current")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response_json(response).await["team_id"], team_id);

    // Selecting a nonexistent team fails and leaves the pointer alone
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/teams/current",
            &json!({ "team_id": uuid::Uuid::new_v4() }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Deleting the team clears the pointer
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/teams/{}", team_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/teams/current")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response_json(response).await["team_id"], Value::Null);
}

#[tokio::test]
async fn test_lineup_default_promotion_flow() {
    let app = setup_app();
    let team_id = create_team(&app, "Lineup Team").await;

    // Create two lineups
    let mut lineup_ids = Vec::new();
    for name in ["First XI", "Second XI"] {
        let payload = json!({
            "name": name,
            "positions": [
                { "slot": "GK", "playerId": "player-1" },
                { "slot": "ST", "playerId": "player-2" }
            ]
        });

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/api/teams/{}/lineups", team_id),
                &payload,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let lineup = response_json(response).await;
        assert_eq!(lineup["is_default"], false);
        lineup_ids.push(lineup["id"].as_str().unwrap().to_string());
    }

    // Promote the first, then the second
    for lineup_id in &lineup_ids {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!(
                        "/api/teams/{}/lineups/{}/default",
                        team_id, lineup_id
                    ))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    // Exactly the second lineup is default now
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/teams/{}/lineups", team_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let lineups = response_json(response).await;
    let lineups = lineups.as_array().unwrap();
    assert_eq!(lineups.len(), 2);
    assert_eq!(lineups[0]["id"], lineup_ids[0].as_str());
    assert_eq!(lineups[0]["is_default"], false);
    assert_eq!(lineups[1]["id"], lineup_ids[1].as_str());
    assert_eq!(lineups[1]["is_default"], true);
}

#[tokio::test]
async fn test_create_lineup_under_missing_team_is_bad_request() {
    let app = setup_app();

    let payload = json!({
        "name": "Nowhere XI",
        "positions": []
    });

    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/api/teams/{}/lineups", uuid::Uuid::new_v4()),
            &payload,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("unknown team"));
}

#[tokio::test]
async fn test_update_lineup_keeps_default_flag() {
    let app = setup_app();
    let team_id = create_team(&app, "Editing Team").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/teams/{}/lineups", team_id),
            &json!({ "name": "Editable", "positions": [] }),
        ))
        .await
        .unwrap();
    let lineup_id = response_json(response).await["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!(
                    "/api/teams/{}/lineups/{}/default",
                    team_id, lineup_id
                ))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/lineups/{}", lineup_id),
            &json!({
                "name": "Edited",
                "positions": [{ "slot": "GK", "playerId": "player-9" }]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let lineup = response_json(response).await;
    assert_eq!(lineup["name"], "Edited");
    assert_eq!(lineup["is_default"], true);
}
