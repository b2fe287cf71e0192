mod common;

use axum::{
    Router,
    routing::{delete, get, post},
};
use axum_test::TestServer;
use minisite_manager::api::handlers::{
    create_minisite_handler, delete_minisite_handler, list_minisites_handler,
};
use serde_json::json;

fn make_server() -> (TestServer, minisite_manager::state::AppState) {
    let (state, _store) = common::create_test_state();
    let app = Router::new()
        .route("/api/minisites", get(list_minisites_handler))
        .route("/api/minisites", post(create_minisite_handler))
        .route("/api/minisites/{id}", delete(delete_minisite_handler))
        .with_state(state.clone());
    (TestServer::new(app).unwrap(), state)
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_returns_only_own_minisites() {
    let (server, state) = make_server();

    common::create_test_minisite(&state, 7, "acme", "main").await;
    common::create_test_minisite(&state, 7, "acme", "west").await;
    common::create_test_minisite(&state, 8, "other", "main").await;

    let response = server
        .get("/api/minisites")
        .add_header("x-user-id", "7")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total"], 2);
    assert_eq!(json["items"].as_array().unwrap().len(), 2);
    assert_eq!(json["limit"], 50);
    assert_eq!(json["offset"], 0);
}

#[tokio::test]
async fn test_list_respects_limit_and_offset() {
    let (server, state) = make_server();

    common::create_test_minisite(&state, 7, "acme", "east").await;
    common::create_test_minisite(&state, 7, "acme", "north").await;
    common::create_test_minisite(&state, 7, "acme", "south").await;

    let response = server
        .get("/api/minisites")
        .add_query_param("limit", "2")
        .add_query_param("offset", "2")
        .add_header("x-user-id", "7")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total"], 3);
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
    assert_eq!(json["limit"], 2);
    assert_eq!(json["offset"], 2);
}

#[tokio::test]
async fn test_list_without_user_header_fails() {
    let (server, _state) = make_server();

    let response = server.get("/api/minisites").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_list_rejects_limit_over_maximum() {
    let (server, _state) = make_server();

    let response = server
        .get("/api/minisites")
        .add_query_param("limit", "500")
        .add_header("x-user-id", "7")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_list_rejects_negative_offset() {
    let (server, _state) = make_server();

    let response = server
        .get("/api/minisites")
        .add_query_param("offset", "-1")
        .add_header("x-user-id", "7")
        .await;

    response.assert_status_bad_request();
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_minisite_success() {
    let (server, _state) = make_server();

    let response = server
        .post("/api/minisites")
        .add_header("x-user-id", "7")
        .json(&json!({
            "business_slug": "acme",
            "location_slug": "main",
            "title": "Acme Main Street",
            "site_json": { "headline": "Welcome" }
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["business_slug"], "acme");
    assert_eq!(json["location_slug"], "main");
    assert_eq!(json["status"], "draft");
    assert_eq!(json["route"], "/b/acme/main");
    assert_eq!(json["id"].as_str().unwrap().len(), 24);
}

#[tokio::test]
async fn test_create_minisite_duplicate_route_conflicts() {
    let (server, state) = make_server();

    common::create_test_minisite(&state, 7, "acme", "main").await;

    let response = server
        .post("/api/minisites")
        .add_header("x-user-id", "8")
        .json(&json!({
            "business_slug": "acme",
            "location_slug": "main",
            "title": "Taken",
            "site_json": {}
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_minisite_rejects_bad_slug() {
    let (server, _state) = make_server();

    let response = server
        .post("/api/minisites")
        .add_header("x-user-id", "7")
        .json(&json!({
            "business_slug": "Acme Inc",
            "location_slug": "main",
            "title": "Acme",
            "site_json": {}
        }))
        .await;

    response.assert_status_bad_request();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_minisite_success() {
    let (server, state) = make_server();

    let minisite = common::create_test_minisite(&state, 7, "acme", "main").await;

    let response = server
        .delete(&format!("/api/minisites/{}", minisite.id))
        .add_header("x-user-id", "7")
        .await;

    response.assert_status(axum::http::StatusCode::NO_CONTENT);

    // Gone from the owner's listing.
    let list = server
        .get("/api/minisites")
        .add_header("x-user-id", "7")
        .await;
    assert_eq!(list.json::<serde_json::Value>()["total"], 0);
}

#[tokio::test]
async fn test_delete_foreign_minisite_not_found() {
    let (server, state) = make_server();

    let minisite = common::create_test_minisite(&state, 7, "acme", "main").await;

    let response = server
        .delete(&format!("/api/minisites/{}", minisite.id))
        .add_header("x-user-id", "8")
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_unknown_minisite_not_found() {
    let (server, _state) = make_server();

    let response = server
        .delete("/api/minisites/ffffffffffffffffffffffff")
        .add_header("x-user-id", "7")
        .await;

    response.assert_status_not_found();
}
