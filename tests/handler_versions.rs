mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use minisite_manager::api::handlers::{
    create_draft_handler, list_versions_handler, publish_version_handler,
};
use serde_json::json;

fn make_server() -> (TestServer, minisite_manager::state::AppState) {
    let (state, _store) = common::create_test_state();
    let app = Router::new()
        .route(
            "/api/minisites/{id}/versions",
            get(list_versions_handler).post(create_draft_handler),
        )
        .route(
            "/api/minisites/{id}/versions/{version_id}/publish",
            post(publish_version_handler),
        )
        .with_state(state.clone());
    (TestServer::new(app).unwrap(), state)
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_versions_includes_initial_draft() {
    let (server, state) = make_server();

    let minisite = common::create_test_minisite(&state, 7, "acme", "main").await;

    let response = server
        .get(&format!("/api/minisites/{}/versions", minisite.id))
        .add_header("x-user-id", "7")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["version_number"], 1);
    assert_eq!(items[0]["status"], "draft");
}

#[tokio::test]
async fn test_list_versions_foreign_user_not_found() {
    let (server, state) = make_server();

    let minisite = common::create_test_minisite(&state, 7, "acme", "main").await;

    let response = server
        .get(&format!("/api/minisites/{}/versions", minisite.id))
        .add_header("x-user-id", "8")
        .await;

    response.assert_status_not_found();
}

// ─── DRAFT ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_draft_assigns_next_number() {
    let (server, state) = make_server();

    let minisite = common::create_test_minisite(&state, 7, "acme", "main").await;

    let response = server
        .post(&format!("/api/minisites/{}/versions", minisite.id))
        .add_header("x-user-id", "7")
        .json(&json!({
            "label": "second pass",
            "site_json": { "headline": "Updated" }
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["version_number"], 2);
    assert_eq!(json["status"], "draft");
    assert_eq!(json["label"], "second pass");
    assert_eq!(json["created_by"], 7);
}

#[tokio::test]
async fn test_create_draft_unknown_minisite_not_found() {
    let (server, _state) = make_server();

    let response = server
        .post("/api/minisites/ffffffffffffffffffffffff/versions")
        .add_header("x-user-id", "7")
        .json(&json!({ "site_json": {} }))
        .await;

    response.assert_status_not_found();
}

// ─── PUBLISH ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_publish_draft_success() {
    let (server, state) = make_server();

    let minisite = common::create_test_minisite(&state, 7, "acme", "main").await;
    let draft_id = state
        .version_service
        .list_versions(&minisite.id, 7, 50, 0)
        .await
        .unwrap()[0]
        .id;

    let response = server
        .post(&format!(
            "/api/minisites/{}/versions/{}/publish",
            minisite.id, draft_id
        ))
        .add_header("x-user-id", "7")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "published");
    assert!(json["published_at"].is_string());

    let refreshed = state
        .minisite_service
        .get_owned(&minisite.id, 7)
        .await
        .unwrap();
    assert_eq!(refreshed.current_version_id, Some(draft_id));
}

#[tokio::test]
async fn test_publish_archives_previous_version() {
    let (server, state) = make_server();

    let minisite = common::create_test_minisite(&state, 7, "acme", "main").await;
    common::publish_latest_version(&state, 7, &minisite.id).await;

    // Second draft, then publish it over the first.
    let draft = server
        .post(&format!("/api/minisites/{}/versions", minisite.id))
        .add_header("x-user-id", "7")
        .json(&json!({ "site_json": { "headline": "v2" } }))
        .await
        .json::<serde_json::Value>();

    let response = server
        .post(&format!(
            "/api/minisites/{}/versions/{}/publish",
            minisite.id, draft["id"]
        ))
        .add_header("x-user-id", "7")
        .await;

    response.assert_status_ok();

    let list = server
        .get(&format!("/api/minisites/{}/versions", minisite.id))
        .add_header("x-user-id", "7")
        .await
        .json::<serde_json::Value>();
    let items = list["items"].as_array().unwrap();

    // Newest first: version 2 published, version 1 archived.
    assert_eq!(items[0]["version_number"], 2);
    assert_eq!(items[0]["status"], "published");
    assert_eq!(items[1]["version_number"], 1);
    assert_eq!(items[1]["status"], "archived");
}

#[tokio::test]
async fn test_publish_published_version_conflicts() {
    let (server, state) = make_server();

    let minisite = common::create_test_minisite(&state, 7, "acme", "main").await;
    let published = common::publish_latest_version(&state, 7, &minisite.id).await;

    let response = server
        .post(&format!(
            "/api/minisites/{}/versions/{}/publish",
            minisite.id, published.id
        ))
        .add_header("x-user-id", "7")
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_publish_foreign_user_not_found() {
    let (server, state) = make_server();

    let minisite = common::create_test_minisite(&state, 7, "acme", "main").await;
    let draft_id = state
        .version_service
        .list_versions(&minisite.id, 7, 50, 0)
        .await
        .unwrap()[0]
        .id;

    let response = server
        .post(&format!(
            "/api/minisites/{}/versions/{}/publish",
            minisite.id, draft_id
        ))
        .add_header("x-user-id", "8")
        .await;

    response.assert_status_not_found();
}
