mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use minisite_manager::api::handlers::{create_review_handler, list_reviews_handler};
use serde_json::json;

fn make_server() -> (TestServer, minisite_manager::state::AppState) {
    let (state, _store) = common::create_test_state();
    let app = Router::new()
        .route(
            "/api/minisites/{id}/reviews",
            get(list_reviews_handler).post(create_review_handler),
        )
        .with_state(state.clone());
    (TestServer::new(app).unwrap(), state)
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_review_success() {
    let (server, state) = make_server();

    let minisite = common::create_test_minisite(&state, 7, "acme", "main").await;

    let response = server
        .post(&format!("/api/minisites/{}/reviews", minisite.id))
        .json(&json!({
            "author_name": "Priya",
            "rating": 4.5,
            "body": "Quick turnaround, friendly staff."
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["author_name"], "Priya");
    assert_eq!(json["rating"], 4.5);
    assert_eq!(json["status"], "approved");
}

#[tokio::test]
async fn test_create_review_records_signed_in_submitter() {
    let (server, state) = make_server();

    let minisite = common::create_test_minisite(&state, 7, "acme", "main").await;

    // Signed-in submitters pass the user header; anonymous ones omit it.
    let response = server
        .post(&format!("/api/minisites/{}/reviews", minisite.id))
        .add_header("x-user-id", "9")
        .json(&json!({
            "author_name": "Sam",
            "rating": 5.0,
            "body": "Would visit again."
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_review_rejects_malformed_user_header() {
    let (server, state) = make_server();

    let minisite = common::create_test_minisite(&state, 7, "acme", "main").await;

    let response = server
        .post(&format!("/api/minisites/{}/reviews", minisite.id))
        .add_header("x-user-id", "abc")
        .json(&json!({
            "author_name": "Sam",
            "rating": 5.0,
            "body": "x"
        }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_review_rejects_rating_out_of_range() {
    let (server, state) = make_server();

    let minisite = common::create_test_minisite(&state, 7, "acme", "main").await;

    let response = server
        .post(&format!("/api/minisites/{}/reviews", minisite.id))
        .json(&json!({
            "author_name": "Priya",
            "rating": 5.5,
            "body": "Too good."
        }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_review_unknown_minisite_not_found() {
    let (server, _state) = make_server();

    let response = server
        .post("/api/minisites/ffffffffffffffffffffffff/reviews")
        .json(&json!({
            "author_name": "Priya",
            "rating": 4.0,
            "body": "x"
        }))
        .await;

    response.assert_status_not_found();
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_reviews_newest_first() {
    let (server, state) = make_server();

    let minisite = common::create_test_minisite(&state, 7, "acme", "main").await;

    for (author, rating) in [("Priya", 4.5), ("Sam", 3.0)] {
        server
            .post(&format!("/api/minisites/{}/reviews", minisite.id))
            .json(&json!({
                "author_name": author,
                "rating": rating,
                "body": "Review text"
            }))
            .await
            .assert_status(axum::http::StatusCode::CREATED);
    }

    let response = server
        .get(&format!("/api/minisites/{}/reviews", minisite.id))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["author_name"], "Sam");
    assert_eq!(items[1]["author_name"], "Priya");
}

#[tokio::test]
async fn test_list_reviews_respects_paging() {
    let (server, state) = make_server();

    let minisite = common::create_test_minisite(&state, 7, "acme", "main").await;

    for i in 1..=3 {
        server
            .post(&format!("/api/minisites/{}/reviews", minisite.id))
            .json(&json!({
                "author_name": format!("Author {i}"),
                "rating": 4.0,
                "body": "Review text"
            }))
            .await
            .assert_status(axum::http::StatusCode::CREATED);
    }

    let response = server
        .get(&format!("/api/minisites/{}/reviews", minisite.id))
        .add_query_param("limit", "2")
        .add_query_param("offset", "2")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_reviews_unknown_minisite_not_found() {
    let (server, _state) = make_server();

    server
        .get("/api/minisites/ffffffffffffffffffffffff/reviews")
        .await
        .assert_status_not_found();
}
