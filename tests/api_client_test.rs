//! Tests for the HTTP clue service client against a local stand-in server.

use std::collections::HashMap;
use std::net::SocketAddr;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use strictly_jeopardy::{
    BoardShape, CategoryApi, CategoryRepository, GameSession, JeopardyApiClient, SessionStatus,
};

/// Serves ids `1..=count` (at most 8).
async fn list_categories(Query(params): Query<HashMap<String, String>>) -> Json<serde_json::Value> {
    let count: u64 = params
        .get("count")
        .and_then(|c| c.parse().ok())
        .unwrap_or(0);
    let categories: Vec<_> = (1..=count.min(8))
        .map(|id| json!({ "id": id, "title": format!("category {id}"), "clues_count": 5 }))
        .collect();
    Json(json!(categories))
}

/// Id 3 is a server error, id 4 is malformed, everything else has 4 clues.
async fn get_category(Query(params): Query<HashMap<String, String>>) -> Response {
    let id: u64 = params.get("id").and_then(|c| c.parse().ok()).unwrap_or(0);
    match id {
        3 => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        4 => "this is not json".into_response(),
        _ => Json(json!({
            "id": id,
            "title": format!("category {id}"),
            "clues_count": 4,
            "clues": (0..4).map(|j| json!({
                "id": id * 100 + j,
                "question": format!("question {id}-{j}"),
                "answer": format!("answer {id}-{j}"),
                "value": 200,
                "category_id": id
            })).collect::<Vec<_>>()
        }))
        .into_response(),
    }
}

async fn spawn_server() -> SocketAddr {
    let app = Router::new()
        .route("/api/categories", get(list_categories))
        .route("/api/category", get(get_category));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });
    addr
}

#[tokio::test]
async fn test_list_categories_sends_count() {
    let addr = spawn_server().await;
    let client = JeopardyApiClient::new(&format!("http://{addr}/api/")).expect("valid url");

    let categories = client.list_categories(5).await.expect("listing");

    let ids: Vec<u64> = categories.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(categories[0].title, "category 1");
}

#[tokio::test]
async fn test_base_url_without_trailing_slash() {
    let addr = spawn_server().await;
    let client = JeopardyApiClient::new(&format!("http://{addr}/api")).expect("valid url");

    assert!(client.base_url().as_str().ends_with("/api/"));
    assert_eq!(client.list_categories(100).await.expect("listing").len(), 8);
}

#[tokio::test]
async fn test_get_category_ignores_extra_fields() {
    let addr = spawn_server().await;
    let client = JeopardyApiClient::new(&format!("http://{addr}/api/")).expect("valid url");

    let category = client.get_category(7).await.expect("category");

    assert_eq!(category.title, "category 7");
    assert_eq!(category.clues.len(), 4);
    assert_eq!(category.clues[2].question, "question 7-2");
    assert_eq!(category.clues[2].answer, "answer 7-2");
}

#[tokio::test]
async fn test_error_status_is_fetch_error() {
    let addr = spawn_server().await;
    let client = JeopardyApiClient::new(&format!("http://{addr}/api/")).expect("valid url");

    let err = client.get_category(3).await.expect_err("server error");
    assert!(err.message.contains("500"), "unexpected message: {}", err.message);
}

#[tokio::test]
async fn test_malformed_body_is_fetch_error() {
    let addr = spawn_server().await;
    let client = JeopardyApiClient::new(&format!("http://{addr}/api/")).expect("valid url");

    assert!(client.get_category(4).await.is_err());
}

#[tokio::test]
async fn test_unreachable_service_is_fetch_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local addr");
    drop(listener);

    let client = JeopardyApiClient::new(&format!("http://{addr}/api/")).expect("valid url");
    assert!(client.list_categories(10).await.is_err());
}

#[test]
fn test_invalid_base_url_is_config_error() {
    assert!(JeopardyApiClient::new("not a url").is_err());
}

#[tokio::test]
async fn test_session_over_http_skips_broken_categories() {
    let addr = spawn_server().await;
    let client = JeopardyApiClient::new(&format!("http://{addr}/api")).expect("valid url");
    let shape = BoardShape::new(8, 3, 100);
    let session = GameSession::new(CategoryRepository::with_seed(client, shape, 8), ());

    session.start().await;

    assert_eq!(session.status(), SessionStatus::Ready);
    let board = session.board().expect("board should be ready");
    assert_eq!(board.len(), 6);
    assert_eq!(board.shortfall(), 2);
    assert!(board.categories().iter().all(|c| c.id() != 3 && c.id() != 4));
    assert!(board.categories().iter().all(|c| c.clues().len() == 3));
}
