//! Tests for the JSON webhook.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tictactoe_bot::webhook::{EventResponse, router};
use tictactoe_bot::{Gateway, Prompt};
use tictactoe_engine::{RandomOpponent, SessionStore};
use tower::ServiceExt;

fn app() -> axum::Router {
    let gateway = Gateway::new(SessionStore::new(), Arc::new(RandomOpponent::seeded(5)));
    router(Arc::new(gateway))
}

fn event(user_id: &str, command: &str) -> Request<Body> {
    let body = serde_json::json!({ "user_id": user_id, "command": command });
    Request::post("/events")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health() {
    let response = app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_start_then_move() {
    let app = app();

    let response = app.clone().oneshot(event("alice", "start")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let start: EventResponse = serde_json::from_value(body_json(response).await).unwrap();
    let render = start.render.unwrap();
    assert_eq!(render.message, Prompt::YourTurn);
    assert_eq!(render.keyboard[1][2].callback_data, "12");

    let response = app.oneshot(event("alice", "11")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["render"]["board"][1][1], "X");
    assert_eq!(json["render"]["message"], "your_turn");
}

#[tokio::test]
async fn test_move_without_game_returns_null() {
    let response = app().oneshot(event("nobody", "00")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["render"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_bad_command_is_400() {
    let response = app().oneshot(event("alice", "42")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("42"));
}
