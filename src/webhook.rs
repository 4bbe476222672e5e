//! JSON webhook transport.
//!
//! `POST /events` takes an [`InboundEvent`] and answers with the render
//! instruction the chat platform should display, or `null` when the event
//! was dropped.

use crate::gateway::{Gateway, GatewayError, InboundEvent, RenderInstruction};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

/// Body returned by `POST /events`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventResponse {
    /// What to show, if anything.
    pub render: Option<RenderInstruction>,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match self {
            GatewayError::InvalidCommand(_) => StatusCode::BAD_REQUEST,
            GatewayError::Game(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

/// Builds the webhook router.
pub fn router(gateway: Arc<Gateway>) -> Router {
    Router::new()
        .route("/events", post(handle_event))
        .route("/health", get(health))
        .with_state(gateway)
}

async fn handle_event(
    State(gateway): State<Arc<Gateway>>,
    Json(event): Json<InboundEvent>,
) -> Result<Json<EventResponse>, GatewayError> {
    let render = gateway.handle(&event)?;
    Ok(Json(EventResponse { render }))
}

async fn health() -> &'static str {
    "ok"
}

/// Serves the webhook until the listener fails.
#[instrument(skip(gateway))]
pub async fn serve(gateway: Arc<Gateway>, host: &str, port: u16) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!(addr = %listener.local_addr()?, "Webhook listening");
    axum::serve(listener, router(gateway)).await?;
    Ok(())
}
