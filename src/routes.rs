//! HTTP surface: the contact endpoint, CORS, health.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{Method, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

use crate::contact::pipeline::ContactPipeline;
use crate::error::ContactError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ContactPipeline>,
}

/// Build the Axum router for the contact API.
pub fn contact_routes(pipeline: Arc<ContactPipeline>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .route("/api/contact", post(submit_contact).options(contact_preflight))
        .layer(cors)
        .with_state(AppState { pipeline })
}

// ── Health ──────────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "novaxis-contact"
    }))
}

// ── Contact ─────────────────────────────────────────────────────────

/// Non-preflight OPTIONS requests land here; preflights are answered by the
/// CORS layer. Either way the caller gets a 200.
async fn contact_preflight() -> StatusCode {
    StatusCode::OK
}

async fn submit_contact(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            // Mirrors the site's historical behavior: unreadable bodies are a
            // generic server error, never a detailed one.
            error!(error = %rejection, "Unreadable contact request body");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Error interno del servidor"})),
            );
        }
    };

    match state.pipeline.submit(&body).await {
        Ok(receipt) => (
            StatusCode::OK,
            Json(json!({
                "message": "Email enviado exitosamente",
                "data": { "id": receipt.notification.id },
            })),
        ),
        Err(ContactError::Validation(details)) => {
            let first = details
                .first()
                .map_or("Los datos enviados no son válidos", |e| e.message);
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Datos inválidos",
                    "details": details,
                    "message": first,
                })),
            )
        }
        Err(ContactError::Delivery(e)) => {
            error!(error = %e, "Contact notification delivery failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Error al enviar el email",
                    "details": e.to_string(),
                })),
            )
        }
    }
}
