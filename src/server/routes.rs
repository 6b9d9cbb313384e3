//! Axum route handlers for the collatz-lab HTTP server.
//!
//! # Routes
//!
//! - `GET /health`  — Returns `{"status": "ok", "version": ...}`
//! - `GET /collatz` — `?number=<positive integer>`, returns the number and
//!   its full Collatz trajectory

use axum::{
    extract::Query,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use tower_http::cors::CorsLayer;

use crate::core::sequence::sequence;
use crate::domain::model::CollatzResponse;
use crate::utils::error::CollatzError;

/// Build the axum router with all routes. Non-GET methods on a matched route
/// get a 405 from the router itself.
pub fn app_router() -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/collatz", get(collatz_handler))
        .layer(CorsLayer::permissive())
}

#[derive(Debug, Deserialize)]
struct CollatzParams {
    // Kept as a raw string so the handler owns the 400 for non-numeric input
    // instead of axum's generic query rejection.
    number: Option<String>,
}

/// GET /health — liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "collatz-lab",
    }))
}

/// GET /collatz?number=<n> — compute the trajectory for one starting value.
///
/// Responds 400 for a missing, non-numeric, or non-positive `number`, and for
/// inputs whose trajectory leaves the u64 range. Each request is an
/// independent pure computation; no state is shared between requests.
async fn collatz_handler(
    Query(params): Query<CollatzParams>,
) -> Result<Json<CollatzResponse>, (StatusCode, Json<Value>)> {
    let raw = params
        .number
        .ok_or_else(|| bad_request("Missing 'number' parameter"))?;

    let number: u64 = raw
        .parse()
        .map_err(|_| bad_request(format!("'{}' is not a positive integer", raw)))?;

    let sequence = sequence(number).map_err(|e| match e {
        CollatzError::InvalidInput { .. } | CollatzError::Overflow { .. } => {
            bad_request(e.to_string())
        }
        other => {
            tracing::error!("sequence computation failed: {}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": other.to_string()})),
            )
        }
    })?;

    Ok(Json(CollatzResponse { number, sequence }))
}

fn bad_request(message: impl Into<String>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({"error": message.into()})),
    )
}
