//! Session re-validation endpoint.
//!
//! Client-side checks are conveniences only; before anything privileged the
//! client asks here, and this answer (from the same gate as the pages) is the
//! one that counts.

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use serde::Serialize;

use triangle_auth::{AuthorizationContext, Gate, GateDecision};

use crate::middleware::{cookie_jar, log_denial};

pub const SESSION_PATH: &str = "/api/auth/me";

pub fn router(gate: Gate) -> Router {
    Router::new()
        .route(SESSION_PATH, get(current_session))
        .with_state(gate)
}

/// Body of every re-validation answer.
///
/// `user` is present only on success; a failure never says why.
#[derive(Debug, Serialize)]
pub struct SessionStatus {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AuthorizationContext>,
}

/// GET /api/auth/me
///
/// 200 `{"success": true, "user": {..}}` when the cookie verifies,
/// 401 `{"success": false}` otherwise.
pub async fn current_session(State(gate): State<Gate>, headers: HeaderMap) -> Response {
    let no_store = [(header::CACHE_CONTROL, "no-store")];

    match gate.evaluate(&cookie_jar(&headers), Utc::now()) {
        GateDecision::Proceed(identity) => {
            let body = SessionStatus {
                success: true,
                user: Some(identity),
            };
            (no_store, Json(body)).into_response()
        }
        GateDecision::Redirect(redirect) => {
            log_denial(gate.class(), &redirect, SESSION_PATH);
            let body = SessionStatus {
                success: false,
                user: None,
            };
            (StatusCode::UNAUTHORIZED, no_store, Json(body)).into_response()
        }
    }
}
