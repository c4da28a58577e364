//! HTTP application wiring (Axum router + gate wiring).
//!
//! - `routes/`: one file per surface (pages, session re-validation, system)
//! - the gate middleware lives in `crate::middleware`

use std::sync::Arc;

use axum::{Router, routing::get};

use triangle_auth::{CredentialVerifier, Gate, HmacSessionVerifier};

use crate::config::AppConfig;

pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &AppConfig) -> Router {
    let verifier: Arc<dyn CredentialVerifier> =
        Arc::new(HmacSessionVerifier::new(config.session_secret().clone()));

    build_router(verifier, config.cookie_name().to_string())
}

/// Router over an arbitrary verifier.
pub fn build_router(verifier: Arc<dyn CredentialVerifier>, cookie_name: String) -> Router {
    let authenticated = Gate::authenticated(verifier.clone()).with_cookie_name(cookie_name.clone());
    let admin = Gate::admin(verifier).with_cookie_name(cookie_name);

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::signed_in(authenticated.clone()))
        .merge(routes::admin_only(admin))
        .merge(routes::session::router(authenticated))
}
