use axum::{Router, middleware::from_fn_with_state, routing::get};

use triangle_auth::Gate;

use crate::middleware::session_gate;

pub mod pages;
pub mod session;
pub mod system;

/// Pages for any signed-in identity.
pub fn signed_in(gate: Gate) -> Router {
    Router::new()
        .route("/dashboard", get(pages::dashboard))
        .route_layer(from_fn_with_state(gate, session_gate))
}

/// Pages for admins only.
pub fn admin_only(gate: Gate) -> Router {
    Router::new()
        .route("/admin", get(pages::admin_dashboard))
        .route_layer(from_fn_with_state(gate, session_gate))
}
