//! Gated page endpoints.
//!
//! Rendering lives elsewhere; these hand the verified identity to it as JSON.

use axum::{Json, extract::Extension};
use serde::Serialize;
use tracing::debug;

use triangle_auth::AuthorizationContext;

use crate::context::SessionContext;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageProps {
    pub page: &'static str,
    pub display_name: String,
    pub session: AuthorizationContext,
}

impl PageProps {
    fn new(page: &'static str, ctx: &SessionContext) -> Self {
        debug!(page, route_class = ctx.admitted_by().as_str(), "serving gated page");
        Self {
            page,
            display_name: ctx.identity().display_name().to_string(),
            session: ctx.identity().clone(),
        }
    }
}

/// GET /dashboard
pub async fn dashboard(Extension(session): Extension<SessionContext>) -> Json<PageProps> {
    Json(PageProps::new("dashboard", &session))
}

/// GET /admin
pub async fn admin_dashboard(Extension(session): Extension<SessionContext>) -> Json<PageProps> {
    Json(PageProps::new("admin", &session))
}
