use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use tracing::{debug, debug_span, error};

use triangle_auth::{CookieJar, Denial, Gate, GateDecision, Redirect as GateRedirect, RouteClass};

use crate::context::SessionContext;

/// Session gate middleware (one evaluation per request).
///
/// Proceeds with a [`SessionContext`] in the request extensions, or answers
/// with a temporary redirect that does not say why.
pub async fn session_gate(
    State(gate): State<Gate>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let decision = {
        let _span = debug_span!("session_gate", route_class = gate.class().as_str()).entered();
        let decision = gate.evaluate(&cookie_jar(req.headers()), Utc::now());
        if let GateDecision::Redirect(redirect) = &decision {
            log_denial(gate.class(), redirect, req.uri().path());
        }
        decision
    };

    match decision {
        GateDecision::Proceed(identity) => {
            req.extensions_mut()
                .insert(SessionContext::new(identity, gate.class()));
            next.run(req).await
        }
        GateDecision::Redirect(redirect) => redirect_to(redirect.path()),
    }
}

/// Parse every `Cookie` header on the request into one jar.
pub fn cookie_jar(headers: &HeaderMap) -> CookieJar {
    CookieJar::from_header_bytes(
        headers
            .get_all(header::COOKIE)
            .iter()
            .map(|value| value.as_bytes()),
    )
}

/// Non-permanent redirect that browsers and proxies must not cache.
pub fn redirect_to(path: &'static str) -> Response {
    let mut response = Redirect::temporary(path).into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

pub(crate) fn log_denial(class: RouteClass, redirect: &GateRedirect, path: &str) {
    let denial = redirect.denial();
    match denial {
        Denial::Unauthenticated(err) if err.is_misconfiguration() => {
            error!(
                route_class = class.as_str(),
                path,
                "session secret is not configured; rejecting every session"
            );
        }
        _ => {
            debug!(
                route_class = class.as_str(),
                reason = denial.as_str(),
                path,
                target = ?redirect.target(),
                "session gate redirect"
            );
        }
    }
}
