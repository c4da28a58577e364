//! Route Authorization Gate.
//!
//! Turns a verifier verdict into either an [`AuthorizationContext`] for the
//! rendering layer or a redirect. One evaluation per request; nothing carries
//! over between requests.
//!
//! ```text
//! Unchecked --(cookie missing/invalid/expired)--> RedirectingToLogin
//! Unchecked --(valid, insufficient role)--------> RedirectingToDashboard
//! Unchecked --(valid, sufficient role)----------> Proceeding
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    AuthorizationContext, CookieJar, CredentialVerifier, SESSION_COOKIE_NAME, SessionClaim,
    VerifyError,
};

/// Access policy of a route.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RouteClass {
    /// Any signed-in identity.
    Authenticated,
    /// Signed in and `isAdmin`.
    Admin,
}

impl RouteClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteClass::Authenticated => "authenticated",
            RouteClass::Admin => "admin",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RedirectTarget {
    Login,
    Dashboard,
}

impl RedirectTarget {
    pub const fn path(self) -> &'static str {
        match self {
            RedirectTarget::Login => "/login",
            RedirectTarget::Dashboard => "/dashboard",
        }
    }
}

/// Server-side reason behind a redirect. Never sent to the client.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Denial {
    Unauthenticated(VerifyError),
    InsufficientRole,
}

impl Denial {
    pub fn as_str(&self) -> &'static str {
        match self {
            Denial::Unauthenticated(err) => err.as_str(),
            Denial::InsufficientRole => "insufficient_role",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Redirect {
    target: RedirectTarget,
    denial: Denial,
}

impl Redirect {
    pub fn target(&self) -> RedirectTarget {
        self.target
    }

    pub fn path(&self) -> &'static str {
        self.target.path()
    }

    pub fn denial(&self) -> Denial {
        self.denial
    }
}

/// Outcome of a gate evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Proceed(AuthorizationContext),
    Redirect(Redirect),
}

/// Per-request gate state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Unchecked,
    Proceeding,
    RedirectingToLogin,
    RedirectingToDashboard,
}

impl GateState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GateState::Unchecked)
    }
}

impl GateDecision {
    /// Terminal state reached by this decision.
    pub fn state(&self) -> GateState {
        match self {
            GateDecision::Proceed(_) => GateState::Proceeding,
            GateDecision::Redirect(r) => match r.target {
                RedirectTarget::Login => GateState::RedirectingToLogin,
                RedirectTarget::Dashboard => GateState::RedirectingToDashboard,
            },
        }
    }

    pub fn context(&self) -> Option<&AuthorizationContext> {
        match self {
            GateDecision::Proceed(ctx) => Some(ctx),
            GateDecision::Redirect(_) => None,
        }
    }

    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            GateDecision::Proceed(_) => None,
            GateDecision::Redirect(r) => Some(r.path()),
        }
    }
}

/// Apply a route policy to a verifier verdict.
///
/// - No IO
/// - No panics
/// - Every verifier failure maps to `/login`
pub fn admit(class: RouteClass, verdict: Result<SessionClaim, VerifyError>) -> GateDecision {
    let claim = match verdict {
        Ok(claim) => claim,
        Err(err) => {
            return GateDecision::Redirect(Redirect {
                target: RedirectTarget::Login,
                denial: Denial::Unauthenticated(err),
            });
        }
    };

    if class == RouteClass::Admin && !claim.is_admin {
        return GateDecision::Redirect(Redirect {
            target: RedirectTarget::Dashboard,
            denial: Denial::InsufficientRole,
        });
    }

    GateDecision::Proceed(AuthorizationContext::from(claim))
}

/// A route policy bound to a verifier and the session cookie name.
#[derive(Clone)]
pub struct Gate {
    verifier: Arc<dyn CredentialVerifier>,
    class: RouteClass,
    cookie_name: Cow<'static, str>,
}

impl Gate {
    pub fn new(verifier: Arc<dyn CredentialVerifier>, class: RouteClass) -> Self {
        Self {
            verifier,
            class,
            cookie_name: Cow::Borrowed(SESSION_COOKIE_NAME),
        }
    }

    pub fn authenticated(verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self::new(verifier, RouteClass::Authenticated)
    }

    pub fn admin(verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self::new(verifier, RouteClass::Admin)
    }

    pub fn with_cookie_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.cookie_name = name.into();
        self
    }

    pub fn class(&self) -> RouteClass {
        self.class
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Evaluate the gate for one request's cookies.
    pub fn evaluate(&self, cookies: &CookieJar, now: DateTime<Utc>) -> GateDecision {
        let verdict = match cookies.get(&self.cookie_name) {
            Some(credential) if !credential.is_empty() => self.verifier.verify(credential, now),
            _ => Err(VerifyError::NoCredential),
        };
        admit(self.class, verdict)
    }
}

impl core::fmt::Debug for Gate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Gate")
            .field("class", &self.class)
            .field("cookie_name", &self.cookie_name)
            .finish_non_exhaustive()
    }
}
