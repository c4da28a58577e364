//! `triangle-auth`: pure session authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it verifies a
//! signed session credential and turns the verdict into a per-route decision.
//! Nothing here performs I/O or holds mutable state.

pub mod claims;
pub mod cookies;
pub mod credential;
pub mod gate;
pub mod secret;
pub mod verify;

pub use claims::{AuthorizationContext, SessionClaim};
pub use cookies::{CookieJar, SESSION_COOKIE_NAME};
pub use credential::{Envelope, SealError, seal, sign};
pub use gate::{Denial, Gate, GateDecision, GateState, Redirect, RedirectTarget, RouteClass, admit};
pub use secret::SessionSecret;
pub use verify::{CredentialVerifier, HmacSessionVerifier, SESSION_TTL_MILLIS, VerifyError, verify};
