//! Token Verifier: credential string in, verified claim (or a typed failure) out.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::{Envelope, SessionClaim, SessionSecret};

/// Credentials older than this are rejected (7 days).
pub const SESSION_TTL_MILLIS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Why a credential was rejected.
///
/// Variants are ordered by the step that produces them. None of them is shown
/// to the requester.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum VerifyError {
    #[error("no session credential presented")]
    NoCredential,

    #[error("credential is not valid base64")]
    MalformedEncoding,

    #[error("credential envelope is not {{data, sig}} JSON")]
    MalformedEnvelope,

    #[error("session secret is not configured")]
    MisconfiguredSecret,

    #[error("credential signature does not match")]
    SignatureMismatch,

    #[error("session claim is malformed")]
    MalformedClaim,

    #[error("session has expired")]
    Expired,
}

impl VerifyError {
    /// Stable label for structured logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            VerifyError::NoCredential => "no_credential",
            VerifyError::MalformedEncoding => "malformed_encoding",
            VerifyError::MalformedEnvelope => "malformed_envelope",
            VerifyError::MisconfiguredSecret => "misconfigured_secret",
            VerifyError::SignatureMismatch => "signature_mismatch",
            VerifyError::MalformedClaim => "malformed_claim",
            VerifyError::Expired => "expired",
        }
    }

    /// A deployment fault rather than a bad request.
    pub fn is_misconfiguration(&self) -> bool {
        matches!(self, VerifyError::MisconfiguredSecret)
    }
}

/// Verify a session credential.
///
/// - No IO
/// - No panics, whatever the input
/// - Deterministic for a given `now`
pub fn verify(
    credential: &str,
    secret: &SessionSecret,
    now: DateTime<Utc>,
) -> Result<SessionClaim, VerifyError> {
    if credential.is_empty() {
        return Err(VerifyError::NoCredential);
    }

    let envelope = Envelope::decode(credential)?;

    // Checked after decoding so garbage input is reported as garbage even on a
    // misconfigured server.
    if !secret.is_configured() {
        return Err(VerifyError::MisconfiguredSecret);
    }

    if !envelope.signature_matches(secret) {
        return Err(VerifyError::SignatureMismatch);
    }

    let claim: SessionClaim =
        serde_json::from_str(&envelope.data).map_err(|_| VerifyError::MalformedClaim)?;

    if claim.timestamp.age_millis(now) >= SESSION_TTL_MILLIS {
        return Err(VerifyError::Expired);
    }

    Ok(claim)
}

/// Credential verification seam used by the HTTP layer.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, credential: &str, now: DateTime<Utc>) -> Result<SessionClaim, VerifyError>;
}

/// HMAC-SHA256 verifier bound to the process secret.
#[derive(Debug, Clone)]
pub struct HmacSessionVerifier {
    secret: SessionSecret,
}

impl HmacSessionVerifier {
    pub fn new(secret: SessionSecret) -> Self {
        Self { secret }
    }

    pub fn is_configured(&self) -> bool {
        self.secret.is_configured()
    }
}

impl CredentialVerifier for HmacSessionVerifier {
    fn verify(&self, credential: &str, now: DateTime<Utc>) -> Result<SessionClaim, VerifyError> {
        verify(credential, &self.secret, now)
    }
}
