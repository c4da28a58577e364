//! Wire format of the session credential.
//!
//! ```text
//! credential := base64( {"data": <claim JSON text>, "sig": <hex HMAC-SHA256 of data>} )
//! ```
//!
//! The signature covers the exact `data` text. The claim is never
//! re-serialized before checking it.

use base64::{
    Engine,
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use thiserror::Error;

use crate::{SessionClaim, SessionSecret, VerifyError};

type HmacSha256 = Hmac<Sha256>;

/// Standard alphabet; padding optional on decode, always written on encode.
const CREDENTIAL_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decoded outer layer of a credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub data: String,
    pub sig: String,
}

#[derive(Debug, Error)]
pub enum SealError {
    #[error("session secret is not configured")]
    MisconfiguredSecret,

    #[error("failed to encode session credential: {0}")]
    Json(#[from] serde_json::Error),
}

impl Envelope {
    /// Decode the base64 and JSON layers without checking the signature.
    pub fn decode(credential: &str) -> Result<Self, VerifyError> {
        let raw = CREDENTIAL_BASE64
            .decode(credential.as_bytes())
            .map_err(|_| VerifyError::MalformedEncoding)?;
        serde_json::from_slice(&raw).map_err(|_| VerifyError::MalformedEnvelope)
    }

    /// Sign arbitrary `data` text.
    pub fn signed(data: impl Into<String>, secret: &SessionSecret) -> Result<Self, SealError> {
        let data = data.into();
        let sig = sign(secret, &data)?;
        Ok(Self { data, sig })
    }

    pub fn encode(&self) -> Result<String, SealError> {
        let json = serde_json::to_vec(self)?;
        Ok(CREDENTIAL_BASE64.encode(json))
    }

    /// Constant-time check of `sig` against the HMAC of `data`.
    ///
    /// An unconfigured secret never matches.
    pub fn signature_matches(&self, secret: &SessionSecret) -> bool {
        let Ok(expected) = sign(secret, &self.data) else {
            return false;
        };
        expected.as_bytes().ct_eq(self.sig.as_bytes()).into()
    }
}

/// Lowercase hex HMAC-SHA256 of `data` under `secret`.
pub fn sign(secret: &SessionSecret, data: &str) -> Result<String, SealError> {
    if !secret.is_configured() {
        return Err(SealError::MisconfiguredSecret);
    }
    let mut mac =
        HmacSha256::new_from_slice(secret.key()).map_err(|_| SealError::MisconfiguredSecret)?;
    mac.update(data.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Produce a credential for `claim`, as an issuer would.
pub fn seal(claim: &SessionClaim, secret: &SessionSecret) -> Result<String, SealError> {
    let data = serde_json::to_string(claim)?;
    Envelope::signed(data, secret)?.encode()
}
