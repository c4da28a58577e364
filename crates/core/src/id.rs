//! Identifiers carried inside session claims.

use serde::{Deserialize, Serialize};

/// Identifier of a signed-in user.
///
/// Issuers emit either a JSON string or a JSON integer. Both are accepted and
/// kept in their original shape so the value serializes back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Text(String),
    Number(i64),
}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            UserId::Text(s) => f.write_str(s),
            UserId::Number(n) => core::fmt::Display::fmt(n, f),
        }
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}
