//! Wall-clock instants as carried on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Milliseconds since the Unix epoch (the JavaScript `Date.now()` unit).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpochMillis(i64);

impl EpochMillis {
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self(at.timestamp_millis())
    }

    /// Milliseconds elapsed between this instant and `now`.
    ///
    /// Negative when the instant lies in the future. Saturates instead of
    /// overflowing for adversarial values.
    pub fn age_millis(self, now: DateTime<Utc>) -> i64 {
        now.timestamp_millis().saturating_sub(self.0)
    }
}

impl From<DateTime<Utc>> for EpochMillis {
    fn from(value: DateTime<Utc>) -> Self {
        Self::from_datetime(value)
    }
}
