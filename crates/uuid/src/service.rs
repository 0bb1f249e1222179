//! Implementation of [`CaseId`].

use chrono::{DateTime, Timelike, Utc};
use std::fmt;

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// Identifier of a single triage case.
///
/// Format: `YYYYMMDDTHHMMSS.mmmZ-<canonical_uuid>`
///
/// The timestamp is truncated to whole milliseconds at generation time so that the rendered
/// form carries the full creation instant. Two identifiers compare by timestamp first and
/// UUID second.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CaseId {
    timestamp: DateTime<Utc>,
    uuid: Uuid,
}

impl CaseId {
    /// Allocates a fresh identifier stamped with the current time.
    pub fn generate() -> Self {
        Self::at(Utc::now())
    }

    /// Allocates a fresh identifier stamped with `timestamp` (truncated to milliseconds).
    pub fn at(timestamp: DateTime<Utc>) -> Self {
        let millis = timestamp.nanosecond() / 1_000_000 * 1_000_000;
        let timestamp = timestamp.with_nanosecond(millis).unwrap_or(timestamp);
        Self {
            timestamp,
            uuid: Uuid::new_v4(),
        }
    }

    /// Creation instant encoded in the identifier.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.timestamp.format("%Y%m%dT%H%M%S%.3fZ"),
            self.uuid.simple()
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CaseId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
