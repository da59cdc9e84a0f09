//! Timestamp handling.
//!
//! All times inside the crate are epoch milliseconds. Clients may send
//! either a millisecond count or an RFC 3339 string; conversion happens
//! once, at the boundary, and nothing past it sees anything but
//! [`Timestamp`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A point in time, in milliseconds since the Unix epoch.
///
/// # Examples
///
/// ```
/// use route_server::domain::Timestamp;
///
/// let t = Timestamp::parse_rfc3339("1970-01-01T00:00:01Z").unwrap();
/// assert_eq!(t.as_millis(), 1000);
/// assert!(Timestamp::from_millis(10) < Timestamp::from_millis(100));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// The Unix epoch.
    pub const EPOCH: Timestamp = Timestamp(0);

    /// Create a timestamp from epoch milliseconds.
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns the timestamp as epoch milliseconds.
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// Create a timestamp from a UTC datetime (sub-millisecond precision is dropped).
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt.timestamp_millis())
    }

    /// Parse an RFC 3339 string such as `2024-03-15T10:00:00Z`.
    pub fn parse_rfc3339(s: &str) -> Result<Self, TimeError> {
        let dt = DateTime::parse_from_rfc3339(s)
            .map_err(|_| TimeError::new("expected RFC 3339 datetime"))?;
        Ok(Self::from_datetime(dt.with_timezone(&Utc)))
    }

    /// Converts to a UTC datetime, if representable.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{}", dt.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)),
            None => write!(f, "{}ms", self.0),
        }
    }
}

/// A time as supplied by a client: epoch milliseconds or an RFC 3339 string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TimeInput {
    Millis(i64),
    Text(String),
}

impl TimeInput {
    /// Normalise to a [`Timestamp`].
    pub fn resolve(&self) -> Result<Timestamp, TimeError> {
        match self {
            TimeInput::Millis(ms) => Ok(Timestamp::from_millis(*ms)),
            TimeInput::Text(s) => Timestamp::parse_rfc3339(s),
        }
    }
}
