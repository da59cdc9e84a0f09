//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from storage and search errors.

use super::{InvalidPrice, InvalidStation, Station, TimeError};

/// Domain-level errors for record validation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// A station name failed to parse
    #[error(transparent)]
    Station(#[from] InvalidStation),

    /// A price was negative or not a number
    #[error(transparent)]
    Price(#[from] InvalidPrice),

    /// A time failed to parse
    #[error(transparent)]
    Time(#[from] TimeError),

    /// Departure arrives before it leaves
    #[error("departure arrives before it departs")]
    ArrivesBeforeDeparture,

    /// Departure starts and ends at the same station
    #[error("departure from {0} must go to a different station")]
    SelfLoop(Station),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::ArrivesBeforeDeparture;
        assert_eq!(err.to_string(), "departure arrives before it departs");

        let err = DomainError::SelfLoop(Station::parse("A").unwrap());
        assert_eq!(err.to_string(), "departure from A must go to a different station");

        let err: DomainError = Station::parse("").unwrap_err().into();
        assert_eq!(err.to_string(), "invalid station: must not be empty");
    }
}
