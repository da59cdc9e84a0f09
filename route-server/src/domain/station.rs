//! Station identifier type.

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station: {reason}")]
pub struct InvalidStation {
    reason: &'static str,
}

/// An opaque station token.
///
/// Stations carry no structure beyond equality, hashing and ordering. The
/// name is reference counted so cloning a station (which the search does a
/// lot of, once per visited set) never copies the underlying string.
///
/// # Examples
///
/// ```
/// use route_server::domain::Station;
///
/// let a = Station::parse("A").unwrap();
/// assert_eq!(a.as_str(), "A");
///
/// // Empty names are rejected
/// assert!(Station::parse("").is_err());
///
/// // Surrounding whitespace is rejected rather than silently trimmed
/// assert!(Station::parse(" A").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Station(Arc<str>);

impl Station {
    /// Parse a station from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStation> {
        if s.trim().is_empty() {
            return Err(InvalidStation {
                reason: "must not be empty",
            });
        }

        if s.trim() != s {
            return Err(InvalidStation {
                reason: "must not have leading or trailing whitespace",
            });
        }

        Ok(Station(Arc::from(s)))
    }

    /// Returns the station name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.as_str())
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Station {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_station() {
        assert!(Station::parse("A").is_ok());
        assert!(Station::parse("King's Cross").is_ok());
        assert!(Station::parse("42").is_ok());
    }

    #[test]
    fn reject_empty() {
        assert!(Station::parse("").is_err());
        assert!(Station::parse("   ").is_err());
        assert!(Station::parse("\t\n").is_err());
    }

    #[test]
    fn reject_surrounding_whitespace() {
        assert!(Station::parse(" A").is_err());
        assert!(Station::parse("A ").is_err());
        assert!(Station::parse("A\n").is_err());
    }

    #[test]
    fn display_and_debug() {
        let station = Station::parse("B").unwrap();
        assert_eq!(format!("{}", station), "B");
        assert_eq!(format!("{:?}", station), "Station(B)");
    }

    #[test]
    fn clone_shares_name() {
        let a = Station::parse("Paddington").unwrap();
        let b = a.clone();
        assert_eq!(a, b);
        assert!(Arc::ptr_eq(&a.0, &b.0));
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Station::parse("A").unwrap());
        assert!(set.contains(&Station::parse("A").unwrap()));
        assert!(!set.contains(&Station::parse("B").unwrap()));
    }

    #[test]
    fn serializes_as_plain_string() {
        let station = Station::parse("C").unwrap();
        assert_eq!(serde_json::to_string(&station).unwrap(), "\"C\"");
    }
}
