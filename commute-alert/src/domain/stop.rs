//! Stop identifier type.

use std::fmt;

/// Error returned when parsing an invalid stop identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop id: {reason}")]
pub struct InvalidStopId {
    reason: &'static str,
}

/// A validated GTFS stop identifier, including any direction suffix.
///
/// Subway stop identifiers encode the platform direction as a trailing
/// letter (e.g. "A28S" is the southbound platform at 34th St–Penn Station),
/// so matching against the feed must be exact — "A28" and "A28S" are
/// different stops.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StopId(String);

impl StopId {
    /// Parse a stop identifier from a string.
    ///
    /// The input must be non-empty ASCII alphanumerics.
    pub fn parse(s: &str) -> Result<Self, InvalidStopId> {
        if s.is_empty() {
            return Err(InvalidStopId {
                reason: "must be non-empty",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(InvalidStopId {
                reason: "must be ASCII alphanumeric",
            });
        }

        Ok(StopId(s.to_string()))
    }

    /// Returns the stop identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Za-z0-9]{1,8}") {
            let stop = StopId::parse(&s).unwrap();
            prop_assert_eq!(stop.as_str(), s.as_str());
        }

        /// Any non-empty alphanumeric string parses
        #[test]
        fn alphanumeric_always_parses(s in "[A-Za-z0-9]{1,16}") {
            prop_assert!(StopId::parse(&s).is_ok());
        }
    }
}
