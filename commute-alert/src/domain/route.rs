//! Route identifier type.

use std::fmt;

/// Error returned when parsing an invalid route identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route id: {reason}")]
pub struct InvalidRouteId {
    reason: &'static str,
}

/// A validated GTFS route identifier.
///
/// Route identifiers in the feeds we consume are short alphanumeric codes
/// ("A", "6X", "GS"). This type guarantees the identifier is non-empty and
/// contains only ASCII alphanumerics, so equality against feed strings is
/// never confused by whitespace or case-folding surprises.
///
/// # Examples
///
/// ```
/// use commute_alert::domain::RouteId;
///
/// let a = RouteId::parse("A").unwrap();
/// assert_eq!(a.as_str(), "A");
///
/// assert!(RouteId::parse("").is_err());
/// assert!(RouteId::parse("A train").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RouteId(String);

impl RouteId {
    /// Parse a route identifier from a string.
    ///
    /// The input must be non-empty ASCII alphanumerics.
    pub fn parse(s: &str) -> Result<Self, InvalidRouteId> {
        if s.is_empty() {
            return Err(InvalidRouteId {
                reason: "must be non-empty",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(InvalidRouteId {
                reason: "must be ASCII alphanumeric",
            });
        }

        Ok(RouteId(s.to_string()))
    }

    /// Returns the route identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
