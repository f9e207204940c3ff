//! Shipping operator tag.

use std::fmt;

/// Error returned when parsing an invalid operator tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid operator: {reason}")]
pub struct InvalidOperator {
    reason: &'static str,
}

/// The shipping company that runs a voyage (e.g. "MSC", "MaerskLine").
///
/// Like port names, operator tags are single whitespace-free tokens.
///
/// # Examples
///
/// ```
/// use voyage_planner::domain::Operator;
///
/// let msc = Operator::parse("MSC").unwrap();
/// assert_eq!(msc.as_str(), "MSC");
///
/// assert!(Operator::parse("").is_err());
/// assert!(Operator::parse("Hapag Lloyd").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Operator(String);

impl Operator {
    /// Parse an operator tag.
    pub fn parse(s: &str) -> Result<Self, InvalidOperator> {
        if s.is_empty() {
            return Err(InvalidOperator {
                reason: "must not be empty",
            });
        }

        if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(InvalidOperator {
                reason: "must not contain whitespace",
            });
        }

        Ok(Operator(s.to_string()))
    }

    /// Returns the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Operator({})", self.0)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
