//! Port identity types.

use std::fmt;

/// Error returned when parsing an invalid port name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid port name: {reason}")]
pub struct InvalidPortName {
    reason: &'static str,
}

/// Longest port name accepted, in characters.
const MAX_PORT_NAME_LEN: usize = 30;

/// A port's unique name.
///
/// Names are single tokens: schedule files separate fields with
/// whitespace, so a name can never contain any. Comparison is exact and
/// case-sensitive.
///
/// # Examples
///
/// ```
/// use voyage_planner::domain::PortName;
///
/// let sg = PortName::parse("Singapore").unwrap();
/// assert_eq!(sg.as_str(), "Singapore");
///
/// assert!(PortName::parse("").is_err());
/// assert!(PortName::parse("Port Said").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortName(String);

impl PortName {
    /// Parse a port name.
    ///
    /// The input must be non-empty, at most 30 characters, and free of
    /// whitespace and control characters.
    pub fn parse(s: &str) -> Result<Self, InvalidPortName> {
        if s.is_empty() {
            return Err(InvalidPortName {
                reason: "must not be empty",
            });
        }

        if s.chars().count() > MAX_PORT_NAME_LEN {
            return Err(InvalidPortName {
                reason: "must be at most 30 characters",
            });
        }

        if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(InvalidPortName {
                reason: "must not contain whitespace",
            });
        }

        Ok(PortName(s.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PortName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PortName({})", self.0)
    }
}

impl fmt::Display for PortName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Dense index of a port within a [`Network`](crate::network::Network).
///
/// Ids are assigned in load order starting at zero, so they double as
/// indices into per-port search state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortId(pub usize);

impl PortId {
    /// Returns the id as a vector index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for PortId {
    fn from(value: usize) -> Self {
        PortId(value)
    }
}

/// A port: a named node with a daily docking charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Port {
    /// Unique port name.
    pub name: PortName,
    /// Charge per day for an extended stay at this port.
    pub daily_charge: u32,
}

impl Port {
    /// Create a new port.
    pub fn new(name: PortName, daily_charge: u32) -> Self {
        Self { name, daily_charge }
    }
}
