//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They
//! are distinct from search and file loading errors.

use super::PortName;

/// Domain-level errors for itinerary construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A leg does not start where the previous leg ended
    #[error("leg departs {departing} but the previous leg arrived at {arrived}")]
    LegsNotConnected {
        arrived: PortName,
        departing: PortName,
    },

    /// A leg starts and ends at the same port
    #[error("leg from {0} returns to the same port")]
    CircularLeg(PortName),
}
