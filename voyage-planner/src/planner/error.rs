//! Planning error types.

use crate::domain::{DomainError, PortId, PortName};
use crate::store::StoreFull;

/// Errors returned when planning an itinerary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// A port name was not found in the network
    #[error("unknown port: {0}")]
    InvalidPort(String),

    /// The travel date could not be parsed
    #[error("invalid travel date: {0}")]
    InvalidDate(String),

    /// Source and destination are the same port
    #[error("source and destination are the same port")]
    DegenerateRequest,

    /// The avoided port is the source or destination
    #[error("cannot avoid {0}: it is the source or destination")]
    PreferenceConflict(PortName),

    /// No itinerary satisfies the request
    #[error("no route found from {from} to {to} ({filtered} voyages filtered by preferences)")]
    NoRouteFound {
        from: PortName,
        to: PortName,
        filtered: usize,
    },

    /// The itinerary store has no free slot
    #[error(transparent)]
    StoreFull(#[from] StoreFull),

    /// A found route could not be assembled into an itinerary
    #[error("could not assemble itinerary: {0}")]
    Itinerary(#[from] DomainError),

    /// A predecessor names a voyage its port does not have
    #[error("route to port {port} refers to missing voyage {voyage}")]
    BrokenChain { port: PortId, voyage: usize },
}
