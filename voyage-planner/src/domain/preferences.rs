//! Traveller preferences that restrict which voyages a search may use.

use chrono::Duration;

use super::{Operator, PortName, Voyage};

/// Optional filters applied to every voyage considered by a search.
///
/// An unset field places no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    /// Only voyages run by this operator are allowed.
    pub operator: Option<Operator>,

    /// Voyages into this port are not allowed.
    pub avoid: Option<PortName>,

    /// Voyages with a fare above this are not allowed.
    pub max_cost: Option<u32>,

    /// Candidate routes whose elapsed time exceeds this are discarded.
    pub max_time: Option<Duration>,
}

impl Preferences {
    /// Preferences with no filters set.
    pub fn none() -> Self {
        Self::default()
    }

    /// Require a specific operator.
    pub fn with_operator(mut self, operator: Operator) -> Self {
        self.operator = Some(operator);
        self
    }

    /// Avoid calling at a port.
    pub fn with_avoid(mut self, port: PortName) -> Self {
        self.avoid = Some(port);
        self
    }

    /// Cap the fare of any single voyage.
    pub fn with_max_cost(mut self, max_cost: u32) -> Self {
        self.max_cost = Some(max_cost);
        self
    }

    /// Cap the elapsed time of the whole itinerary.
    pub fn with_max_time(mut self, max_time: Duration) -> Self {
        self.max_time = Some(max_time);
        self
    }

    /// Returns true if any filter is set.
    pub fn has_any(&self) -> bool {
        self.operator.is_some()
            || self.avoid.is_some()
            || self.max_cost.is_some()
            || self.max_time.is_some()
    }

    /// Returns true if `port` is the avoided port.
    pub fn avoids(&self, port: &PortName) -> bool {
        self.avoid.as_ref() == Some(port)
    }

    /// Check a single voyage against the per-voyage filters.
    ///
    /// `destination` is the name of the port the voyage sails to. The
    /// elapsed-time cap is not checked here because it depends on the
    /// route taken so far.
    pub fn admits(&self, voyage: &Voyage, destination: &PortName) -> bool {
        if let Some(operator) = &self.operator
            && &voyage.operator != operator
        {
            return false;
        }

        if self.avoids(destination) {
            return false;
        }

        if let Some(max_cost) = self.max_cost
            && voyage.cost > max_cost
        {
            return false;
        }

        true
    }

    /// Returns true if an elapsed time is within the time cap.
    pub fn within_time(&self, elapsed: Duration) -> bool {
        self.max_time.is_none_or(|max| elapsed <= max)
    }
}
