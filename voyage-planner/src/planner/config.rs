//! Search configuration for the voyage planner.

use chrono::Duration;

/// Configuration parameters for itinerary search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Minimum time between arriving at a port and departing from it
    /// (minutes). Tighter connections are rejected.
    pub min_connection_mins: i64,

    /// Number of docking slots at every port.
    pub docking_slots: usize,

    /// How long a ship occupies a docking slot once docked (minutes).
    pub service_mins: i64,

    /// Ground time above which a docking surcharge applies (minutes).
    pub extended_layover_mins: i64,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        min_connection_mins: i64,
        docking_slots: usize,
        service_mins: i64,
        extended_layover_mins: i64,
    ) -> Self {
        Self {
            min_connection_mins,
            docking_slots,
            service_mins,
            extended_layover_mins,
        }
    }

    /// Returns the minimum connection time as a Duration.
    pub fn min_connection(&self) -> Duration {
        Duration::minutes(self.min_connection_mins)
    }

    /// Returns the docking service time as a Duration.
    pub fn service(&self) -> Duration {
        Duration::minutes(self.service_mins)
    }

    /// Returns the extended-layover threshold as a Duration.
    pub fn extended_layover(&self) -> Duration {
        Duration::minutes(self.extended_layover_mins)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_connection_mins: 60,
            docking_slots: 2,
            service_mins: 120,
            extended_layover_mins: 12 * 60,
        }
    }
}
