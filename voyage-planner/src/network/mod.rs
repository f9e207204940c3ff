//! The timed port graph.
//!
//! Ports are nodes and scheduled voyages are directed, dated edges. Ports
//! keep their insertion order and are addressed by a dense [`PortId`];
//! each port's outgoing voyages keep the order they were added in.

pub mod loader;

use crate::domain::{
    ClockTime, InvalidClockTime, InvalidDate, InvalidOperator, InvalidPortName, Operator, Port,
    PortId, PortName, Preferences, Voyage, VoyageDate,
};

pub use loader::{
    LoadError, LoadReport, RecordSource, SkippedRecord, load_network, parse_network, parse_ports,
    parse_routes,
};

/// Why a port or voyage record was not added to the network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error(transparent)]
    PortName(#[from] InvalidPortName),

    #[error(transparent)]
    Operator(#[from] InvalidOperator),

    #[error(transparent)]
    Date(#[from] InvalidDate),

    #[error(transparent)]
    Time(#[from] InvalidClockTime),

    #[error("negative {field}: {value}")]
    Negative { field: &'static str, value: i64 },

    #[error("{field} too large: {value}")]
    TooLarge { field: &'static str, value: i64 },

    #[error("duplicate port {0}")]
    DuplicatePort(PortName),

    #[error("unknown port {0}")]
    UnknownPort(String),
}

/// Read-only timed graph of ports and voyages.
#[derive(Debug, Clone, Default)]
pub struct Network {
    ports: Vec<Port>,
    voyages: Vec<Vec<Voyage>>,
}

impl Network {
    /// Look up a port by name.
    ///
    /// This is a linear scan in insertion order.
    pub fn port_id(&self, name: &str) -> Option<PortId> {
        self.ports
            .iter()
            .position(|p| p.name.as_str() == name)
            .map(PortId)
    }

    /// Returns the port with the given id.
    pub fn port(&self, id: PortId) -> Option<&Port> {
        self.ports.get(id.index())
    }

    /// Returns a port's outgoing voyages in the order they were added.
    ///
    /// Unknown ids have no voyages.
    pub fn voyages_from(&self, id: PortId) -> &[Voyage] {
        self.voyages
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterates over ports in insertion order.
    pub fn ports(&self) -> impl Iterator<Item = (PortId, &Port)> {
        self.ports.iter().enumerate().map(|(i, p)| (PortId(i), p))
    }

    /// Number of ports.
    pub fn port_count(&self) -> usize {
        self.ports.len()
    }

    /// Number of voyages across all ports.
    pub fn voyage_count(&self) -> usize {
        self.voyages.iter().map(Vec::len).sum()
    }

    /// Returns true if some voyage sails straight from `src` to `dst` on or
    /// after `date` and passes the per-voyage preference filters.
    pub fn has_direct_voyage(
        &self,
        src: PortId,
        dst: PortId,
        date: VoyageDate,
        prefs: &Preferences,
    ) -> bool {
        let Some(dst_port) = self.port(dst) else {
            return false;
        };

        self.voyages_from(src).iter().any(|v| {
            v.destination == dst && v.date.is_on_or_after(date) && prefs.admits(v, &dst_port.name)
        })
    }

    /// Cheapest fare of any voyage sailing straight from `from` to `to`.
    pub fn min_direct_cost(&self, from: PortId, to: PortId) -> Option<u32> {
        self.voyages_from(from)
            .iter()
            .filter(|v| v.destination == to)
            .map(|v| v.cost)
            .min()
    }

    fn insert_port(&mut self, port: Port) -> Result<PortId, RecordError> {
        if self.port_id(port.name.as_str()).is_some() {
            return Err(RecordError::DuplicatePort(port.name));
        }
        let id = PortId(self.ports.len());
        self.ports.push(port);
        self.voyages.push(Vec::new());
        Ok(id)
    }
}

/// Builder for a [`Network`].
///
/// Records arrive as raw text fields. The fluent methods skip records
/// that fail validation; the `try_` methods report why.
///
/// # Examples
///
/// ```
/// use voyage_planner::network::NetworkBuilder;
///
/// let network = NetworkBuilder::new()
///     .port("Singapore", 120)
///     .port("Colombo", 80)
///     .port("Colombo", 90) // duplicate, skipped
///     .voyage("Singapore", "Colombo", "01/03/2024", "06:00", "22:00", 1500, "MSC")
///     .voyage("Singapore", "Atlantis", "01/03/2024", "06:00", "22:00", 10, "MSC") // skipped
///     .build();
///
/// assert_eq!(network.port_count(), 2);
/// assert_eq!(network.voyage_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    inner: Network,
}

impl NetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a port, skipping it if invalid.
    pub fn port(mut self, name: &str, daily_charge: i64) -> Self {
        let _ = self.try_port(name, daily_charge);
        self
    }

    /// Add a voyage, skipping it if invalid.
    #[allow(clippy::too_many_arguments)]
    pub fn voyage(
        mut self,
        origin: &str,
        destination: &str,
        date: &str,
        departure: &str,
        arrival: &str,
        cost: i64,
        operator: &str,
    ) -> Self {
        let _ = self.try_voyage(
            origin,
            destination,
            date,
            departure,
            arrival,
            cost,
            operator,
        );
        self
    }

    /// Add a port.
    ///
    /// # Errors
    ///
    /// Returns `Err` for an invalid name, a negative or oversized charge, or
    /// a name that is already taken.
    pub fn try_port(&mut self, name: &str, daily_charge: i64) -> Result<PortId, RecordError> {
        let name = PortName::parse(name)?;
        let daily_charge = non_negative("daily charge", daily_charge)?;
        self.inner.insert_port(Port::new(name, daily_charge))
    }

    /// Add a voyage from `origin` to `destination`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either port is unknown or any field is malformed.
    #[allow(clippy::too_many_arguments)]
    pub fn try_voyage(
        &mut self,
        origin: &str,
        destination: &str,
        date: &str,
        departure: &str,
        arrival: &str,
        cost: i64,
        operator: &str,
    ) -> Result<(), RecordError> {
        let origin = self
            .inner
            .port_id(origin)
            .ok_or_else(|| RecordError::UnknownPort(origin.to_string()))?;
        let destination = self
            .inner
            .port_id(destination)
            .ok_or_else(|| RecordError::UnknownPort(destination.to_string()))?;

        let voyage = Voyage::new(
            destination,
            VoyageDate::parse(date)?,
            ClockTime::parse_hhmm(departure)?,
            ClockTime::parse_hhmm(arrival)?,
            non_negative("cost", cost)?,
            Operator::parse(operator)?,
        );

        self.inner.voyages[origin.index()].push(voyage);
        Ok(())
    }

    /// Build the network.
    pub fn build(self) -> Network {
        self.inner
    }
}

fn non_negative(field: &'static str, value: i64) -> Result<u32, RecordError> {
    if value < 0 {
        return Err(RecordError::Negative { field, value });
    }
    u32::try_from(value).map_err(|_| RecordError::TooLarge { field, value })
}
