//! Scheduled voyage type.

use chrono::Duration;

use super::{ClockTime, Operator, PortId, VoyageDate};

/// A scheduled sailing from one port to another.
///
/// The origin port is implicit: voyages are stored on the port they
/// leave from. An arrival numerically earlier than the departure means the
/// sailing crosses midnight, which is a valid schedule.
///
/// # Examples
///
/// ```
/// use voyage_planner::domain::{ClockTime, Operator, PortId, Voyage, VoyageDate};
/// use chrono::Duration;
///
/// let overnight = Voyage::new(
///     PortId(1),
///     VoyageDate::parse("01/01/2024").unwrap(),
///     ClockTime::parse_hhmm("22:00").unwrap(),
///     ClockTime::parse_hhmm("04:30").unwrap(),
///     900,
///     Operator::parse("MSC").unwrap(),
/// );
/// assert!(overnight.crosses_midnight());
/// assert_eq!(overnight.duration(), Duration::minutes(390));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voyage {
    /// Port this voyage sails to.
    pub destination: PortId,
    /// Sailing date.
    pub date: VoyageDate,
    /// Departure clock time.
    pub departure: ClockTime,
    /// Arrival clock time (may be on the next day).
    pub arrival: ClockTime,
    /// Fare for this voyage.
    pub cost: u32,
    /// Company operating the voyage.
    pub operator: Operator,
}

impl Voyage {
    /// Create a new voyage.
    pub fn new(
        destination: PortId,
        date: VoyageDate,
        departure: ClockTime,
        arrival: ClockTime,
        cost: u32,
        operator: Operator,
    ) -> Self {
        Self {
            destination,
            date,
            departure,
            arrival,
            cost,
            operator,
        }
    }

    /// Time at sea, wrapping past midnight when needed.
    pub fn duration(&self) -> Duration {
        self.departure.until(self.arrival)
    }

    /// Returns true if the arrival falls on the day after departure.
    pub fn crosses_midnight(&self) -> bool {
        self.arrival < self.departure
    }
}
