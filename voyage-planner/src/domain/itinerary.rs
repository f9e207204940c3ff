//! Itinerary types.
//!
//! An `Itinerary` is the ordered list of voyages a traveller takes from
//! origin to destination, along with the time spent on the ground between
//! them and any docking surcharges that time incurs.

use std::cmp::Ordering;
use std::fmt;

use chrono::Duration;

use super::{ClockTime, DomainError, Operator, PortName, VoyageDate};

/// One voyage within an itinerary.
///
/// The ground-time fields describe the stop *before* this leg departs:
/// the layover at `from` since the previous leg arrived, the extra wait
/// for a docking slot, and the surcharge for an extended stay. They are
/// all zero on the first leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryLeg {
    /// Departure port
    pub from: PortName,
    /// Arrival port
    pub to: PortName,
    /// Sailing date
    pub date: VoyageDate,
    /// Departure clock time
    pub departure: ClockTime,
    /// Arrival clock time
    pub arrival: ClockTime,
    /// Voyage fare
    pub cost: u32,
    /// Operating company
    pub operator: Operator,
    /// Time between the previous arrival and this departure
    pub layover: Duration,
    /// Time spent waiting for a docking slot before this departure
    pub queue_wait: Duration,
    /// Charge for an extended stay at `from`
    pub docking_charge: u32,
}

impl ItineraryLeg {
    /// Time at sea for this leg.
    pub fn duration(&self) -> Duration {
        self.departure.until(self.arrival)
    }

    /// Layover plus queue wait.
    pub fn ground_time(&self) -> Duration {
        self.layover + self.queue_wait
    }

    /// Time this leg adds to the itinerary total.
    pub fn elapsed(&self) -> Duration {
        self.duration() + self.ground_time()
    }

    /// Cost this leg adds to the itinerary total.
    pub fn total_cost(&self) -> u64 {
        u64::from(self.cost) + u64::from(self.docking_charge)
    }
}

/// A planned trip: consecutive legs plus running totals.
///
/// # Invariants
///
/// - Each leg departs from the port the previous leg arrived at
/// - No leg starts and ends at the same port
/// - `total_cost` is the sum of every leg's fare and docking charge
/// - `total_time` is the sum of every leg's duration, layover and queue wait
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    name: Option<String>,
    legs: Vec<ItineraryLeg>,
    total_cost: u64,
    total_time: Duration,
}

impl Itinerary {
    /// Creates an empty itinerary.
    pub fn new() -> Self {
        Self {
            name: None,
            legs: Vec::new(),
            total_cost: 0,
            total_time: Duration::zero(),
        }
    }

    /// Builds an itinerary from legs in travel order.
    ///
    /// # Errors
    ///
    /// Returns `Err` if consecutive legs don't connect or a leg is circular.
    pub fn from_legs(legs: impl IntoIterator<Item = ItineraryLeg>) -> Result<Self, DomainError> {
        let mut itinerary = Self::new();
        for leg in legs {
            itinerary.push_leg(leg)?;
        }
        Ok(itinerary)
    }

    /// Sets a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends a leg and updates the totals.
    ///
    /// # Errors
    ///
    /// Returns `Err` (leaving the itinerary unchanged) if the leg does not
    /// depart from the current destination, or starts and ends at the same
    /// port.
    pub fn push_leg(&mut self, leg: ItineraryLeg) -> Result<(), DomainError> {
        if leg.from == leg.to {
            return Err(DomainError::CircularLeg(leg.from));
        }

        if let Some(last) = self.legs.last()
            && last.to != leg.from
        {
            return Err(DomainError::LegsNotConnected {
                arrived: last.to.clone(),
                departing: leg.from,
            });
        }

        self.total_cost += leg.total_cost();
        self.total_time += leg.elapsed();
        self.legs.push(leg);
        Ok(())
    }

    /// Returns the display name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns all legs in order.
    pub fn legs(&self) -> &[ItineraryLeg] {
        &self.legs
    }

    /// Returns the number of legs.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Returns true if the itinerary has no legs.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Returns the first departure port.
    pub fn origin(&self) -> Option<&PortName> {
        self.legs.first().map(|leg| &leg.from)
    }

    /// Returns the final arrival port.
    pub fn destination(&self) -> Option<&PortName> {
        self.legs.last().map(|leg| &leg.to)
    }

    /// Fares plus docking charges.
    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    /// Time at sea plus time on the ground.
    pub fn total_time(&self) -> Duration {
        self.total_time
    }

    /// Sum of voyage fares alone.
    pub fn voyage_cost(&self) -> u64 {
        self.legs.iter().map(|leg| u64::from(leg.cost)).sum()
    }

    /// Sum of extended-stay docking charges.
    pub fn docking_charges(&self) -> u64 {
        self.legs.iter().map(|leg| u64::from(leg.docking_charge)).sum()
    }

    /// Total time spent waiting for docking slots.
    pub fn queue_wait(&self) -> Duration {
        self.legs.iter().map(|leg| leg.queue_wait).sum()
    }

    /// The port chain, e.g. `"Singapore → Colombo → Dubai"`.
    pub fn chain(&self) -> String {
        let Some(origin) = self.origin() else {
            return "(empty)".to_string();
        };

        let mut chain = origin.to_string();
        for leg in &self.legs {
            chain.push_str(" → ");
            chain.push_str(leg.to.as_str());
        }
        chain
    }

    /// A single-line summary: name, chain, leg count, cost and time.
    pub fn summary(&self) -> String {
        let legs = match self.leg_count() {
            1 => "1 leg".to_string(),
            n => format!("{n} legs"),
        };
        format!(
            "{}: {} | {} | ${} | {}",
            self.name().unwrap_or("Itinerary"),
            self.chain(),
            legs,
            self.total_cost,
            format_duration(self.total_time)
        )
    }

    /// Compares this itinerary against another.
    ///
    /// Differences are `self - other`, so a negative cost difference means
    /// `self` is cheaper.
    pub fn compare(&self, other: &Itinerary) -> ItineraryComparison {
        ItineraryComparison {
            cost_difference: self.total_cost as i64 - other.total_cost as i64,
            time_difference: self.total_time - other.total_time,
        }
    }
}

impl Default for Itinerary {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name().unwrap_or("Itinerary"))?;
        writeln!(f, "  Route: {}", self.chain())?;

        for (i, leg) in self.legs.iter().enumerate() {
            writeln!(
                f,
                "  {}. {} → {} on {} {}-{} via {}, ${}",
                i + 1,
                leg.from,
                leg.to,
                leg.date,
                leg.departure,
                leg.arrival,
                leg.operator,
                leg.cost
            )?;
            if i > 0 {
                write!(f, "     layover {}", format_duration(leg.layover))?;
                if !leg.queue_wait.is_zero() {
                    write!(f, ", docking queue {}", format_duration(leg.queue_wait))?;
                }
                if leg.docking_charge > 0 {
                    write!(f, ", docking charge ${}", leg.docking_charge)?;
                }
                writeln!(f)?;
            }
        }

        writeln!(
            f,
            "  Voyage cost: ${}, docking charges: ${}",
            self.voyage_cost(),
            self.docking_charges()
        )?;
        write!(
            f,
            "  Total: ${} over {}",
            self.total_cost,
            format_duration(self.total_time)
        )
    }
}

/// Formats a duration as hours and minutes, e.g. `"11h 30m"`.
pub fn format_duration(d: Duration) -> String {
    let sign = if d < Duration::zero() { "-" } else { "" };
    let minutes = d.num_minutes().abs();
    format!("{sign}{}h {:02}m", minutes / 60, minutes % 60)
}

/// Which of two compared itineraries wins on a measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The itinerary `compare` was called on
    First,
    /// The itinerary passed to `compare`
    Second,
    /// Both are equal
    Tie,
}

impl Verdict {
    fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Verdict::First,
            Ordering::Greater => Verdict::Second,
            Ordering::Equal => Verdict::Tie,
        }
    }
}

/// Cost and time differences between two itineraries (first minus second).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItineraryComparison {
    /// First total cost minus second total cost
    pub cost_difference: i64,
    /// First total time minus second total time
    pub time_difference: Duration,
}

impl ItineraryComparison {
    /// Which itinerary costs less.
    pub fn cheaper(&self) -> Verdict {
        Verdict::from_ordering(self.cost_difference.cmp(&0))
    }

    /// Which itinerary takes less time.
    pub fn faster(&self) -> Verdict {
        Verdict::from_ordering(self.time_difference.cmp(&Duration::zero()))
    }
}

impl fmt::Display for ItineraryComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let saving = self.cost_difference.unsigned_abs();
        match self.cheaper() {
            Verdict::First => writeln!(f, "First itinerary is ${saving} cheaper")?,
            Verdict::Second => writeln!(f, "Second itinerary is ${saving} cheaper")?,
            Verdict::Tie => writeln!(f, "Both itineraries cost the same")?,
        }

        let gap = format_duration(self.time_difference.abs());
        match self.faster() {
            Verdict::First => write!(f, "First itinerary is {gap} faster"),
            Verdict::Second => write!(f, "Second itinerary is {gap} faster"),
            Verdict::Tie => write!(f, "Both itineraries take the same time"),
        }
    }
}
