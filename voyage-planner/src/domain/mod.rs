//! Domain types for the voyage planner.
//!
//! This module contains the core domain model types that represent
//! validated schedule data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod error;
mod itinerary;
mod operator;
mod port;
mod preferences;
mod time;
mod voyage;

pub use error::DomainError;
pub use itinerary::{Itinerary, ItineraryComparison, ItineraryLeg, Verdict, format_duration};
pub use operator::{InvalidOperator, Operator};
pub use port::{InvalidPortName, Port, PortId, PortName};
pub use preferences::Preferences;
pub use time::{ClockTime, InvalidClockTime, InvalidDate, MINUTES_PER_DAY, VoyageDate};
pub use voyage::Voyage;
