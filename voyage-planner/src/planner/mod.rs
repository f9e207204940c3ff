//! Itinerary planner using best-first search.
//!
//! This module answers: "what is the cheapest way to sail from this port
//! to that one, leaving on or after this date?"
//!
//! The search is Dijkstra or A* over the timed port graph, with
//! connection-time checks and docking congestion applied as each voyage
//! is relaxed.

mod config;
mod error;
mod frontier;
mod heuristic;
mod search;

#[cfg(test)]
mod search_tests;

pub use config::SearchConfig;
pub use error::PlanError;
pub use frontier::{Frontier, FrontierEntry};
pub use heuristic::Heuristic;
pub use search::{Algorithm, Planner, SearchOutcome, SearchRequest};
