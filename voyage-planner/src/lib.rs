//! Maritime voyage planner.
//!
//! Answers: "what is the cheapest way to sail from this port to that one,
//! leaving on or after this date?" Routes must respect connection times at
//! each layover port, and ports have a limited number of docking slots, so
//! a busy port can make a ship queue and pay for a longer stay.

pub mod docking;
pub mod domain;
pub mod network;
pub mod planner;
pub mod report;
pub mod store;
