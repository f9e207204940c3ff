//! Plain-text reports for the command line.
//!
//! Rendering only: every function here takes already-computed values and
//! returns the text to print. JSON output lives in [`dto`].

pub mod dto;

use std::fmt::Write;

use crate::domain::{Itinerary, ItineraryComparison};
use crate::network::{LoadReport, Network};
use crate::planner::SearchOutcome;

/// List every port with its charge, followed by its outgoing voyages.
pub fn network_listing(network: &Network) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ports, {} voyages",
        network.port_count(),
        network.voyage_count()
    );

    for (id, port) in network.ports() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} (docking ${}/day)", port.name, port.daily_charge);

        let voyages = network.voyages_from(id);
        if voyages.is_empty() {
            let _ = writeln!(out, "  no departures");
        }
        for voyage in voyages {
            let to = network
                .port(voyage.destination)
                .map_or("?", |p| p.name.as_str());
            let _ = writeln!(
                out,
                "  → {to} on {} {}-{} via {}, ${}",
                voyage.date, voyage.departure, voyage.arrival, voyage.operator, voyage.cost
            );
        }
    }

    out
}

/// Describe the records a load skipped. Empty when nothing was skipped.
pub fn load_warnings(report: &LoadReport) -> String {
    let mut out = String::new();
    if report.is_clean() {
        return out;
    }

    let _ = writeln!(out, "Skipped {} record(s):", report.skipped.len());
    for skipped in &report.skipped {
        let _ = writeln!(
            out,
            "  {} line {}: {}",
            skipped.source, skipped.line, skipped.reason
        );
    }
    out
}

/// The itinerary in full, then search diagnostics.
pub fn search_outcome(outcome: &SearchOutcome, network: &Network) -> String {
    let mut out = outcome.itinerary.to_string();
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Search: {}, {} ports finalized, {} voyages filtered by preferences",
        outcome.algorithm, outcome.nodes_finalized, outcome.voyages_filtered
    );

    let queued: Vec<String> = outcome
        .queued_ships
        .iter()
        .zip(network.ports())
        .filter(|(count, _)| **count > 0)
        .map(|(count, (_, port))| format!("{} {}", port.name, count))
        .collect();

    if queued.is_empty() {
        let _ = writeln!(out, "Docking queues: empty");
    } else {
        let _ = writeln!(out, "Docking queues: {}", queued.join(", "));
    }

    out
}

/// Both summaries and which one wins on cost and time.
pub fn comparison(first: &Itinerary, second: &Itinerary, cmp: &ItineraryComparison) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "1. {}", first.summary());
    let _ = writeln!(out, "2. {}", second.summary());
    let _ = writeln!(out);
    let _ = writeln!(out, "{cmp}");
    out
}
