//! Serializable views of search results for JSON output.

use serde::Serialize;

use crate::domain::{Itinerary, ItineraryComparison, ItineraryLeg, Verdict};
use crate::network::Network;
use crate::planner::{PlanError, SearchOutcome};

/// Result of a successful search.
#[derive(Debug, Serialize)]
pub struct OutcomeResult {
    /// "Dijkstra" or "A*"
    pub algorithm: String,

    /// Ports finalized before the destination was reached
    pub nodes_finalized: usize,

    /// Voyages rejected by preferences
    pub voyages_filtered: usize,

    /// Ports with ships left in their docking queue
    pub docking_queues: Vec<QueueResult>,

    pub itinerary: ItineraryResult,
}

/// Ships left queued at one port.
#[derive(Debug, Serialize)]
pub struct QueueResult {
    pub port: String,
    pub ships: usize,
}

/// A complete itinerary.
#[derive(Debug, Serialize)]
pub struct ItineraryResult {
    pub name: Option<String>,

    /// Port names in visiting order
    pub route: Vec<String>,

    pub legs: Vec<LegResult>,

    /// Voyage fares plus docking charges
    pub total_cost: u64,

    pub voyage_cost: u64,

    pub docking_charges: u64,

    /// Time at sea, on the ground and queueing, in minutes
    pub total_minutes: i64,
}

/// One voyage in an itinerary.
#[derive(Debug, Serialize)]
pub struct LegResult {
    pub from: String,
    pub to: String,

    /// DD/MM/YYYY
    pub date: String,

    /// HH:MM
    pub departure: String,

    /// HH:MM
    pub arrival: String,

    pub operator: String,
    pub cost: u32,

    /// Time ashore before this leg, excluding queueing (minutes)
    pub layover_minutes: i64,

    /// Time spent waiting for a docking slot before this leg (minutes)
    pub queue_minutes: i64,

    pub docking_charge: u32,
}

/// Difference between two itineraries.
#[derive(Debug, Serialize)]
pub struct ComparisonResult {
    pub first: ItineraryResult,
    pub second: ItineraryResult,

    /// First minus second
    pub cost_difference: i64,

    /// First minus second, in minutes
    pub time_difference_minutes: i64,

    /// "first", "second" or "tie"
    pub cheaper: &'static str,

    /// "first", "second" or "tie"
    pub faster: &'static str,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Voyages rejected by preferences, when no route was found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voyages_filtered: Option<usize>,
}

impl OutcomeResult {
    /// Create from a search outcome. Port names come from `network`.
    pub fn from_outcome(outcome: &SearchOutcome, network: &Network) -> Self {
        let docking_queues = outcome
            .queued_ships
            .iter()
            .zip(network.ports())
            .filter(|(ships, _)| **ships > 0)
            .map(|(ships, (_, port))| QueueResult {
                port: port.name.to_string(),
                ships: *ships,
            })
            .collect();

        Self {
            algorithm: outcome.algorithm.to_string(),
            nodes_finalized: outcome.nodes_finalized,
            voyages_filtered: outcome.voyages_filtered,
            docking_queues,
            itinerary: ItineraryResult::from_itinerary(&outcome.itinerary),
        }
    }
}

impl ItineraryResult {
    /// Create from a domain Itinerary.
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        let route = itinerary
            .origin()
            .into_iter()
            .chain(itinerary.legs().iter().map(|leg| &leg.to))
            .map(ToString::to_string)
            .collect();

        Self {
            name: itinerary.name().map(str::to_string),
            route,
            legs: itinerary.legs().iter().map(LegResult::from_leg).collect(),
            total_cost: itinerary.total_cost(),
            voyage_cost: itinerary.voyage_cost(),
            docking_charges: itinerary.docking_charges(),
            total_minutes: itinerary.total_time().num_minutes(),
        }
    }
}

impl LegResult {
    /// Create from a domain ItineraryLeg.
    pub fn from_leg(leg: &ItineraryLeg) -> Self {
        Self {
            from: leg.from.to_string(),
            to: leg.to.to_string(),
            date: leg.date.to_string(),
            departure: leg.departure.to_string(),
            arrival: leg.arrival.to_string(),
            operator: leg.operator.to_string(),
            cost: leg.cost,
            layover_minutes: leg.layover.num_minutes(),
            queue_minutes: leg.queue_wait.num_minutes(),
            docking_charge: leg.docking_charge,
        }
    }
}

impl ComparisonResult {
    /// Create from two itineraries and their comparison.
    pub fn from_comparison(
        first: &Itinerary,
        second: &Itinerary,
        comparison: &ItineraryComparison,
    ) -> Self {
        Self {
            first: ItineraryResult::from_itinerary(first),
            second: ItineraryResult::from_itinerary(second),
            cost_difference: comparison.cost_difference,
            time_difference_minutes: comparison.time_difference.num_minutes(),
            cheaper: verdict(comparison.cheaper()),
            faster: verdict(comparison.faster()),
        }
    }
}

impl ErrorResponse {
    /// Create from a planning error.
    pub fn from_error(error: &PlanError) -> Self {
        let voyages_filtered = match error {
            PlanError::NoRouteFound { filtered, .. } => Some(*filtered),
            _ => None,
        };
        Self {
            error: error.to_string(),
            voyages_filtered,
        }
    }

    /// Create from any other error message.
    pub fn message(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            voyages_filtered: None,
        }
    }
}

fn verdict(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::First => "first",
        Verdict::Second => "second",
        Verdict::Tie => "tie",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PortName;
    use crate::network::NetworkBuilder;
    use crate::planner::{Algorithm, Planner, SearchConfig, SearchRequest};
    use serde_json::json;

    fn network() -> Network {
        NetworkBuilder::new()
            .port("A", 100)
            .port("B", 50)
            .port("C", 75)
            .voyage("A", "B", "01/01/2024", "08:00", "10:00", 100, "MSC")
            .voyage("B", "C", "01/01/2024", "23:00", "23:30", 100, "ZIM")
            .build()
    }

    fn outcome(net: &Network) -> SearchOutcome {
        let config = SearchConfig::default();
        let req = SearchRequest::resolve(net, "A", "C", "01/01/2024").unwrap();
        Planner::new(net, &config)
            .search(&req, Algorithm::Dijkstra)
            .unwrap()
    }

    #[test]
    fn outcome_serializes() {
        let net = network();
        let dto = OutcomeResult::from_outcome(&outcome(&net), &net);
        let value = serde_json::to_value(&dto).unwrap();

        assert_eq!(value["algorithm"], "Dijkstra");
        assert_eq!(value["nodes_finalized"], 3);
        assert_eq!(value["docking_queues"], json!([{ "port": "B", "ships": 1 }]));

        let itinerary = &value["itinerary"];
        assert_eq!(itinerary["name"], json!(null));
        assert_eq!(itinerary["route"], json!(["A", "B", "C"]));
        // 100 + 100 in fares, 13h ashore at B: 2 days at $50
        assert_eq!(itinerary["total_cost"], 300);
        assert_eq!(itinerary["docking_charges"], 100);
        assert_eq!(itinerary["total_minutes"], 15 * 60 + 30);
    }

    #[test]
    fn leg_fields() {
        let net = network();
        let dto = ItineraryResult::from_itinerary(&outcome(&net).itinerary);
        let second = &dto.legs[1];

        assert_eq!(second.from, "B");
        assert_eq!(second.to, "C");
        assert_eq!(second.date, "01/01/2024");
        assert_eq!(second.departure, "23:00");
        assert_eq!(second.operator, "ZIM");
        assert_eq!(second.layover_minutes, 13 * 60);
        assert_eq!(second.queue_minutes, 0);
        assert_eq!(second.docking_charge, 100);
    }

    #[test]
    fn comparison_verdicts() {
        let net = network();
        let first = outcome(&net).itinerary;
        let second = Itinerary::new();
        let dto = ComparisonResult::from_comparison(&first, &second, &first.compare(&second));

        assert_eq!(dto.cost_difference, 300);
        assert_eq!(dto.cheaper, "second");
        assert_eq!(dto.faster, "second");
        assert!(dto.second.route.is_empty());
    }

    #[test]
    fn error_response_only_counts_filtered_for_no_route() {
        let err = PlanError::NoRouteFound {
            from: PortName::parse("A").unwrap(),
            to: PortName::parse("C").unwrap(),
            filtered: 4,
        };
        let value = serde_json::to_value(ErrorResponse::from_error(&err)).unwrap();
        assert_eq!(value["voyages_filtered"], 4);

        let value = serde_json::to_value(ErrorResponse::from_error(&PlanError::DegenerateRequest))
            .unwrap();
        assert_eq!(
            value,
            json!({ "error": "source and destination are the same port" })
        );
    }
}
