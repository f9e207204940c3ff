//! Cost-to-go estimates for A* search.

use crate::domain::PortId;
use crate::network::Network;

/// Lower bound on the remaining cost from each port to one destination.
///
/// Any route from port `p` to the destination takes at least one voyage
/// leaving `p` and at least one voyage arriving at the destination, and
/// surcharges only add cost. So the larger of those two cheapest fares
/// never overestimates. Along any voyage into a port that has departures
/// of its own it also drops by at most that voyage's fare.
#[derive(Debug, Clone)]
pub struct Heuristic {
    estimates: Vec<u64>,
}

impl Heuristic {
    /// An all-zero estimate, which turns A* into Dijkstra.
    pub fn none(port_count: usize) -> Self {
        Self {
            estimates: vec![0; port_count],
        }
    }

    /// Precompute estimates towards `destination`.
    pub fn towards(network: &Network, destination: PortId) -> Self {
        let min_arrival = network
            .ports()
            .flat_map(|(id, _)| network.voyages_from(id))
            .filter(|v| v.destination == destination)
            .map(|v| v.cost)
            .min();

        let estimates = network
            .ports()
            .map(|(id, _)| {
                if id == destination {
                    return 0;
                }
                let min_departure = network.voyages_from(id).iter().map(|v| v.cost).min();
                match (min_departure, min_arrival) {
                    (Some(out), Some(into)) => u64::from(out.max(into)),
                    _ => 0,
                }
            })
            .collect();

        Self { estimates }
    }

    /// Estimated remaining cost from `port`. Unknown ports estimate zero.
    pub fn estimate(&self, port: PortId) -> u64 {
        self.estimates.get(port.index()).copied().unwrap_or(0)
    }
}
