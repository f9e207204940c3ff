//! Cheapest-itinerary search.
//!
//! Runs Dijkstra or A* over the timed port graph. Cost is the objective:
//! voyage fares plus docking surcharges for long stays on the ground.
//! Each relaxation checks the connection time at the layover port and asks
//! the docking simulator how long the ship would queue for a slot there.

use std::fmt;

use chrono::Duration;
use tracing::{debug, trace};

use crate::docking::DockingSimulator;
use crate::domain::{
    Itinerary, ItineraryLeg, MINUTES_PER_DAY, Port, PortId, Preferences, Voyage, VoyageDate,
};
use crate::network::Network;

use super::config::SearchConfig;
use super::error::PlanError;
use super::frontier::Frontier;
use super::heuristic::Heuristic;

/// Which best-first strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Expand by accumulated cost alone.
    Dijkstra,
    /// Expand by accumulated cost plus an admissible cost-to-go estimate.
    AStar,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dijkstra => f.write_str("Dijkstra"),
            Algorithm::AStar => f.write_str("A*"),
        }
    }
}

/// Request for itinerary search.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Port to start from.
    pub source: PortId,

    /// Port to reach.
    pub destination: PortId,

    /// Earliest voyage date that may be used.
    pub date: VoyageDate,

    /// Optional voyage filters.
    pub preferences: Preferences,
}

impl SearchRequest {
    /// Create a new search request with no preferences.
    pub fn new(source: PortId, destination: PortId, date: VoyageDate) -> Self {
        Self {
            source,
            destination,
            date,
            preferences: Preferences::none(),
        }
    }

    /// Resolve port names and date text into a request.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidPort` for a name not in the network and
    /// `PlanError::InvalidDate` for unparseable date text.
    pub fn resolve(
        network: &Network,
        source: &str,
        destination: &str,
        date: &str,
    ) -> Result<Self, PlanError> {
        let source = network
            .port_id(source)
            .ok_or_else(|| PlanError::InvalidPort(source.to_string()))?;
        let destination = network
            .port_id(destination)
            .ok_or_else(|| PlanError::InvalidPort(destination.to_string()))?;
        let date = VoyageDate::parse(date).map_err(|e| PlanError::InvalidDate(e.to_string()))?;

        Ok(Self::new(source, destination, date))
    }

    /// Attach preferences.
    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = preferences;
        self
    }

    /// Validate the request against a network.
    pub fn validate(&self, network: &Network) -> Result<(), PlanError> {
        let source = port(network, self.source)?;
        let destination = port(network, self.destination)?;

        if self.source == self.destination {
            return Err(PlanError::DegenerateRequest);
        }

        for endpoint in [source, destination] {
            if self.preferences.avoids(&endpoint.name) {
                return Err(PlanError::PreferenceConflict(endpoint.name.clone()));
            }
        }

        Ok(())
    }
}

/// Result of a successful search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The cheapest itinerary found.
    pub itinerary: Itinerary,

    /// Strategy that produced it.
    pub algorithm: Algorithm,

    /// Number of ports finalized before the destination was reached.
    pub nodes_finalized: usize,

    /// Number of voyages rejected by preferences.
    pub voyages_filtered: usize,

    /// Ships left in each port's docking queue, indexed by port id.
    pub queued_ships: Vec<usize>,
}

/// How a port was reached on its best known route.
#[derive(Debug, Clone, Copy)]
struct Via {
    from: PortId,
    voyage: usize,
    layover: Duration,
    queue_wait: Duration,
    surcharge: u32,
}

/// Best known route to a port.
#[derive(Debug, Clone, Copy)]
struct Label {
    cost: u64,
    elapsed: Duration,
    via: Option<Via>,
}

impl Label {
    fn origin() -> Self {
        Self {
            cost: 0,
            elapsed: Duration::zero(),
            via: None,
        }
    }
}

/// Itinerary planner over a loaded network.
pub struct Planner<'a> {
    network: &'a Network,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a Network, config: &'a SearchConfig) -> Self {
        Self { network, config }
    }

    /// Pick A* when a direct voyage exists and no preference is set,
    /// otherwise Dijkstra.
    pub fn choose_algorithm(&self, request: &SearchRequest) -> Algorithm {
        if !request.preferences.has_any()
            && self.network.has_direct_voyage(
                request.source,
                request.destination,
                request.date,
                &request.preferences,
            )
        {
            Algorithm::AStar
        } else {
            Algorithm::Dijkstra
        }
    }

    /// Search with a fresh docking simulator.
    pub fn search(
        &self,
        request: &SearchRequest,
        algorithm: Algorithm,
    ) -> Result<SearchOutcome, PlanError> {
        let mut docking =
            DockingSimulator::new(self.network.port_count(), self.config.docking_slots);
        self.search_with(request, algorithm, &mut docking)
    }

    /// Search using a caller-owned docking simulator.
    ///
    /// The simulator is reset first, so no state carries over from an
    /// earlier search. It is left holding the ships this search queued.
    pub fn search_with(
        &self,
        request: &SearchRequest,
        algorithm: Algorithm,
        docking: &mut DockingSimulator,
    ) -> Result<SearchOutcome, PlanError> {
        request.validate(self.network)?;

        let port_count = self.network.port_count();
        if docking.port_count() == port_count {
            docking.reset();
        } else {
            *docking = DockingSimulator::new(port_count, self.config.docking_slots);
        }

        let heuristic = match algorithm {
            Algorithm::Dijkstra => Heuristic::none(port_count),
            Algorithm::AStar => Heuristic::towards(self.network, request.destination),
        };

        debug!(
            %algorithm,
            from = %request.source,
            to = %request.destination,
            date = %request.date,
            "starting search"
        );

        let mut run = SearchRun {
            network: self.network,
            config: self.config,
            request,
            heuristic,
            docking: &mut *docking,
            labels: vec![None; port_count],
            finalized: vec![false; port_count],
            frontier: Frontier::new(),
            nodes_finalized: 0,
            voyages_filtered: 0,
        };
        run.execute();

        let nodes_finalized = run.nodes_finalized;
        let voyages_filtered = run.voyages_filtered;

        if !run.finalized[request.destination.index()] {
            debug!(nodes_finalized, voyages_filtered, "no route found");
            return Err(PlanError::NoRouteFound {
                from: port(self.network, request.source)?.name.clone(),
                to: port(self.network, request.destination)?.name.clone(),
                filtered: voyages_filtered,
            });
        }

        let itinerary = run.itinerary()?;

        debug!(
            nodes_finalized,
            voyages_filtered,
            cost = itinerary.total_cost(),
            legs = itinerary.leg_count(),
            "search complete"
        );

        Ok(SearchOutcome {
            itinerary,
            algorithm,
            nodes_finalized,
            voyages_filtered,
            queued_ships: docking.queued_ships(),
        })
    }
}

/// State for one search invocation.
struct SearchRun<'s> {
    network: &'s Network,
    config: &'s SearchConfig,
    request: &'s SearchRequest,
    heuristic: Heuristic,
    docking: &'s mut DockingSimulator,
    labels: Vec<Option<Label>>,
    finalized: Vec<bool>,
    frontier: Frontier,
    nodes_finalized: usize,
    voyages_filtered: usize,
}

impl SearchRun<'_> {
    fn execute(&mut self) {
        let source = self.request.source;
        self.labels[source.index()] = Some(Label::origin());
        self.frontier.push(source, 0, self.heuristic.estimate(source));

        while let Some(entry) = self.frontier.pop() {
            let current = entry.port;
            if self.finalized[current.index()] {
                continue;
            }
            self.finalized[current.index()] = true;
            self.nodes_finalized += 1;

            if current == self.request.destination {
                break;
            }

            if let Some(label) = self.labels[current.index()] {
                self.relax_from(current, label);
            }
        }
    }

    /// Try every voyage leaving a newly finalized port.
    fn relax_from(&mut self, current: PortId, label: Label) {
        let network = self.network;
        let Some(current_port) = network.port(current) else {
            return;
        };
        let request = self.request;
        let prefs = &request.preferences;

        // The voyage that brought us here, if any.
        let inbound = label
            .via
            .and_then(|via| network.voyages_from(via.from).get(via.voyage));

        for (index, voyage) in network.voyages_from(current).iter().enumerate() {
            if !voyage.date.is_on_or_after(request.date) {
                continue;
            }

            let Some(target_port) = network.port(voyage.destination) else {
                continue;
            };
            if !prefs.admits(voyage, &target_port.name) {
                self.voyages_filtered += 1;
                continue;
            }

            if self.finalized[voyage.destination.index()] {
                continue;
            }

            let (layover, queue_wait, surcharge) = match inbound {
                Some(previous) => {
                    let layover = previous.arrival.until(voyage.departure);
                    if layover < self.config.min_connection() {
                        continue;
                    }
                    let queue_wait = self.docking.wait(current, previous.arrival);
                    let surcharge = self.surcharge(current_port, layover + queue_wait);
                    (layover, queue_wait, surcharge)
                }
                None => (Duration::zero(), Duration::zero(), 0),
            };

            let cost = label.cost + u64::from(voyage.cost) + u64::from(surcharge);
            // Time at sea plus slot waits; layover idle time is not charged
            // against the time cap.
            let elapsed = label.elapsed + voyage.duration() + queue_wait;
            if !prefs.within_time(elapsed) {
                continue;
            }

            let target = voyage.destination;
            let improves = self.labels[target.index()].is_none_or(|best| cost < best.cost);
            if !improves {
                continue;
            }

            trace!(
                from = %current_port.name,
                to = %target_port.name,
                cost,
                surcharge,
                queue_wait = queue_wait.num_minutes(),
                "label improved"
            );

            self.labels[target.index()] = Some(Label {
                cost,
                elapsed,
                via: Some(Via {
                    from: current,
                    voyage: index,
                    layover,
                    queue_wait,
                    surcharge,
                }),
            });
            self.frontier.push(target, cost, cost + self.heuristic.estimate(target));

            if let Some(previous) = inbound {
                self.docking.enqueue(
                    current,
                    previous.operator.clone(),
                    previous.arrival,
                    self.config.service(),
                );
            }
        }
    }

    /// Daily charge times days spanned plus one, once ground time passes
    /// the extended-layover threshold.
    fn surcharge(&self, port: &Port, ground: Duration) -> u32 {
        if ground <= self.config.extended_layover() {
            return 0;
        }
        let minutes = ground.num_minutes().max(0) as u64;
        let days = minutes.div_ceil(u64::from(MINUTES_PER_DAY)) + 1;
        u32::try_from(u64::from(port.daily_charge) * days).unwrap_or(u32::MAX)
    }

    /// Walk predecessors back from the destination and build the itinerary.
    fn itinerary(&self) -> Result<Itinerary, PlanError> {
        let mut hops: Vec<(PortId, &Voyage, Via)> = Vec::new();
        let mut at = self.request.destination;

        while let Some(via) = self.labels[at.index()].and_then(|label| label.via) {
            let voyage = self
                .network
                .voyages_from(via.from)
                .get(via.voyage)
                .ok_or(PlanError::BrokenChain {
                    port: via.from,
                    voyage: via.voyage,
                })?;
            hops.push((via.from, voyage, via));
            at = via.from;
        }
        hops.reverse();

        let mut itinerary = Itinerary::new();
        for (from, voyage, via) in hops {
            itinerary.push_leg(ItineraryLeg {
                from: port(self.network, from)?.name.clone(),
                to: port(self.network, voyage.destination)?.name.clone(),
                date: voyage.date,
                departure: voyage.departure,
                arrival: voyage.arrival,
                cost: voyage.cost,
                operator: voyage.operator.clone(),
                layover: via.layover,
                queue_wait: via.queue_wait,
                docking_charge: via.surcharge,
            })?;
        }
        Ok(itinerary)
    }
}

fn port(network: &Network, id: PortId) -> Result<&Port, PlanError> {
    network.port(id).ok_or_else(|| PlanError::InvalidPort(id.to_string()))
}
