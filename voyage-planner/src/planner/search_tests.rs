//! Scenario tests for the itinerary search.

use super::*;
use crate::docking::DockingSimulator;
use crate::domain::{Operator, PortId, PortName, Preferences, VoyageDate};
use crate::network::{Network, NetworkBuilder};
use chrono::Duration;

type VoyageRow<'a> = (&'a str, &'a str, &'a str, &'a str, &'a str, i64, &'a str);

fn network(ports: &[(&str, i64)], voyages: &[VoyageRow<'_>]) -> Network {
    let mut builder = NetworkBuilder::new();
    for (name, charge) in ports {
        builder = builder.port(name, *charge);
    }
    for (from, to, date, dep, arr, cost, op) in voyages {
        builder = builder.voyage(from, to, date, dep, arr, *cost, op);
    }
    builder.build()
}

fn abc(voyages: &[VoyageRow<'_>]) -> Network {
    network(&[("A", 100), ("B", 50), ("C", 75)], voyages)
}

fn request(net: &Network, from: &str, to: &str) -> SearchRequest {
    SearchRequest::resolve(net, from, to, "01/01/2024").unwrap()
}

fn port(s: &str) -> PortName {
    PortName::parse(s).unwrap()
}

fn plan(
    net: &Network,
    req: &SearchRequest,
    algorithm: Algorithm,
) -> Result<SearchOutcome, PlanError> {
    let config = SearchConfig::default();
    Planner::new(net, &config).search(req, algorithm)
}

const BOTH: [Algorithm; 2] = [Algorithm::Dijkstra, Algorithm::AStar];

// ========== basic routing ==========

#[test]
fn two_leg_itinerary_with_valid_connection() {
    let net = abc(&[
        ("A", "B", "01/01/2024", "08:00", "14:00", 1000, "MSC"),
        ("B", "C", "01/01/2024", "15:30", "20:00", 800, "MSC"),
    ]);
    let req = request(&net, "A", "C");

    for algorithm in BOTH {
        let outcome = plan(&net, &req, algorithm).unwrap();
        let it = &outcome.itinerary;

        assert_eq!(outcome.algorithm, algorithm);
        assert_eq!(it.chain(), "A → B → C");
        assert_eq!(it.total_cost(), 1800);
        assert_eq!(it.docking_charges(), 0);
        assert_eq!(it.legs()[1].layover, Duration::minutes(90));
        assert_eq!(it.legs()[1].queue_wait, Duration::zero());
        // 6h at sea, 1h30 ashore, 4h30 at sea
        assert_eq!(it.total_time(), Duration::hours(12));
        assert_eq!(outcome.nodes_finalized, 3);
        assert_eq!(outcome.voyages_filtered, 0);
        assert_eq!(outcome.queued_ships, vec![0, 1, 0]);
    }
}

#[test]
fn direct_voyage_has_no_ground_time() {
    let net = abc(&[("A", "C", "01/01/2024", "22:00", "03:00", 400, "ZIM")]);
    let outcome = plan(&net, &request(&net, "A", "C"), Algorithm::Dijkstra).unwrap();

    let it = &outcome.itinerary;
    assert_eq!(it.leg_count(), 1);
    assert_eq!(it.total_cost(), 400);
    assert_eq!(it.total_time(), Duration::hours(5));
    assert_eq!(it.legs()[0].layover, Duration::zero());
    assert_eq!(outcome.queued_ships, vec![0, 0, 0]);
}

#[test]
fn cheaper_connection_beats_expensive_direct() {
    let net = network(
        &[("A", 10), ("B", 10), ("C", 10), ("D", 10)],
        &[
            ("A", "D", "01/01/2024", "08:00", "20:00", 5000, "MSC"),
            ("A", "B", "01/01/2024", "08:00", "10:00", 1000, "MSC"),
            ("A", "C", "01/01/2024", "08:00", "11:00", 900, "ZIM"),
            ("B", "D", "01/01/2024", "12:00", "16:00", 800, "MSC"),
            ("C", "D", "01/01/2024", "13:00", "17:00", 1200, "ZIM"),
        ],
    );
    let req = request(&net, "A", "D");

    for algorithm in BOTH {
        let outcome = plan(&net, &req, algorithm).unwrap();
        assert_eq!(outcome.itinerary.chain(), "A → B → D");
        assert_eq!(outcome.itinerary.total_cost(), 1800);
    }
}

#[test]
fn overnight_voyage_then_connection() {
    let net = abc(&[
        ("A", "B", "01/01/2024", "20:00", "02:00", 300, "MSC"),
        ("B", "C", "02/01/2024", "04:00", "06:00", 300, "MSC"),
    ]);
    let outcome = plan(&net, &request(&net, "A", "C"), Algorithm::Dijkstra).unwrap();

    assert_eq!(outcome.itinerary.legs()[1].layover, Duration::hours(2));
    assert_eq!(outcome.itinerary.total_time(), Duration::hours(10));
}

// ========== connection rules ==========

#[test]
fn tight_connection_is_rejected() {
    let net = abc(&[
        ("A", "B", "01/01/2024", "06:00", "08:00", 1000, "MSC"),
        ("B", "C", "01/01/2024", "08:40", "12:00", 800, "MSC"),
    ]);

    for algorithm in BOTH {
        let err = plan(&net, &request(&net, "A", "C"), algorithm).unwrap_err();
        assert_eq!(
            err,
            PlanError::NoRouteFound {
                from: port("A"),
                to: port("C"),
                filtered: 0,
            }
        );
    }
}

#[test]
fn connection_of_59_minutes_fails_and_60_succeeds() {
    let short = abc(&[
        ("A", "B", "01/01/2024", "06:00", "08:00", 100, "MSC"),
        ("B", "C", "01/01/2024", "08:59", "10:00", 100, "MSC"),
    ]);
    assert!(matches!(
        plan(&short, &request(&short, "A", "C"), Algorithm::Dijkstra),
        Err(PlanError::NoRouteFound { .. })
    ));

    let exact = abc(&[
        ("A", "B", "01/01/2024", "06:00", "08:00", 100, "MSC"),
        ("B", "C", "01/01/2024", "09:00", "10:00", 100, "MSC"),
    ]);
    let outcome = plan(&exact, &request(&exact, "A", "C"), Algorithm::Dijkstra).unwrap();
    assert_eq!(outcome.itinerary.legs()[1].layover, Duration::hours(1));
}

#[test]
fn connection_gap_wraps_past_midnight() {
    let short = abc(&[
        ("A", "B", "01/01/2024", "20:00", "23:30", 100, "MSC"),
        ("B", "C", "02/01/2024", "00:20", "01:00", 100, "MSC"),
    ]);
    assert!(plan(&short, &request(&short, "A", "C"), Algorithm::Dijkstra).is_err());

    let ok = abc(&[
        ("A", "B", "01/01/2024", "20:00", "23:30", 100, "MSC"),
        ("B", "C", "02/01/2024", "00:30", "01:00", 100, "MSC"),
    ]);
    let outcome = plan(&ok, &request(&ok, "A", "C"), Algorithm::Dijkstra).unwrap();
    assert_eq!(outcome.itinerary.legs()[1].layover, Duration::minutes(60));
}

#[test]
fn custom_min_connection() {
    let net = abc(&[
        ("A", "B", "01/01/2024", "06:00", "08:00", 100, "MSC"),
        ("B", "C", "01/01/2024", "08:30", "10:00", 100, "MSC"),
    ]);
    let config = SearchConfig {
        min_connection_mins: 30,
        ..SearchConfig::default()
    };
    let outcome = Planner::new(&net, &config)
        .search(&request(&net, "A", "C"), Algorithm::Dijkstra)
        .unwrap();
    assert_eq!(outcome.itinerary.total_cost(), 200);
}

#[test]
fn voyages_before_travel_date_are_ignored() {
    let net = abc(&[
        ("A", "B", "01/01/2024", "06:00", "08:00", 100, "MSC"),
        ("A", "B", "05/01/2024", "06:00", "08:00", 150, "MSC"),
        ("B", "C", "05/01/2024", "12:00", "14:00", 100, "MSC"),
    ]);

    let req = SearchRequest::resolve(&net, "A", "C", "02/01/2024").unwrap();
    let outcome = plan(&net, &req, Algorithm::Dijkstra).unwrap();
    assert_eq!(outcome.itinerary.total_cost(), 250);
    assert_eq!(
        outcome.itinerary.legs()[0].date,
        VoyageDate::from_ymd(2024, 1, 5).unwrap()
    );

    let late = SearchRequest::resolve(&net, "A", "C", "06/01/2024").unwrap();
    assert!(matches!(
        plan(&net, &late, Algorithm::Dijkstra),
        Err(PlanError::NoRouteFound { .. })
    ));
}

// ========== docking ==========

#[test]
fn surcharge_applies_over_twelve_hours_ashore() {
    let net = abc(&[
        ("A", "B", "01/01/2024", "06:00", "08:00", 100, "MSC"),
        ("B", "C", "01/01/2024", "22:00", "23:00", 100, "MSC"),
    ]);
    let outcome = plan(&net, &request(&net, "A", "C"), Algorithm::Dijkstra).unwrap();
    let it = &outcome.itinerary;

    // 14h at B: one day spanned plus one, at B's 50 per day.
    assert_eq!(it.legs()[1].layover, Duration::hours(14));
    assert_eq!(it.legs()[1].docking_charge, 100);
    assert_eq!(it.docking_charges(), 100);
    assert_eq!(it.voyage_cost(), 200);
    assert_eq!(it.total_cost(), 300);
}

#[test]
fn exactly_twelve_hours_ashore_is_free() {
    let net = abc(&[
        ("A", "B", "01/01/2024", "06:00", "08:00", 100, "MSC"),
        ("B", "C", "01/01/2024", "20:00", "23:00", 100, "MSC"),
    ]);
    let outcome = plan(&net, &request(&net, "A", "C"), Algorithm::Dijkstra).unwrap();
    assert_eq!(outcome.itinerary.docking_charges(), 0);
    assert_eq!(outcome.itinerary.total_cost(), 200);
}

fn congested() -> Network {
    network(
        &[("A", 10), ("B", 50), ("C", 10), ("D", 10), ("E", 10)],
        &[
            ("A", "B", "01/01/2024", "08:00", "10:00", 100, "MSC"),
            ("B", "C", "01/01/2024", "12:00", "13:00", 100, "MSC"),
            ("B", "D", "01/01/2024", "12:00", "13:00", 100, "MSC"),
            ("B", "E", "01/01/2024", "21:00", "23:00", 100, "MSC"),
        ],
    )
}

#[test]
fn full_docking_slots_add_queue_wait() {
    let net = congested();
    let outcome = plan(&net, &request(&net, "A", "E"), Algorithm::Dijkstra).unwrap();
    let leg = &outcome.itinerary.legs()[1];

    // Two earlier relaxations at B fill both slots until 12:00.
    assert_eq!(leg.layover, Duration::hours(11));
    assert_eq!(leg.queue_wait, Duration::hours(2));
    // 13h on the ground crosses the threshold only because of the queue.
    assert_eq!(leg.docking_charge, 100);
    assert_eq!(outcome.itinerary.queue_wait(), Duration::hours(2));
    assert_eq!(
        outcome.itinerary.total_time(),
        Duration::hours(2) + Duration::hours(13) + Duration::hours(2)
    );
    assert_eq!(outcome.queued_ships, vec![0, 3, 0, 0, 0]);
}

#[test]
fn more_slots_remove_queue_wait() {
    let net = congested();
    let config = SearchConfig {
        docking_slots: 3,
        ..SearchConfig::default()
    };
    let outcome = Planner::new(&net, &config)
        .search(&request(&net, "A", "E"), Algorithm::Dijkstra)
        .unwrap();
    let leg = &outcome.itinerary.legs()[1];

    assert_eq!(leg.queue_wait, Duration::zero());
    assert_eq!(leg.docking_charge, 0);
    assert_eq!(outcome.itinerary.total_cost(), 200);
}

#[test]
fn caller_owned_simulator_is_reset_between_searches() {
    let net = congested();
    let config = SearchConfig::default();
    let planner = Planner::new(&net, &config);
    let req = request(&net, "A", "E");

    // Wrong size on purpose: the planner resizes it.
    let mut docking = DockingSimulator::new(0, 2);
    let first = planner
        .search_with(&req, Algorithm::Dijkstra, &mut docking)
        .unwrap();
    assert_eq!(docking.queued_ships(), first.queued_ships);

    let second = planner
        .search_with(&req, Algorithm::Dijkstra, &mut docking)
        .unwrap();
    assert_eq!(first.queued_ships, second.queued_ships);
    assert_eq!(
        first.itinerary.total_cost(),
        second.itinerary.total_cost()
    );
}

// ========== preferences ==========

fn two_routes() -> Network {
    abc(&[
        ("A", "C", "01/01/2024", "08:00", "14:00", 900, "ZIM"),
        ("A", "B", "01/01/2024", "08:00", "10:00", 300, "MSC"),
        ("B", "C", "01/01/2024", "20:00", "23:00", 300, "MSC"),
    ])
}

#[test]
fn no_preferences_takes_cheapest() {
    let net = two_routes();
    let outcome = plan(&net, &request(&net, "A", "C"), Algorithm::Dijkstra).unwrap();
    assert_eq!(outcome.itinerary.chain(), "A → B → C");
    assert_eq!(outcome.itinerary.total_cost(), 600);
}

#[test]
fn operator_preference() {
    let net = two_routes();
    let prefs = Preferences::none().with_operator(Operator::parse("ZIM").unwrap());
    let req = request(&net, "A", "C").with_preferences(prefs);

    let outcome = plan(&net, &req, Algorithm::Dijkstra).unwrap();
    assert_eq!(outcome.itinerary.chain(), "A → C");
    assert_eq!(outcome.voyages_filtered, 1);
}

#[test]
fn avoided_port_is_never_entered() {
    let net = two_routes();
    let prefs = Preferences::none().with_avoid(port("B"));
    let req = request(&net, "A", "C").with_preferences(prefs);

    let outcome = plan(&net, &req, Algorithm::Dijkstra).unwrap();
    assert_eq!(outcome.itinerary.chain(), "A → C");
    assert_eq!(outcome.voyages_filtered, 1);
}

#[test]
fn max_cost_preference() {
    let net = two_routes();
    let prefs = Preferences::none().with_max_cost(500);
    let req = request(&net, "A", "C").with_preferences(prefs);

    let outcome = plan(&net, &req, Algorithm::Dijkstra).unwrap();
    assert_eq!(outcome.itinerary.total_cost(), 600);
    assert_eq!(outcome.voyages_filtered, 1);
}

#[test]
fn max_time_preference() {
    let net = abc(&[
        ("A", "C", "01/01/2024", "08:00", "14:00", 900, "ZIM"),
        ("A", "B", "01/01/2024", "08:00", "12:00", 300, "MSC"),
        ("B", "C", "01/01/2024", "13:00", "17:00", 300, "MSC"),
    ]);
    let prefs = Preferences::none().with_max_time(Duration::hours(7));
    let req = request(&net, "A", "C").with_preferences(prefs);

    // 8h at sea via B is over the cap; the 6h direct voyage is not.
    let outcome = plan(&net, &req, Algorithm::Dijkstra).unwrap();
    assert_eq!(outcome.itinerary.chain(), "A → C");
    assert_eq!(outcome.itinerary.total_cost(), 900);
    assert_eq!(outcome.voyages_filtered, 0);
}

#[test]
fn max_time_ignores_layover() {
    let net = abc(&[
        ("A", "B", "01/01/2024", "08:00", "10:00", 300, "MSC"),
        ("B", "C", "01/01/2024", "20:00", "22:00", 300, "MSC"),
    ]);
    let prefs = Preferences::none().with_max_time(Duration::hours(5));
    let req = request(&net, "A", "C").with_preferences(prefs);

    // 4h at sea fits; the 10h layover at B does not count towards the cap.
    let outcome = plan(&net, &req, Algorithm::Dijkstra).unwrap();
    assert_eq!(outcome.itinerary.chain(), "A → B → C");
    assert_eq!(outcome.itinerary.legs()[1].layover, Duration::hours(10));
    // The itinerary still reports time ashore.
    assert_eq!(outcome.itinerary.total_time(), Duration::hours(14));
}

#[test]
fn max_time_counts_queue_wait() {
    let net = congested();
    let req = request(&net, "A", "E");

    // A -> B 2h, B -> E 2h at sea, plus 2h queueing at B.
    let within = req
        .clone()
        .with_preferences(Preferences::none().with_max_time(Duration::hours(6)));
    let outcome = plan(&net, &within, Algorithm::Dijkstra).unwrap();
    assert_eq!(outcome.itinerary.legs()[1].queue_wait, Duration::hours(2));

    let tight = req.with_preferences(Preferences::none().with_max_time(Duration::hours(5)));
    assert!(matches!(
        plan(&net, &tight, Algorithm::Dijkstra),
        Err(PlanError::NoRouteFound { filtered: 0, .. })
    ));
}

#[test]
fn filtered_voyages_reported_when_no_route() {
    let net = two_routes();
    let prefs = Preferences::none().with_operator(Operator::parse("MAERSK").unwrap());
    let req = request(&net, "A", "C").with_preferences(prefs);

    let err = plan(&net, &req, Algorithm::Dijkstra).unwrap_err();
    assert_eq!(
        err,
        PlanError::NoRouteFound {
            from: port("A"),
            to: port("C"),
            filtered: 2,
        }
    );
}

// ========== request validation ==========

#[test]
fn same_source_and_destination() {
    let net = two_routes();
    let req = request(&net, "A", "A");
    assert_eq!(
        plan(&net, &req, Algorithm::Dijkstra).unwrap_err(),
        PlanError::DegenerateRequest
    );
}

#[test]
fn avoiding_an_endpoint_conflicts() {
    let net = two_routes();

    let req = request(&net, "A", "C").with_preferences(Preferences::none().with_avoid(port("C")));
    assert_eq!(
        plan(&net, &req, Algorithm::AStar).unwrap_err(),
        PlanError::PreferenceConflict(port("C"))
    );

    let req = request(&net, "A", "C").with_preferences(Preferences::none().with_avoid(port("A")));
    assert_eq!(
        plan(&net, &req, Algorithm::Dijkstra).unwrap_err(),
        PlanError::PreferenceConflict(port("A"))
    );
}

#[test]
fn resolve_rejects_unknown_port_and_bad_date() {
    let net = two_routes();

    assert_eq!(
        SearchRequest::resolve(&net, "A", "Atlantis", "01/01/2024").unwrap_err(),
        PlanError::InvalidPort("Atlantis".into())
    );
    assert_eq!(
        SearchRequest::resolve(&net, "Atlantis", "C", "01/01/2024").unwrap_err(),
        PlanError::InvalidPort("Atlantis".into())
    );
    assert!(matches!(
        SearchRequest::resolve(&net, "A", "C", "2024/01/01"),
        Err(PlanError::InvalidDate(_))
    ));

    let req = SearchRequest::resolve(&net, "A", "C", "2024-01-01").unwrap();
    assert_eq!(req.source, PortId(0));
    assert_eq!(req.destination, PortId(2));
}

#[test]
fn unknown_port_id_is_invalid() {
    let net = two_routes();
    let req = SearchRequest::new(
        PortId(0),
        PortId(9),
        VoyageDate::from_ymd(2024, 1, 1).unwrap(),
    );
    assert_eq!(
        plan(&net, &req, Algorithm::Dijkstra).unwrap_err(),
        PlanError::InvalidPort("9".into())
    );
}

// ========== algorithm selection ==========

#[test]
fn choose_astar_only_for_direct_unfiltered_requests() {
    let net = two_routes();
    let config = SearchConfig::default();
    let planner = Planner::new(&net, &config);

    assert_eq!(
        planner.choose_algorithm(&request(&net, "A", "C")),
        Algorithm::AStar
    );
    assert_eq!(
        planner.choose_algorithm(&request(&net, "B", "C")),
        Algorithm::AStar
    );
    // Nothing sails from C.
    assert_eq!(
        planner.choose_algorithm(&request(&net, "C", "A")),
        Algorithm::Dijkstra
    );

    let filtered = request(&net, "A", "C").with_preferences(Preferences::none().with_max_cost(10_000));
    assert_eq!(planner.choose_algorithm(&filtered), Algorithm::Dijkstra);
}

// ========== properties ==========

mod proptests {
    use super::*;
    use proptest::prelude::*;

    const OPERATORS: [&str; 2] = ["MSC", "ZIM"];

    /// (origin, destination, day, departure, duration, cost, operator)
    type RawVoyage = (usize, usize, u32, u16, u16, i64, usize);

    fn raw_voyage(ports: usize) -> impl Strategy<Value = RawVoyage> {
        (
            0..ports,
            0..ports,
            1u32..=3,
            0u16..1440,
            1u16..720,
            1i64..2000,
            0..OPERATORS.len(),
        )
    }

    fn clock(minutes: u16) -> String {
        let minutes = minutes % 1440;
        format!("{:02}:{:02}", minutes / 60, minutes % 60)
    }

    /// Random networks of 3-6 ports with a handful of voyages.
    fn network_strategy() -> impl Strategy<Value = Network> {
        (3usize..7).prop_flat_map(|ports| {
            (
                prop::collection::vec(0i64..200, ports),
                prop::collection::vec(raw_voyage(ports), 0..25),
            )
                .prop_map(|(charges, voyages)| {
                    let mut builder = NetworkBuilder::new();
                    for (i, charge) in charges.iter().enumerate() {
                        builder = builder.port(&format!("P{i}"), *charge);
                    }
                    for (o, d, day, dep, dur, cost, op) in voyages {
                        builder = builder.voyage(
                            &format!("P{o}"),
                            &format!("P{d}"),
                            &format!("{day:02}/01/2024"),
                            &clock(dep),
                            &clock(dep + dur),
                            cost,
                            OPERATORS[op],
                        );
                    }
                    builder.build()
                })
        })
    }

    fn request_between(source: usize, destination: usize) -> SearchRequest {
        SearchRequest::new(
            PortId(source),
            PortId(destination),
            VoyageDate::from_ymd(2024, 1, 1).unwrap(),
        )
    }

    proptest! {
        /// Any itinerary found is consistent with its own accounting
        #[test]
        fn itinerary_accounting_is_consistent(net in network_strategy(), dest in 1usize..3) {
            let config = SearchConfig::default();
            let planner = Planner::new(&net, &config);

            for algorithm in BOTH {
                match planner.search(&request_between(0, dest), algorithm) {
                    Ok(outcome) => {
                        let it = &outcome.itinerary;
                        prop_assert_eq!(it.origin().map(PortName::as_str), Some("P0"));
                        let dest_name = format!("P{dest}");
                        prop_assert_eq!(it.destination().map(PortName::as_str), Some(dest_name.as_str()));
                        prop_assert_eq!(it.total_cost(), it.voyage_cost() + it.docking_charges());

                        let summed = it
                            .legs()
                            .iter()
                            .fold(Duration::zero(), |acc, leg| acc + leg.elapsed());
                        prop_assert_eq!(it.total_time(), summed);

                        for leg in it.legs().iter().skip(1) {
                            prop_assert!(leg.layover >= config.min_connection());
                        }
                        prop_assert!(outcome.nodes_finalized >= 2);
                    }
                    Err(PlanError::NoRouteFound { .. }) => {}
                    Err(other) => {
                        prop_assert!(false, "unexpected error: {}", other);
                    }
                }
            }
        }

        /// A* and Dijkstra agree on the cheapest cost, or both find no route
        #[test]
        fn astar_matches_dijkstra(net in network_strategy(), dest in 1usize..3) {
            let config = SearchConfig::default();
            let planner = Planner::new(&net, &config);
            let req = request_between(0, dest);

            let dijkstra = planner.search(&req, Algorithm::Dijkstra);
            let astar = planner.search(&req, Algorithm::AStar);

            match (dijkstra, astar) {
                (Ok(d), Ok(a)) => {
                    prop_assert_eq!(d.itinerary.total_cost(), a.itinerary.total_cost());
                }
                (Err(PlanError::NoRouteFound { .. }), Err(PlanError::NoRouteFound { .. })) => {}
                (d, a) => {
                    prop_assert!(
                        false,
                        "Dijkstra gave {:?}, A* gave {:?}",
                        d.map(|o| o.itinerary.total_cost()),
                        a.map(|o| o.itinerary.total_cost())
                    );
                }
            }
        }

        /// The A* estimate never exceeds the cost Dijkstra actually finds
        #[test]
        fn heuristic_is_admissible(net in network_strategy()) {
            let config = SearchConfig::default();
            let planner = Planner::new(&net, &config);
            let dest = PortId(net.port_count() - 1);
            let heuristic = Heuristic::towards(&net, dest);

            for source in 0..dest.index() {
                if let Ok(outcome) = planner.search(&request_between(source, dest.index()), Algorithm::Dijkstra) {
                    prop_assert!(
                        heuristic.estimate(PortId(source)) <= outcome.itinerary.total_cost(),
                        "h(P{}) = {} exceeds cost {}",
                        source,
                        heuristic.estimate(PortId(source)),
                        outcome.itinerary.total_cost()
                    );
                }
            }
        }
    }
}
