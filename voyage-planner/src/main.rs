//! Command line front end for the voyage planner.

use std::process;

use chrono::Duration;
use clap::{Arg, ArgMatches, Command, value_parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use voyage_planner::domain::{Operator, PortName, Preferences};
use voyage_planner::network::{LoadError, Network, load_network};
use voyage_planner::planner::{Algorithm, PlanError, Planner, SearchConfig, SearchRequest};
use voyage_planner::report::{self, dto};
use voyage_planner::store::ItineraryStore;

const PORTS_ARG: &str = "ports";
const ROUTES_ARG: &str = "routes";
const FROM_ARG: &str = "from";
const TO_ARG: &str = "to";
const DATE_ARG: &str = "date";
const ALGORITHM_ARG: &str = "algorithm";
const OPERATOR_ARG: &str = "operator";
const AVOID_ARG: &str = "avoid";
const MAX_COST_ARG: &str = "max-cost";
const MAX_HOURS_ARG: &str = "max-hours";
const MIN_CONNECTION_ARG: &str = "min-connection";
const SLOTS_ARG: &str = "slots";
const SERVICE_ARG: &str = "service-minutes";
const FORMAT_ARG: &str = "format";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid {arg}: {reason}")]
    Argument { arg: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("voyage-planner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Plans cheapest multi-leg voyages across a port network")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(network_command())
        .subcommand(search_args(Command::new("plan").about(
            "Find the cheapest itinerary between two ports",
        )))
        .subcommand(search_args(Command::new("compare").about(
            "Compare the cheapest itinerary with the best one under the given preferences",
        )))
        .get_matches();

    let format = match matches.subcommand() {
        Some((_, sub)) => output_format(sub),
        None => Format::Text,
    };

    let result = match matches.subcommand() {
        Some(("network", sub)) => run_network(sub),
        Some(("plan", sub)) => run_plan(sub, format),
        Some(("compare", sub)) => run_compare(sub, format),
        _ => {
            eprintln!("No subcommand was used. Use -h to print help information.");
            process::exit(1);
        }
    };

    if let Err(err) = result {
        let reported = match (format, &err) {
            (Format::Json, CliError::Plan(plan)) => {
                print_json(&dto::ErrorResponse::from_error(plan))
            }
            (Format::Json, other) => print_json(&dto::ErrorResponse::message(other)),
            (Format::Text, _) => {
                eprintln!("error: {err}");
                Ok(())
            }
        };
        if let Err(json_err) = reported {
            eprintln!("error: {err}");
            eprintln!("error: {json_err}");
        }
        process::exit(1);
    }
}

fn file_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(PORTS_ARG)
                .help("Port file: one `NAME CHARGE` record per line")
                .long(PORTS_ARG)
                .short('p')
                .required(true),
        )
        .arg(
            Arg::new(ROUTES_ARG)
                .help("Route file: `ORIGIN DEST DATE DEPART ARRIVE COST OPERATOR` per line")
                .long(ROUTES_ARG)
                .short('r')
                .required(true),
        )
}

fn network_command() -> Command {
    file_args(Command::new("network").about("List ports and their voyages"))
}

fn search_args(command: Command) -> Command {
    file_args(command)
        .arg(Arg::new(FROM_ARG).help("Port to sail from").long(FROM_ARG).required(true))
        .arg(Arg::new(TO_ARG).help("Port to reach").long(TO_ARG).required(true))
        .arg(
            Arg::new(DATE_ARG)
                .help("Earliest travel date, DD/MM/YYYY or YYYY-MM-DD")
                .long(DATE_ARG)
                .required(true),
        )
        .arg(
            Arg::new(ALGORITHM_ARG)
                .help("Search algorithm")
                .long(ALGORITHM_ARG)
                .value_parser(["auto", "dijkstra", "astar"])
                .default_value("auto"),
        )
        .arg(
            Arg::new(OPERATOR_ARG)
                .help("Only use voyages run by this operator")
                .long(OPERATOR_ARG),
        )
        .arg(
            Arg::new(AVOID_ARG)
                .help("Never call at this port")
                .long(AVOID_ARG),
        )
        .arg(
            Arg::new(MAX_COST_ARG)
                .help("Skip voyages whose fare is above this")
                .long(MAX_COST_ARG)
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new(MAX_HOURS_ARG)
                .help("Discard itineraries taking longer than this many hours")
                .long(MAX_HOURS_ARG)
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new(MIN_CONNECTION_ARG)
                .help("Minimum minutes between arriving and departing at a port")
                .long(MIN_CONNECTION_ARG)
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new(SLOTS_ARG)
                .help("Docking slots at every port")
                .long(SLOTS_ARG)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new(SERVICE_ARG)
                .help("Minutes a docked ship occupies its slot")
                .long(SERVICE_ARG)
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new(FORMAT_ARG)
                .help("Output format")
                .long(FORMAT_ARG)
                .value_parser(["text", "json"])
                .default_value("text"),
        )
}

fn run_network(matches: &ArgMatches) -> Result<(), CliError> {
    let network = load(matches)?;
    print!("{}", report::network_listing(&network));
    Ok(())
}

fn run_plan(matches: &ArgMatches, format: Format) -> Result<(), CliError> {
    let network = load(matches)?;
    let config = search_config(matches);
    let planner = Planner::new(&network, &config);

    let request = search_request(&network, matches)?;
    let algorithm = algorithm(matches, &planner, &request);
    let outcome = planner.search(&request, algorithm)?;

    match format {
        Format::Text => print!("{}", report::search_outcome(&outcome, &network)),
        Format::Json => print_json(&dto::OutcomeResult::from_outcome(&outcome, &network))?,
    }
    Ok(())
}

fn run_compare(matches: &ArgMatches, format: Format) -> Result<(), CliError> {
    let network = load(matches)?;
    let config = search_config(matches);
    let planner = Planner::new(&network, &config);

    let preferred = search_request(&network, matches)?;
    let cheapest = preferred.clone().with_preferences(Preferences::none());

    let mut store = ItineraryStore::with_capacity(2);
    for (name, request) in [("Cheapest", &cheapest), ("Preferred", &preferred)] {
        let algorithm = algorithm(matches, &planner, request);
        let outcome = planner.search(request, algorithm)?;
        let slot = store
            .save(outcome.itinerary.with_name(name))
            .map_err(PlanError::from)?;
        info!(slot, name, "itinerary saved");
    }

    let (Some(first), Some(second), Some(cmp)) = (store.get(1), store.get(2), store.compare(1, 2))
    else {
        return Ok(());
    };

    match format {
        Format::Text => print!("{}", report::comparison(first, second, &cmp)),
        Format::Json => print_json(&dto::ComparisonResult::from_comparison(first, second, &cmp))?,
    }
    Ok(())
}

fn load(matches: &ArgMatches) -> Result<Network, CliError> {
    let ports = required(matches, PORTS_ARG)?;
    let routes = required(matches, ROUTES_ARG)?;
    let (network, load_report) = load_network(ports, routes)?;

    let warnings = report::load_warnings(&load_report);
    if !warnings.is_empty() {
        eprint!("{warnings}");
    }
    Ok(network)
}

fn search_config(matches: &ArgMatches) -> SearchConfig {
    let defaults = SearchConfig::default();
    SearchConfig::new(
        matches
            .get_one::<u32>(MIN_CONNECTION_ARG)
            .map_or(defaults.min_connection_mins, |m| i64::from(*m)),
        matches
            .get_one::<usize>(SLOTS_ARG)
            .copied()
            .unwrap_or(defaults.docking_slots),
        matches
            .get_one::<u32>(SERVICE_ARG)
            .map_or(defaults.service_mins, |m| i64::from(*m)),
        defaults.extended_layover_mins,
    )
}

fn search_request(network: &Network, matches: &ArgMatches) -> Result<SearchRequest, CliError> {
    let request = SearchRequest::resolve(
        network,
        required(matches, FROM_ARG)?,
        required(matches, TO_ARG)?,
        required(matches, DATE_ARG)?,
    )?;
    Ok(request.with_preferences(preferences(matches)?))
}

fn preferences(matches: &ArgMatches) -> Result<Preferences, CliError> {
    let mut prefs = Preferences::none();

    if let Some(operator) = matches.get_one::<String>(OPERATOR_ARG) {
        let operator = Operator::parse(operator).map_err(|e| CliError::Argument {
            arg: OPERATOR_ARG,
            reason: e.to_string(),
        })?;
        prefs = prefs.with_operator(operator);
    }
    if let Some(avoid) = matches.get_one::<String>(AVOID_ARG) {
        let port = PortName::parse(avoid).map_err(|e| CliError::Argument {
            arg: AVOID_ARG,
            reason: e.to_string(),
        })?;
        prefs = prefs.with_avoid(port);
    }
    if let Some(max_cost) = matches.get_one::<u32>(MAX_COST_ARG) {
        prefs = prefs.with_max_cost(*max_cost);
    }
    if let Some(hours) = matches.get_one::<u32>(MAX_HOURS_ARG) {
        prefs = prefs.with_max_time(Duration::hours(i64::from(*hours)));
    }

    Ok(prefs)
}

fn algorithm(matches: &ArgMatches, planner: &Planner<'_>, request: &SearchRequest) -> Algorithm {
    match matches.get_one::<String>(ALGORITHM_ARG).map(String::as_str) {
        Some("dijkstra") => Algorithm::Dijkstra,
        Some("astar") => Algorithm::AStar,
        _ => planner.choose_algorithm(request),
    }
}

fn output_format(matches: &ArgMatches) -> Format {
    match matches.try_get_one::<String>(FORMAT_ARG) {
        Ok(Some(format)) if format == "json" => Format::Json,
        _ => Format::Text,
    }
}

fn required<'a>(matches: &'a ArgMatches, arg: &'static str) -> Result<&'a str, CliError> {
    matches
        .get_one::<String>(arg)
        .map(String::as_str)
        .ok_or_else(|| CliError::Argument {
            arg,
            reason: "missing".to_string(),
        })
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
