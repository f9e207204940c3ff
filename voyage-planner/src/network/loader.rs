//! Loading a network from whitespace-separated schedule files.
//!
//! Port file lines are `NAME CHARGE`. Route file lines are
//! `ORIGIN DEST DATE DEPART ARRIVE COST OPERATOR`. Blank lines and lines
//! starting with `#` are ignored. A malformed line is skipped and noted in
//! the [`LoadReport`]; only an unreadable file fails the load.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{Network, NetworkBuilder};

const PORT_FIELDS: usize = 2;
const ROUTE_FIELDS: usize = 7;

/// Errors that stop a network from loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A schedule file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Which schedule file a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSource {
    Ports,
    Routes,
}

impl fmt::Display for RecordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordSource::Ports => f.write_str("ports"),
            RecordSource::Routes => f.write_str("routes"),
        }
    }
}

/// A record that was not loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// File the record came from
    pub source: RecordSource,
    /// 1-based line number
    pub line: usize,
    /// Why it was skipped
    pub reason: String,
}

/// Summary of a load: what was kept and what was skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub ports_loaded: usize,
    pub voyages_loaded: usize,
    pub skipped: Vec<SkippedRecord>,
}

impl LoadReport {
    /// Returns true if every record was loaded.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    fn skip(&mut self, source: RecordSource, line: usize, reason: String) {
        warn!(file = %source, line, reason = %reason, "skipping record");
        self.skipped.push(SkippedRecord {
            source,
            line,
            reason,
        });
    }
}

/// Read both schedule files and build a network.
///
/// # Errors
///
/// Returns `Err` only if a file cannot be read. Malformed records are
/// skipped and listed in the returned report.
pub fn load_network(
    ports_path: impl AsRef<Path>,
    routes_path: impl AsRef<Path>,
) -> Result<(Network, LoadReport), LoadError> {
    let ports = read(ports_path.as_ref())?;
    let routes = read(routes_path.as_ref())?;
    Ok(parse_network(&ports, &routes))
}

/// Build a network from in-memory port and route text.
pub fn parse_network(ports: &str, routes: &str) -> (Network, LoadReport) {
    let mut builder = NetworkBuilder::new();
    let mut report = LoadReport::default();

    parse_ports(&mut builder, ports, &mut report);
    parse_routes(&mut builder, routes, &mut report);

    debug!(
        ports = report.ports_loaded,
        voyages = report.voyages_loaded,
        skipped = report.skipped.len(),
        "network loaded"
    );

    (builder.build(), report)
}

/// Add every valid `NAME CHARGE` line in `text` to the builder.
pub fn parse_ports(builder: &mut NetworkBuilder, text: &str, report: &mut LoadReport) {
    for (line, fields) in records(text) {
        let result = match fields.as_slice() {
            [name, charge] => parse_number(charge, "daily charge")
                .and_then(|charge| builder.try_port(name, charge).map_err(|e| e.to_string())),
            _ => Err(field_count(PORT_FIELDS, fields.len())),
        };

        match result {
            Ok(_) => report.ports_loaded += 1,
            Err(reason) => report.skip(RecordSource::Ports, line, reason),
        }
    }
}

/// Add every valid route line in `text` to the builder.
///
/// Ports must already be present, so call [`parse_ports`] first.
pub fn parse_routes(builder: &mut NetworkBuilder, text: &str, report: &mut LoadReport) {
    for (line, fields) in records(text) {
        let result = match fields.as_slice() {
            [origin, dest, date, dep, arr, cost, operator] => parse_number(cost, "cost")
                .and_then(|cost| {
                    builder
                        .try_voyage(origin, dest, date, dep, arr, cost, operator)
                        .map_err(|e| e.to_string())
                }),
            _ => Err(field_count(ROUTE_FIELDS, fields.len())),
        };

        match result {
            Ok(()) => report.voyages_loaded += 1,
            Err(reason) => report.skip(RecordSource::Routes, line, reason),
        }
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Non-blank, non-comment lines split into fields, with 1-based line numbers.
fn records(text: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    text.lines().enumerate().filter_map(|(i, line)| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }
        Some((i + 1, trimmed.split_whitespace().collect()))
    })
}

fn parse_number(s: &str, field: &'static str) -> Result<i64, String> {
    s.parse::<i64>().map_err(|_| format!("invalid {field}: {s:?}"))
}

fn field_count(expected: usize, found: usize) -> String {
    format!("expected {expected} fields, found {found}")
}
