//! Capacity estimation formulas.
//!
//! A pure function of (component category, numeric inputs): no store access,
//! no state. Each category with a formula derives a handful of sizing
//! numbers and a human-readable explanation embedding them with thousands
//! separators. Categories without a formula return a fixed placeholder
//! result, which is a successful outcome rather than an error.
//!
//! Omitted inputs fall back to the documented defaults. Supplied inputs are
//! validated: every value must be a finite, non-negative number, and
//! `players_per_server` must be at least 1 (it is a divisor).

use serde_json::{Map, Value, json};
use std::collections::BTreeMap;

use ludo_core::{Error, Result};

use crate::model::Category;

/// Default concurrent player count for game server sizing.
const DEFAULT_CONCURRENT_PLAYERS: f64 = 26_000_000.0;
/// Default per-instance player capacity.
const DEFAULT_PLAYERS_PER_SERVER: f64 = 100.0;
/// Default database read throughput.
const DEFAULT_READS_PER_SECOND: f64 = 2_000_000.0;
/// Default database write throughput.
const DEFAULT_WRITES_PER_SECOND: f64 = 500_000.0;
/// Default load balancer request throughput.
const DEFAULT_REQUESTS_PER_SECOND: f64 = 2_000_000.0;

/// Outcome of a capacity calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    /// Derived metric name to value.
    pub result: Map<String, Value>,
    /// Natural-language summary embedding the computed numbers.
    pub explanation: String,
}

/// Computes derived capacity metrics for the given category and inputs.
///
/// # Errors
///
/// Returns `Error::InvalidInput` if any supplied input is non-finite or
/// negative, or if `players_per_server` is below 1.
pub fn calculate(category: Category, inputs: &BTreeMap<String, f64>) -> Result<Calculation> {
    validate_inputs(inputs)?;

    let calculation = match category {
        Category::GameServer => game_server(inputs),
        Category::Database => database(inputs),
        Category::LoadBalancer => load_balancer(inputs),
        _ => Calculation {
            result: as_object(json!({
                "message": "Capacity calculation not implemented for this component type"
            })),
            explanation: "Capacity calculation not available for this component.".to_string(),
        },
    };
    Ok(calculation)
}

fn validate_inputs(inputs: &BTreeMap<String, f64>) -> Result<()> {
    for (name, value) in inputs {
        if !value.is_finite() {
            return Err(Error::InvalidInput(format!(
                "input '{name}' must be a finite number"
            )));
        }
        if *value < 0.0 {
            return Err(Error::InvalidInput(format!(
                "input '{name}' must not be negative (got {value})"
            )));
        }
    }
    if let Some(per_server) = inputs.get("players_per_server") {
        if *per_server < 1.0 {
            return Err(Error::InvalidInput(format!(
                "input 'players_per_server' must be at least 1 (got {per_server})"
            )));
        }
    }
    Ok(())
}

fn input_or(inputs: &BTreeMap<String, f64>, key: &str, default: f64) -> f64 {
    inputs.get(key).copied().unwrap_or(default)
}

fn game_server(inputs: &BTreeMap<String, f64>) -> Calculation {
    let players = input_or(inputs, "concurrent_players", DEFAULT_CONCURRENT_PLAYERS);
    let per_server = input_or(inputs, "players_per_server", DEFAULT_PLAYERS_PER_SERVER);

    // Totals derive from the float server count, not the converted one:
    // integer multiplication can overflow for very large (still valid) inputs.
    let servers = (players / per_server).ceil();
    let servers_needed = to_count(servers);

    Calculation {
        result: as_object(json!({
            "servers_needed": servers_needed,
            "cpu_cores_total": to_count(servers * 4.0),
            "memory_gb_total": to_count(servers * 8.0),
            "network_gbps": servers * 0.1
        })),
        explanation: format!(
            "For {} concurrent players with {} players per server, you need {} game servers.",
            grouped(players),
            plain(per_server),
            group_thousands(servers_needed)
        ),
    }
}

fn database(inputs: &BTreeMap<String, f64>) -> Calculation {
    let reads = input_or(inputs, "reads_per_second", DEFAULT_READS_PER_SECOND);
    let writes = input_or(inputs, "writes_per_second", DEFAULT_WRITES_PER_SECOND);

    let read_replicas = to_count((reads / 10_000.0).floor()).max(1);
    let write_masters = to_count((writes / 5_000.0).floor()).max(1);
    let storage_tb = to_count(((reads + writes) * 0.001).floor());
    let shards = to_count(((reads + writes) / 50_000.0).floor()).max(1);

    Calculation {
        result: as_object(json!({
            "read_replicas_needed": read_replicas,
            "write_masters_needed": write_masters,
            "storage_tb_needed": storage_tb,
            "shards_needed": shards
        })),
        explanation: format!(
            "For {} reads/sec and {} writes/sec, you need {read_replicas} read replicas and \
             {shards} shards.",
            grouped(reads),
            grouped(writes)
        ),
    }
}

fn load_balancer(inputs: &BTreeMap<String, f64>) -> Calculation {
    let rps = input_or(inputs, "requests_per_second", DEFAULT_REQUESTS_PER_SECOND);

    let load_balancers = to_count((rps / 100_000.0).floor()).max(1);
    let bandwidth_gbps = to_count((rps * 0.01).floor());
    let ssl_capacity = to_count((rps * 0.8).floor());
    let health_checks = to_count((rps * 0.1).floor());

    Calculation {
        result: as_object(json!({
            "load_balancers_needed": load_balancers,
            "bandwidth_gbps": bandwidth_gbps,
            "ssl_termination_capacity": ssl_capacity,
            "health_checks_per_second": health_checks
        })),
        explanation: format!(
            "For {} requests/sec, you need {load_balancers} load balancers with \
             {bandwidth_gbps} Gbps bandwidth.",
            grouped(rps)
        ),
    }
}

/// Converts a non-negative, already-rounded float to a count.
///
/// The `as` cast saturates at `u64::MAX`, so counts derived from extreme
/// inputs clamp instead of wrapping or panicking.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_count(value: f64) -> u64 {
    value as u64
}

fn as_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Formats a validated input for display, trimming a trailing `.0`.
fn plain(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Formats a validated input with thousands separators on the integer part.
///
/// Fractional digits are preserved untouched after the grouped integer part.
fn grouped(value: f64) -> String {
    if value.fract() == 0.0 {
        return group_thousands(to_count(value));
    }
    let rendered = format!("{value}");
    match rendered.split_once('.') {
        Some((int_part, frac)) => match int_part.parse::<u64>() {
            Ok(n) => format!("{}.{frac}", group_thousands(n)),
            // Scientific notation for extreme magnitudes; leave as rendered.
            Err(_) => rendered,
        },
        None => rendered,
    }
}

/// Renders `1234567` as `1,234,567`.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
