//! Scenario file loader.
//!
//! # Format
//!
//! The first non-blank line is the register count.  Every further non-blank
//! line is one customer: type, arrival tick (minutes), item count, separated
//! by any amount of whitespace.
//!
//! ```text
//! 2
//! A 1 5
//! B 2 1
//! A 3 5
//! ```
//!
//! Customers are numbered in file order starting at 1.
//!
//! # Errors
//!
//! Every failure maps onto a [`CheckoutError`] before anything reaches the
//! simulation:
//!
//! | Problem                                     | Error                   |
//! |---------------------------------------------|-------------------------|
//! | file unreadable, input empty                | `MissingInput`          |
//! | first line not an integer ≥ 1               | `InvalidRegisterCount`  |
//! | wrong field count, unknown type, arrival < 0, items ≤ 0 | `InvalidCustomerRecord` (1-based line) |

use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use serde::Deserialize;
use tracing::debug;

use checkout_core::{
    CheckoutError, CheckoutResult, CustomerKind, CustomerSpec, SimConfig,
};

// ── Customer record ───────────────────────────────────────────────────────────

/// One customer line as written.  Numbers are signed so that negative values
/// are reported as invalid records rather than generic parse failures.
#[derive(Deserialize)]
struct CustomerRecord {
    kind:    String,
    arrival: i64,
    items:   i64,
}

// ── Scenario ──────────────────────────────────────────────────────────────────

/// A fully validated scenario: everything a run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub register_count: u32,
    /// Customers in input order.
    pub customers:      Vec<CustomerSpec>,
}

impl Scenario {
    /// Default [`SimConfig`] for this scenario's register count.
    pub fn config(&self) -> SimConfig {
        SimConfig::new(self.register_count)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a scenario from a file.
pub fn load_scenario_file(path: &Path) -> CheckoutResult<Scenario> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CheckoutError::MissingInput(format!("{}: {e}", path.display())))?;
    debug!(path = %path.display(), bytes = text.len(), "read scenario file");
    load_scenario_str(&text)
}

/// Like [`load_scenario_file`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or reading stdin.
pub fn load_scenario_reader<R: Read>(mut reader: R) -> CheckoutResult<Scenario> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| CheckoutError::MissingInput(e.to_string()))?;
    load_scenario_str(&text)
}

/// Parse a scenario held in memory.
pub fn load_scenario_str(text: &str) -> CheckoutResult<Scenario> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let Some((_, first)) = lines.next() else {
        return Err(CheckoutError::MissingInput("input is empty".into()));
    };
    let register_count = parse_register_count(first)?;

    let customers = lines
        .map(|(line_no, line)| parse_customer(line_no, line))
        .collect::<CheckoutResult<Vec<_>>>()?;

    debug!(register_count, customers = customers.len(), "loaded scenario");
    Ok(Scenario { register_count, customers })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_register_count(s: &str) -> CheckoutResult<u32> {
    s.parse::<u32>()
        .ok()
        .filter(|&n| n >= 1)
        .ok_or_else(|| CheckoutError::InvalidRegisterCount(s.to_string()))
}

fn parse_customer(line: usize, text: &str) -> CheckoutResult<CustomerSpec> {
    let invalid = |reason: String| CheckoutError::InvalidCustomerRecord { line, reason };

    let record = StringRecord::from(text.split_whitespace().collect::<Vec<_>>());
    if record.len() != 3 {
        return Err(invalid(format!(
            "expected 3 fields \"<type> <arrival> <items>\", found {}",
            record.len()
        )));
    }
    let row: CustomerRecord = record.deserialize(None).map_err(|e| invalid(e.to_string()))?;

    let kind = row.kind.parse::<CustomerKind>().map_err(invalid)?;
    let arrival = u64::try_from(row.arrival)
        .map_err(|_| invalid(format!("arrival tick {} is negative", row.arrival)))?;
    if row.items <= 0 {
        return Err(invalid(format!("item count {} must be positive", row.items)));
    }
    let items = u32::try_from(row.items)
        .map_err(|_| invalid(format!("item count {} is too large", row.items)))?;

    let spec = CustomerSpec::new(kind, arrival, items);
    spec.validate(line)?;
    Ok(spec)
}
