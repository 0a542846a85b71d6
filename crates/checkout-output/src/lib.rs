//! `checkout-output` — trace writers for checkout simulation runs.
//!
//! | Backend | Files created                                        |
//! |---------|------------------------------------------------------|
//! | CSV     | `ticks.csv`, `registers.csv`, `departures.csv`       |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `checkout_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use checkout_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./trace"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! let report = sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{DepartureRow, RegisterSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
