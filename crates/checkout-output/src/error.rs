//! Error types for checkout-output.

use thiserror::Error;

/// Failures while creating or appending to the trace files
/// (`ticks.csv`, `registers.csv`, `departures.csv`).
///
/// The sim never sees these: [`SimOutputObserver`][crate::SimOutputObserver]
/// keeps the first one for the caller to take after the run.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The trace directory or one of its files could not be created.
    #[error("trace file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A row could not be written or flushed.
    #[error("trace CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
