//! The `OutputWriter` trait implemented by backend writers.

use crate::{DepartureRow, OutputResult, RegisterSnapshotRow, TickSummaryRow};

/// Trait implemented by trace writers.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write a batch of register snapshots, one row per register.
    fn write_register_snapshots(&mut self, rows: &[RegisterSnapshotRow]) -> OutputResult<()>;

    /// Write one departure row.
    fn write_departure(&mut self, row: &DepartureRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
