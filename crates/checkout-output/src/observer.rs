//! `SimOutputObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use checkout_core::{CustomerKind, ServiceRate, Tick};
use checkout_register::RegisterBank;
use checkout_sim::{Departure, SimObserver, SimReport, TickSummary};

use crate::row::{DepartureRow, RegisterSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes tick summaries, register snapshots and
/// departures to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_departed(&mut self, departure: &Departure) {
        let row = DepartureRow {
            customer_id:   departure.customer.0,
            kind:          match departure.kind {
                CustomerKind::A => 'A',
                CustomerKind::B => 'B',
            },
            register_id:   departure.register.0,
            arrival:       departure.arrival.0,
            items:         departure.items,
            finished:      departure.finished.0,
            time_in_store: departure.time_in_store(),
        };
        let result = self.writer.write_departure(&row);
        self.store_err(result);
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        let row = TickSummaryRow {
            tick:           summary.tick.0,
            released:       summary.released as u64,
            departed:       summary.departed as u64,
            queued:         summary.queued as u64,
            busy_registers: summary.busy_registers as u64,
            remaining:      summary.remaining.to_string(),
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, bank: &RegisterBank) {
        let rows: Vec<RegisterSnapshotRow> = bank
            .iter()
            .map(|register| RegisterSnapshotRow {
                tick:        tick.0,
                register_id: register.id.0,
                training:    register.rate == ServiceRate::Training,
                queue_len:   register.queue_len() as u64,
                head_id:     register.head().map_or(0, |c| c.id.0),
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_register_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _report: &SimReport) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
