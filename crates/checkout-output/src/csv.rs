//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `ticks.csv`
//! - `registers.csv`
//! - `departures.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DepartureRow, OutputResult, RegisterSnapshotRow, TickSummaryRow};

pub const TICKS_FILE:      &str = "ticks.csv";
pub const REGISTERS_FILE:  &str = "registers.csv";
pub const DEPARTURES_FILE: &str = "departures.csv";

/// Writes a run's trace to three CSV files.
pub struct CsvWriter {
    ticks:      Writer<File>,
    registers:  Writer<File>,
    departures: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the three CSV files and
    /// write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut ticks = Writer::from_path(dir.join(TICKS_FILE))?;
        ticks.write_record(["tick", "released", "departed", "queued", "busy_registers", "remaining"])?;

        let mut registers = Writer::from_path(dir.join(REGISTERS_FILE))?;
        registers.write_record(["tick", "register_id", "training", "queue_len", "head_id"])?;

        let mut departures = Writer::from_path(dir.join(DEPARTURES_FILE))?;
        departures.write_record([
            "customer_id", "kind", "register_id", "arrival", "items", "finished", "time_in_store",
        ])?;

        Ok(Self {
            ticks,
            registers,
            departures,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.ticks.write_record(&[
            row.tick.to_string(),
            row.released.to_string(),
            row.departed.to_string(),
            row.queued.to_string(),
            row.busy_registers.to_string(),
            row.remaining.clone(),
        ])?;
        Ok(())
    }

    fn write_register_snapshots(&mut self, rows: &[RegisterSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.registers.write_record(&[
                row.tick.to_string(),
                row.register_id.to_string(),
                (row.training as u8).to_string(),
                row.queue_len.to_string(),
                row.head_id.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_departure(&mut self, row: &DepartureRow) -> OutputResult<()> {
        self.departures.write_record(&[
            row.customer_id.to_string(),
            row.kind.to_string(),
            row.register_id.to_string(),
            row.arrival.to_string(),
            row.items.to_string(),
            row.finished.to_string(),
            row.time_in_store.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.ticks.flush()?;
        self.registers.flush()?;
        self.departures.flush()?;
        Ok(())
    }
}
