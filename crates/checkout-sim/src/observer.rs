//! Simulation observer trait for progress reporting and data collection.

use checkout_core::{CustomerId, RegisterId, Tick, Work};
use checkout_register::RegisterBank;

use crate::{Departure, SimReport};

/// Counts for one processed tick, passed to [`SimObserver::on_tick_end`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummary {
    pub tick:           Tick,
    /// Customers released and assigned this tick.
    pub released:       usize,
    /// Customers that finished checking out this tick.
    pub departed:       usize,
    /// Customers in any queue after the advance.
    pub queued:         usize,
    /// Registers with a non-empty queue after the advance.
    pub busy_registers: usize,
    /// Total remaining work across the bank after the advance.
    pub remaining:      Work,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — departure printer
///
/// ```rust
/// use checkout_sim::{Departure, SimObserver};
///
/// struct DeparturePrinter;
///
/// impl SimObserver for DeparturePrinter {
///     fn on_departed(&mut self, d: &Departure) {
///         println!("{} left {} at {}", d.customer, d.register, d.finished);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each processed tick.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after a released customer has been enqueued at `register`.
    fn on_assigned(&mut self, _tick: Tick, _customer: CustomerId, _register: RegisterId) {}

    /// Called when a customer leaves its register.
    fn on_departed(&mut self, _departure: &Departure) {}

    /// Called at the end of each processed tick.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`
    /// processed ticks whose number is a multiple of the interval).
    ///
    /// Provides read-only access to every register so output writers can
    /// record queue state without the sim knowing about any format.
    fn on_snapshot(&mut self, _tick: Tick, _bank: &RegisterBank) {}

    /// Called once, at the tick the simulation finishes.
    fn on_sim_end(&mut self, _report: &SimReport) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
