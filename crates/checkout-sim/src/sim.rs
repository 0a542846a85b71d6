//! The `Sim` struct and its tick loop.

use tracing::{debug, info, trace};

use checkout_arrivals::ArrivalQueue;
use checkout_core::{SimClock, SimConfig, Tick};
use checkout_register::RegisterBank;

use crate::{Departure, SimObserver, SimReport, TickSummary};

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimStatus {
    Running,
    /// Nobody left to arrive and every register idle as of `at`.
    Finished { at: Tick },
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim` owns all state for one run and drives the tick loop:
///
/// 1. **Release**: drain customers arriving this tick, in release order.
/// 2. **Assign**: each picks a register via its policy, one at a time.
/// 3. **Advance**: every register advances once.
/// 4. **Check**: finish, or move the clock on.
///
/// The loop is a plain `loop`; run length is bounded only by the total work
/// in the scenario.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Register count, snapshot interval, idle fast-forward.
    pub config: SimConfig,

    /// Simulation clock: the tick being processed.
    pub clock: SimClock,

    /// Registers `1..=n`.
    pub bank: RegisterBank,

    /// Customers that have not arrived yet.
    pub arrivals: ArrivalQueue,

    pub status: SimStatus,

    /// Departures so far, in the order they happened.
    pub departures: Vec<Departure>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation to completion and return the report.
    ///
    /// Calls observer hooks at every processed tick.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    /// Calling `run` on a finished sim returns the same report again
    /// without processing any tick.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimReport {
        loop {
            if let Some(report) = self.report() {
                return report;
            }
            self.step(observer);
        }
    }

    /// Process up to `n` ticks, stopping early if the simulation finishes.
    ///
    /// Useful for tests and incremental stepping.  Returns `true` if the
    /// simulation is finished.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> bool {
        for _ in 0..n {
            if self.step(observer) {
                return true;
            }
        }
        self.is_finished()
    }

    /// Process exactly one tick (the clock's current tick).
    ///
    /// Returns `true` once the simulation is finished; a finished sim is
    /// left untouched.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> bool {
        if self.is_finished() {
            return true;
        }

        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let summary = self.process_tick(now, observer);
        observer.on_tick_end(&summary);

        let interval = self.config.snapshot_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.bank);
        }

        if self.arrivals.is_empty() && self.bank.is_idle() {
            self.status = SimStatus::Finished { at: now };
            info!(finished_at = now.0, customers = self.departures.len(), "simulation finished");
            if let Some(report) = self.report() {
                observer.on_sim_end(&report);
            }
            return true;
        }

        self.advance_clock(now);
        false
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, SimStatus::Finished { .. })
    }

    /// The finish tick, once finished.
    pub fn finished_at(&self) -> Option<Tick> {
        match self.status {
            SimStatus::Finished { at } => Some(at),
            SimStatus::Running         => None,
        }
    }

    /// The run's report, or `None` while still running.
    pub fn report(&self) -> Option<SimReport> {
        self.finished_at().map(|finished_at| SimReport {
            finished_at,
            departures: self.departures.clone(),
        })
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> TickSummary {
        // ── Phase 1: release due arrivals ─────────────────────────────────
        let released = self.arrivals.release_due(now);
        let released_count = released.len();

        // ── Phase 2: assign, one customer at a time ───────────────────────
        //
        // Each selection reads fresh snapshots, so customers released in the
        // same tick see the ones assigned before them.
        for customer in released {
            let id = customer.id;
            let kind = customer.kind;
            let items = customer.items;
            let register = self.bank.assign(customer);
            debug!(tick = now.0, customer = id.0, %kind, items, register = register.0, "assigned");
            observer.on_assigned(now, id, register);
        }

        // ── Phase 3: advance every register ───────────────────────────────
        let departed = self.bank.advance();
        let departed_count = departed.len();
        for (register, customer) in departed {
            let departure = Departure {
                customer: customer.id,
                kind:     customer.kind,
                register,
                arrival:  customer.arrival,
                items:    customer.items,
                finished: now,
            };
            debug!(
                tick = now.0,
                customer = customer.id.0,
                register = register.0,
                waited = departure.time_in_store(),
                "departed"
            );
            observer.on_departed(&departure);
            self.departures.push(departure);
        }

        let summary = TickSummary {
            tick:           now,
            released:       released_count,
            departed:       departed_count,
            queued:         self.bank.queued(),
            busy_registers: self.bank.busy_count(),
            remaining:      self.bank.remaining_work(),
        };
        trace!(
            tick = now.0,
            queued = summary.queued,
            busy = summary.busy_registers,
            remaining = %summary.remaining,
            pending = self.arrivals.len(),
            "tick processed"
        );
        summary
    }

    /// Move to the next tick to process.
    ///
    /// With `skip_idle_ticks`, an idle bank jumps straight to the next
    /// arrival: every tick in between would release nobody and advance only
    /// empty registers.
    fn advance_clock(&mut self, now: Tick) {
        if self.config.skip_idle_ticks && self.bank.is_idle() {
            if let Some(next) = self.arrivals.next_tick() {
                let target = next.max(now + 1);
                if target > now + 1 {
                    trace!(from = now.0, to = target.0, "skipping idle ticks");
                }
                self.clock.advance_to(target);
                return;
            }
        }
        self.clock.advance();
    }
}
