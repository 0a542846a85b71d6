//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing integer `Tick`; one tick is one
//! simulated minute.  The simulation starts at `t=0` with every register
//! empty and processes tick 0 like any other tick.
//!
//! Together with [`Work`][crate::Work], the whole model is integer-only.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick (minute) counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The simulation clock.  Owned by exactly one `Sim`.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The tick currently being (or about to be) processed.
    pub current_tick: Tick,
}

impl SimClock {
    /// A clock positioned at `t=0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Jump forward to `tick`.  Never moves the clock backwards.
    #[inline]
    pub fn advance_to(&mut self, tick: Tick) {
        self.current_tick = self.current_tick.max(tick);
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Usually assembled by the application from the scenario file's register
/// count and command-line flags.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of registers `n`.  Register `n` is the training register.
    pub register_count: u32,

    /// Emit a full register snapshot to observers every N ticks.
    /// 0 disables snapshots.
    pub snapshot_interval_ticks: u64,

    /// Jump straight to the next arrival when every register is idle.
    ///
    /// Idle ticks are no-ops, so this never changes the finish tick; it only
    /// means observers are not called for the skipped ticks.
    pub skip_idle_ticks: bool,
}

impl SimConfig {
    /// Configuration for `register_count` registers with snapshots off and
    /// idle fast-forward on.
    pub fn new(register_count: u32) -> Self {
        Self {
            register_count,
            snapshot_interval_ticks: 0,
            skip_idle_ticks:         true,
        }
    }
}
