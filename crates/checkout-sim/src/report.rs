//! Run results.

use std::fmt;

use checkout_core::{CustomerId, CustomerKind, RegisterId, Tick};

/// One customer's completed checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Departure {
    pub customer: CustomerId,
    pub kind:     CustomerKind,
    pub register: RegisterId,
    pub arrival:  Tick,
    pub items:    u32,
    /// Tick at which the customer left the register.
    pub finished: Tick,
}

impl Departure {
    /// Minutes from arrival to leaving the register.
    #[inline]
    pub fn time_in_store(&self) -> u64 {
        self.finished.since(self.arrival)
    }
}

/// The outcome of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimReport {
    /// The first tick at which nobody was left to arrive and every register
    /// was idle.
    pub finished_at: Tick,
    /// Every departure, in the order they happened (tick, then register).
    pub departures:  Vec<Departure>,
}

impl SimReport {
    /// The departure record for `customer`.
    pub fn departure(&self, customer: CustomerId) -> Option<&Departure> {
        self.departures.iter().find(|d| d.customer == customer)
    }

    /// Longest arrival-to-departure time of any customer.
    pub fn max_time_in_store(&self) -> Option<u64> {
        self.departures.iter().map(Departure::time_in_store).max()
    }
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Finished at: t={} minutes", self.finished_at.0)
    }
}
