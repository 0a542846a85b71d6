//! `ArrivalQueue` — customers keyed by the tick they arrive at.
//!
//! Most ticks release nobody.  `next_tick` lets the simulation jump over
//! stretches where the registers are idle and nobody is due.

use std::collections::BTreeMap;

use checkout_core::{Customer, CustomerId, CustomerSpec, CustomerStatus, Tick};

/// Customers not yet released, grouped by arrival tick.
#[derive(Default, Debug, Clone)]
pub struct ArrivalQueue {
    inner: BTreeMap<Tick, Vec<Customer>>,
    /// Cached total customer count for O(1) `len()`.
    total: usize,
}

impl ArrivalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the queue from input specs, numbering customers `1..` in input
    /// order.
    pub fn from_specs(specs: &[CustomerSpec]) -> Self {
        let mut queue = Self::new();
        let mut id = CustomerId::FIRST;
        for &spec in specs {
            queue.push(Customer::new(id, spec));
            id = id.next();
        }
        queue
    }

    /// Hold `customer` until its arrival tick.
    pub fn push(&mut self, mut customer: Customer) {
        customer.status = CustomerStatus::Waiting;
        self.inner.entry(customer.arrival).or_default().push(customer);
        self.total += 1;
    }

    /// Remove and return every customer arriving at exactly `tick`, in
    /// release order (fewer items, then type A before B, then input order).
    ///
    /// Returns an empty `Vec` (no allocation) when nobody arrives.
    pub fn release_due(&mut self, tick: Tick) -> Vec<Customer> {
        let Some(mut due) = self.inner.remove(&tick) else {
            return Vec::new();
        };
        self.total -= due.len();
        due.sort_by_key(Customer::release_key);
        due
    }

    /// The earliest tick with at least one pending arrival, or `None` if
    /// everyone has arrived.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Customers still to arrive.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct future ticks with at least one arrival.
    pub fn tick_count(&self) -> usize {
        self.inner.len()
    }
}
