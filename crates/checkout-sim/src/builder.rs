//! Fluent builder for constructing a [`Sim`].

use tracing::debug;

use checkout_arrivals::ArrivalQueue;
use checkout_core::{CheckoutResult, CustomerSpec, SimClock, SimConfig};
use checkout_register::RegisterBank;

use crate::{Sim, SimStatus};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: register count, snapshot interval, idle fast-forward
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default           |
/// |-------------------|-------------------|
/// | `.customers(v)`   | No customers      |
/// | `.customer(c)`    | —                 |
///
/// # Example
///
/// ```rust,ignore
/// let scenario = load_scenario_file(path)?;
/// let mut sim = SimBuilder::new(scenario.config())
///     .customers(scenario.customers)
///     .build()?;
/// let report = sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config:    SimConfig,
    customers: Vec<CustomerSpec>,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig) -> Self {
        Self { config, customers: Vec::new() }
    }

    /// Replace the customer list.  Order matters: customers are numbered
    /// `1..` in this order, which breaks release ties.
    pub fn customers(mut self, customers: Vec<CustomerSpec>) -> Self {
        self.customers = customers;
        self
    }

    /// Append one customer.
    pub fn customer(mut self, customer: CustomerSpec) -> Self {
        self.customers.push(customer);
        self
    }

    /// Validate inputs, build the register bank and arrival queue, and
    /// return a ready-to-run [`Sim`].
    ///
    /// Nothing is constructed unless every input is valid.
    ///
    /// # Errors
    ///
    /// - `InvalidRegisterCount` if `config.register_count` is 0.
    /// - `InvalidCustomerRecord` if any customer has no items.
    pub fn build(self) -> CheckoutResult<Sim> {
        // ── Validate ──────────────────────────────────────────────────────
        for spec in &self.customers {
            spec.validate(0)?;
        }
        let bank = RegisterBank::new(self.config.register_count)?;

        // ── Build ─────────────────────────────────────────────────────────
        let arrivals = ArrivalQueue::from_specs(&self.customers);
        debug!(
            registers = bank.register_count(),
            training  = %bank.training_register(),
            customers = arrivals.len(),
            first_arrival = ?arrivals.next_tick(),
            "simulation built"
        );

        Ok(Sim {
            clock:      SimClock::new(),
            config:     self.config,
            bank,
            arrivals,
            status:     SimStatus::Running,
            departures: Vec::new(),
        })
    }
}
