//! `checkout-sim` — tick loop orchestrator for the checkout-line simulator.
//!
//! # Tick loop
//!
//! ```text
//! t = 0
//! loop:
//!   ① Release — drain customers arriving at t from the ArrivalQueue,
//!               in release order.
//!   ② Assign  — each released customer, one at a time, applies its
//!               type's AssignmentPolicy to the current bank and is
//!               enqueued.
//!   ③ Advance — every register advances once (departures, then service).
//!   ④ Check   — nobody left to arrive and every register idle → finished at t.
//!               Otherwise t += 1 (or jump to the next arrival if the bank
//!               is idle and `skip_idle_ticks` is set).
//! ```
//!
//! Assignment always happens before the advance: selections read the queue
//! state the advance is about to change.
//!
//! # Quick-start
//!
//! ```rust
//! use checkout_core::{CustomerKind, CustomerSpec, SimConfig, Tick};
//! use checkout_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::new(1))
//!     .customer(CustomerSpec::new(CustomerKind::A, 1, 2))
//!     .customer(CustomerSpec::new(CustomerKind::A, 2, 1))
//!     .build()?;
//! let report = sim.run(&mut NoopObserver);
//! assert_eq!(report.finished_at, Tick(7));
//! # Ok::<(), checkout_core::CheckoutError>(())
//! ```

pub mod builder;
pub mod observer;
pub mod report;
pub mod sim;


pub use builder::SimBuilder;
pub use observer::{NoopObserver, SimObserver, TickSummary};
pub use report::{Departure, SimReport};
pub use sim::{Sim, SimStatus};

use checkout_core::{CheckoutResult, CustomerSpec, SimConfig, Tick};

/// Run a whole scenario and return the tick at which the last customer
/// finished.
///
/// This is the complete contract of the core: `register_count` registers
/// and customers in input order in, finish tick out.
pub fn simulate(register_count: u32, customers: &[CustomerSpec]) -> CheckoutResult<Tick> {
    let mut sim = SimBuilder::new(SimConfig::new(register_count))
        .customers(customers.to_vec())
        .build()?;
    Ok(sim.run(&mut NoopObserver).finished_at)
}
