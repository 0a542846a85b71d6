//! `checkout-arrivals` — customers waiting to arrive, and where they come from.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                |
//! |-------------------|---------------------------------------------------------|
//! | [`arrival_queue`] | `ArrivalQueue` (`BTreeMap<Tick, Vec<Customer>>`)        |
//! | [`loader`]        | `Scenario`, `load_scenario_file`, `load_scenario_reader` |
//!
//! # Release order
//!
//! Customers arriving at the same tick choose registers one at a time:
//!
//! ```text
//! fewer items first
//! equal items  → type A before type B
//! still equal  → input order
//! ```
//!
//! Each released customer is assigned before the next one selects, so the
//! order is observable in which register everyone ends up at.

pub mod arrival_queue;
pub mod loader;

#[cfg(test)]
mod tests;

pub use arrival_queue::ArrivalQueue;
pub use loader::{Scenario, load_scenario_file, load_scenario_reader, load_scenario_str};
