//! `checkout-policy` — how an arriving customer picks a register.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`snapshot`]  | `LineSnapshot` — read-only view of one register's line    |
//! | [`policy`]    | `AssignmentPolicy` (`ShortestLine`, `FewestItemsBehind`)  |
//!
//! # Design notes
//!
//! Assignment is split the same way as every tick phase in checkout-sim:
//!
//! 1. **Select** (pure): the policy reads a slice of `LineSnapshot`s and
//!    returns a `RegisterId`.  No mutation.
//!
//! 2. **Enqueue** (caller): checkout-register appends the customer to the
//!    chosen register and rebuilds the snapshots before the next arrival
//!    selects.
//!
//! Policies are a closed enum, one variant per customer type.

pub mod policy;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use policy::AssignmentPolicy;
pub use snapshot::LineSnapshot;
