//! `checkout-core` — foundational types for the checkout-line simulator.
//!
//! This crate is a dependency of every other `checkout-*` crate.  It has no
//! `checkout-*` dependencies and a single required external one
//! (`thiserror`), plus optional `serde`.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CustomerId`, `RegisterId`                            |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`work`]        | `Work` (exact half-item arithmetic), `ServiceRate`    |
//! | [`customer`]    | `Customer`, `CustomerKind`, `CustomerSpec`, status    |
//! | [`error`]       | `CheckoutError`, `CheckoutResult`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod customer;
pub mod error;
pub mod ids;
pub mod time;
pub mod work;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use customer::{Customer, CustomerKind, CustomerSpec, CustomerStatus};
pub use error::{CheckoutError, CheckoutResult};
pub use ids::{CustomerId, RegisterId};
pub use time::{SimClock, SimConfig, Tick};
pub use work::{ServiceRate, Work};
