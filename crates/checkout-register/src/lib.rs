//! `checkout-register` — register queues and the per-tick service model.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`register`]  | `Register` — FIFO queue + `ServiceRate`, one advance per tick |
//! | [`bank`]      | `RegisterBank` — registers `1..=n`, assignment, bank advance  |
//!
//! # Service model
//!
//! Each tick, every register advances once, in this order:
//!
//! 1. If the head customer's remaining work is zero, it leaves
//!    (`CustomerStatus::Done`) and is reported as departed this tick.
//! 2. If there is a head customer (the same one or the next in line), it is
//!    marked `Servicing` and its remaining work drops by
//!    `ServiceRate::work_per_tick()`.
//!
//! Only the head is ever touched.  A standard register clears `n` items in
//! `n` ticks and the training register in `2n`; the customer is reported one
//! tick after its last item, which is when it stops occupying the line.

pub mod bank;
pub mod register;


pub use bank::RegisterBank;
pub use register::Register;
