//! Customers and their input records.

use std::fmt;
use std::str::FromStr;

use crate::{CheckoutError, CheckoutResult, CustomerId, Tick, Work};

// ── CustomerKind ──────────────────────────────────────────────────────────────

/// Customer type.  The kind fixes which assignment policy the customer uses
/// and its precedence among simultaneous arrivals.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CustomerKind {
    /// Joins the shortest line.
    A,
    /// Joins the line whose last customer has the fewest items left.
    B,
}

impl CustomerKind {
    /// Precedence among arrivals with equal item counts (lower goes first).
    #[inline]
    pub fn release_rank(self) -> u8 {
        match self {
            CustomerKind::A => 1,
            CustomerKind::B => 2,
        }
    }
}

impl FromStr for CustomerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(CustomerKind::A),
            "B" => Ok(CustomerKind::B),
            other => Err(format!("unknown customer type {other:?}: expected \"A\" or \"B\"")),
        }
    }
}

impl fmt::Display for CustomerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerKind::A => f.write_str("A"),
            CustomerKind::B => f.write_str("B"),
        }
    }
}

// ── CustomerStatus ────────────────────────────────────────────────────────────

/// Lifecycle of a customer.  Only ever moves forward.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CustomerStatus {
    /// Not yet arrived.
    Waiting,
    /// In a register's queue, not yet at the head.
    Queued,
    /// At the head of a register's queue.
    Servicing,
    /// Checked out and removed from the queue.
    Done,
}

// ── CustomerSpec ──────────────────────────────────────────────────────────────

/// One customer as described by the input: type, arrival tick, item count.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomerSpec {
    pub kind:    CustomerKind,
    pub arrival: Tick,
    pub items:   u32,
}

impl CustomerSpec {
    pub fn new(kind: CustomerKind, arrival: u64, items: u32) -> Self {
        Self { kind, arrival: Tick(arrival), items }
    }

    /// Reject specs the simulation cannot run.  `line` is reported in the
    /// error (0 when the spec did not come from a file).
    pub fn validate(&self, line: usize) -> CheckoutResult<()> {
        if self.items == 0 {
            return Err(CheckoutError::InvalidCustomerRecord {
                line,
                reason: "item count must be positive".into(),
            });
        }
        Ok(())
    }
}

// ── Customer ──────────────────────────────────────────────────────────────────

/// A customer moving through the simulation.
///
/// `remaining` only ever decreases and is exactly zero before `status`
/// becomes [`CustomerStatus::Done`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Customer {
    pub id:        CustomerId,
    pub kind:      CustomerKind,
    pub arrival:   Tick,
    /// Item count as given in the input.
    pub items:     u32,
    pub remaining: Work,
    pub status:    CustomerStatus,
}

impl Customer {
    pub fn new(id: CustomerId, spec: CustomerSpec) -> Self {
        Self {
            id,
            kind:      spec.kind,
            arrival:   spec.arrival,
            items:     spec.items,
            remaining: Work::from_items(spec.items),
            status:    CustomerStatus::Waiting,
        }
    }

    /// All work done; the customer leaves at its register's next advance and
    /// no longer counts as being in line.
    #[inline]
    pub fn is_finishing(&self) -> bool {
        self.remaining.is_zero()
    }

    /// Sort key for customers released in the same tick: fewer items first,
    /// then type A before type B, then input order.
    #[inline]
    pub fn release_key(&self) -> (u32, u8, CustomerId) {
        (self.items, self.kind.release_rank(), self.id)
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (type {}, {} items)", self.id, self.kind, self.items)
    }
}
