//! Read-only register state passed to every assignment decision.

use checkout_core::{RegisterId, Work};

/// What an arriving customer can see of one register's line.
///
/// Built by checkout-register for each register, in ascending register
/// order, immediately before every assignment, so customers released in the
/// same tick see each other's effect.
///
/// A customer whose remaining work is already zero is just finishing
/// checking out and is not counted as being in line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LineSnapshot {
    /// The register this line belongs to.
    pub register: RegisterId,

    /// Customers in line (excluding one that is just finishing).
    pub in_line: usize,

    /// Remaining work of the last customer in line; `None` when the line is
    /// empty.
    pub last_remaining: Option<Work>,
}

impl LineSnapshot {
    #[inline]
    pub fn new(register: RegisterId, in_line: usize, last_remaining: Option<Work>) -> Self {
        Self { register, in_line, last_remaining }
    }

    /// Snapshot of an empty line.
    #[inline]
    pub fn empty(register: RegisterId) -> Self {
        Self::new(register, 0, None)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.in_line == 0
    }
}
