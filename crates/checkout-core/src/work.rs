//! Exact remaining-work arithmetic.
//!
//! A register processes `1 / ticks_per_item` items per tick.  Rather than
//! subtracting fractions, `Work` counts in units of `1 / UNITS_PER_ITEM` of an
//! item, where `UNITS_PER_ITEM` is divisible by every supported
//! `ticks_per_item`.  Each tick then subtracts a whole number of units, so a
//! customer with `n` items at a register taking `r` ticks per item reaches
//! exactly zero after `n * r` ticks, however long the run.

use std::fmt;

/// Work units per item.  Must be a multiple of every
/// [`ServiceRate::ticks_per_item`].
pub const UNITS_PER_ITEM: u64 = 2;

// ── Work ─────────────────────────────────────────────────────────────────────

/// A non-negative amount of checkout work, measured exactly in fractions of
/// an item.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Work(u64);

impl Work {
    pub const ZERO: Work = Work(0);

    /// Work for `items` whole items.
    #[inline]
    pub fn from_items(items: u32) -> Work {
        Work(items as u64 * UNITS_PER_ITEM)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Subtract `rhs`, clamping at zero.
    #[inline]
    pub fn saturating_sub(self, rhs: Work) -> Work {
        Work(self.0.saturating_sub(rhs.0))
    }
}

impl std::ops::Add for Work {
    type Output = Work;
    #[inline]
    fn add(self, rhs: Work) -> Work {
        Work(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Work {
    fn sum<I: Iterator<Item = Work>>(iter: I) -> Work {
        iter.fold(Work::ZERO, |acc, w| acc + w)
    }
}

impl fmt::Display for Work {
    /// Items with the exact fractional part, e.g. `3`, `2.5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / UNITS_PER_ITEM;
        let rem   = self.0 % UNITS_PER_ITEM;
        if rem == 0 {
            write!(f, "{whole}")
        } else {
            // UNITS_PER_ITEM == 2, so the only fraction is one half.
            write!(f, "{whole}.{}", rem * 10 / UNITS_PER_ITEM)
        }
    }
}

// ── ServiceRate ───────────────────────────────────────────────────────────────

/// How fast a register's cashier processes items.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ServiceRate {
    /// One tick per item.
    Standard,
    /// Cashier in training: two ticks per item.
    Training,
}

impl ServiceRate {
    /// Ticks needed to process one item.
    #[inline]
    pub fn ticks_per_item(self) -> u32 {
        match self {
            ServiceRate::Standard => 1,
            ServiceRate::Training => 2,
        }
    }

    /// Work removed from the head customer in one tick (`1 / ticks_per_item`
    /// items).
    #[inline]
    pub fn work_per_tick(self) -> Work {
        Work(UNITS_PER_ITEM / self.ticks_per_item() as u64)
    }
}
