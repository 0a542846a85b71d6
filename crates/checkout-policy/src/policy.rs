//! The `AssignmentPolicy` enum — how each customer type picks a line.

use checkout_core::{CustomerKind, RegisterId};

use crate::LineSnapshot;

/// Register selection rule.  Each [`CustomerKind`] maps to exactly one
/// policy via `From`.
///
/// Both rules break ties by lowest register number, independent of the
/// order of the slice passed to [`select`][Self::select].
///
/// # Example
///
/// ```rust
/// use checkout_core::{CustomerKind, RegisterId};
/// use checkout_policy::{AssignmentPolicy, LineSnapshot};
///
/// let lines = [
///     LineSnapshot::new(RegisterId(1), 2, None),
///     LineSnapshot::empty(RegisterId(2)),
/// ];
/// let policy = AssignmentPolicy::from(CustomerKind::A);
/// assert_eq!(policy.select(&lines), Some(RegisterId(2)));
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum AssignmentPolicy {
    /// Type A: the line with the fewest customers; ties → lowest register.
    ShortestLine,

    /// Type B: any empty line (lowest register first); otherwise the line
    /// whose last customer has the least work left, regardless of line
    /// length; ties → lowest register.
    FewestItemsBehind,
}

impl AssignmentPolicy {
    /// Pick a register from `lines`.
    ///
    /// Returns `None` only when `lines` is empty; a register bank always
    /// has at least one register.
    pub fn select(self, lines: &[LineSnapshot]) -> Option<RegisterId> {
        match self {
            AssignmentPolicy::ShortestLine => lines
                .iter()
                .map(|line| (line.in_line, line.register))
                .min()
                .map(|(_, register)| register),

            AssignmentPolicy::FewestItemsBehind => {
                let first_empty = lines
                    .iter()
                    .filter(|line| line.is_empty())
                    .map(|line| line.register)
                    .min();
                if first_empty.is_some() {
                    return first_empty;
                }
                lines
                    .iter()
                    .filter_map(|line| line.last_remaining.map(|w| (w, line.register)))
                    .min()
                    .map(|(_, register)| register)
            }
        }
    }
}

impl From<CustomerKind> for AssignmentPolicy {
    fn from(kind: CustomerKind) -> Self {
        match kind {
            CustomerKind::A => AssignmentPolicy::ShortestLine,
            CustomerKind::B => AssignmentPolicy::FewestItemsBehind,
        }
    }
}
