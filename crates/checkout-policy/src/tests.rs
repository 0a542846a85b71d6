//! Unit tests for checkout-policy.

use checkout_core::{RegisterId, ServiceRate, Work};

use crate::{AssignmentPolicy, LineSnapshot};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn line(register: u32, in_line: usize, last_items: u32) -> LineSnapshot {
    LineSnapshot::new(RegisterId(register), in_line, Some(Work::from_items(last_items)))
}

fn empty(register: u32) -> LineSnapshot {
    LineSnapshot::empty(RegisterId(register))
}

// ── Mapping ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod mapping {
    use checkout_core::CustomerKind;

    use super::*;

    #[test]
    fn kinds_map_to_policies() {
        assert_eq!(AssignmentPolicy::from(CustomerKind::A), AssignmentPolicy::ShortestLine);
        assert_eq!(AssignmentPolicy::from(CustomerKind::B), AssignmentPolicy::FewestItemsBehind);
    }

    #[test]
    fn no_registers_selects_nothing() {
        assert_eq!(AssignmentPolicy::ShortestLine.select(&[]), None);
        assert_eq!(AssignmentPolicy::FewestItemsBehind.select(&[]), None);
    }
}

// ── Type A ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod shortest_line {
    use super::*;

    const A: AssignmentPolicy = AssignmentPolicy::ShortestLine;

    #[test]
    fn picks_fewest_customers() {
        let lines = [line(1, 3, 1), line(2, 1, 9), line(3, 2, 1)];
        assert_eq!(A.select(&lines), Some(RegisterId(2)));
    }

    #[test]
    fn tie_goes_to_lowest_register() {
        let lines = [line(1, 2, 1), line(2, 1, 1), line(3, 1, 1)];
        assert_eq!(A.select(&lines), Some(RegisterId(2)));
    }

    #[test]
    fn all_empty_picks_register_one() {
        let lines = [empty(1), empty(2), empty(3)];
        assert_eq!(A.select(&lines), Some(RegisterId(1)));
    }

    #[test]
    fn ignores_items_entirely() {
        // Register 1 has one customer with a huge basket; register 2 has two
        // customers with one item each.  Type A only counts heads.
        let lines = [line(1, 1, 100), line(2, 2, 1)];
        assert_eq!(A.select(&lines), Some(RegisterId(1)));
    }

    #[test]
    fn tie_break_independent_of_slice_order() {
        let lines = [line(3, 1, 1), line(1, 1, 1), line(2, 1, 1)];
        assert_eq!(A.select(&lines), Some(RegisterId(1)));
    }

    #[test]
    fn single_register() {
        assert_eq!(A.select(&[line(1, 5, 5)]), Some(RegisterId(1)));
    }
}

// ── Type B ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod fewest_items_behind {
    use super::*;

    const B: AssignmentPolicy = AssignmentPolicy::FewestItemsBehind;

    #[test]
    fn prefers_empty_line_over_anything() {
        // Register 1 has a single customer with one item left; register 2 is
        // empty.  The empty line wins.
        let lines = [line(1, 1, 1), empty(2)];
        assert_eq!(B.select(&lines), Some(RegisterId(2)));
    }

    #[test]
    fn lowest_numbered_empty_line() {
        let lines = [line(1, 1, 1), empty(2), empty(3)];
        assert_eq!(B.select(&lines), Some(RegisterId(2)));
    }

    #[test]
    fn joins_behind_fewest_remaining_items() {
        let lines = [line(1, 1, 3), line(2, 1, 1)];
        assert_eq!(B.select(&lines), Some(RegisterId(2)));
    }

    #[test]
    fn ignores_line_length() {
        // Register 2 is much longer but its last customer has fewer items.
        let lines = [line(1, 1, 4), line(2, 6, 2)];
        assert_eq!(B.select(&lines), Some(RegisterId(2)));
    }

    #[test]
    fn tie_goes_to_lowest_register() {
        let lines = [line(1, 1, 5), line(2, 3, 2), line(3, 1, 2)];
        assert_eq!(B.select(&lines), Some(RegisterId(2)));
    }

    #[test]
    fn compares_fractional_remaining_work() {
        // Last customer at register 1 has 1.5 items left; at register 2, 2.
        let one_and_a_half = Work::from_items(2).saturating_sub(ServiceRate::Training.work_per_tick());
        let lines = [
            LineSnapshot::new(RegisterId(1), 1, Some(one_and_a_half)),
            line(2, 1, 2),
        ];
        assert_eq!(B.select(&lines), Some(RegisterId(1)));
    }
}
