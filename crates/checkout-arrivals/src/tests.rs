//! Unit tests for checkout-arrivals.

use checkout_core::{CustomerId, CustomerKind, CustomerSpec, Tick};

use crate::ArrivalQueue;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn spec(kind: CustomerKind, arrival: u64, items: u32) -> CustomerSpec {
    CustomerSpec::new(kind, arrival, items)
}

fn released_ids(queue: &mut ArrivalQueue, tick: u64) -> Vec<u32> {
    queue.release_due(Tick(tick)).iter().map(|c| c.id.0).collect()
}

// ── ArrivalQueue ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod arrival_queue {
    use checkout_core::CustomerStatus;

    use super::*;

    #[test]
    fn numbers_customers_in_input_order() {
        let mut q = ArrivalQueue::from_specs(&[
            spec(CustomerKind::A, 0, 1),
            spec(CustomerKind::A, 1, 1),
        ]);
        assert_eq!(q.len(), 2);
        let first = q.release_due(Tick(0));
        assert_eq!(first[0].id, CustomerId(1));
        assert_eq!(first[0].status, CustomerStatus::Waiting);
        let second = q.release_due(Tick(1));
        assert_eq!(second[0].id, CustomerId(2));
    }

    #[test]
    fn release_only_exact_tick() {
        let mut q = ArrivalQueue::from_specs(&[
            spec(CustomerKind::A, 2, 1),
            spec(CustomerKind::B, 5, 1),
        ]);
        assert!(q.release_due(Tick(0)).is_empty());
        assert!(q.release_due(Tick(3)).is_empty());
        assert_eq!(released_ids(&mut q, 2), vec![1]);
        assert_eq!(q.len(), 1);
        assert_eq!(released_ids(&mut q, 5), vec![2]);
        assert!(q.is_empty());
    }

    #[test]
    fn fewer_items_released_first() {
        let mut q = ArrivalQueue::from_specs(&[
            spec(CustomerKind::A, 0, 3),
            spec(CustomerKind::B, 0, 2),
        ]);
        assert_eq!(released_ids(&mut q, 0), vec![2, 1]);
    }

    #[test]
    fn type_a_before_type_b_on_equal_items() {
        let mut q = ArrivalQueue::from_specs(&[
            spec(CustomerKind::B, 4, 2),
            spec(CustomerKind::A, 4, 2),
        ]);
        assert_eq!(released_ids(&mut q, 4), vec![2, 1]);
    }

    #[test]
    fn input_order_breaks_remaining_ties() {
        let mut q = ArrivalQueue::from_specs(&[
            spec(CustomerKind::B, 1, 1),
            spec(CustomerKind::A, 1, 1),
            spec(CustomerKind::B, 1, 1),
            spec(CustomerKind::A, 1, 1),
        ]);
        assert_eq!(released_ids(&mut q, 1), vec![2, 4, 1, 3]);
    }

    #[test]
    fn next_tick_is_earliest_pending() {
        let q = ArrivalQueue::from_specs(&[
            spec(CustomerKind::A, 9, 1),
            spec(CustomerKind::A, 3, 1),
            spec(CustomerKind::A, 3, 2),
        ]);
        assert_eq!(q.next_tick(), Some(Tick(3)));
        assert_eq!(q.tick_count(), 2);
    }

    #[test]
    fn empty_queue() {
        let mut q = ArrivalQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.next_tick(), None);
        assert!(q.release_due(Tick(0)).is_empty());
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use checkout_core::CheckoutError;

    use super::*;
    use crate::{load_scenario_file, load_scenario_reader, load_scenario_str};

    #[test]
    fn parses_register_count_and_customers() {
        let scenario = load_scenario_str("2\nA 1 5\nB 2 1\n").unwrap();
        assert_eq!(scenario.register_count, 2);
        assert_eq!(
            scenario.customers,
            vec![spec(CustomerKind::A, 1, 5), spec(CustomerKind::B, 2, 1)]
        );
        assert_eq!(scenario.config().register_count, 2);
    }

    #[test]
    fn tolerates_extra_whitespace_and_blank_lines() {
        let scenario = load_scenario_str("\n  3 \n\nA\t0   4\n   B 7 2  \n\n").unwrap();
        assert_eq!(scenario.register_count, 3);
        assert_eq!(
            scenario.customers,
            vec![spec(CustomerKind::A, 0, 4), spec(CustomerKind::B, 7, 2)]
        );
    }

    #[test]
    fn registers_only() {
        let scenario = load_scenario_str("1\n").unwrap();
        assert!(scenario.customers.is_empty());
    }

    #[test]
    fn empty_input_is_missing() {
        assert!(matches!(load_scenario_str(""), Err(CheckoutError::MissingInput(_))));
        assert!(matches!(load_scenario_str("\n \n"), Err(CheckoutError::MissingInput(_))));
    }

    #[test]
    fn bad_register_count() {
        for text in ["0\n", "-2\n", "two\n", "A 1 2\n"] {
            assert!(
                matches!(load_scenario_str(text), Err(CheckoutError::InvalidRegisterCount(_))),
                "{text:?} should be rejected"
            );
        }
    }

    fn record_error_line(text: &str) -> usize {
        match load_scenario_str(text) {
            Err(CheckoutError::InvalidCustomerRecord { line, .. }) => line,
            other => panic!("expected InvalidCustomerRecord for {text:?}, got {other:?}"),
        }
    }

    #[test]
    fn unknown_customer_type() {
        assert_eq!(record_error_line("1\nA 1 1\nC 1 1\n"), 3);
    }

    #[test]
    fn negative_arrival() {
        assert_eq!(record_error_line("1\nA -1 1\n"), 2);
    }

    #[test]
    fn non_positive_items() {
        assert_eq!(record_error_line("1\nA 1 0\n"), 2);
        assert_eq!(record_error_line("1\nB 1 -3\n"), 2);
    }

    #[test]
    fn non_numeric_field() {
        assert_eq!(record_error_line("1\nA one 1\n"), 2);
    }

    #[test]
    fn wrong_field_count() {
        assert_eq!(record_error_line("1\nA 1\n"), 2);
        assert_eq!(record_error_line("1\nA 1 2 3\n"), 2);
    }

    #[test]
    fn line_numbers_count_blank_lines() {
        assert_eq!(record_error_line("1\n\nA 1 1\n\nB x 1\n"), 5);
    }

    #[test]
    fn reader_source() {
        let scenario = load_scenario_reader(Cursor::new("1\nA 2 1\n")).unwrap();
        assert_eq!(scenario.customers, vec![spec(CustomerKind::A, 2, 1)]);
    }

    #[test]
    fn file_source() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        write!(file, "2\nA 1 2\nB 1 2\n").unwrap();
        let scenario = load_scenario_file(file.path()).unwrap();
        assert_eq!(scenario.register_count, 2);
        assert_eq!(scenario.customers.len(), 2);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let result = load_scenario_file(&dir.path().join("nope.txt"));
        assert!(matches!(result, Err(CheckoutError::MissingInput(_))));
    }
}
