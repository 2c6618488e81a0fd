//! Property-based tests for the allocation engine.

use std::collections::HashSet;

use proptest::prelude::*;

use super::{AllocationEngine, Placement};

// Strategy for small but varied chart dimensions
fn dimensions() -> impl Strategy<Value = (usize, usize)> {
    (1usize..=8, 1usize..=24)
}

// Strategy for a sequence of group sizes within the default maximum
fn request_sizes() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..=6, 0..40)
}

proptest! {
    // The counter equals total seats minus every committed seat, and a
    // failed request never moves it.
    #[test]
    fn counter_tracks_commitments(
        (rows, seats_per_row) in dimensions(),
        sizes in request_sizes(),
    ) {
        let mut engine = AllocationEngine::new(rows, seats_per_row, 10);
        let mut expected = rows * seats_per_row;

        for size in sizes {
            let placement = engine.request(size).unwrap();
            if let Placement::Block { ref seats } = placement {
                prop_assert_eq!(seats.len(), size);
                expected -= size;
            }
            prop_assert_eq!(engine.available_count(), expected);
        }
    }

    // Every successful placement is a contiguous run of columns within a
    // single row, reported in left-to-right order.
    #[test]
    fn placements_are_contiguous_within_one_row(
        (rows, seats_per_row) in dimensions(),
        sizes in request_sizes(),
    ) {
        let mut engine = AllocationEngine::new(rows, seats_per_row, 10);

        for size in sizes {
            if let Placement::Block { seats } = engine.request(size).unwrap() {
                let row = seats[0].row();
                for (i, label) in seats.iter().enumerate() {
                    prop_assert_eq!(label.row(), row);
                    prop_assert_eq!(label.column(), seats[0].column() + i);
                }
            }
        }
    }

    // No seat is ever handed out twice, and placements avoid
    // pre-reserved seats.
    #[test]
    fn placements_never_overlap(
        (rows, seats_per_row) in dimensions(),
        pre_rows in prop::collection::vec((0usize..8, 0usize..24), 0..10),
        sizes in request_sizes(),
    ) {
        let mut engine = AllocationEngine::new(rows, seats_per_row, 10);

        let mut taken = HashSet::new();
        for (row, column) in pre_rows {
            if row < rows && column < seats_per_row {
                engine.pre_reserve(row + 1, column + 1).unwrap();
                taken.insert((row, column));
            }
        }

        for size in sizes {
            if let Placement::Block { seats } = engine.request(size).unwrap() {
                for label in seats {
                    prop_assert!(
                        taken.insert((label.row(), label.column())),
                        "seat {} handed out twice",
                        label
                    );
                }
            }
        }
    }

    // Once a request size fails, the same size keeps failing: nothing
    // ever frees seats.
    #[test]
    fn failure_is_sticky(
        (rows, seats_per_row) in dimensions(),
        size in 1usize..=6,
    ) {
        let mut engine = AllocationEngine::new(rows, seats_per_row, 10);

        let mut failed = false;
        for _ in 0..rows * seats_per_row + 2 {
            let placement = engine.request(size).unwrap();
            if failed {
                prop_assert_eq!(&placement, &Placement::NotAvailable);
            }
            if placement == Placement::NotAvailable {
                failed = true;
            }
        }
        prop_assert!(failed);
    }
}
