//! Свойства ядра: схема зала, забронированные места, выбор и расчёт стоимости.

use proptest::prelude::*;
use std::collections::HashSet;

use seat_booking::models::SeatId;
use seat_booking::services::layout::{generate, row_of};
use seat_booking::services::pricing::{total_cost, PriceRule, BASE_FEE};
use seat_booking::services::reservation::is_reserved;
use seat_booking::services::selection::{SelectedSeats, ToggleOutcome, MAX_SELECTED_SEATS};

fn naive_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    (2..n).all(|d| n % d != 0)
}

fn free_seat() -> impl Strategy<Value = SeatId> {
    (1u32..500).prop_filter("seat must not be reserved", |s| !is_reserved(*s as i64))
}

proptest! {
    #[test]
    fn layout_is_dense_triangle(n in 1i64..60) {
        let layout = generate(n);
        let expected = (n * (n + 1) / 2) as usize;

        prop_assert_eq!(layout.row_count(), n as usize);
        prop_assert_eq!(layout.seat_count(), expected);

        for (i, row) in layout.rows.iter().enumerate() {
            prop_assert_eq!(row.number as usize, i + 1);
            prop_assert_eq!(row.seats.len(), i + 1);
        }

        let ids: Vec<SeatId> = layout.seats().map(|s| s.id).collect();
        let wanted: Vec<SeatId> = (1..=expected as SeatId).collect();
        prop_assert_eq!(ids, wanted);

        for seat in layout.seats() {
            prop_assert_eq!(row_of(seat.id), Some(seat.row));
        }
    }

    #[test]
    fn non_positive_rows_are_empty(n in i64::MIN..=0) {
        prop_assert!(generate(n).is_empty());
    }

    #[test]
    fn numbers_up_to_one_are_never_reserved(s in i64::MIN..=1) {
        prop_assert!(!is_reserved(s));
    }

    #[test]
    fn reserved_matches_trial_division(s in 2i64..3000) {
        prop_assert_eq!(is_reserved(s), naive_prime(s));
    }

    #[test]
    fn double_click_is_idempotent(
        prior in proptest::collection::vec(free_seat(), 0..4),
        seat in free_seat(),
    ) {
        let mut selected = SelectedSeats::new();
        for s in prior {
            selected.toggle(s);
        }
        prop_assume!(!selected.contains(seat));

        let before = selected.clone();
        prop_assert_eq!(selected.toggle(seat), ToggleOutcome::Added);
        prop_assert_eq!(selected.toggle(seat), ToggleOutcome::Removed);
        prop_assert_eq!(selected, before);
    }

    #[test]
    fn selection_never_exceeds_cap(clicks in proptest::collection::vec(1u32..100, 0..64)) {
        let mut selected = SelectedSeats::new();
        for seat in clicks {
            selected.toggle(seat);
            prop_assert!(selected.len() <= MAX_SELECTED_SEATS);
            let unique: HashSet<_> = selected.as_slice().iter().collect();
            prop_assert_eq!(unique.len(), selected.len());
            prop_assert!(selected.as_slice().iter().all(|s| !is_reserved(*s as i64)));
        }
    }

    #[test]
    fn sixth_seat_leaves_selection_unchanged(
        seats in proptest::collection::hash_set(free_seat(), 6),
    ) {
        let seats: Vec<SeatId> = seats.into_iter().collect();
        let mut selected = SelectedSeats::new();
        for s in &seats[..5] {
            prop_assert_eq!(selected.toggle(*s), ToggleOutcome::Added);
        }

        let before = selected.clone();
        prop_assert!(!selected.toggle(seats[5]).changed());
        prop_assert_eq!(selected, before);
    }

    #[test]
    fn legacy_total_is_sum_of_rounded_rows(
        seats in proptest::collection::vec(1u32..56, 0..5),
        rows in 3i64..=10,
    ) {
        let expected: u64 = seats
            .iter()
            .map(|&s| ((s as f64) / (rows as f64)).ceil() as u64 * 10)
            .sum::<u64>() + BASE_FEE;
        prop_assert_eq!(total_cost(&seats, rows, PriceRule::Legacy), expected);

        let mut reversed = seats.clone();
        reversed.reverse();
        prop_assert_eq!(total_cost(&reversed, rows, PriceRule::Legacy), expected);
    }
}

#[test]
fn pricing_examples() {
    assert_eq!(total_cost(&[1], 3, PriceRule::Legacy), 30);
    assert_eq!(total_cost(&[], 3, PriceRule::Legacy), 20);
    assert_eq!(total_cost(&[4, 6], 3, PriceRule::Layout), 20 + 30 + 30);
}

#[test]
fn reserved_examples() {
    for s in [2, 3, 5, 7, 11] {
        assert!(is_reserved(s));
    }
    for s in [4, 6, 8, 9, 10] {
        assert!(!is_reserved(s));
    }
}
