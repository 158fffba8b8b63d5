//! Генератор треугольной схемы зала.
//!
//! Ряд i (с 1) содержит i мест, место j в ряду i получает номер `i(i-1)/2 + j`.
//! Номера образуют сплошной диапазон 1..n(n+1)/2 без пропусков и повторов.

use crate::models::{Seat, SeatId, SeatLayout, SeatRow};
use crate::services::reservation::is_reserved;

/// n-е треугольное число: n(n+1)/2
pub fn triangular(n: u32) -> u64 {
    let n = n as u64;
    n * (n + 1) / 2
}

/// Наибольшее число рядов, при котором все номера мест помещаются в `SeatId`.
pub const MAX_LAYOUT_ROWS: u32 = 92_681;

/// Номер места в ряду `row` на позиции `position` (обе с 1).
/// Для рядов сверх `MAX_LAYOUT_ROWS` номер насыщается до `SeatId::MAX`.
pub fn seat_id(row: u32, position: u32) -> SeatId {
    let id = triangular(row.saturating_sub(1)) + position as u64;
    SeatId::try_from(id).unwrap_or(SeatId::MAX)
}

/// Число рядов, которое реально строится: <= 0 даёт 0, сверху ограничено `MAX_LAYOUT_ROWS`.
pub fn layout_rows(rows: i64) -> u32 {
    if rows <= 0 {
        return 0;
    }
    u32::try_from(rows).unwrap_or(u32::MAX).min(MAX_LAYOUT_ROWS)
}

/// Строит схему на `rows` рядов. Ноль или отрицательное значение даёт пустую схему,
/// значения больше `MAX_LAYOUT_ROWS` ограничиваются им.
pub fn generate(rows: i64) -> SeatLayout {
    let rows = layout_rows(rows);
    if rows == 0 {
        return SeatLayout::default();
    }

    let rows = (1..=rows)
        .map(|row| SeatRow {
            number: row,
            seats: (1..=row)
                .map(|position| {
                    let id = seat_id(row, position);
                    Seat {
                        id,
                        row,
                        position,
                        reserved: is_reserved(id as i64),
                    }
                })
                .collect(),
        })
        .collect();

    SeatLayout { rows }
}

/// Обратное треугольное соотношение: наименьший r, для которого r(r+1)/2 >= id.
pub fn row_of(id: SeatId) -> Option<u32> {
    if id == 0 {
        return None;
    }

    // Оценка через корень, затем поправка на ошибку округления
    let id = id as u64;
    let mut row = (((8 * id + 1) as f64).sqrt() as u64).saturating_sub(1) / 2;
    while triangular(row as u32) < id {
        row += 1;
    }
    while row > 1 && triangular(row as u32 - 1) >= id {
        row -= 1;
    }
    Some(row as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_rows_match_the_chart() {
        let layout = generate(3);
        let ids: Vec<Vec<SeatId>> = layout
            .rows
            .iter()
            .map(|r| r.seats.iter().map(|s| s.id).collect())
            .collect();
        assert_eq!(ids, vec![vec![1], vec![2, 3], vec![4, 5, 6]]);
    }

    #[test]
    fn non_positive_rows_give_empty_layout() {
        assert!(generate(0).is_empty());
        assert!(generate(-4).is_empty());
    }

    #[test]
    fn reserved_flags_follow_primes() {
        let layout = generate(3);
        let reserved: Vec<SeatId> = layout.seats().filter(|s| s.reserved).map(|s| s.id).collect();
        assert_eq!(reserved, vec![2, 3, 5]);
    }

    #[test]
    fn huge_row_counts_are_capped() {
        assert_eq!(layout_rows(-1), 0);
        assert_eq!(layout_rows(10), 10);
        assert_eq!(layout_rows(1 << 32), MAX_LAYOUT_ROWS);
        assert_eq!(layout_rows(i64::MAX), MAX_LAYOUT_ROWS);

        // последний номер ещё помещается в SeatId, следующий ряд уже нет
        assert!(triangular(MAX_LAYOUT_ROWS) <= SeatId::MAX as u64);
        assert!(triangular(MAX_LAYOUT_ROWS + 1) > SeatId::MAX as u64);
        assert_eq!(seat_id(MAX_LAYOUT_ROWS, MAX_LAYOUT_ROWS) as u64, triangular(MAX_LAYOUT_ROWS));
        assert_eq!(seat_id(MAX_LAYOUT_ROWS + 1, MAX_LAYOUT_ROWS + 1), SeatId::MAX);
    }

    #[test]
    fn row_of_inverts_numbering() {
        assert_eq!(row_of(0), None);
        assert_eq!(row_of(1), Some(1));
        assert_eq!(row_of(2), Some(2));
        assert_eq!(row_of(3), Some(2));
        assert_eq!(row_of(4), Some(3));
        assert_eq!(row_of(6), Some(3));
        assert_eq!(row_of(7), Some(4));
        assert_eq!(row_of(55), Some(10));
    }
}
