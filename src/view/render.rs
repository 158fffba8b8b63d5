//! Текстовая отрисовка схемы зала и сериализуемый снимок состояния.

use serde::Serialize;
use std::fmt::Write;

use super::{SeatBookingView, ViewState};
use crate::models::SeatId;
use crate::notifications::Notifier;
use crate::seats_client::SeatsApi;

pub const TITLE: &str = "Theater Seat Booking System";
pub const FOOTER: &str = "© 2024 Theater Booking. All rights reserved.";
pub const LOADING: &str = "Loading...";

#[derive(Debug, Clone, Serialize)]
pub struct SeatSnapshot {
    pub id: SeatId,
    pub row: u32,
    pub reserved: bool,
    pub selected: bool,
}

impl SeatSnapshot {
    pub fn label(&self) -> String {
        let mut label = format!("Row: {} Seat: {}", self.row, self.id);
        if self.reserved {
            label.push_str(" (Reserved)");
        }
        label
    }
}

/// Снимок того, что видит пользователь.
#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot {
    pub busy: bool,
    pub row_count: i64,
    pub rows: Vec<Vec<SeatSnapshot>>,
    pub selected: Vec<SeatId>,
    pub total_cost: u64,
}

impl From<&ViewState> for ViewSnapshot {
    fn from(state: &ViewState) -> Self {
        let rows = state
            .layout
            .rows
            .iter()
            .map(|row| {
                row.seats
                    .iter()
                    .map(|seat| SeatSnapshot {
                        id: seat.id,
                        row: seat.row,
                        reserved: seat.reserved,
                        selected: state.selected.contains(seat.id),
                    })
                    .collect()
            })
            .collect();

        Self {
            busy: state.busy,
            row_count: state.row_count,
            rows,
            selected: state.selected.as_slice().to_vec(),
            total_cost: state.total_cost,
        }
    }
}

fn seat_button(seat: &SeatSnapshot) -> String {
    if seat.selected {
        format!("[*{}*]", seat.label())
    } else if seat.reserved {
        format!("({})", seat.label())
    } else {
        format!("[{}]", seat.label())
    }
}

/// Отрисовка в текст: ряды выровнены по центру, выбранные места отмечены `*`,
/// забронированные в круглых скобках. Пока идёт загрузка, видна только её строка.
pub fn render(snapshot: &ViewSnapshot) -> String {
    if snapshot.busy {
        return format!("{}\n", LOADING);
    }

    let lines: Vec<String> = snapshot
        .rows
        .iter()
        .map(|row| row.iter().map(seat_button).collect::<Vec<_>>().join("  "))
        .collect();
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{}", TITLE);
    let _ = writeln!(out);
    let _ = writeln!(out, "Number of Rows: {}", snapshot.row_count);
    let _ = writeln!(out);
    for line in &lines {
        let pad = (width - line.chars().count()) / 2;
        let _ = writeln!(out, "{}{}", " ".repeat(pad), line);
    }
    if !lines.is_empty() {
        let _ = writeln!(out);
    }
    let _ = writeln!(out, "Total Cost: ${}", snapshot.total_cost);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", FOOTER);
    out
}

impl<A: SeatsApi, N: Notifier> SeatBookingView<A, N> {
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::from(self.state())
    }

    pub fn render(&self) -> String {
        render(&self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::pricing::PriceRule;

    #[test]
    fn renders_three_row_chart() {
        let mut state = ViewState::new(3, PriceRule::Legacy);
        state.selected.toggle(4);
        state.total_cost = 40;

        let text = render(&ViewSnapshot::from(&state));
        assert!(text.starts_with(TITLE));
        assert!(text.contains("[Row: 1 Seat: 1]"));
        assert!(text.contains("(Row: 2 Seat: 2 (Reserved))"));
        assert!(text.contains("[*Row: 3 Seat: 4*]"));
        assert!(text.contains("Total Cost: $40"));
        assert!(text.trim_end().ends_with(FOOTER));
    }

    #[test]
    fn busy_view_hides_chart() {
        let mut state = ViewState::new(3, PriceRule::Legacy);
        state.busy = true;
        assert_eq!(render(&ViewSnapshot::from(&state)), "Loading...\n");
    }

    #[test]
    fn rows_are_centered() {
        let state = ViewState::new(2, PriceRule::Legacy);
        let text = render(&ViewSnapshot::from(&state));
        let first = text.lines().find(|l| l.contains("Seat: 1]")).unwrap();
        assert!(first.starts_with(' '));
    }
}
