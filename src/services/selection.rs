//! Выбор мест: ограниченное множество-переключатель (не больше 5 мест).
//!
//! Повторный клик снимает выбор. Новые места сверх лимита просто отклоняются,
//! ранее выбранные при этом не вытесняются.

use serde::Serialize;
use tracing::debug;

use crate::models::SeatId;
use crate::services::reservation::is_reserved;

pub const MAX_SELECTED_SEATS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IgnoreReason {
    Reserved,
    CapacityReached,
    /// Такого места нет в текущей схеме зала
    NotInLayout,
}

/// Результат клика по месту.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ToggleOutcome {
    Added,
    Removed,
    Ignored(IgnoreReason),
}

impl ToggleOutcome {
    pub fn changed(&self) -> bool {
        !matches!(self, ToggleOutcome::Ignored(_))
    }
}

/// Выбранные места в порядке кликов.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectedSeats {
    seats: Vec<SeatId>,
}

impl SelectedSeats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, seat: SeatId) -> ToggleOutcome {
        if let Some(idx) = self.seats.iter().position(|s| *s == seat) {
            self.seats.remove(idx);
            return ToggleOutcome::Removed;
        }

        if is_reserved(seat as i64) {
            debug!("Seat {} is reserved, click ignored", seat);
            return ToggleOutcome::Ignored(IgnoreReason::Reserved);
        }

        if self.seats.len() >= MAX_SELECTED_SEATS {
            debug!("Selection is full ({} seats), seat {} ignored", MAX_SELECTED_SEATS, seat);
            return ToggleOutcome::Ignored(IgnoreReason::CapacityReached);
        }

        self.seats.push(seat);
        ToggleOutcome::Added
    }

    pub fn contains(&self, seat: SeatId) -> bool {
        self.seats.contains(&seat)
    }

    pub fn as_slice(&self) -> &[SeatId] {
        &self.seats
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }
}
