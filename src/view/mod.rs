//! SeatBookingView: виджет бронирования мест.
//!
//! Состояние принадлежит только виджету. Сетевые вызовы и задержка загрузки
//! запускаются фоновыми задачами в `JoinSet`, а их результаты применяются
//! владельцем виджета в `process_next`/`apply`. При `teardown` или drop все
//! задачи отменяются.

pub mod render;

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::config::BookingConfig;
use crate::models::{SeatId, SeatLayout, SeatPayload};
use crate::notifications::{Notification, Notifier, MSG_BOOKED, MSG_NO_SEATS_SELECTED};
use crate::seats_client::{ApiError, SeatsApi};
use crate::services::layout;
use crate::services::pricing::{self, PriceRule};
use crate::services::selection::{IgnoreReason, SelectedSeats, ToggleOutcome};

pub use render::{SeatSnapshot, ViewSnapshot};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("no seats selected")]
    NoSeatsSelected,
}

/// Результат фоновой задачи, который нужно применить к состоянию.
#[derive(Debug)]
pub enum Completion {
    /// Имитация начальной загрузки завершена
    LoadElapsed,
    SeatsFetched {
        rows: i64,
        result: Result<SeatPayload, ApiError>,
    },
    SubmitFinished {
        seats: Vec<SeatId>,
        result: Result<(), ApiError>,
    },
}

/// Краткий итог применённой задачи (без полезной нагрузки).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Loaded,
    SeatsFetched { ok: bool },
    Submitted { ok: bool },
}

#[derive(Debug, Clone, Copy)]
pub struct ViewSettings {
    pub initial_rows: i64,
    pub simulated_load: Duration,
    pub price_rule: PriceRule,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            initial_rows: 3,
            simulated_load: Duration::from_secs(1),
            price_rule: PriceRule::Legacy,
        }
    }
}

impl From<&BookingConfig> for ViewSettings {
    fn from(config: &BookingConfig) -> Self {
        Self {
            initial_rows: config.initial_rows,
            simulated_load: config.simulated_load(),
            price_rule: config.price_rule,
        }
    }
}

/// Всё состояние виджета.
#[derive(Debug, Clone, Serialize)]
pub struct ViewState {
    pub row_count: i64,
    pub layout: SeatLayout,
    pub selected: SelectedSeats,
    pub total_cost: u64,
    pub busy: bool,
    /// Последний успешно полученный ответ `GET /seats`. Отрисовка его не использует.
    pub last_payload: Option<SeatPayload>,
}

impl ViewState {
    pub fn new(row_count: i64, price_rule: PriceRule) -> Self {
        let selected = SelectedSeats::new();
        Self {
            row_count,
            layout: layout::generate(row_count),
            total_cost: pricing::total_cost(selected.as_slice(), row_count, price_rule),
            selected,
            busy: false,
            last_payload: None,
        }
    }

    fn recompute_total(&mut self, rule: PriceRule) {
        self.total_cost = pricing::total_cost(self.selected.as_slice(), self.row_count, rule);
    }
}

pub struct SeatBookingView<A: SeatsApi, N: Notifier> {
    api: Arc<A>,
    notifier: N,
    settings: ViewSettings,
    state: ViewState,
    tasks: JoinSet<Completion>,
}

impl<A: SeatsApi, N: Notifier> SeatBookingView<A, N> {
    pub fn new(api: Arc<A>, notifier: N, settings: ViewSettings) -> Self {
        Self {
            api,
            notifier,
            state: ViewState::new(settings.initial_rows, settings.price_rule),
            settings,
            tasks: JoinSet::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Есть ли незавершённые фоновые задачи.
    pub fn has_pending(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Монтирование: включаем индикатор и запускаем имитацию загрузки.
    /// После задержки индикатор выключается и запрашивается схема мест.
    pub fn mount(&mut self) {
        info!("Mounting seat booking view with {} rows", self.state.row_count);
        self.state.busy = true;

        let delay = self.settings.simulated_load;
        self.tasks.spawn(async move {
            tokio::time::sleep(delay).await;
            Completion::LoadElapsed
        });
    }

    /// Поле ввода рядов. Значение не проверяется: <= 0 даёт пустую схему.
    pub fn set_row_count(&mut self, rows: i64) {
        debug!("Row count changed: {} -> {}", self.state.row_count, rows);
        self.state.row_count = rows;
        self.state.layout = layout::generate(rows);
        self.state.recompute_total(self.settings.price_rule);
    }

    /// Кнопка "Search Seats": запрос схемы для текущего числа рядов.
    pub fn search(&mut self) {
        let rows = self.state.row_count;
        let api = Arc::clone(&self.api);
        self.tasks.spawn(async move {
            let result = api.fetch_seats(rows).await;
            Completion::SeatsFetched { rows, result }
        });
    }

    /// Клик по месту. Снять выбор можно всегда, а выбрать только место из текущей схемы.
    pub fn click_seat(&mut self, seat: SeatId) -> ToggleOutcome {
        if !self.state.selected.contains(seat) && !self.state.layout.contains(seat) {
            debug!("Seat {} is not in the {}-row layout, click ignored", seat, self.state.row_count);
            return ToggleOutcome::Ignored(IgnoreReason::NotInLayout);
        }

        let outcome = self.state.selected.toggle(seat);
        if outcome.changed() {
            self.state.recompute_total(self.settings.price_rule);
            debug!(
                "Seat {} {:?}, selected={:?}, total={}",
                seat,
                outcome,
                self.state.selected.as_slice(),
                self.state.total_cost
            );
        }
        outcome
    }

    /// Кнопка "Submit Selected Seats".
    ///
    /// Пустой выбор: уведомление об ошибке, запрос не отправляется. Иначе выбор
    /// отправляется одним запросом, а итог применяется позже в `process_next`.
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        self.state.busy = true;

        if self.state.selected.is_empty() {
            self.notifier.notify(Notification::error(MSG_NO_SEATS_SELECTED));
            self.state.busy = false;
            return Err(SubmitError::NoSeatsSelected);
        }

        let seats = self.state.selected.as_slice().to_vec();
        let api = Arc::clone(&self.api);
        self.tasks.spawn(async move {
            let result = api.submit_seats(&seats).await;
            Completion::SubmitFinished { seats, result }
        });
        Ok(())
    }

    /// Ждёт следующую завершённую задачу и применяет её.
    /// Возвращает `None`, если ждать нечего.
    pub async fn process_next(&mut self) -> Option<Settled> {
        loop {
            match self.tasks.join_next().await? {
                Ok(completion) => return Some(self.apply(completion)),
                Err(e) if e.is_cancelled() => continue,
                Err(e) => {
                    warn!("View task failed: {}", e);
                    continue;
                }
            }
        }
    }

    /// Применяет все задачи, пока они не закончатся.
    pub async fn settle(&mut self) -> Vec<Settled> {
        let mut settled = Vec::new();
        while let Some(s) = self.process_next().await {
            settled.push(s);
        }
        settled
    }

    pub fn apply(&mut self, completion: Completion) -> Settled {
        match completion {
            Completion::LoadElapsed => {
                self.state.busy = false;
                self.search();
                Settled::Loaded
            }
            Completion::SeatsFetched { rows, result } => match result {
                Ok(payload) => {
                    debug!("Seats payload received for {} rows", rows);
                    self.state.last_payload = Some(payload);
                    self.state.layout = layout::generate(self.state.row_count);
                    Settled::SeatsFetched { ok: true }
                }
                Err(e) => {
                    // Схема остаётся прежней
                    error!("Error fetching the seats (rows={}): {}", rows, e);
                    Settled::SeatsFetched { ok: false }
                }
            },
            Completion::SubmitFinished { seats, result } => {
                self.state.busy = false;
                match result {
                    Ok(()) => {
                        info!("Seats booked: {:?}", seats);
                        self.notifier.notify(Notification::success(MSG_BOOKED));
                        Settled::Submitted { ok: true }
                    }
                    Err(e) => {
                        // Пользователю ничего не показываем, только в лог
                        error!("Error submitting seats {:?}: {}", seats, e);
                        Settled::Submitted { ok: false }
                    }
                }
            }
        }
    }

    /// Отменяет все фоновые задачи. Их результаты уже не будут применены.
    pub fn teardown(&mut self) {
        if !self.tasks.is_empty() {
            info!("Tearing down view, aborting {} task(s)", self.tasks.len());
        }
        // drop JoinSet отменяет все его задачи
        drop(std::mem::take(&mut self.tasks));
    }
}
