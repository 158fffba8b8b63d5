pub mod config;
pub mod models;
pub mod services;
pub mod seats_client;
pub mod notifications;
pub mod view;
pub mod console;

use std::sync::Arc;

use notifications::ToastQueue;
use seats_client::{ApiError, HttpSeatsApi};
use view::{SeatBookingView, ViewSettings};

pub type HttpSeatBookingView = SeatBookingView<HttpSeatsApi, ToastQueue>;

// Собирает виджет из конфигурации: HTTP-клиент + очередь уведомлений
pub fn build_view(config: &config::Config) -> Result<(HttpSeatBookingView, ToastQueue), ApiError> {
    let api = Arc::new(HttpSeatsApi::from_config(&config.api)?);
    let toasts = ToastQueue::new();
    let view = SeatBookingView::new(api, toasts.clone(), ViewSettings::from(&config.booking));
    Ok((view, toasts))
}
