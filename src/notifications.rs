//! Всплывающие уведомления (toast) для пользователя.
//!
//! Уведомления временные: каждое живёт заданное время и потом исчезает из очереди.
//! Одновременно видно не больше `MAX_VISIBLE_TOASTS`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::time::{Duration, Instant};
use uuid::Uuid;

pub const MAX_VISIBLE_TOASTS: usize = 5;

pub const MSG_NO_SEATS_SELECTED: &str = "Please select at least 1 seat";
pub const MSG_BOOKED: &str = "Seats booked successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

impl NotificationLevel {
    pub fn duration(&self) -> Duration {
        match self {
            NotificationLevel::Success => Duration::from_secs(2),
            NotificationLevel::Error => Duration::from_secs(5),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "✓",
            NotificationLevel::Error => "✗",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: Uuid,
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }
}

/// Поверхность, на которую выводятся уведомления.
pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, notification: Notification);
}

#[derive(Debug)]
struct Toast {
    notification: Notification,
    shown_at: Instant,
}

impl Toast {
    fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.notification.level.duration()
    }
}

/// Очередь toast-уведомлений. Клонируется дёшево, все клоны видят одну очередь.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Arc<Mutex<VecDeque<Toast>>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Актуальные уведомления, от старых к новым. Истёкшие удаляются.
    pub fn visible(&self) -> Vec<Notification> {
        let mut toasts = self.lock();
        toasts.retain(|t| !t.is_expired());
        toasts.iter().map(|t| t.notification.clone()).collect()
    }

    /// Забирает актуальные уведомления из очереди, чтобы показать каждое один раз.
    /// Истёкшие отбрасываются без показа.
    pub fn take_visible(&self) -> Vec<Notification> {
        let mut toasts = self.lock();
        toasts.retain(|t| !t.is_expired());
        toasts.drain(..).map(|t| t.notification).collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<Toast>> {
        // Отравленный мьютекс не ломает очередь: данные остаются валидными
        self.toasts.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, notification: Notification) {
        let mut toasts = self.lock();
        while toasts.len() >= MAX_VISIBLE_TOASTS {
            toasts.pop_front();
        }
        toasts.push_back(Toast {
            notification,
            shown_at: Instant::now(),
        });
    }
}
