use serde::Deserialize;
use std::env;
use std::time::Duration;
use thiserror::Error;
use validator::Validate;

use crate::services::pricing::PriceRule;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
    #[error("invalid configuration: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

// Главная структура конфигурации
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Config {
    #[validate(nested)]
    pub app: AppConfig,
    #[validate(nested)]
    pub api: ApiConfig,
    #[validate(nested)]
    pub booking: BookingConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AppConfig {
    pub rust_log: String,
}

// Внешний API мест
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ApiConfig {
    #[validate(url)]
    pub base_url: String,
    /// None = без таймаута
    pub request_timeout_seconds: Option<u64>,
}

// Поведение виджета бронирования
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BookingConfig {
    #[validate(range(min = 3, max = 10))]
    pub initial_rows: i64,
    pub simulated_load_ms: u64,
    pub price_rule: PriceRule,
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }
}

impl BookingConfig {
    pub fn simulated_load(&self) -> Duration {
        Duration::from_millis(self.simulated_load_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app: AppConfig {
                rust_log: "seat_booking=info".to_string(),
            },
            api: ApiConfig {
                base_url: "https://codebuddy.review".to_string(),
                request_timeout_seconds: None,
            },
            booking: BookingConfig {
                initial_rows: 3,
                simulated_load_ms: 1000,
                price_rule: PriceRule::Legacy,
            },
        }
    }
}

fn parse_var<T: std::str::FromStr>(
    name: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            expected,
            value,
        }),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let request_timeout_seconds = match env::var("REQUEST_TIMEOUT_SECONDS") {
            Ok(value) if !value.trim().is_empty() => {
                Some(value.trim().parse().map_err(|_| ConfigError::Invalid {
                    name: "REQUEST_TIMEOUT_SECONDS",
                    expected: "number of seconds",
                    value,
                })?)
            }
            _ => None,
        };

        let config = Config {
            app: AppConfig {
                rust_log: env::var("RUST_LOG").unwrap_or(defaults.app.rust_log),
            },
            api: ApiConfig {
                base_url: env::var("SEATS_API_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or(defaults.api.base_url),
                request_timeout_seconds,
            },
            booking: BookingConfig {
                initial_rows: parse_var("INITIAL_ROWS", "number", defaults.booking.initial_rows)?,
                simulated_load_ms: parse_var(
                    "SIMULATED_LOAD_MS",
                    "number of milliseconds",
                    defaults.booking.simulated_load_ms,
                )?,
                price_rule: parse_var(
                    "PRICE_RULE",
                    "price rule (legacy or layout)",
                    defaults.booking.price_rule,
                )?,
            },
        };

        config.validate()?;
        Ok(config)
    }
}

/// Поле ввода числа рядов. Диапазон 3..=10 проверяется только здесь, сам виджет
/// принимает любое значение.
#[derive(Debug, Clone, Copy, Validate)]
pub struct RowCountInput {
    #[validate(range(min = 3, max = 10))]
    pub value: i64,
}

impl RowCountInput {
    pub fn parse(raw: &str) -> Result<i64, ConfigError> {
        let value = raw.trim().parse::<i64>().map_err(|_| ConfigError::Invalid {
            name: "rows",
            expected: "number",
            value: raw.trim().to_string(),
        })?;
        let input = RowCountInput { value };
        input.validate()?;
        Ok(input.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.booking.initial_rows, 3);
        assert_eq!(config.api.request_timeout(), None);
    }

    #[test]
    fn row_input_is_bounded() {
        assert_eq!(RowCountInput::parse("3").unwrap(), 3);
        assert_eq!(RowCountInput::parse(" 10 ").unwrap(), 10);
        assert!(RowCountInput::parse("2").is_err());
        assert!(RowCountInput::parse("11").is_err());
        assert!(RowCountInput::parse("abc").is_err());
    }
}
