use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::ApiConfig;
use crate::models::{SeatId, SeatPayload, SubmitSeatsRequest};

/// Ошибки обращения к API мест.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("failed to decode seats payload: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Внешний сервис мест: получение схемы и отправка выбора.
#[async_trait]
pub trait SeatsApi: Send + Sync + 'static {
    async fn fetch_seats(&self, count: i64) -> Result<SeatPayload, ApiError>;

    async fn submit_seats(&self, seats: &[SeatId]) -> Result<(), ApiError>;
}

/// Клиент для API мест поверх reqwest
#[derive(Clone)]
pub struct HttpSeatsApi {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpSeatsApi {
    pub fn new(base_url: impl Into<String>, http_client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        }
    }

    /// Создает клиент на основе настроек. Без таймаута, если он не задан.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(ApiError::Transport)?;
        Ok(Self::new(config.base_url.clone(), http_client))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl SeatsApi for HttpSeatsApi {
    async fn fetch_seats(&self, count: i64) -> Result<SeatPayload, ApiError> {
        debug!("Fetching seats: count={}", count);

        let response = self
            .http_client
            .get(format!("{}/seats", self.base_url))
            .query(&[("count", count)])
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let payload = response
            .json::<SeatPayload>()
            .await
            .map_err(ApiError::Decode)?;
        info!("Seats fetched for {} rows", count);
        Ok(payload)
    }

    async fn submit_seats(&self, seats: &[SeatId]) -> Result<(), ApiError> {
        info!("Submitting seats: {:?}", seats);

        let response = self
            .http_client
            .post(format!("{}/submit", self.base_url))
            .json(&SubmitSeatsRequest::new(seats))
            .send()
            .await
            .map_err(ApiError::Transport)?;

        // Тело ответа не используется, важен только статус
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(())
    }
}
