use axum::http::StatusCode;
use contracts::shared::validation::ValidationError;
use thiserror::Error;

/// Ошибки пересылки сообщения
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Отправка сообщений не настроена")]
    NotConfigured,

    #[error("Не удалось доставить сообщение: {0}")]
    Delivery(String),
}

impl ContactError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContactError::Validation(_) => StatusCode::BAD_REQUEST,
            ContactError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            ContactError::Delivery(_) => StatusCode::BAD_GATEWAY,
        }
    }
}
