use axum::http::StatusCode;
use contracts::shared::validation::ValidationError;
use thiserror::Error;

/// Ошибки генерации превью
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Некорректное изображение: {0}")]
    InvalidImage(String),

    #[error("Ошибка: {0}")]
    Storage(String),
}

impl PreviewError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PreviewError::Validation(_) | PreviewError::InvalidImage(_) => {
                StatusCode::BAD_REQUEST
            }
            PreviewError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
