//! Конверт ответа эндпоинтов: `{ "success": bool, "error"?: string, ...payload }`
//!
//! Ответ разбирается на три класса:
//! - успех (`success: true`, payload корректен);
//! - отказ, о котором сообщил сервер (`success: false`, текст в `error`);
//! - нечитаемый ответ (не JSON, не объект, битый payload), см. [`DecodeError`].
//!
//! HTTP-статус не учитывается: отказы приходят с кодами 4xx/5xx, но тело
//! у них всё равно в формате конверта.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Тело ответа при отказе
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureReply {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FailureReply {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Результат разбора тела ответа
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    Success(T),
    Failure { error: Option<String> },
}

/// Тело ответа не удалось разобрать
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("response is not valid JSON: {0}")]
    NotJson(String),

    #[error("response is not a JSON object")]
    NotAnObject,

    #[error("malformed success payload: {0}")]
    MalformedPayload(String),
}

/// Разобрать тело ответа эндпоинта
pub fn decode_reply<T: DeserializeOwned>(body: &str) -> Result<Reply<T>, DecodeError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| DecodeError::NotJson(e.to_string()))?;

    let object = value.as_object().ok_or(DecodeError::NotAnObject)?;

    let success = object
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !success {
        let error = object
            .get("error")
            .and_then(Value::as_str)
            .filter(|e| !e.is_empty())
            .map(str::to_string);
        return Ok(Reply::Failure { error });
    }

    serde_json::from_value(value)
        .map(Reply::Success)
        .map_err(|e| DecodeError::MalformedPayload(e.to_string()))
}
