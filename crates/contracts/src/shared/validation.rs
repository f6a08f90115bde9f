//! Проверка обязательных полей запросов.
//!
//! Одни и те же правила применяются на странице (до отправки запроса)
//! и в бэкенде (до обработки).

use thiserror::Error;

/// Ошибка валидации: не заполнено обязательное поле
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Имя первого незаполненного поля
    pub field: &'static str,
    /// Текст для пользователя
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Пустая строка или строка из одних пробелов
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   \n\t"));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn test_error_displays_message() {
        let err = ValidationError::new("title", "Укажите название");
        assert_eq!(err.to_string(), "Укажите название");
        assert_eq!(err.field, "title");
    }
}
