use serde::{Deserialize, Serialize};

use crate::shared::validation::{is_blank, ValidationError};

/// Текст отказа при незаполненных имени или сообщении
pub const MISSING_FIELDS_MESSAGE: &str = "Укажите имя и сообщение";

/// Сообщение из контактной формы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub message: String,
}

impl ContactRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if is_blank(&self.name) {
            return Err(ValidationError::new("name", MISSING_FIELDS_MESSAGE));
        }
        if is_blank(&self.message) {
            return Err(ValidationError::new("message", MISSING_FIELDS_MESSAGE));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let ok = ContactRequest {
            name: "Алекс".to_string(),
            message: "Есть вопрос".to_string(),
        };
        assert!(ok.validate().is_ok());

        let no_name = ContactRequest {
            name: String::new(),
            ..ok.clone()
        };
        assert_eq!(no_name.validate().unwrap_err().field, "name");

        let no_message = ContactRequest {
            message: " ".to_string(),
            ..ok
        };
        assert_eq!(no_message.validate().unwrap_err().field, "message");
    }
}
