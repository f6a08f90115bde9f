use serde::{Deserialize, Serialize};

use crate::shared::validation::{is_blank, ValidationError};

/// Текст отказа при незаполненных фото или названии
pub const MISSING_FIELDS_MESSAGE: &str = "Необходимо загрузить фото и указать название";

/// Запрос на генерацию превью
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratePreviewRequest {
    /// Изображение в виде data URI (`data:image/png;base64,...`)
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub style: String,
}

impl GeneratePreviewRequest {
    /// Фото и название обязательны, тема и стиль необязательны
    pub fn validate(&self) -> Result<(), ValidationError> {
        if is_blank(&self.image) {
            return Err(ValidationError::new("image", MISSING_FIELDS_MESSAGE));
        }
        if is_blank(&self.title) {
            return Err(ValidationError::new("title", MISSING_FIELDS_MESSAGE));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(image: &str, title: &str) -> GeneratePreviewRequest {
        GeneratePreviewRequest {
            image: image.to_string(),
            title: title.to_string(),
            theme: String::new(),
            style: String::new(),
        }
    }

    #[test]
    fn test_validate() {
        assert!(request("data:image/png;base64,AAAA", "Дом").validate().is_ok());
        assert_eq!(request("", "Дом").validate().unwrap_err().field, "image");
        assert_eq!(
            request("data:image/png;base64,AAAA", "  ").validate().unwrap_err().field,
            "title"
        );
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let req: GeneratePreviewRequest = serde_json::from_str(r#"{"title":"Дом"}"#).unwrap();
        assert_eq!(req.image, "");
        assert!(req.validate().is_err());
    }
}
