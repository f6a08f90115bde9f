use async_trait::async_trait;
use contracts::usecases::u602_send_contact::{ContactAck, ContactRequest};
use std::sync::Arc;

use super::error::ContactError;

/// Канал доставки сообщений из контактной формы
#[async_trait]
pub trait ContactDelivery: Send + Sync {
    async fn deliver(&self, text: &str) -> Result<(), ContactError>;
}

/// Executor для UseCase пересылки сообщения
pub struct ContactExecutor {
    delivery: Option<Arc<dyn ContactDelivery>>,
}

impl ContactExecutor {
    pub fn new(delivery: Option<Arc<dyn ContactDelivery>>) -> Self {
        Self { delivery }
    }

    pub async fn send(&self, request: ContactRequest) -> Result<ContactAck, ContactError> {
        request.validate()?;

        let delivery = self.delivery.as_ref().ok_or(ContactError::NotConfigured)?;

        delivery.deliver(&format_message(&request)).await?;
        tracing::info!("Contact message from {:?} delivered", request.name.trim());

        Ok(ContactAck::delivered())
    }
}

/// Текст, который уходит в чат
pub fn format_message(request: &ContactRequest) -> String {
    format!(
        "Новое сообщение с сайта\nИмя: {}\n\n{}",
        request.name.trim(),
        request.message.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingDelivery {
        sent: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ContactDelivery for RecordingDelivery {
        async fn deliver(&self, text: &str) -> Result<(), ContactError> {
            self.sent.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn request(name: &str, message: &str) -> ContactRequest {
        ContactRequest {
            name: name.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_format_message() {
        assert_eq!(
            format_message(&request(" Алекс ", "Сколько стоит Про?\n")),
            "Новое сообщение с сайта\nИмя: Алекс\n\nСколько стоит Про?"
        );
    }

    #[tokio::test]
    async fn test_send_delivers_formatted_text() {
        let delivery = Arc::new(RecordingDelivery::default());
        let executor = ContactExecutor::new(Some(delivery.clone()));

        let ack = executor.send(request("Алекс", "Привет")).await.unwrap();

        assert!(ack.success);
        assert_eq!(delivery.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_send_validates_before_delivery() {
        let delivery = Arc::new(RecordingDelivery::default());
        let executor = ContactExecutor::new(Some(delivery.clone()));

        let err = executor.send(request("Алекс", "")).await.unwrap_err();

        assert!(matches!(err, ContactError::Validation(_)));
        assert!(delivery.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_send_without_delivery_channel() {
        let executor = ContactExecutor::new(None);

        let err = executor.send(request("Алекс", "Привет")).await.unwrap_err();

        assert!(matches!(err, ContactError::NotConfigured));
        assert_eq!(err.status_code(), axum::http::StatusCode::SERVICE_UNAVAILABLE);
    }
}
