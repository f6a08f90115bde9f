use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::ContactError;
use super::executor::ContactDelivery;
use crate::shared::config::TelegramConfig;

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Ответ Bot API: `{ "ok": bool, "description"?: string, ... }`
#[derive(Deserialize)]
struct BotApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Доставка через Telegram Bot API (`sendMessage`)
pub struct TelegramDelivery {
    client: reqwest::Client,
    config: TelegramConfig,
}

impl TelegramDelivery {
    pub fn new(config: TelegramConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.config.api_base.trim_end_matches('/'),
            self.config.bot_token
        )
    }
}

#[async_trait]
impl ContactDelivery for TelegramDelivery {
    async fn deliver(&self, text: &str) -> Result<(), ContactError> {
        let response = self
            .client
            .post(self.send_message_url())
            .json(&SendMessageRequest {
                chat_id: &self.config.chat_id,
                text,
            })
            .send()
            .await
            .map_err(|e| {
                // URL содержит токен, поэтому в текст ошибки его не пускаем
                tracing::error!("Telegram request failed: {}", e.without_url());
                ContactError::Delivery("Telegram недоступен".to_string())
            })?;

        let status = response.status();
        let body: BotApiResponse = response.json().await.map_err(|e| {
            tracing::error!("Telegram returned unreadable body (HTTP {}): {}", status, e.without_url());
            ContactError::Delivery(format!("HTTP {}", status.as_u16()))
        })?;

        if !status.is_success() || !body.ok {
            let description = body
                .description
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            tracing::error!("Telegram rejected message: {}", description);
            return Err(ContactError::Delivery(description));
        }

        Ok(())
    }
}
