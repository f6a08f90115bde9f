use serde::{Deserialize, Serialize};

/// Подтверждение доставки сообщения
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAck {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ContactAck {
    pub fn delivered() -> Self {
        Self {
            success: true,
            message: None,
        }
    }
}
