use std::sync::Arc;

use crate::shared::config::Config;
use crate::usecases::u601_generate_preview::{PreviewExecutor, PreviewStorage};
use crate::usecases::u602_send_contact::{ContactDelivery, ContactExecutor};

/// Общее состояние обработчиков
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub preview: Arc<PreviewExecutor>,
    pub contact: Arc<ContactExecutor>,
}

impl AppState {
    pub fn new(
        config: Config,
        storage: Arc<dyn PreviewStorage>,
        delivery: Option<Arc<dyn ContactDelivery>>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            preview: Arc::new(PreviewExecutor::new(storage)),
            contact: Arc::new(ContactExecutor::new(delivery)),
        }
    }
}
