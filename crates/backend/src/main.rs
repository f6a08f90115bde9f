pub mod api;
pub mod app_state;
pub mod routes;
pub mod shared;
pub mod system;
pub mod usecases;

use std::net::SocketAddr;
use std::sync::Arc;

use app_state::AppState;
use usecases::u601_generate_preview::LocalPreviewStorage;
use usecases::u602_send_contact::{ContactDelivery, TelegramDelivery};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tokio::net::TcpListener;

    system::tracing::initialize()?;

    let config = shared::config::load_config()?;

    let storage_dir = shared::config::get_storage_dir(&config);
    std::fs::create_dir_all(&storage_dir).map_err(|e| {
        anyhow::anyhow!(
            "Cannot create storage directory {}: {}",
            storage_dir.display(),
            e
        )
    })?;
    tracing::info!("Preview storage: {}", storage_dir.display());

    let storage = Arc::new(LocalPreviewStorage::new(
        storage_dir.clone(),
        config.storage.public_base_url.clone(),
    ));

    let delivery: Option<Arc<dyn ContactDelivery>> = match &config.telegram {
        Some(telegram) => {
            tracing::info!("Contact messages go to Telegram chat {}", telegram.chat_id);
            Some(Arc::new(TelegramDelivery::new(telegram.clone())))
        }
        None => {
            tracing::warn!("[telegram] section missing, contact form is disabled");
            None
        }
    };

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid server address: {}", e))?;

    let app = routes::configure_routes(AppState::new(config, storage, delivery), &storage_dir);

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
