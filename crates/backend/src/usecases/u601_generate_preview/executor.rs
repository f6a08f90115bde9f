use base64::Engine;
use chrono::{Local, NaiveDateTime};
use contracts::usecases::u601_generate_preview::{GeneratePreviewRequest, PreviewResult};
use sha2::{Digest, Sha256};
use std::sync::Arc;

use super::analysis::build_analysis;
use super::error::PreviewError;
use super::storage::PreviewStorage;

pub const SUCCESS_MESSAGE: &str = "Превью создано! ИИ нашёл похожие видео и подобрал стиль";

/// Сколько байт изображения участвует в хэше имени файла
const HASH_PREFIX_LEN: usize = 1000;

/// Executor для UseCase генерации превью
pub struct PreviewExecutor {
    storage: Arc<dyn PreviewStorage>,
}

impl PreviewExecutor {
    pub fn new(storage: Arc<dyn PreviewStorage>) -> Self {
        Self { storage }
    }

    /// Сохранить фото и подобрать оформление
    pub async fn generate(
        &self,
        request: GeneratePreviewRequest,
    ) -> Result<PreviewResult, PreviewError> {
        request.validate()?;

        let image = decode_image(&request.image)?;
        let key = preview_key(Local::now().naive_local(), &image);

        let image_url = self
            .storage
            .put(&key, &image)
            .await
            .map_err(|e| PreviewError::Storage(e.to_string()))?;

        tracing::info!(
            "Preview stored: {} ({} bytes, title: {:?})",
            key,
            image.len(),
            request.title
        );

        Ok(PreviewResult {
            success: true,
            image_url,
            analysis: build_analysis(&request.title, &request.theme, &request.style),
            title: request.title,
            message: SUCCESS_MESSAGE.to_string(),
        })
    }
}

/// Декодировать base64, отбросив префикс data URI (`data:image/png;base64,`)
pub fn decode_image(image: &str) -> Result<Vec<u8>, PreviewError> {
    let payload = match image.split_once(',') {
        Some((_, payload)) => payload,
        None => image,
    };

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| PreviewError::InvalidImage(e.to_string()))?;

    if bytes.is_empty() {
        return Err(PreviewError::InvalidImage("пустой файл".to_string()));
    }

    Ok(bytes)
}

/// Ключ файла вида `previews/20240131_235959_1a2b3c4d.jpg`
pub fn preview_key(timestamp: NaiveDateTime, image: &[u8]) -> String {
    let prefix = &image[..image.len().min(HASH_PREFIX_LEN)];
    let digest = format!("{:x}", Sha256::digest(prefix));
    format!(
        "previews/{}_{}.jpg",
        timestamp.format("%Y%m%d_%H%M%S"),
        &digest[..8]
    )
}
