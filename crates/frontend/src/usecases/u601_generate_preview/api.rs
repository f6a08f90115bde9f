use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_generate_preview::{GeneratePreview, GeneratePreviewRequest};

use crate::shared::api_utils::post_json;

/// API клиент для UseCase u601. Возвращает сырое тело ответа.
pub async fn generate_preview(request: &GeneratePreviewRequest) -> Result<String, String> {
    post_json(&GeneratePreview::endpoint_path(), request).await
}
