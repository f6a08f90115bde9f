use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u602_send_contact::{ContactRequest, SendContact};

use crate::shared::api_utils::post_json;

/// API клиент для UseCase u602
pub async fn send_contact(request: &ContactRequest) -> Result<String, String> {
    post_json(&SendContact::endpoint_path(), request).await
}
