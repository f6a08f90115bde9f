use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contracts::shared::reply::FailureReply;
use contracts::usecases::u601_generate_preview::GeneratePreviewRequest;
use contracts::usecases::u602_send_contact::ContactRequest;

use crate::app_state::AppState;

fn failure(status: StatusCode, error: impl Into<String>) -> Response {
    (status, Json(FailureReply::new(error))).into_response()
}

/// Нечитаемое тело запроса (не JSON, превышен лимит размера) тоже отдаём в формате конверта
fn rejection(e: JsonRejection) -> Response {
    tracing::warn!("Rejected request body: {}", e.body_text());
    failure(e.status(), format!("Некорректный запрос: {}", e.body_text()))
}

// ============================================================================
// UseCase u601: Generate preview
// ============================================================================

/// POST /api/u601/generate-preview
pub async fn u601_generate_preview(
    State(state): State<AppState>,
    payload: Result<Json<GeneratePreviewRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(e) => return rejection(e),
    };

    match state.preview.generate(request).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            let status = e.status_code();
            if status.is_server_error() {
                tracing::error!("Failed to generate preview: {}", e);
            } else {
                tracing::warn!("Preview request rejected: {}", e);
            }
            failure(status, e.to_string())
        }
    }
}

// ============================================================================
// UseCase u602: Send contact message
// ============================================================================

/// POST /api/u602/send-contact
pub async fn u602_send_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(e) => return rejection(e),
    };

    match state.contact.send(request).await {
        Ok(ack) => (StatusCode::OK, Json(ack)).into_response(),
        Err(e) => {
            tracing::warn!("Contact message not sent: {}", e);
            failure(e.status_code(), e.to_string())
        }
    }
}
