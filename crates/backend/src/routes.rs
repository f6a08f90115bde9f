use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_generate_preview::GeneratePreview;
use contracts::usecases::u602_send_contact::SendContact;
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api::handlers;
use crate::app_state::AppState;
use crate::system::middleware::request_logger::request_logger;

/// Конфигурация всех роутов приложения
///
/// `storage_root`: каталог хранилища превью, раздаётся по `/previews`;
/// всё остальное отдаётся из `dist` (собранный фронтенд).
pub fn configure_routes(state: AppState, storage_root: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let body_limit = state.config.server.max_body_bytes();

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // USECASE ROUTES
        // ========================================
        .route(
            &GeneratePreview::endpoint_path(),
            post(handlers::usecases::u601_generate_preview),
        )
        .route(
            &SendContact::endpoint_path(),
            post(handlers::usecases::u602_send_contact),
        )
        .nest_service("/previews", ServeDir::new(storage_root.join("previews")))
        .fallback_service(ServeDir::new("dist"))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
        .with_state(state)
}
