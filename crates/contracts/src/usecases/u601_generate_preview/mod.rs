pub mod request;
pub mod response;

pub use request::GeneratePreviewRequest;
pub use response::{PreviewAnalysis, PreviewResult, SimilarVideo};

use crate::usecases::common::UseCaseMetadata;

pub struct GeneratePreview;

impl UseCaseMetadata for GeneratePreview {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "generate_preview"
    }

    fn display_name() -> &'static str {
        "Генерация превью"
    }

    fn description() -> &'static str {
        "Загрузка фото, подбор похожих видео и стиля для превью YouTube"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata() {
        assert_eq!(GeneratePreview::full_name(), "u601_generate_preview");
        assert_eq!(GeneratePreview::endpoint_path(), "/api/u601/generate-preview");
    }
}
