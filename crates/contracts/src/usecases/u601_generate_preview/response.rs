use serde::{Deserialize, Serialize};

/// Результат генерации превью (тело успешного ответа)
///
/// Сериализуется в camelCase. При разборе принимаются и snake_case имена
/// (`image_url`, `ai_analysis`), которые отдаёт serverless-версия эндпоинта.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResult {
    pub success: bool,
    #[serde(alias = "image_url")]
    pub image_url: String,
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(alias = "ai_analysis")]
    pub analysis: PreviewAnalysis,
}

/// Анализ: похожие видео и рекомендации по оформлению
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewAnalysis {
    /// Порядок важен: от самого похожего
    #[serde(default, alias = "similar_videos")]
    pub similar_videos: Vec<SimilarVideo>,
    #[serde(default, alias = "color_scheme")]
    pub color_palette: Vec<String>,
    #[serde(default, alias = "recommended_style")]
    pub recommended_style: String,
    #[serde(default, alias = "font_suggestions")]
    pub font_suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarVideo {
    pub title: String,
    /// Уже отформатированное число просмотров ("1.2M")
    #[serde(alias = "views")]
    pub view_count: String,
}
