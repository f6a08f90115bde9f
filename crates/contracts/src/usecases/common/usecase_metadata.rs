/// Метаданные UseCase для идентификации и документирования
pub trait UseCaseMetadata {
    /// Индекс UseCase (например, "u601")
    fn usecase_index() -> &'static str;

    /// Техническое имя (например, "generate_preview")
    fn usecase_name() -> &'static str;

    /// Отображаемое имя для UI
    fn display_name() -> &'static str;

    /// Описание UseCase
    fn description() -> &'static str {
        ""
    }

    /// Полное имя вида "u601_generate_preview"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }

    /// Путь HTTP-эндпоинта вида "/api/u601/generate-preview"
    fn endpoint_path() -> String {
        format!(
            "/api/{}/{}",
            Self::usecase_index(),
            Self::usecase_name().replace('_', "-")
        )
    }
}
