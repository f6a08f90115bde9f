use contracts::usecases::u601_generate_preview::{PreviewAnalysis, SimilarVideo};

use crate::shared::format::format_compact;

const DEFAULT_STYLE: &str = "Яркий и драматичный";
const COLOR_PALETTE: [&str; 3] = ["#FF6B6B", "#4ECDC4", "#FFE66D"];
const FONT_SUGGESTIONS: [&str; 3] = ["Impact", "Bebas Neue", "Montserrat Bold"];

/// Подбор похожих видео и оформления по названию, теме и стилю
pub fn build_analysis(title: &str, theme: &str, style: &str) -> PreviewAnalysis {
    let theme = theme.trim();
    let style = style.trim();

    let or_default = |value: &str, default: &str| {
        if value.is_empty() {
            default.to_string()
        } else {
            value.to_string()
        }
    };

    let similar_videos = vec![
        SimilarVideo {
            title: format!("Топ 10 способов {}", or_default(theme, "играть")),
            view_count: format_compact(1_200_000),
        },
        SimilarVideo {
            title: format!("{} - ГАЙД", title.trim()),
            view_count: format_compact(850_000),
        },
        SimilarVideo {
            title: format!("Как стать ПРО в {}", or_default(theme, "Minecraft")),
            view_count: format_compact(2_100_000),
        },
    ];

    PreviewAnalysis {
        similar_videos,
        color_palette: COLOR_PALETTE.iter().map(|c| c.to_string()).collect(),
        recommended_style: or_default(style, DEFAULT_STYLE),
        font_suggestions: FONT_SUGGESTIONS.iter().map(|f| f.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_empty_theme_and_style() {
        let analysis = build_analysis("Мой дом", "", " ");

        let titles: Vec<_> = analysis
            .similar_videos
            .iter()
            .map(|v| v.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec!["Топ 10 способов играть", "Мой дом - ГАЙД", "Как стать ПРО в Minecraft"]
        );
        assert_eq!(analysis.similar_videos[0].view_count, "1.2M");
        assert_eq!(analysis.similar_videos[1].view_count, "850K");
        assert_eq!(analysis.recommended_style, "Яркий и драматичный");
        assert_eq!(analysis.color_palette.len(), 3);
        assert_eq!(analysis.font_suggestions[0], "Impact");
    }

    #[test]
    fn test_uses_theme_and_style() {
        let analysis = build_analysis("Дом", "выживание", "мемный");
        assert_eq!(analysis.similar_videos[0].title, "Топ 10 способов выживание");
        assert_eq!(analysis.similar_videos[2].title, "Как стать ПРО в выживание");
        assert_eq!(analysis.recommended_style, "мемный");
    }
}
