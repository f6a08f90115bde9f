use crate::shared::icons::{icon, icon_sized};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    /// Рублей в месяц
    pub price_rub: u32,
    pub icon_name: &'static str,
    pub features: &'static [&'static str],
    /// Выделенная карточка
    pub featured: bool,
}

impl PricingTier {
    pub fn price_label(&self) -> String {
        format!("{}₽/мес", self.price_rub)
    }
}

pub const TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Базовый",
        price_rub: 500,
        icon_name: "pickaxe",
        features: &["10 превью в день", "HD качество", "5 стилей"],
        featured: false,
    },
    PricingTier {
        name: "Премиум",
        price_rub: 1500,
        icon_name: "crown",
        features: &[
            "Безлимит превью",
            "4K качество",
            "20 стилей",
            "Приоритет генерации",
        ],
        featured: true,
    },
    PricingTier {
        name: "Про",
        price_rub: 3000,
        icon_name: "diamond",
        features: &[
            "Всё из Премиум",
            "API доступ",
            "Кастом стили",
            "Поддержка 24/7",
        ],
        featured: false,
    },
];

#[component]
pub fn PricingSection() -> impl IntoView {
    view! {
        <section id="pricing" class="landing__section">
            <h2 class="landing__section-title">"Премиум Тарифы"</h2>
            <div class="pricing-grid">
                {TIERS.iter().map(|tier| view! { <PricingCard tier=*tier /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn PricingCard(tier: PricingTier) -> impl IntoView {
    let class = if tier.featured {
        "card pricing-card pricing-card--featured"
    } else {
        "card pricing-card"
    };

    view! {
        <div class=class>
            <div class="pricing-card__icon">{icon_sized(tier.icon_name, 32)}</div>
            <h3 class="pricing-card__name">{tier.name}</h3>
            <div class="pricing-card__price">{tier.price_label()}</div>
            <ul class="pricing-card__features">
                {tier
                    .features
                    .iter()
                    .map(|feature| view! {
                        <li>{icon("check")}<span>{*feature}</span></li>
                    })
                    .collect_view()}
            </ul>
            // тариф оформляется через форму обратной связи
            <a class="button button--secondary pricing-card__choose" href="#contact">"Выбрать"</a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers() {
        let labels: Vec<String> = TIERS.iter().map(|t| t.price_label()).collect();
        assert_eq!(labels, vec!["500₽/мес", "1500₽/мес", "3000₽/мес"]);
        assert_eq!(TIERS.iter().filter(|t| t.featured).count(), 1);
    }
}
