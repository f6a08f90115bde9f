use crate::shared::icons::icon;
use leptos::prelude::*;

/// Якоря разделов лендинга
const NAV_ITEMS: &[(&str, &str)] = &[
    ("#generator", "Генератор"),
    ("#pricing", "Премиум"),
    ("#contact", "Контакты"),
];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__logo">{icon("pickaxe")}</span>
                <span class="header__title">"АЛЬЙГОЛДУ"</span>
            </div>
            <nav class="header__nav">
                {NAV_ITEMS
                    .iter()
                    .map(|(href, label)| {
                        view! { <a class="header__link" href=*href>{*label}</a> }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
