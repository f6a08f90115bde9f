use crate::layout::{LandingShell, NotificationService};
use crate::pages::landing::LandingPage;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    // Уведомления доступны всему дереву через context
    provide_context(NotificationService::new());

    view! {
        <ConfigProvider>
            <LandingShell>
                <LandingPage />
            </LandingShell>
        </ConfigProvider>
    }
}
