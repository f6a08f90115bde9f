pub mod footer;
pub mod header;
pub mod notification_service;

pub use notification_service::{NotificationHost, NotificationService};

use leptos::prelude::*;

/// Каркас лендинга.
///
/// ```text
/// +------------------------------------------+
/// |  Header (логотип, якорная навигация)     |
/// +------------------------------------------+
/// |  content                                 |
/// +------------------------------------------+
/// |  Footer (копирайт, статус сервера)       |
/// +------------------------------------------+
/// ```
/// Уведомления выводятся поверх всего через `NotificationHost`.
#[component]
pub fn LandingShell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <main class="app-main">{children()}</main>
            <footer::Footer />
            <NotificationHost />
        </div>
    }
}
