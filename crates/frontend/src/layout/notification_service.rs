use crate::shared::icons::icon;
use crate::shared::notice::{Notice, NoticeKind};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Сколько уведомление висит на экране
pub const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq)]
pub struct NoticeEntry {
    pub id: u64,
    pub notice: Notice,
}

/// Стек уведомлений: новые внизу
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeStack {
    entries: Vec<NoticeEntry>,
    next_id: u64,
}

impl NoticeStack {
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(NoticeEntry { id, notice });
        id
    }

    /// Повторное закрытие (таймер после клика) ничего не делает
    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|e| e.id != id);
    }

    pub fn entries(&self) -> &[NoticeEntry] {
        &self.entries
    }
}

/// Сервис всплывающих уведомлений страницы.
///
/// Использование:
/// ```rust,ignore
/// let notifications = use_context::<NotificationService>().expect("NotificationService not provided");
/// notifications.show(Notice::success("Готово"));
/// ```
#[derive(Clone, Copy)]
pub struct NotificationService {
    stack: RwSignal<NoticeStack>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(NoticeStack::default()),
        }
    }

    /// Показать уведомление и запланировать его закрытие
    pub fn show(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Error => log::warn!("Notice: {}", notice.text),
            _ => log::info!("Notice: {}", notice.text),
        }

        let Some(id) = self.stack.try_update(|s| s.push(notice)) else {
            return;
        };

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        // сигнал мог быть уже освобождён вместе с владельцем
        let _ = self.stack.try_update(|s| s.dismiss(id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

fn intent(kind: NoticeKind) -> MessageBarIntent {
    match kind {
        NoticeKind::Success => MessageBarIntent::Success,
        NoticeKind::Error => MessageBarIntent::Error,
        NoticeKind::Validation => MessageBarIntent::Warning,
    }
}

/// Область вывода уведомлений (правый нижний угол)
#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_context::<NotificationService>().expect("NotificationService not provided in context");

    view! {
        <div class="notification-host">
            <For
                each=move || svc.stack.with(|s| s.entries().to_vec())
                key=|entry| entry.id
                children=move |entry: NoticeEntry| {
                    let id = entry.id;
                    view! {
                        <div class="notification-host__item">
                            <MessageBar intent=intent(entry.notice.kind)>
                                <span class="notification-host__text">{entry.notice.text}</span>
                                <button
                                    class="notification-host__close"
                                    title="Закрыть"
                                    on:click=move |_| svc.dismiss(id)
                                >
                                    {icon("close")}
                                </button>
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut stack = NoticeStack::default();
        let first = stack.push(Notice::success("a"));
        let second = stack.push(Notice::error("b"));
        assert_ne!(first, second);
        assert_eq!(stack.entries().len(), 2);

        stack.dismiss(first);
        assert_eq!(stack.entries().len(), 1);
        assert_eq!(stack.entries()[0].notice, Notice::error("b"));

        stack.dismiss(first);
        assert_eq!(stack.entries().len(), 1);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut stack = NoticeStack::default();
        let first = stack.push(Notice::validation("a"));
        stack.dismiss(first);
        let second = stack.push(Notice::validation("b"));
        assert!(second > first);
    }
}
