//! ViewModel лендинга

use contracts::usecases::u601_generate_preview::PreviewResult;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::flow::{self, HttpLandingApi};
use super::state::{FormState, LandingState};
use crate::layout::NotificationService;
use crate::shared::file_reader::read_selected_image;

#[derive(Clone, Copy)]
pub struct LandingVm {
    pub state: RwSignal<LandingState>,
    notifications: NotificationService,
}

impl LandingVm {
    pub fn new(notifications: NotificationService) -> Self {
        Self {
            state: RwSignal::new(LandingState::default()),
            notifications,
        }
    }

    // --- чтение ---

    pub fn field(&self, get: fn(&FormState) -> String) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| get(&s.form)))
    }

    pub fn in_flight(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.in_flight))
    }

    /// Идёт чтение выбранного файла
    pub fn image_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.image_loading))
    }

    pub fn selected_file_name(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| s.form.selected_image.as_ref().map(|i| i.name.clone()))
        })
    }

    pub fn preview(&self) -> Signal<Option<PreviewResult>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.preview.clone()))
    }

    // --- ввод ---

    pub fn setter(&self, set: fn(&mut FormState, String)) -> Callback<String> {
        let state = self.state;
        Callback::new(move |value: String| state.update(|s| set(&mut s.form, value)))
    }

    /// Читает файл целиком. Отмена диалога (`None`) оставляет прежний выбор.
    pub fn select_file(&self, file: Option<web_sys::File>) {
        let Some(file) = file else {
            return;
        };

        let state = self.state;
        let notifications = self.notifications;
        let Some(read) = state.try_update(|s| s.begin_image_read()) else {
            return;
        };

        spawn_local(async move {
            let outcome = read_selected_image(file).await;
            if let Some(Some(notice)) = state.try_update(|s| s.finish_image_read(read, outcome)) {
                notifications.show(notice);
            }
        });
    }

    // --- команды ---

    pub fn generate(&self) {
        let state = self.state;
        let notifications = self.notifications;
        spawn_local(async move {
            if let Some(notice) = flow::generate_preview(&state, &HttpLandingApi).await {
                notifications.show(notice);
            }
        });
    }

    pub fn send_contact(&self) {
        let state = self.state;
        let notifications = self.notifications;
        spawn_local(async move {
            if let Some(notice) = flow::send_contact(&state, &HttpLandingApi).await {
                notifications.show(notice);
            }
        });
    }
}
