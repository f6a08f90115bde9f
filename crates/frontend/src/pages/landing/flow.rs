//! Асинхронные драйверы сценариев: `begin_* → запрос → finish_*`.
//!
//! Транспорт скрыт за [`LandingApi`], хранилище состояния за [`StateCell`],
//! поэтому сценарии проверяются без браузера.

use std::cell::RefCell;

use async_trait::async_trait;
use contracts::usecases::u601_generate_preview::GeneratePreviewRequest;
use contracts::usecases::u602_send_contact::ContactRequest;
use leptos::prelude::*;

use super::state::{Begin, LandingState};
use crate::shared::notice::Notice;

/// Исходящие вызовы страницы.
/// `Ok`: тело ответа (в том числе 4xx/5xx), `Err`: ответа нет.
#[async_trait(?Send)]
pub trait LandingApi {
    async fn generate_preview(&self, request: &GeneratePreviewRequest) -> Result<String, String>;
    async fn send_contact(&self, request: &ContactRequest) -> Result<String, String>;
}

/// Реальный бэкенд
pub struct HttpLandingApi;

#[async_trait(?Send)]
impl LandingApi for HttpLandingApi {
    async fn generate_preview(&self, request: &GeneratePreviewRequest) -> Result<String, String> {
        crate::usecases::u601_generate_preview::api::generate_preview(request).await
    }

    async fn send_contact(&self, request: &ContactRequest) -> Result<String, String> {
        crate::usecases::u602_send_contact::api::send_contact(request).await
    }
}

/// Доступ к [`LandingState`] на время синхронного перехода.
/// `None`: состояние уже недоступно (страница размонтирована).
pub trait StateCell {
    fn with_state<R>(&self, f: impl FnOnce(&mut LandingState) -> R) -> Option<R>;
}

impl StateCell for RefCell<LandingState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut LandingState) -> R) -> Option<R> {
        self.try_borrow_mut().ok().map(|mut state| f(&mut state))
    }
}

impl StateCell for RwSignal<LandingState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut LandingState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Сценарий генерации. `None`: запрос проигнорирован (другой в полёте).
pub async fn generate_preview<S, A>(state: &S, api: &A) -> Option<Notice>
where
    S: StateCell,
    A: LandingApi + ?Sized,
{
    let request = match state.with_state(|s| s.begin_generation())? {
        Begin::Dispatch(request) => request,
        Begin::Rejected(notice) => return Some(notice),
        Begin::Busy => return None,
    };

    let outcome = api.generate_preview(&request).await;
    state.with_state(|s| s.finish_generation(outcome))
}

/// Сценарий отправки сообщения
pub async fn send_contact<S, A>(state: &S, api: &A) -> Option<Notice>
where
    S: StateCell,
    A: LandingApi + ?Sized,
{
    let request = match state.with_state(|s| s.begin_contact())? {
        Begin::Dispatch(request) => request,
        Begin::Rejected(notice) => return Some(notice),
        Begin::Busy => return None,
    };

    let outcome = api.send_contact(&request).await;
    state.with_state(|s| s.finish_contact(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::landing::state::{SelectedImage, CONNECTION_FAILED, CONTACT_SENT};
    use crate::shared::notice::NoticeKind;
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Записывает вызовы и проверяет флаг `in_flight` в момент запроса
    struct FakeApi {
        state: Rc<RefCell<LandingState>>,
        reply: Result<String, String>,
        previews: RefCell<Vec<GeneratePreviewRequest>>,
        contacts: RefCell<Vec<ContactRequest>>,
        saw_in_flight: Cell<bool>,
    }

    impl FakeApi {
        fn new(state: Rc<RefCell<LandingState>>, reply: Result<&str, &str>) -> Self {
            Self {
                state,
                reply: reply.map(str::to_string).map_err(str::to_string),
                previews: RefCell::new(Vec::new()),
                contacts: RefCell::new(Vec::new()),
                saw_in_flight: Cell::new(false),
            }
        }

        fn calls(&self) -> usize {
            self.previews.borrow().len() + self.contacts.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl LandingApi for FakeApi {
        async fn generate_preview(
            &self,
            request: &GeneratePreviewRequest,
        ) -> Result<String, String> {
            self.saw_in_flight.set(self.state.borrow().in_flight);
            self.previews.borrow_mut().push(request.clone());
            self.reply.clone()
        }

        async fn send_contact(&self, request: &ContactRequest) -> Result<String, String> {
            self.saw_in_flight.set(self.state.borrow().in_flight);
            self.contacts.borrow_mut().push(request.clone());
            self.reply.clone()
        }
    }

    fn image() -> SelectedImage {
        SelectedImage {
            name: "skin.jpg".to_string(),
            mime: "image/jpeg".to_string(),
            bytes: vec![0xFF, 0xD8, 0xFF],
        }
    }

    #[test]
    fn test_generation_without_image_makes_no_call() {
        let state = Rc::new(RefCell::new(LandingState::default()));
        state.borrow_mut().form.title = "Замок".to_string();
        let api = FakeApi::new(state.clone(), Ok(r#"{"success":true}"#));

        let notice = block_on(generate_preview(&*state, &api));

        assert_eq!(notice.map(|n| n.kind), Some(NoticeKind::Validation));
        assert_eq!(api.calls(), 0);
        assert!(!state.borrow().in_flight);
    }

    #[test]
    fn test_generation_dispatches_once_with_data_uri() {
        let state = Rc::new(RefCell::new(LandingState::default()));
        {
            let mut s = state.borrow_mut();
            s.form.selected_image = Some(image());
            s.form.title = "Замок".to_string();
            s.form.style = "мрачный".to_string();
        }
        let api = FakeApi::new(
            state.clone(),
            Ok(r#"{"success":true,"imageUrl":"u","title":"Замок","analysis":{}}"#),
        );

        let notice = block_on(generate_preview(&*state, &api)).expect("notice");

        let previews = api.previews.borrow();
        assert_eq!(previews.len(), 1);
        assert!(previews[0].image.starts_with("data:image/jpeg;base64,"));
        assert_eq!(previews[0].style, "мрачный");
        assert!(api.saw_in_flight.get());

        assert_eq!(notice.kind, NoticeKind::Success);
        let state = state.borrow();
        assert!(!state.in_flight);
        assert_eq!(state.preview.as_ref().map(|p| p.image_url.as_str()), Some("u"));
    }

    #[test]
    fn test_busy_trigger_is_ignored() {
        let state = Rc::new(RefCell::new(LandingState::default()));
        {
            let mut s = state.borrow_mut();
            s.in_flight = true;
            s.form.contact_name = "Алекс".to_string();
            s.form.contact_message = "Привет".to_string();
        }
        let api = FakeApi::new(state.clone(), Ok(r#"{"success":true}"#));

        assert_eq!(block_on(send_contact(&*state, &api)), None);
        assert_eq!(api.calls(), 0);
        assert!(state.borrow().in_flight);
    }

    #[test]
    fn test_contact_round_trip() {
        let state = Rc::new(RefCell::new(LandingState::default()));
        {
            let mut s = state.borrow_mut();
            s.form.contact_name = "Алекс".to_string();
            s.form.contact_message = "Сколько стоит Про?".to_string();
        }
        let api = FakeApi::new(state.clone(), Ok(r#"{"success":true}"#));

        let notice = block_on(send_contact(&*state, &api));

        assert_eq!(notice, Some(Notice::success(CONTACT_SENT)));
        assert_eq!(api.contacts.borrow()[0].message, "Сколько стоит Про?");
        assert!(api.saw_in_flight.get());
        assert!(state.borrow().form.contact_name.is_empty());
        assert!(!state.borrow().in_flight);
    }

    #[test]
    fn test_transport_failure_clears_in_flight() {
        let state = Rc::new(RefCell::new(LandingState::default()));
        {
            let mut s = state.borrow_mut();
            s.form.contact_name = "Алекс".to_string();
            s.form.contact_message = "Привет".to_string();
        }
        let api = FakeApi::new(state.clone(), Err("Failed to send request"));

        let notice = block_on(send_contact(&*state, &api));

        assert_eq!(notice, Some(Notice::error(CONNECTION_FAILED)));
        assert_eq!(state.borrow().form.contact_name, "Алекс");
        assert!(!state.borrow().in_flight);
    }
}
