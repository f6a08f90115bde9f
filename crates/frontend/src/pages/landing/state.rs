//! Состояние страницы и переходы двух сценариев.
//!
//! Каждый сценарий это пара переходов над [`LandingState`]:
//! `begin_*` (idle → pending, либо отказ с уведомлением) и
//! `finish_*` (pending → idle, возвращает уведомление по итогам ответа).
//! Флаг `in_flight` общий для обоих сценариев: пока любой запрос в полёте,
//! обе кнопки заблокированы.

use base64::Engine;
use contracts::shared::reply::{decode_reply, Reply};
use contracts::usecases::u601_generate_preview::{
    request::MISSING_FIELDS_MESSAGE as PREVIEW_FIELDS_MESSAGE, GeneratePreviewRequest,
    PreviewResult,
};
use contracts::usecases::u602_send_contact::{
    request::MISSING_FIELDS_MESSAGE as CONTACT_FIELDS_MESSAGE, ContactAck, ContactRequest,
};
use contracts::shared::validation::is_blank;

use crate::shared::notice::Notice;

pub const PREVIEW_CREATED: &str = "Превью создано!";
pub const PREVIEW_FAILED: &str = "Не удалось создать превью";
pub const CONTACT_SENT: &str = "Сообщение отправлено!";
pub const CONTACT_FAILED: &str = "Не удалось отправить сообщение";
pub const CONNECTION_FAILED: &str = "Ошибка соединения с сервером";

/// Выбранное фото, уже прочитанное из `File`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl SelectedImage {
    /// `data:<mime>;base64,<payload>`
    pub fn to_data_uri(&self) -> String {
        let mime = if self.mime.is_empty() {
            "application/octet-stream"
        } else {
            self.mime.as_str()
        };
        format!(
            "data:{};base64,{}",
            mime,
            base64::engine::general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

/// Поля обеих форм. Меняются только вводом пользователя.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub selected_image: Option<SelectedImage>,
    pub title: String,
    pub theme: String,
    pub style: String,
    pub contact_name: String,
    pub contact_message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LandingState {
    pub form: FormState,
    /// Исходящий запрос отправлен, ответ ещё не обработан
    pub in_flight: bool,
    pub preview: Option<PreviewResult>,
    /// Номер последнего начатого чтения файла
    pub image_reads: u64,
    /// Последнее чтение ещё не завершилось
    pub image_loading: bool,
}

/// Итог `begin_*`
#[derive(Debug, Clone, PartialEq)]
pub enum Begin<R> {
    /// Запрос можно отправлять, флаг `in_flight` уже поднят
    Dispatch(R),
    /// Форма не заполнена, запрос не отправляется
    Rejected(Notice),
    /// Другой запрос ещё в полёте
    Busy,
}

impl LandingState {
    /// Пользователь выбрал новый файл. Прежний сбрасывается сразу,
    /// чтобы его нельзя было отправить, пока читается новый.
    pub fn begin_image_read(&mut self) -> u64 {
        self.image_reads += 1;
        self.image_loading = true;
        self.form.selected_image = None;
        self.image_reads
    }

    /// Результат чтения с номером `read`. Результаты устаревших чтений
    /// отбрасываются. `Some`: уведомление об ошибке чтения.
    pub fn finish_image_read(
        &mut self,
        read: u64,
        outcome: Result<SelectedImage, String>,
    ) -> Option<Notice> {
        if read != self.image_reads {
            log::debug!("Dropping stale file read #{} (latest #{})", read, self.image_reads);
            return None;
        }

        self.image_loading = false;
        match outcome {
            Ok(image) => {
                log::info!("Selected {} ({} bytes)", image.name, image.bytes.len());
                self.form.selected_image = Some(image);
                None
            }
            Err(e) => {
                log::warn!("Failed to read file: {}", e);
                Some(Notice::error(e))
            }
        }
    }

    pub fn begin_generation(&mut self) -> Begin<GeneratePreviewRequest> {
        if self.in_flight {
            return Begin::Busy;
        }

        let image = match &self.form.selected_image {
            Some(image) if !is_blank(&self.form.title) => image,
            _ => return Begin::Rejected(Notice::validation(PREVIEW_FIELDS_MESSAGE)),
        };

        let request = GeneratePreviewRequest {
            image: image.to_data_uri(),
            title: self.form.title.clone(),
            theme: self.form.theme.clone(),
            style: self.form.style.clone(),
        };

        self.preview = None;
        self.in_flight = true;
        log::info!("Generating preview for {:?}", request.title);
        Begin::Dispatch(request)
    }

    /// `outcome`: тело ответа или текст транспортной ошибки
    pub fn finish_generation(&mut self, outcome: Result<String, String>) -> Notice {
        self.in_flight = false;

        let body = match outcome {
            Ok(body) => body,
            Err(e) => {
                log::warn!("Preview request failed: {}", e);
                return Notice::error(CONNECTION_FAILED);
            }
        };

        match decode_reply::<PreviewResult>(&body) {
            Ok(Reply::Success(result)) => {
                let text = if result.message.is_empty() {
                    PREVIEW_CREATED.to_string()
                } else {
                    result.message.clone()
                };
                self.preview = Some(result);
                Notice::success(text)
            }
            Ok(Reply::Failure { error }) => {
                log::warn!("Preview rejected by server: {:?}", error);
                Notice::error(error.unwrap_or_else(|| PREVIEW_FAILED.to_string()))
            }
            Err(e) => {
                log::warn!("Preview response unreadable: {}", e);
                Notice::error(CONNECTION_FAILED)
            }
        }
    }

    pub fn begin_contact(&mut self) -> Begin<ContactRequest> {
        if self.in_flight {
            return Begin::Busy;
        }

        if is_blank(&self.form.contact_name) || is_blank(&self.form.contact_message) {
            return Begin::Rejected(Notice::validation(CONTACT_FIELDS_MESSAGE));
        }

        self.in_flight = true;
        Begin::Dispatch(ContactRequest {
            name: self.form.contact_name.clone(),
            message: self.form.contact_message.clone(),
        })
    }

    /// Успех очищает поля контактной формы, отказ их сохраняет
    pub fn finish_contact(&mut self, outcome: Result<String, String>) -> Notice {
        self.in_flight = false;

        let body = match outcome {
            Ok(body) => body,
            Err(e) => {
                log::warn!("Contact request failed: {}", e);
                return Notice::error(CONNECTION_FAILED);
            }
        };

        match decode_reply::<ContactAck>(&body) {
            Ok(Reply::Success(ack)) => {
                self.form.contact_name.clear();
                self.form.contact_message.clear();
                Notice::success(ack.message.unwrap_or_else(|| CONTACT_SENT.to_string()))
            }
            Ok(Reply::Failure { error }) => {
                Notice::error(error.unwrap_or_else(|| CONTACT_FAILED.to_string()))
            }
            Err(e) => {
                log::warn!("Contact response unreadable: {}", e);
                Notice::error(CONNECTION_FAILED)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notice::NoticeKind;

    fn png() -> SelectedImage {
        SelectedImage {
            name: "shot.png".to_string(),
            mime: "image/png".to_string(),
            bytes: b"hello".to_vec(),
        }
    }

    fn ready_for_generation() -> LandingState {
        let mut state = LandingState::default();
        state.form.selected_image = Some(png());
        state.form.title = "Дом".to_string();
        state
    }

    const SUCCESS_BODY: &str = r#"{
        "success": true,
        "imageUrl": "http://localhost:3000/previews/a.jpg",
        "title": "Дом",
        "message": "Готово",
        "analysis": {"similarVideos": [], "colorPalette": [], "recommendedStyle": "", "fontSuggestions": []}
    }"#;

    #[test]
    fn test_data_uri() {
        assert_eq!(png().to_data_uri(), "data:image/png;base64,aGVsbG8=");

        let unknown = SelectedImage {
            mime: String::new(),
            ..png()
        };
        assert!(unknown
            .to_data_uri()
            .starts_with("data:application/octet-stream;base64,"));
    }

    #[test]
    fn test_generation_requires_image_and_title() {
        let mut state = LandingState::default();
        state.form.title = "Дом".to_string();
        assert_eq!(
            state.begin_generation(),
            Begin::Rejected(Notice::validation(PREVIEW_FIELDS_MESSAGE))
        );
        assert!(!state.in_flight);

        let mut state = ready_for_generation();
        state.form.title = "   ".to_string();
        assert!(matches!(state.begin_generation(), Begin::Rejected(_)));
        assert!(!state.in_flight);
    }

    #[test]
    fn test_begin_generation_builds_request_and_clears_previous_result() {
        let mut state = ready_for_generation();
        state.form.theme = "выживание".to_string();
        state.finish_generation(Ok(SUCCESS_BODY.to_string()));
        assert!(state.preview.is_some());

        let request = match state.begin_generation() {
            Begin::Dispatch(request) => request,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(request.image, "data:image/png;base64,aGVsbG8=");
        assert_eq!(request.title, "Дом");
        assert_eq!(request.theme, "выживание");
        assert!(state.in_flight);
        assert!(state.preview.is_none());

        assert_eq!(state.begin_generation(), Begin::Busy);
        assert_eq!(state.begin_contact(), Begin::Busy);
    }

    #[test]
    fn test_finish_generation_success() {
        let mut state = ready_for_generation();
        state.begin_generation();

        let notice = state.finish_generation(Ok(SUCCESS_BODY.to_string()));

        assert_eq!(notice, Notice::success("Готово"));
        assert!(!state.in_flight);
        assert_eq!(
            state.preview.as_ref().map(|p| p.image_url.as_str()),
            Some("http://localhost:3000/previews/a.jpg")
        );
    }

    #[test]
    fn test_finish_generation_failures() {
        let mut state = ready_for_generation();

        state.begin_generation();
        let notice = state.finish_generation(Ok(r#"{"success":false,"error":"X"}"#.to_string()));
        assert_eq!(notice, Notice::error("X"));
        assert!(!state.in_flight);

        state.begin_generation();
        let notice = state.finish_generation(Ok(r#"{"success":false}"#.to_string()));
        assert_eq!(notice.text, PREVIEW_FAILED);

        state.begin_generation();
        let notice = state.finish_generation(Err("Failed to send request".to_string()));
        assert_eq!(notice, Notice::error(CONNECTION_FAILED));

        state.begin_generation();
        let notice = state.finish_generation(Ok("<html>502</html>".to_string()));
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, CONNECTION_FAILED);
        assert!(state.preview.is_none());
        assert!(!state.in_flight);
    }

    #[test]
    fn test_latest_file_read_wins() {
        let mut state = LandingState::default();
        let large = state.begin_image_read();
        let small = state.begin_image_read();
        assert!(state.image_loading);

        let b = SelectedImage {
            name: "b.png".to_string(),
            ..png()
        };
        assert_eq!(state.finish_image_read(small, Ok(b)), None);
        assert!(!state.image_loading);

        let a = SelectedImage {
            name: "a.png".to_string(),
            ..png()
        };
        assert_eq!(state.finish_image_read(large, Ok(a)), None);
        assert_eq!(
            state.form.selected_image.as_ref().map(|i| i.name.as_str()),
            Some("b.png")
        );
        assert!(!state.image_loading);
    }

    #[test]
    fn test_stale_read_keeps_loading_flag() {
        let mut state = LandingState::default();
        let first = state.begin_image_read();
        let second = state.begin_image_read();

        assert_eq!(state.finish_image_read(first, Err("boom".to_string())), None);
        assert!(state.image_loading);
        assert!(state.form.selected_image.is_none());

        let notice = state.finish_image_read(second, Err("Ошибка чтения файла".to_string()));
        assert_eq!(notice, Some(Notice::error("Ошибка чтения файла")));
        assert!(!state.image_loading);
    }

    #[test]
    fn test_new_selection_drops_previous_image() {
        let mut state = ready_for_generation();
        state.begin_image_read();

        assert!(state.form.selected_image.is_none());
        assert!(matches!(state.begin_generation(), Begin::Rejected(_)));
    }

    #[test]
    fn test_contact_validation() {
        let mut state = LandingState::default();
        state.form.contact_name = "Алекс".to_string();

        assert_eq!(
            state.begin_contact(),
            Begin::Rejected(Notice::validation(CONTACT_FIELDS_MESSAGE))
        );
        assert!(!state.in_flight);
    }

    #[test]
    fn test_contact_success_clears_fields() {
        let mut state = LandingState::default();
        state.form.contact_name = "Алекс".to_string();
        state.form.contact_message = "Привет".to_string();

        let request = match state.begin_contact() {
            Begin::Dispatch(request) => request,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(request.name, "Алекс");
        assert!(state.in_flight);

        let notice = state.finish_contact(Ok(r#"{"success":true}"#.to_string()));
        assert_eq!(notice, Notice::success(CONTACT_SENT));
        assert!(state.form.contact_name.is_empty());
        assert!(state.form.contact_message.is_empty());
        assert!(!state.in_flight);
    }

    #[test]
    fn test_contact_failure_keeps_fields() {
        let mut state = LandingState::default();
        state.form.contact_name = "Алекс".to_string();
        state.form.contact_message = "Привет".to_string();

        state.begin_contact();
        let notice = state.finish_contact(Ok(
            r#"{"success":false,"error":"Отправка сообщений не настроена"}"#.to_string(),
        ));
        assert_eq!(notice, Notice::error("Отправка сообщений не настроена"));
        assert_eq!(state.form.contact_name, "Алекс");
        assert_eq!(state.form.contact_message, "Привет");

        state.begin_contact();
        let notice = state.finish_contact(Ok(r#"{"success":false}"#.to_string()));
        assert_eq!(notice, Notice::error(CONTACT_FAILED));
        assert_eq!(state.form.contact_name, "Алекс");

        state.begin_contact();
        let notice = state.finish_contact(Err("offline".to_string()));
        assert_eq!(notice.text, CONNECTION_FAILED);
        assert_eq!(state.form.contact_message, "Привет");
        assert!(!state.in_flight);
    }
}
