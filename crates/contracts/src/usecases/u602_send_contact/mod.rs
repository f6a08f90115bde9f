pub mod request;
pub mod response;

pub use request::ContactRequest;
pub use response::ContactAck;

use crate::usecases::common::UseCaseMetadata;

pub struct SendContact;

impl UseCaseMetadata for SendContact {
    fn usecase_index() -> &'static str {
        "u602"
    }

    fn usecase_name() -> &'static str {
        "send_contact"
    }

    fn display_name() -> &'static str {
        "Сообщение в Telegram"
    }

    fn description() -> &'static str {
        "Пересылка вопроса с сайта в Telegram-чат команды"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata() {
        assert_eq!(SendContact::endpoint_path(), "/api/u602/send-contact");
    }
}
