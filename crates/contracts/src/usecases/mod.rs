pub mod common;
pub mod u601_generate_preview;
pub mod u602_send_contact;
