pub mod reply;
pub mod validation;
