pub mod error;
pub mod executor;
pub mod telegram;

pub use error::ContactError;
pub use executor::{ContactDelivery, ContactExecutor};
pub use telegram::TelegramDelivery;
