pub mod analysis;
pub mod error;
pub mod executor;
pub mod storage;

pub use error::PreviewError;
pub use executor::PreviewExecutor;
pub use storage::{LocalPreviewStorage, PreviewStorage};
