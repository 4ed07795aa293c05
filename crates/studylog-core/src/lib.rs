pub mod config;
pub mod error;
pub mod record;
pub mod report;
pub mod store;

// Re-exports
pub use config::{ProviderKind, Settings};
pub use error::{Error, Result};
pub use record::{Record, ValidationPolicy};
pub use report::{Report, DEFAULT_REPORT_INSTRUCTION, NO_RECORDS_MESSAGE, REPORT_ERROR_PREFIX};
pub use store::RecordStore;
