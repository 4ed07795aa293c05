use async_trait::async_trait;

use crate::{Record, Result};

/// Durable storage for the record collection.
///
/// Implementations are constructed once at startup and shared by handle
/// (`Arc<dyn RecordStore>`). Every operation is atomic with respect to the
/// others: readers never observe a partially written record and `reset`
/// is all-or-nothing.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Ensure the records table exists. Idempotent, never erases data.
    async fn initialize(&self) -> Result<()>;

    /// Validate and persist a new record, returning it with its assigned id.
    async fn add(&self, goal: &str, daily_record: &str) -> Result<Record>;

    /// All records in insertion order.
    async fn list_all(&self) -> Result<Vec<Record>>;

    /// Drop every record and recreate an empty table with the same schema.
    async fn reset(&self) -> Result<()>;
}
