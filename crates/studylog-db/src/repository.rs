use crate::{models::RecordRow, Result};
use async_trait::async_trait;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};
use std::str::FromStr;
use studylog_core::{Record, RecordStore, ValidationPolicy};

const CREATE_RECORDS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS records (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        goal TEXT NOT NULL,
        daily_record TEXT NOT NULL
    )
"#;

#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
    validation: ValidationPolicy,
}

impl Database {
    /// Create new database connection
    ///
    /// The database file is created if it does not exist. In-memory URLs
    /// get a single long-lived connection, since every SQLite memory
    /// connection is its own database.
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool_options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| crate::Error::Connection(format!("{}: {}", database_url, e)))?;

        tracing::debug!("Connected to {}", database_url);

        Ok(Self {
            pool,
            validation: ValidationPolicy::default(),
        })
    }

    pub fn with_validation(mut self, validation: ValidationPolicy) -> Self {
        self.validation = validation;
        self
    }

    /// Initialize database schema
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(CREATE_RECORDS_TABLE)
            .execute(&self.pool)
            .await?;

        tracing::info!("Records table ready");

        Ok(())
    }

    /// Save a record and return it with its assigned id
    pub async fn insert_record(&self, goal: &str, daily_record: &str) -> Result<Record> {
        self.validation.validate(goal, daily_record)?;

        let result = sqlx::query("INSERT INTO records (goal, daily_record) VALUES (?, ?)")
            .bind(goal)
            .bind(daily_record)
            .execute(&self.pool)
            .await?;

        let id = result.last_insert_rowid();
        tracing::debug!("Inserted record {}", id);

        Ok(Record {
            id,
            goal: goal.to_string(),
            daily_record: daily_record.to_string(),
        })
    }

    /// Get all records in insertion order
    pub async fn get_records(&self) -> Result<Vec<Record>> {
        let rows = sqlx::query_as::<_, RecordRow>(
            "SELECT id, goal, daily_record FROM records ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Record::from).collect())
    }

    /// Drop and recreate the records table in one transaction
    pub async fn drop_records(&self) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DROP TABLE IF EXISTS records")
            .execute(&mut *tx)
            .await?;

        sqlx::query(CREATE_RECORDS_TABLE)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!("Records table reset");

        Ok(())
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl RecordStore for Database {
    async fn initialize(&self) -> studylog_core::Result<()> {
        Ok(self.init_schema().await?)
    }

    async fn add(&self, goal: &str, daily_record: &str) -> studylog_core::Result<Record> {
        Ok(self.insert_record(goal, daily_record).await?)
    }

    async fn list_all(&self) -> studylog_core::Result<Vec<Record>> {
        Ok(self.get_records().await?)
    }

    async fn reset(&self) -> studylog_core::Result<()> {
        Ok(self.drop_records().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_store() -> Database {
        let db = Database::new("sqlite::memory:").await.unwrap();
        db.initialize().await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_list_empty() {
        let db = memory_store().await;
        assert!(db.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_preserves_order() {
        let db = memory_store().await;

        let entries = [
            ("Learn Rust", "Ownership chapter"),
            ("Learn Go", "Read spec"),
            ("Learn SQL", "Window functions"),
        ];
        for (goal, daily) in entries {
            db.add(goal, daily).await.unwrap();
        }

        let records = db.list_all().await.unwrap();
        assert_eq!(records.len(), 3);
        for (record, (goal, daily)) in records.iter().zip(entries) {
            assert_eq!(record.goal, goal);
            assert_eq!(record.daily_record, daily);
        }
        assert!(records.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn test_add_returns_persisted_record() {
        let db = memory_store().await;

        let record = db.add("Learn Go", "Read spec").await.unwrap();
        let records = db.list_all().await.unwrap();

        assert_eq!(records, vec![record]);
    }

    #[tokio::test]
    async fn test_add_rejects_empty_fields() {
        let db = memory_store().await;
        db.add("Learn Rust", "Traits").await.unwrap();

        let err = db.add("", "x").await.unwrap_err();
        assert!(err.is_validation());

        let err = db.add("x", "").await.unwrap_err();
        assert!(err.is_validation());

        let err = db.add("x", "   ").await.unwrap_err();
        assert!(err.is_validation());

        assert_eq!(db.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_presence_policy_accepts_whitespace() {
        let db = Database::new("sqlite::memory:")
            .await
            .unwrap()
            .with_validation(ValidationPolicy::Presence);
        db.initialize().await.unwrap();

        let record = db.add("  ", "x").await.unwrap();
        assert_eq!(record.goal, "  ");
        assert!(db.add("", "x").await.unwrap_err().is_validation());
    }

    #[tokio::test]
    async fn test_values_stored_as_submitted() {
        let db = memory_store().await;

        db.add("  Learn Rust ", "Lifetimes\n").await.unwrap();

        let records = db.list_all().await.unwrap();
        assert_eq!(records[0].goal, "  Learn Rust ");
        assert_eq!(records[0].daily_record, "Lifetimes\n");
    }

    #[tokio::test]
    async fn test_reset_clears_records() {
        let db = memory_store().await;
        db.add("Learn Rust", "Macros").await.unwrap();
        db.add("Learn Go", "Channels").await.unwrap();

        db.reset().await.unwrap();
        assert!(db.list_all().await.unwrap().is_empty());

        let record = db.add("Learn Zig", "Comptime").await.unwrap();
        assert_eq!(db.list_all().await.unwrap(), vec![record]);
    }

    #[tokio::test]
    async fn test_reset_on_empty_store() {
        let db = memory_store().await;
        db.reset().await.unwrap();
        db.reset().await.unwrap();
        assert!(db.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let db = memory_store().await;
        db.add("Learn Rust", "Iterators").await.unwrap();

        db.initialize().await.unwrap();
        db.initialize().await.unwrap();

        assert_eq!(db.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_all_is_repeatable() {
        let db = memory_store().await;
        db.add("Learn Rust", "Closures").await.unwrap();
        db.add("Learn Rust", "Smart pointers").await.unwrap();

        let first = db.list_all().await.unwrap();
        let second = db.list_all().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_gap() {
        let db = memory_store().await;
        let first = db.add("a", "1").await.unwrap();
        let second = db.add("b", "2").await.unwrap();

        sqlx::query("DELETE FROM records WHERE id = ?")
            .bind(second.id)
            .execute(&db.pool)
            .await
            .unwrap();

        let third = db.add("c", "3").await.unwrap();
        assert!(third.id > second.id);
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_file_database_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("records.db").display());

        let db = Database::new(&url).await.unwrap();
        db.initialize().await.unwrap();
        db.add("Learn Rust", "Async").await.unwrap();
        db.close().await;

        let reopened = Database::new(&url).await.unwrap();
        reopened.initialize().await.unwrap();
        let records = reopened.list_all().await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].daily_record, "Async");
    }

    #[tokio::test]
    async fn test_storage_error_without_schema() {
        let db = Database::new("sqlite::memory:").await.unwrap();

        let err = db.list_all().await.unwrap_err();
        assert!(matches!(err, studylog_core::Error::Storage(_)));
    }
}
