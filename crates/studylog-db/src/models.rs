use sqlx::FromRow;
use studylog_core::Record;

#[derive(Debug, Clone, FromRow)]
pub struct RecordRow {
    pub id: i64,
    pub goal: String,
    pub daily_record: String,
}

impl From<RecordRow> for Record {
    fn from(row: RecordRow) -> Self {
        Record {
            id: row.id,
            goal: row.goal,
            daily_record: row.daily_record,
        }
    }
}
