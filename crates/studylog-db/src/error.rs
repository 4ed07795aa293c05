use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("{0}")]
    Validation(String),

    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<studylog_core::Error> for Error {
    fn from(e: studylog_core::Error) -> Self {
        match e {
            studylog_core::Error::Validation(msg) => Error::Validation(msg),
            other => Error::Other(anyhow::anyhow!(other)),
        }
    }
}

impl From<Error> for studylog_core::Error {
    fn from(e: Error) -> Self {
        match e {
            Error::Validation(msg) => studylog_core::Error::Validation(msg),
            other => studylog_core::Error::Storage(other.to_string()),
        }
    }
}
