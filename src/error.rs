//! Error types for items-api

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Store unavailable after {attempts} attempts: {last_error}")]
    StoreUnavailable { attempts: u32, last_error: String },

    #[error("Item not found: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Error::Internal(msg.into())
    }

    /// Whether waiting and trying again could make this error go away.
    ///
    /// Used by the startup readiness loop. Configuration problems and
    /// programming errors never heal on their own, so they end the wait early.
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Database(err) => !matches!(
                err,
                sqlx::Error::Configuration(_)
                    | sqlx::Error::ColumnNotFound(_)
                    | sqlx::Error::ColumnIndexOutOfBounds { .. }
                    | sqlx::Error::ColumnDecode { .. }
                    | sqlx::Error::Decode(_)
                    | sqlx::Error::TypeNotFound { .. }
            ),
            Error::StoreUnavailable { .. } => true,
            Error::NotFound(_) | Error::Config(_) | Error::Internal(_) => false,
        }
    }
}
