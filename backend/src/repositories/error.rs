//! Store error type

use job_board_shared::CastError;
use thiserror::Error;

/// Failure raised by a store backend
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("duplicate key error: {0}")]
    Conflict(String),

    #[error(transparent)]
    Cast(#[from] CastError),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Map unique-index violations to `Conflict`, everything else to `Database`
    pub fn from_insert(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::Conflict(db.message().to_string())
            }
            _ => StoreError::Database(err),
        }
    }
}
