use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An insert failed part-way through the batch. Rows written before it stay.
    #[error("Insert of bid rank {rank} failed after {inserted} rows were written: {source}")]
    Insert {
        rank: i32,
        inserted: usize,
        #[source]
        source: sqlx::Error,
    },

    #[error("Invalid bid batch: {0}")]
    InvalidBatch(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
