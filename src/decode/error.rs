use crate::types::granularity::Granularity;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Failed to parse Open-Meteo response")]
    Json(#[from] serde_json::Error),

    #[error("Response contains no locations")]
    NoLocations,

    #[error("Response has no '{0}' block")]
    MissingBlock(Granularity),

    #[error("Response '{granularity}' block is missing variable '{variable}'")]
    MissingVariable {
        granularity: Granularity,
        variable: String,
    },

    #[error("Expected {expected} column names for {found} variables")]
    VariableCountMismatch { expected: usize, found: usize },

    #[error("Variable '{variable}' has {found} values but the time axis has {expected} rows")]
    LengthMismatch {
        variable: String,
        expected: usize,
        found: usize,
    },

    #[error("Sampling interval must be positive, got {0} seconds")]
    InvalidInterval(i64),

    #[error("Timestamp {0} is out of range")]
    TimestampOutOfRange(i64),

    #[error("Failed building DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
