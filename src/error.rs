//! Error types for the loto90 draw log

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LotoError>;

#[derive(Error, Debug)]
pub enum LotoError {
    #[error("Invalid category: {value} (expected GH18, CIV10, CIV13 or CIV16)")]
    InvalidCategory { value: String },

    #[error("Invalid ball number: {value} (must be between 1 and 90)")]
    InvalidBall { value: String },

    #[error("A draw takes exactly 5 ball numbers, got {count}")]
    InvalidBallCount { count: usize },

    #[error("All five ball numbers must be distinct")]
    DuplicateBalls,

    #[error("Data directory error: {message}")]
    DataDir { message: String },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests;
