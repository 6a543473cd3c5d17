use reqwest::StatusCode;
use thiserror::Error;

/// Failure to obtain the metrics snapshot at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("metrics request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("metrics endpoint returned {0}")]
    Status(StatusCode),

    #[error("metrics body is not a valid snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("metrics snapshot out of range: {0}")]
    Invalid(String),
}

/// Failure of a single live prediction call.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("prediction request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("prediction endpoint returned {0}")]
    Status(StatusCode),

    #[error("prediction response has an unexpected shape: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("prediction returned unknown entity label: {0}")]
    UnknownLabel(String),

    #[error("prediction task ended without a result")]
    Aborted,
}
