//! Error type for the fallible edges: loading rate cards and CSV data

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrokerError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid rate card: {0}")]
    RateCard(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid date '{value}': {source}")]
    Date {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, BrokerError>;
