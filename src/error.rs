use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Snyk API error: {0}")]
    SnykApi(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("No records to export")]
    NoRecords,
}

pub type Result<T> = std::result::Result<T, Error>;
