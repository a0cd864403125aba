use thiserror::Error;

/// Errors from the quote source boundary.
///
/// `NotFound` (the instrument does not exist) and the provider-failure
/// variants are distinct on purpose; callers map them to different
/// user-facing rejections.
#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Parsing error: {0}")]
    ParsingError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}
