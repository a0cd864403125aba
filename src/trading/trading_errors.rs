use rust_decimal::Decimal;
use thiserror::Error;

use crate::errors::Error;
use crate::market_data::MarketDataError;

pub type Result<T> = std::result::Result<T, TradeError>;

/// User-facing trade rejections.
///
/// Every variant except `Internal` is a recoverable rejection that leaves
/// ledger state untouched; the caller decides whether to re-prompt.
#[derive(Error, Debug)]
pub enum TradeError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("Quote source unavailable: {0}")]
    QuoteUnavailable(String),

    #[error("Insufficient funds: cost {required} exceeds cash {available}")]
    InsufficientFunds {
        required: Decimal,
        available: Decimal,
    },

    #[error("Insufficient shares: requested {requested}, holding {held}")]
    InsufficientShares { requested: i64, held: i64 },

    #[error("No holding for symbol {0}")]
    NoSuchHolding(String),

    #[error(transparent)]
    Internal(#[from] Error),
}

impl From<MarketDataError> for TradeError {
    fn from(err: MarketDataError) -> Self {
        match err {
            MarketDataError::NotFound(symbol) => TradeError::UnknownSymbol(symbol),
            MarketDataError::InvalidData(msg) => TradeError::InvalidInput(msg),
            other => TradeError::QuoteUnavailable(other.to_string()),
        }
    }
}

impl From<diesel::result::Error> for TradeError {
    fn from(err: diesel::result::Error) -> Self {
        TradeError::Internal(err.into())
    }
}
