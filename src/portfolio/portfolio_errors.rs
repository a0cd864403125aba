use thiserror::Error;

use crate::errors::Error;

pub type Result<T> = std::result::Result<T, PortfolioError>;

/// Errors from portfolio valuation.
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// A quote lookup failed during valuation. Valuation is all-or-nothing:
    /// one failed symbol fails the whole portfolio rather than rendering
    /// stale or partial numbers.
    #[error("Quote unavailable for {symbol}: {reason}")]
    QuoteUnavailable { symbol: String, reason: String },

    #[error(transparent)]
    Internal(#[from] Error),
}
