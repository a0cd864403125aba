use async_trait::async_trait;

use super::market_data_errors::MarketDataError;
use super::market_data_model::Quote;

/// Contract for an external price-quote source.
///
/// Lookups are idempotent and side-effect free; implementations must
/// return `MarketDataError::NotFound` for an unknown symbol and one of the
/// provider-failure variants when the upstream is unreachable.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;
}
