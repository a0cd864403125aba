use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::market_data_errors::MarketDataError;
use super::market_data_model::{normalize_symbol, Quote};
use super::market_data_provider::QuoteProvider;

/// Trait defining the contract for quote lookups from the rest of the
/// system (trade decisions, valuations, and the plain quote view).
#[async_trait]
pub trait MarketDataServiceTrait: Send + Sync {
    async fn get_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;
}

/// Service wrapping a [`QuoteProvider`] with symbol normalization.
pub struct MarketDataService {
    provider: Arc<dyn QuoteProvider>,
}

impl MarketDataService {
    /// Creates a new MarketDataService instance.
    pub fn new(provider: Arc<dyn QuoteProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl MarketDataServiceTrait for MarketDataService {
    async fn get_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let symbol = normalize_symbol(symbol);
        if symbol.is_empty() {
            return Err(MarketDataError::InvalidData(
                "symbol cannot be empty".to_string(),
            ));
        }

        let quote = self.provider.get_latest_quote(&symbol).await?;
        debug!("Quote {}: {} @ {}", quote.symbol, quote.name, quote.price);
        Ok(quote)
    }
}
