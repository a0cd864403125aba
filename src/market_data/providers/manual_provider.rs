use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::market_data::market_data_errors::MarketDataError;
use crate::market_data::market_data_model::Quote;
use crate::market_data::market_data_provider::QuoteProvider;

/// Fixed-price quote source for tests and offline runs.
///
/// Prices can be repointed at runtime, which is how tests exercise price
/// drift between a buy and a later sell.
#[derive(Default)]
pub struct ManualProvider {
    quotes: RwLock<HashMap<String, Quote>>,
}

impl ManualProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration of a quoted symbol.
    pub fn with_quote(self, symbol: &str, name: &str, price: Decimal) -> Self {
        self.set_quote(symbol, name, price);
        self
    }

    /// Registers or repoints a symbol's price.
    pub fn set_quote(&self, symbol: &str, name: &str, price: Decimal) {
        let mut quotes = self.quotes.write().unwrap_or_else(|e| e.into_inner());
        quotes.insert(
            symbol.to_string(),
            Quote {
                symbol: symbol.to_string(),
                name: name.to_string(),
                price,
            },
        );
    }
}

#[async_trait]
impl QuoteProvider for ManualProvider {
    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let quotes = self.quotes.read().unwrap_or_else(|e| e.into_inner());
        quotes
            .get(symbol)
            .cloned()
            .ok_or_else(|| MarketDataError::NotFound(symbol.to_string()))
    }
}
