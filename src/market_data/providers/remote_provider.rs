use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::constants::{DEFAULT_QUOTE_API_URL, ENV_QUOTE_API_TOKEN, ENV_QUOTE_API_URL};
use crate::market_data::market_data_errors::MarketDataError;
use crate::market_data::market_data_model::Quote;
use crate::market_data::market_data_provider::QuoteProvider;

/// Quote payload returned by the remote API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteQuoteBody {
    symbol: String,
    company_name: String,
    latest_price: Decimal,
}

/// Quote source backed by an IEX-style JSON API
/// (`GET {base}/stock/{symbol}/quote?token=...`).
pub struct RemoteQuoteProvider {
    client: Client,
    base_url: String,
    api_token: Option<String>,
}

impl RemoteQuoteProvider {
    pub fn new(base_url: impl Into<String>, api_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_token,
        }
    }

    /// Builds a provider from `QUOTE_API_URL` / `QUOTE_API_TOKEN`, falling
    /// back to the default base URL.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(ENV_QUOTE_API_URL).unwrap_or_else(|_| DEFAULT_QUOTE_API_URL.to_string());
        let api_token = std::env::var(ENV_QUOTE_API_TOKEN).ok();
        Self::new(base_url, api_token)
    }

    fn quote_url(&self, symbol: &str) -> String {
        match &self.api_token {
            Some(token) => format!(
                "{}/stock/{}/quote?token={}",
                self.base_url, symbol, token
            ),
            None => format!("{}/stock/{}/quote", self.base_url, symbol),
        }
    }
}

#[async_trait]
impl QuoteProvider for RemoteQuoteProvider {
    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let url = self.quote_url(symbol);
        debug!("Fetching quote for {} from remote provider", symbol);

        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(MarketDataError::NotFound(symbol.to_string())),
            status if !status.is_success() => {
                return Err(MarketDataError::ProviderError(format!(
                    "quote API returned {} for {}",
                    status, symbol
                )));
            }
            _ => {}
        }

        let body = response.text().await?;
        let quote: RemoteQuoteBody = serde_json::from_str(&body)
            .map_err(|e| MarketDataError::ParsingError(e.to_string()))?;

        if quote.latest_price <= Decimal::ZERO {
            return Err(MarketDataError::InvalidData(format!(
                "non-positive price {} for {}",
                quote.latest_price, symbol
            )));
        }

        Ok(Quote {
            symbol: quote.symbol,
            name: quote.company_name,
            price: quote.latest_price,
        })
    }
}
