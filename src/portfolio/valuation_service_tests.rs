//! Tests for live portfolio valuation.

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::accounts::{Account, AccountRepositoryTrait, NewAccount};
use crate::errors::Result as CoreResult;
use crate::holdings::{Holding, HoldingRepositoryTrait};
use crate::market_data::{MarketDataError, MarketDataServiceTrait, Quote};

use super::valuation_service::{ValuationService, ValuationServiceTrait};
use super::PortfolioError;

struct MockAccounts {
    cash: Decimal,
}

impl AccountRepositoryTrait for MockAccounts {
    fn create(&self, _new_account: NewAccount) -> CoreResult<Account> {
        unreachable!("not exercised by valuation tests")
    }

    fn get_by_id(&self, account_id: &str) -> CoreResult<Account> {
        let now = chrono::Utc::now().naive_utc();
        Ok(Account {
            id: account_id.to_string(),
            name: "test".to_string(),
            cash: self.cash,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }
}

#[derive(Default)]
struct MockHoldings {
    rows: Vec<(String, i64)>,
}

impl HoldingRepositoryTrait for MockHoldings {
    fn get_for_account(&self, account_id: &str) -> CoreResult<Vec<Holding>> {
        let now = chrono::Utc::now().naive_utc();
        Ok(self
            .rows
            .iter()
            .map(|(symbol, shares)| Holding {
                id: format!("h-{symbol}"),
                account_id: account_id.to_string(),
                symbol: symbol.clone(),
                shares: *shares,
                created_at: now,
                updated_at: now,
            })
            .collect())
    }

    fn get_by_symbol(&self, account_id: &str, symbol: &str) -> CoreResult<Option<Holding>> {
        Ok(self
            .get_for_account(account_id)?
            .into_iter()
            .find(|h| h.symbol == symbol))
    }
}

#[derive(Default)]
struct MockQuotes {
    prices: Mutex<HashMap<String, Decimal>>,
}

impl MockQuotes {
    fn with_prices(prices: &[(&str, Decimal)]) -> Arc<Self> {
        let mock = Self::default();
        {
            let mut map = mock.prices.lock().unwrap();
            for (symbol, price) in prices {
                map.insert(symbol.to_string(), *price);
            }
        }
        Arc::new(mock)
    }
}

#[async_trait]
impl MarketDataServiceTrait for MockQuotes {
    async fn get_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        self.prices
            .lock()
            .unwrap()
            .get(symbol)
            .map(|price| Quote {
                symbol: symbol.to_string(),
                name: format!("{symbol} Inc."),
                price: *price,
            })
            .ok_or_else(|| MarketDataError::NotFound(symbol.to_string()))
    }
}

fn valuation(
    cash: Decimal,
    rows: Vec<(String, i64)>,
    quotes: Arc<MockQuotes>,
) -> ValuationService {
    ValuationService::new(
        Arc::new(MockAccounts { cash }),
        Arc::new(MockHoldings { rows }),
        quotes,
    )
}

#[tokio::test]
async fn empty_portfolio_is_just_cash() {
    let quotes = MockQuotes::with_prices(&[]);
    let svc = valuation(dec!(10000), vec![], quotes);

    let summary = svc.get_portfolio("acct-1").await.unwrap();

    assert!(summary.holdings.is_empty());
    assert_eq!(summary.cash, dec!(10000));
    assert_eq!(summary.net_worth, dec!(10000));
}

#[tokio::test]
async fn net_worth_sums_cash_and_market_values() {
    let quotes = MockQuotes::with_prices(&[("AAPL", dec!(150)), ("NFLX", dec!(200))]);
    let svc = valuation(
        dec!(1000),
        vec![("AAPL".to_string(), 10), ("NFLX".to_string(), 2)],
        quotes,
    );

    let summary = svc.get_portfolio("acct-1").await.unwrap();

    assert_eq!(summary.holdings.len(), 2);
    let aapl = &summary.holdings[0];
    assert_eq!(aapl.symbol, "AAPL");
    assert_eq!(aapl.price, dec!(150));
    assert_eq!(aapl.value, dec!(1500));
    // 1000 + 1500 + 400
    assert_eq!(summary.net_worth, dec!(2900));
}

#[tokio::test]
async fn one_failed_quote_fails_the_whole_valuation() {
    // NFLX is held but no longer quoted.
    let quotes = MockQuotes::with_prices(&[("AAPL", dec!(150))]);
    let svc = valuation(
        dec!(1000),
        vec![("AAPL".to_string(), 10), ("NFLX".to_string(), 2)],
        quotes,
    );

    let err = svc.get_portfolio("acct-1").await.unwrap_err();

    assert!(matches!(
        err,
        PortfolioError::QuoteUnavailable { symbol, .. } if symbol == "NFLX"
    ));
}
