//! Valuation view models.
//!
//! These are derived, read-time records: persisted fields (`symbol`,
//! `shares`) combined with quote-derived fields (`price`, `value`). They
//! are never written back to the ledger.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One holding priced at the current quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingView {
    pub symbol: String,
    pub shares: i64,
    pub price: Decimal,
    pub value: Decimal,
}

/// Full portfolio at read time. `net_worth` is a point-in-time estimate:
/// cash plus the market value of every holding at the quotes just fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub holdings: Vec<HoldingView>,
    pub cash: Decimal,
    pub net_worth: Decimal,
}
