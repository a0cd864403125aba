//! Quote domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A live quote for one symbol. Never persisted; the price is a
/// point-in-time value that moves between reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    pub name: String,
    pub price: Decimal,
}

/// Canonical form for symbols across the whole system: trimmed and
/// upper-cased. Providers are only ever called with normalized symbols.
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_ascii_uppercase()
}
