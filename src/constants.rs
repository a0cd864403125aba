//! Application-wide constants.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Cash balance a freshly opened account starts with.
pub const DEFAULT_OPENING_CASH: Decimal = dec!(10000);

/// Decimal places kept when persisting monetary amounts as text.
pub const DECIMAL_PRECISION: u32 = 8;

/// Default base URL for the remote quote API.
pub const DEFAULT_QUOTE_API_URL: &str = "https://cloud.iexapis.com/stable";

/// Environment variable overriding the quote API base URL.
pub const ENV_QUOTE_API_URL: &str = "QUOTE_API_URL";

/// Environment variable holding the quote API token.
pub const ENV_QUOTE_API_TOKEN: &str = "QUOTE_API_TOKEN";
