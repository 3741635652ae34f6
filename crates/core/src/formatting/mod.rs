//! Display helpers for money, percentages and data freshness.

mod currency;
mod freshness;
mod numbers;

pub use currency::{currency_symbol, format_currency, group_indian_digits, group_thousands};
pub use freshness::{format_days_ago, is_stale};
pub use numbers::{format_percentage, round2, ProfitLossDirection};
