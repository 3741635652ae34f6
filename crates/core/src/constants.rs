use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Bucket that collects every sector not named in the target table
pub const OTHERS_SECTOR: &str = "Others";

/// Gap (in percentage points) above which a sector is flagged as under-invested
pub const SECTOR_GAP_THRESHOLD: Decimal = dec!(2);

/// 52-week range positions below this are considered cheap
pub const RANGE_LOW_THRESHOLD: Decimal = dec!(28);

/// 52-week range positions below this (and above the low threshold) are medium
pub const RANGE_MEDIUM_THRESHOLD: Decimal = dec!(55);

/// RSI below this is oversold
pub const RSI_OVERSOLD: Decimal = dec!(30);

/// RSI above this is overbought
pub const RSI_OVERBOUGHT: Decimal = dec!(70);

/// Holdings not refreshed for more than this many days are stale
pub const STALE_AFTER_DAYS: i64 = 2;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// ISO code of the Indian Rupee, which uses lakh/crore digit grouping
pub const INR_CURRENCY_CODE: &str = "INR";
