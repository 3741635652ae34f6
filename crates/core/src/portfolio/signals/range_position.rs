//! Position of the current price inside its 52-week range.

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::{RANGE_LOW_THRESHOLD, RANGE_MEDIUM_THRESHOLD};

/// Percentage (0-100) of `current` between `low` and `high`.
///
/// Returns 0 when any input is missing or the range is degenerate (`high <= low`).
/// Prices outside the range saturate at 0 or 100.
pub fn range_position(
    current: Option<Decimal>,
    low: Option<Decimal>,
    high: Option<Decimal>,
) -> Decimal {
    let (Some(current), Some(low), Some(high)) = (current, low, high) else {
        return Decimal::ZERO;
    };

    if high <= low {
        if high < low {
            debug!("Inverted 52-week range: low {} > high {}", low, high);
        }
        return Decimal::ZERO;
    }

    let position = (current - low)
        .checked_div(high - low)
        .and_then(|ratio| ratio.checked_mul(dec!(100)));

    match position {
        Some(pct) => pct.clamp(Decimal::ZERO, dec!(100)),
        None => {
            debug!(
                "52-week position overflowed for current {} in [{}, {}]",
                current, low, high
            );
            Decimal::ZERO
        }
    }
}

/// Three-level reading of a 52-week range position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RangeSeverity {
    /// Near the 52-week low
    Low,
    Medium,
    /// Near the 52-week high, expensive
    High,
}

impl RangeSeverity {
    /// Classifies with the standard thresholds (28 and 55).
    pub fn from_position(pct: Decimal) -> Self {
        Self::from_position_with(pct, RANGE_LOW_THRESHOLD, RANGE_MEDIUM_THRESHOLD)
    }

    pub fn from_position_with(pct: Decimal, low_below: Decimal, medium_below: Decimal) -> Self {
        if pct < low_below {
            RangeSeverity::Low
        } else if pct < medium_below {
            RangeSeverity::Medium
        } else {
            RangeSeverity::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RangeSeverity::Low => "LOW",
            RangeSeverity::Medium => "MEDIUM",
            RangeSeverity::High => "HIGH",
        }
    }
}

impl std::fmt::Display for RangeSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
