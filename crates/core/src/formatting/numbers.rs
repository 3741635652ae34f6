use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Rounds to two decimals, half away from zero.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero)
}

/// Signed percentage with two decimals: `+12.35%`, `-3.10%`.
pub fn format_percentage(value: Decimal) -> String {
    let rounded = round2(value);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{:.2}%", rounded.abs())
    } else {
        format!("+{:.2}%", rounded.abs())
    }
}

/// Direction of a P&L figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfitLossDirection {
    Gain,
    Loss,
    Flat,
}

impl ProfitLossDirection {
    pub fn of(value: Decimal) -> Self {
        if value > Decimal::ZERO {
            ProfitLossDirection::Gain
        } else if value < Decimal::ZERO {
            ProfitLossDirection::Loss
        } else {
            ProfitLossDirection::Flat
        }
    }
}
