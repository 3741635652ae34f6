use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{RSI_OVERBOUGHT, RSI_OVERSOLD};
use crate::utils::deserialize_api_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationType {
    Buy,
    Sell,
    Hold,
}

impl RecommendationType {
    pub const ALL: [RecommendationType; 3] = [
        RecommendationType::Buy,
        RecommendationType::Sell,
        RecommendationType::Hold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationType::Buy => "BUY",
            RecommendationType::Sell => "SELL",
            RecommendationType::Hold => "HOLD",
        }
    }
}

impl std::fmt::Display for RecommendationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A buy/sell/hold recommendation computed upstream. Passed through unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub id: i64,
    pub stock_symbol: String,
    pub recommendation_type: RecommendationType,
    pub is_active: bool,
    #[serde(default)]
    pub current_quantity: Option<Decimal>,
    #[serde(default)]
    pub recommended_quantity: Option<Decimal>,
    #[serde(default)]
    pub current_average_price: Option<Decimal>,
    #[serde(default)]
    pub target_price: Option<Decimal>,
    #[serde(default)]
    pub price_52w_low: Option<Decimal>,
    #[serde(default)]
    pub pe_ratio: Option<Decimal>,
    #[serde(default)]
    pub rsi_index: Option<Decimal>,
    #[serde(default)]
    pub pegy_index: Option<Decimal>,
    #[serde(deserialize_with = "deserialize_api_timestamp")]
    pub recommendation_date: DateTime<Utc>,
}

/// Counts of active recommendations per action.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationsSummary {
    pub total_count: usize,
    pub buy_count: usize,
    pub sell_count: usize,
    pub hold_count: usize,
}

/// Momentum reading of a recommendation's RSI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RsiZone {
    Oversold,
    Neutral,
    Overbought,
}

impl RsiZone {
    /// Classifies with the standard bounds (below 30 oversold, above 70 overbought).
    pub fn from_rsi(rsi: Decimal) -> Self {
        Self::from_rsi_with(rsi, RSI_OVERSOLD, RSI_OVERBOUGHT)
    }

    pub fn from_rsi_with(rsi: Decimal, oversold_below: Decimal, overbought_above: Decimal) -> Self {
        if rsi < oversold_below {
            RsiZone::Oversold
        } else if rsi > overbought_above {
            RsiZone::Overbought
        } else {
            RsiZone::Neutral
        }
    }
}
