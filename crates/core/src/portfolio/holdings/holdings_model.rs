use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::recommendations::{Recommendation, RecommendationsSummary};
use crate::utils::deserialize_api_timestamp;

/// Asset classes carried by a holdings snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetClass {
    Stock,
    Etf,
    MutualFund,
    Bond,
}

impl AssetClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Stock => "STOCK",
            AssetClass::Etf => "ETF",
            AssetClass::MutualFund => "MUTUAL_FUND",
            AssetClass::Bond => "BOND",
        }
    }

    /// Returns a human-friendly label for this asset class.
    pub fn label(&self) -> &'static str {
        match self {
            AssetClass::Stock => "Stocks",
            AssetClass::Etf => "ETFs",
            AssetClass::MutualFund => "Mutual Funds",
            AssetClass::Bond => "Bonds",
        }
    }
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Cost basis, market value and P&L of a position.
///
/// Implemented by every holding kind so totals can be computed generically.
pub trait Valued {
    fn invested_value(&self) -> Decimal;
    fn current_value(&self) -> Decimal;
    fn profit_loss(&self) -> Decimal;
}

/// A stock position as delivered by the holdings API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StockHolding {
    pub id: i64,
    pub symbol: String,
    /// Free-text sector; absent for unclassified stocks
    #[serde(default)]
    pub sector: Option<String>,
    pub quantity: Decimal,
    pub average_price: Decimal,
    pub invested_value: Decimal,
    pub current_value: Decimal,
    pub profit_loss: Decimal,
    pub profit_loss_percentage: Decimal,
    pub currency: String,
    #[serde(deserialize_with = "deserialize_api_timestamp")]
    pub updated_at: DateTime<Utc>,

    // Price history, filled in by the market data job when available
    #[serde(default)]
    pub last_close_price: Option<Decimal>,
    #[serde(default)]
    pub price_52w_low: Option<Decimal>,
    #[serde(default)]
    pub price_52w_high: Option<Decimal>,
    #[serde(default)]
    pub moving_average_20: Option<Decimal>,
    #[serde(default)]
    pub moving_average_200: Option<Decimal>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EtfHolding {
    pub id: i64,
    pub symbol: String,
    pub quantity: Decimal,
    pub average_price: Decimal,
    #[serde(default)]
    pub last_close_price: Option<Decimal>,
    pub invested_value: Decimal,
    pub current_value: Decimal,
    pub profit_loss: Decimal,
    pub profit_loss_percentage: Decimal,
    pub currency: String,
    #[serde(deserialize_with = "deserialize_api_timestamp")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MutualFundHolding {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub fund_house: Option<String>,
    #[serde(default)]
    pub isin: Option<String>,
    pub quantity: Decimal,
    pub average_price: Decimal,
    pub invested_value: Decimal,
    pub current_value: Decimal,
    pub profit_loss: Decimal,
    pub profit_loss_percentage: Decimal,
    pub currency: String,
    #[serde(deserialize_with = "deserialize_api_timestamp")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BondHolding {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub isin: Option<String>,
    pub quantity: Decimal,
    pub average_price: Decimal,
    pub invested_value: Decimal,
    pub current_value: Decimal,
    pub profit_loss: Decimal,
    pub profit_loss_percentage: Decimal,
    pub currency: String,
    #[serde(deserialize_with = "deserialize_api_timestamp")]
    pub updated_at: DateTime<Utc>,
}

macro_rules! impl_valued {
    ($($holding:ty),+ $(,)?) => {
        $(
            impl Valued for $holding {
                fn invested_value(&self) -> Decimal {
                    self.invested_value
                }

                fn current_value(&self) -> Decimal {
                    self.current_value
                }

                fn profit_loss(&self) -> Decimal {
                    self.profit_loss
                }
            }
        )+
    };
}

impl_valued!(StockHolding, EtfHolding, MutualFundHolding, BondHolding);

/// Holdings of one account grouped by asset class, in API order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Holdings {
    #[serde(default)]
    pub stocks: Vec<StockHolding>,
    #[serde(default)]
    pub etfs: Vec<EtfHolding>,
    #[serde(default)]
    pub mutual_funds: Vec<MutualFundHolding>,
    #[serde(default)]
    pub bonds: Vec<BondHolding>,
}

impl Holdings {
    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
            && self.etfs.is_empty()
            && self.mutual_funds.is_empty()
            && self.bonds.is_empty()
    }
}

/// Immutable snapshot handed to the analytics for one call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HoldingsSnapshot {
    #[serde(default)]
    pub account_id: Option<i64>,
    #[serde(default)]
    pub holdings: Holdings,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub recommendations_summary: Option<RecommendationsSummary>,
}

impl HoldingsSnapshot {
    /// Parses a snapshot from the holdings API response body.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| Error::Snapshot(e.to_string()))
    }
}
