//! Moving-average buy/sell signal.
//!
//! Classifies where a position's average cost sits relative to the last close and
//! the 20-day and 200-day moving averages. The decision table is reproduced case
//! by case, including the asymmetric secondary checks; every combination not
//! listed collapses to [`MaSignal::Neutral`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::holdings::StockHolding;

/// Signal derived from average cost vs. close and moving averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaSignal {
    TooLow,
    Low,
    Neutral,
    High,
    TooHigh,
    NoData,
}

impl MaSignal {
    pub fn label(&self) -> &'static str {
        match self {
            MaSignal::TooLow => "Too Low",
            MaSignal::Low => "Low",
            MaSignal::Neutral => "Neutral",
            MaSignal::High => "High",
            MaSignal::TooHigh => "Too High",
            MaSignal::NoData => "No Data",
        }
    }

    /// Caller-facing action for this signal; `None` when there is no data.
    pub fn action(&self) -> Option<SignalAction> {
        match self {
            MaSignal::TooHigh | MaSignal::High => Some(SignalAction::Buy),
            MaSignal::Low | MaSignal::TooLow => Some(SignalAction::NoBuy),
            MaSignal::Neutral => Some(SignalAction::Neutral),
            MaSignal::NoData => None,
        }
    }
}

impl std::fmt::Display for MaSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalAction {
    Buy,
    NoBuy,
    Neutral,
}

impl SignalAction {
    pub fn label(&self) -> &'static str {
        match self {
            SignalAction::Buy => "Buy",
            SignalAction::NoBuy => "No Buy",
            SignalAction::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for SignalAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The pairwise comparisons the classification is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaComparisons {
    pub avg_below_close: bool,
    pub avg_below_ma20: bool,
    pub avg_below_ma200: bool,
    pub close_below_ma20: bool,
    pub close_below_ma200: bool,
    pub ma20_below_ma200: bool,
}

impl MaComparisons {
    pub fn new(avg_cost: Decimal, close: Decimal, ma20: Decimal, ma200: Decimal) -> Self {
        Self {
            avg_below_close: avg_cost < close,
            avg_below_ma20: avg_cost < ma20,
            avg_below_ma200: avg_cost < ma200,
            close_below_ma20: close < ma20,
            close_below_ma200: close < ma200,
            ma20_below_ma200: ma20 < ma200,
        }
    }

    /// Applies the decision table over the three primary comparisons.
    pub fn signal(&self) -> MaSignal {
        match (self.avg_below_close, self.avg_below_ma20, self.avg_below_ma200) {
            (true, true, true) => MaSignal::TooLow,
            (false, true, true) => {
                if self.close_below_ma20 && self.close_below_ma200 {
                    MaSignal::TooHigh
                } else {
                    MaSignal::Low
                }
            }
            (false, false, true) => {
                if self.ma20_below_ma200 {
                    MaSignal::TooHigh
                } else {
                    MaSignal::High
                }
            }
            (false, false, false) => MaSignal::TooHigh,
            (true, false, true) | (true, true, false) | (true, false, false) | (false, true, false) => {
                MaSignal::Neutral
            }
        }
    }
}

/// Price inputs for one position. Missing values yield [`MaSignal::NoData`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalInputs {
    pub avg_cost: Option<Decimal>,
    pub close: Option<Decimal>,
    pub ma20: Option<Decimal>,
    pub ma200: Option<Decimal>,
}

impl SignalInputs {
    /// Comparisons when all four prices are present and non-zero.
    pub fn comparisons(&self) -> Option<MaComparisons> {
        let avg_cost = usable_price(self.avg_cost)?;
        let close = usable_price(self.close)?;
        let ma20 = usable_price(self.ma20)?;
        let ma200 = usable_price(self.ma200)?;
        Some(MaComparisons::new(avg_cost, close, ma20, ma200))
    }

    pub fn signal(&self) -> MaSignal {
        self.comparisons()
            .map(|c| c.signal())
            .unwrap_or(MaSignal::NoData)
    }
}

impl From<&StockHolding> for SignalInputs {
    fn from(stock: &StockHolding) -> Self {
        Self {
            avg_cost: Some(stock.average_price),
            close: stock.last_close_price,
            ma20: stock.moving_average_20,
            ma200: stock.moving_average_200,
        }
    }
}

// A zero price means the feed has not populated the field yet.
fn usable_price(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|v| !v.is_zero())
}

/// Classifies average cost against last close and the 20/200-day moving averages.
pub fn classify_signal(
    avg_cost: Option<Decimal>,
    close: Option<Decimal>,
    ma20: Option<Decimal>,
    ma200: Option<Decimal>,
) -> MaSignal {
    SignalInputs {
        avg_cost,
        close,
        ma20,
        ma200,
    }
    .signal()
}
