use num_traits::Zero;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::holdings_model::{AssetClass, Holdings, Valued};

/// Aggregates for one group of holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingsTotals {
    pub count: usize,
    pub invested: Decimal,
    pub current: Decimal,
    pub profit_loss: Decimal,
    /// P&L relative to cost basis (0 when nothing is invested)
    pub profit_loss_pct: Decimal,
    /// (current - invested) relative to cost basis
    pub total_return_pct: Decimal,
}

impl HoldingsTotals {
    pub fn empty() -> Self {
        Self {
            count: 0,
            invested: Decimal::ZERO,
            current: Decimal::ZERO,
            profit_loss: Decimal::ZERO,
            profit_loss_pct: Decimal::ZERO,
            total_return_pct: Decimal::ZERO,
        }
    }
}

impl Default for HoldingsTotals {
    fn default() -> Self {
        Self::empty()
    }
}

/// Sums invested value, current value and P&L over `items`, in input order.
pub fn summarize<T: Valued>(items: &[T]) -> HoldingsTotals {
    let mut totals = HoldingsTotals::empty();
    for item in items {
        totals.count += 1;
        totals.invested += item.invested_value();
        totals.current += item.current_value();
        totals.profit_loss += item.profit_loss();
    }

    with_percentages(totals)
}

fn with_percentages(mut totals: HoldingsTotals) -> HoldingsTotals {
    if totals.invested > Decimal::zero() {
        totals.profit_loss_pct = totals.profit_loss / totals.invested * dec!(100);
    }

    // A zero cost basis divides by one so the return degrades to the raw difference
    let divisor = if totals.invested.is_zero() {
        Decimal::ONE
    } else {
        totals.invested
    };
    totals.total_return_pct = (totals.current - totals.invested) / divisor * dec!(100);

    totals
}

impl Holdings {
    /// Totals for every asset class, in the order stocks, ETFs, mutual funds, bonds.
    pub fn totals_by_class(&self) -> Vec<(AssetClass, HoldingsTotals)> {
        vec![
            (AssetClass::Stock, summarize(&self.stocks)),
            (AssetClass::Etf, summarize(&self.etfs)),
            (AssetClass::MutualFund, summarize(&self.mutual_funds)),
            (AssetClass::Bond, summarize(&self.bonds)),
        ]
    }

    /// Totals across every asset class.
    pub fn grand_total(&self) -> HoldingsTotals {
        let mut combined = HoldingsTotals::empty();
        for (_, totals) in self.totals_by_class() {
            combined.count += totals.count;
            combined.invested += totals.invested;
            combined.current += totals.current;
            combined.profit_loss += totals.profit_loss;
        }
        with_percentages(combined)
    }
}
