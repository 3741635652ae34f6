use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::formatting::ProfitLossDirection;
use crate::portfolio::allocation::{SectorAnalysis, SectorBreakdown};
use crate::portfolio::holdings::{AssetClass, HoldingsTotals};
use crate::portfolio::signals::{MaSignal, RangeSeverity, SignalAction};
use crate::recommendations::{Recommendation, RecommendationsSummary, RsiZone};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetClassTotals {
    pub asset_class: AssetClass,
    pub totals: HoldingsTotals,
}

/// Derived view of one stock position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockInsight {
    pub symbol: String,
    pub sector: Option<String>,
    pub ma_signal: MaSignal,
    pub action: Option<SignalAction>,
    /// Last close inside the 52-week range, 0-100
    pub range_position: Decimal,
    /// `None` when the 52-week bounds or last close are missing
    pub range_severity: Option<RangeSeverity>,
    pub profit_loss_direction: ProfitLossDirection,
    pub is_stale: bool,
    pub last_updated: String,
}

/// A recommendation with the context the dashboard shows next to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationInsight {
    pub recommendation: Recommendation,
    pub sector: Option<String>,
    /// The stock's sector bucket is under target
    pub is_priority: bool,
    pub rsi_zone: Option<RsiZone>,
    pub is_stale: bool,
}

/// Everything derived from one holdings snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioReport {
    pub account_id: Option<i64>,
    pub generated_at: DateTime<Utc>,
    pub totals: Vec<AssetClassTotals>,
    pub grand_total: HoldingsTotals,
    pub sector_gaps: Vec<SectorAnalysis>,
    pub under_target_sectors: Vec<String>,
    pub sector_breakdown: Vec<SectorBreakdown>,
    pub stocks: Vec<StockInsight>,
    pub recommendations: Vec<RecommendationInsight>,
    pub recommendations_summary: RecommendationsSummary,
}

impl PortfolioReport {
    pub fn totals_for(&self, asset_class: AssetClass) -> Option<&HoldingsTotals> {
        self.totals
            .iter()
            .find(|t| t.asset_class == asset_class)
            .map(|t| &t.totals)
    }

    /// Amount to invest in `sector` to close its gap; 0 when not under target.
    pub fn shortfall(&self, sector: &str) -> Decimal {
        let stock_invested = self
            .totals_for(AssetClass::Stock)
            .map(|t| t.invested)
            .unwrap_or(Decimal::ZERO);
        self.sector_gaps
            .iter()
            .find(|a| a.sector == sector)
            .map(|a| a.shortfall(stock_invested))
            .unwrap_or(Decimal::ZERO)
    }
}
