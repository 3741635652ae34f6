use std::collections::HashMap;

use crate::portfolio::allocation::SectorTargets;
use crate::portfolio::holdings::StockHolding;

use super::{Recommendation, RecommendationType, RecommendationsSummary};

impl RecommendationsSummary {
    /// Counts active recommendations by action.
    pub fn tally(recommendations: &[Recommendation]) -> Self {
        recommendations
            .iter()
            .filter(|r| r.is_active)
            .fold(Self::default(), |mut summary, r| {
                summary.total_count += 1;
                match r.recommendation_type {
                    RecommendationType::Buy => summary.buy_count += 1,
                    RecommendationType::Sell => summary.sell_count += 1,
                    RecommendationType::Hold => summary.hold_count += 1,
                }
                summary
            })
    }
}

/// Active recommendations whose action is in `types`, in input order.
pub fn filter_recommendations<'a>(
    recommendations: &'a [Recommendation],
    types: &[RecommendationType],
) -> Vec<&'a Recommendation> {
    recommendations
        .iter()
        .filter(|r| r.is_active && types.contains(&r.recommendation_type))
        .collect()
}

/// Symbol to sector index built from the stock holdings.
#[derive(Debug, Clone, Default)]
pub struct SectorLookup {
    by_symbol: HashMap<String, String>,
}

impl SectorLookup {
    /// Indexes every stock that carries a sector. Later duplicates win.
    pub fn from_stocks(stocks: &[StockHolding]) -> Self {
        let by_symbol = stocks
            .iter()
            .filter_map(|s| {
                s.sector
                    .as_ref()
                    .filter(|sector| !sector.is_empty())
                    .map(|sector| (s.symbol.clone(), sector.clone()))
            })
            .collect();
        Self { by_symbol }
    }

    pub fn sector_of(&self, symbol: &str) -> Option<&str> {
        self.by_symbol.get(symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_symbol.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }
}

/// Whether buying `symbol` would move an under-invested sector toward target.
///
/// Symbols in a named sector are checked against that sector; everything else is
/// checked against "Others".
pub fn is_priority_buy(
    symbol: &str,
    lookup: &SectorLookup,
    targets: &SectorTargets,
    under_sectors: &[&str],
) -> bool {
    let bucket = targets.bucket_for(lookup.sector_of(symbol));
    under_sectors.contains(&bucket)
}
