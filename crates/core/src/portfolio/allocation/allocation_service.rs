//! Sector allocation vs. target and per-sector breakdowns.

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::formatting::round2;
use crate::portfolio::holdings::{StockHolding, Valued};

use super::{AllocationStatus, SectorAnalysis, SectorBreakdown, SectorTargets};

/// Anything that contributes invested value to a sector.
pub trait SectorExposure {
    /// Raw sector label; `None` when the holding is unclassified.
    fn sector(&self) -> Option<&str>;
    /// Cost basis counted against the sector.
    fn exposure(&self) -> Decimal;
}

impl SectorExposure for StockHolding {
    fn sector(&self) -> Option<&str> {
        self.sector.as_deref()
    }

    fn exposure(&self) -> Decimal {
        self.invested_value
    }
}

impl<'a> SectorExposure for (Option<&'a str>, Decimal) {
    fn sector(&self) -> Option<&str> {
        self.0
    }

    fn exposure(&self) -> Decimal {
        self.1
    }
}

impl<T: SectorExposure + ?Sized> SectorExposure for &T {
    fn sector(&self) -> Option<&str> {
        (**self).sector()
    }

    fn exposure(&self) -> Decimal {
        (**self).exposure()
    }
}

/// Compares actual sector allocation with the standard target table.
///
/// See [`analyze_sector_gaps_with`].
pub fn analyze_sector_gaps<T: SectorExposure>(holdings: &[T]) -> Vec<SectorAnalysis> {
    analyze_sector_gaps_with(holdings, SectorTargets::shared())
}

/// Compares actual sector allocation with `targets`.
///
/// Emits one record per target bucket in table order ("Others" last), including
/// buckets with no holdings. Returns an empty Vec when the total invested value is
/// not positive. Sums follow input order.
pub fn analyze_sector_gaps_with<T: SectorExposure>(
    holdings: &[T],
    targets: &SectorTargets,
) -> Vec<SectorAnalysis> {
    let total_invested: Decimal = holdings.iter().map(|h| h.exposure()).sum();
    if total_invested <= Decimal::ZERO {
        debug!(
            "Skipping sector gap analysis: total invested is {} across {} holdings",
            total_invested,
            holdings.len()
        );
        return Vec::new();
    }

    let invested_by_bucket = invested_per_bucket(holdings, targets);
    let threshold = targets.gap_threshold();

    targets
        .iter()
        .zip(invested_by_bucket)
        .map(|((sector, target_pct), invested)| {
            let actual_pct = invested / total_invested * dec!(100);
            let gap = target_pct - actual_pct;
            SectorAnalysis {
                sector: sector.to_string(),
                invested,
                actual_pct,
                target_pct,
                gap,
                is_under: gap > threshold,
                status: AllocationStatus::from_gap(gap, threshold),
            }
        })
        .collect()
}

/// Invested value per bucket, indexed like [`SectorTargets::iter`].
fn invested_per_bucket<T: SectorExposure>(holdings: &[T], targets: &SectorTargets) -> Vec<Decimal> {
    let mut invested = vec![Decimal::ZERO; targets.bucket_count()];
    for holding in holdings {
        let bucket = targets.bucket_for(holding.sector());
        invested[targets.bucket_index(bucket)] += holding.exposure();
    }
    invested
}

/// Names of the sectors flagged as under-invested, in analysis order.
pub fn under_target_sectors(analysis: &[SectorAnalysis]) -> Vec<&str> {
    analysis
        .iter()
        .filter(|a| a.is_under)
        .map(|a| a.sector.as_str())
        .collect()
}

/// Aggregates invested, current and P&L per sector bucket.
///
/// Only buckets that hold at least one position are returned: named sectors in
/// table order, then "Others". Amounts are rounded to 2 decimals.
pub fn sector_breakdown<T>(holdings: &[T], targets: &SectorTargets) -> Vec<SectorBreakdown>
where
    T: SectorExposure + Valued,
{
    let mut buckets: Vec<Option<(Decimal, Decimal, Decimal)>> = vec![None; targets.bucket_count()];

    for holding in holdings {
        let bucket = targets.bucket_for(holding.sector());
        let slot = buckets[targets.bucket_index(bucket)]
            .get_or_insert((Decimal::ZERO, Decimal::ZERO, Decimal::ZERO));
        slot.0 += holding.invested_value();
        slot.1 += holding.current_value();
        slot.2 += holding.profit_loss();
    }

    targets
        .iter()
        .zip(buckets)
        .filter_map(|((sector, _), sums)| {
            sums.map(|(invested, current, profit_loss)| {
                let profit_loss_pct = if invested > Decimal::ZERO {
                    round2(profit_loss / invested * dec!(100))
                } else {
                    Decimal::ZERO
                };
                SectorBreakdown {
                    sector: sector.to_string(),
                    invested: round2(invested),
                    current: round2(current),
                    profit_loss: round2(profit_loss),
                    profit_loss_pct,
                }
            })
        })
        .collect()
}
