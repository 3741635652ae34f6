//! Builds the dashboard report from a holdings snapshot.

use chrono::{DateTime, Utc};
use log::debug;

use crate::formatting::{format_days_ago, is_stale, ProfitLossDirection};
use crate::portfolio::allocation::{
    analyze_sector_gaps_with, sector_breakdown, under_target_sectors,
};
use crate::portfolio::holdings::{HoldingsSnapshot, StockHolding};
use crate::portfolio::signals::{range_position, RangeSeverity, SignalInputs};
use crate::recommendations::{
    filter_recommendations, is_priority_buy, RecommendationsSummary, RsiZone, SectorLookup,
};
use crate::settings::AnalyticsConfig;

use super::{AssetClassTotals, PortfolioReport, RecommendationInsight, StockInsight};

/// Derives every analytic the dashboard shows for `snapshot`.
///
/// Stateless: the snapshot is only read and every figure is recomputed. `now` is the
/// reference instant for freshness checks.
pub fn analyze_snapshot(
    snapshot: &HoldingsSnapshot,
    now: DateTime<Utc>,
    config: &AnalyticsConfig,
) -> PortfolioReport {
    let holdings = &snapshot.holdings;
    let targets = &config.sector_targets;

    let totals = holdings
        .totals_by_class()
        .into_iter()
        .map(|(asset_class, totals)| AssetClassTotals {
            asset_class,
            totals,
        })
        .collect();

    let sector_gaps = analyze_sector_gaps_with(&holdings.stocks, targets);
    let under_sectors = under_target_sectors(&sector_gaps);

    let stocks = holdings
        .stocks
        .iter()
        .map(|stock| stock_insight(stock, now, config))
        .collect();

    let lookup = SectorLookup::from_stocks(&holdings.stocks);
    let recommendations: Vec<RecommendationInsight> =
        filter_recommendations(&snapshot.recommendations, &config.recommendation_types)
            .into_iter()
            .map(|rec| RecommendationInsight {
                sector: lookup.sector_of(&rec.stock_symbol).map(str::to_string),
                is_priority: is_priority_buy(&rec.stock_symbol, &lookup, targets, &under_sectors),
                rsi_zone: rec.rsi_index.map(|rsi| {
                    RsiZone::from_rsi_with(rsi, config.rsi_oversold_below, config.rsi_overbought_above)
                }),
                is_stale: is_stale(rec.recommendation_date, now, config.stale_after_days),
                recommendation: rec.clone(),
            })
            .collect();

    let recommendations_summary = snapshot
        .recommendations_summary
        .clone()
        .unwrap_or_else(|| RecommendationsSummary::tally(&snapshot.recommendations));

    debug!(
        "Analyzed snapshot for account {:?}: {} stocks, {} under-target sectors, {} recommendations",
        snapshot.account_id,
        holdings.stocks.len(),
        under_sectors.len(),
        recommendations.len()
    );

    PortfolioReport {
        account_id: snapshot.account_id,
        generated_at: now,
        totals,
        grand_total: holdings.grand_total(),
        under_target_sectors: under_sectors.iter().map(|s| s.to_string()).collect(),
        sector_breakdown: sector_breakdown(&holdings.stocks, targets),
        sector_gaps,
        stocks,
        recommendations,
        recommendations_summary,
    }
}

fn stock_insight(stock: &StockHolding, now: DateTime<Utc>, config: &AnalyticsConfig) -> StockInsight {
    let ma_signal = SignalInputs::from(stock).signal();

    let has_range = stock.last_close_price.is_some()
        && stock.price_52w_low.is_some()
        && stock.price_52w_high.is_some();
    let position = range_position(
        stock.last_close_price,
        stock.price_52w_low,
        stock.price_52w_high,
    );
    let range_severity = has_range.then(|| {
        RangeSeverity::from_position_with(position, config.range_low_below, config.range_medium_below)
    });

    StockInsight {
        symbol: stock.symbol.clone(),
        sector: stock.sector.clone(),
        ma_signal,
        action: ma_signal.action(),
        range_position: position,
        range_severity,
        profit_loss_direction: ProfitLossDirection::of(stock.profit_loss),
        is_stale: is_stale(stock.updated_at, now, config.stale_after_days),
        last_updated: format_days_ago(stock.updated_at, now),
    }
}
