//! Unit tests for the snapshot report.

use super::*;
use crate::formatting::ProfitLossDirection;
use crate::portfolio::allocation::AllocationStatus;
use crate::portfolio::holdings::{AssetClass, Holdings, HoldingsSnapshot, StockHolding};
use crate::portfolio::signals::{MaSignal, RangeSeverity, SignalAction};
use crate::recommendations::{
    Recommendation, RecommendationType, RecommendationsSummary, RsiZone,
};
use crate::settings::AnalyticsConfig;
use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap()
}

fn create_test_stock(symbol: &str, sector: Option<&str>, invested: Decimal, current: Decimal) -> StockHolding {
    StockHolding {
        id: 1,
        symbol: symbol.to_string(),
        sector: sector.map(str::to_string),
        quantity: dec!(10),
        average_price: invested / dec!(10),
        invested_value: invested,
        current_value: current,
        profit_loss: current - invested,
        profit_loss_percentage: Decimal::ZERO,
        currency: "INR".to_string(),
        updated_at: now() - Duration::hours(3),
        last_close_price: None,
        price_52w_low: None,
        price_52w_high: None,
        moving_average_20: None,
        moving_average_200: None,
    }
}

fn create_test_recommendation(id: i64, symbol: &str, recommendation_type: RecommendationType) -> Recommendation {
    Recommendation {
        id,
        stock_symbol: symbol.to_string(),
        recommendation_type,
        is_active: true,
        current_quantity: None,
        recommended_quantity: None,
        current_average_price: None,
        target_price: None,
        price_52w_low: None,
        pe_ratio: None,
        rsi_index: None,
        pegy_index: None,
        recommendation_date: now() - Duration::days(1),
    }
}

fn create_test_snapshot() -> HoldingsSnapshot {
    let mut hdfc = create_test_stock("HDFCBANK", Some("Finance"), dec!(1800), dec!(2000));
    // avg 180 is below close 200 and both MAs: TooLow
    hdfc.last_close_price = Some(dec!(200));
    hdfc.price_52w_low = Some(dec!(150));
    hdfc.price_52w_high = Some(dec!(250));
    hdfc.moving_average_20 = Some(dec!(195));
    hdfc.moving_average_200 = Some(dec!(190));

    let mut ongc = create_test_stock("ONGC", Some("Energy"), dec!(200), dec!(150));
    ongc.updated_at = now() - Duration::days(4);

    let mut steel = create_test_recommendation(3, "TATASTEEL", RecommendationType::Buy);
    steel.rsi_index = Some(dec!(25));
    let mut inactive = create_test_recommendation(4, "ONGC", RecommendationType::Hold);
    inactive.is_active = false;

    HoldingsSnapshot {
        account_id: Some(7),
        holdings: Holdings {
            stocks: vec![hdfc, ongc],
            ..Holdings::default()
        },
        recommendations: vec![
            create_test_recommendation(1, "HDFCBANK", RecommendationType::Buy),
            create_test_recommendation(2, "ONGC", RecommendationType::Sell),
            steel,
            inactive,
        ],
        recommendations_summary: None,
    }
}

#[test]
fn test_report_totals_and_gaps() {
    let report = analyze_snapshot(&create_test_snapshot(), now(), &AnalyticsConfig::default());

    assert_eq!(report.account_id, Some(7));
    assert_eq!(report.generated_at, now());
    assert_eq!(report.totals.len(), 4);

    let stocks = report.totals_for(AssetClass::Stock).unwrap();
    assert_eq!(stocks.invested, dec!(2000));
    assert_eq!(stocks.current, dec!(2150));
    assert_eq!(report.grand_total.profit_loss, dec!(150));

    assert_eq!(report.sector_gaps.len(), 7);
    let finance = report.sector_gaps.iter().find(|a| a.sector == "Finance").unwrap();
    assert_eq!(finance.gap, dec!(-72));
    assert_eq!(finance.status, AllocationStatus::Over);
    assert!(!report.under_target_sectors.contains(&"Energy".to_string()));
    assert!(report.under_target_sectors.contains(&"Others".to_string()));

    assert_eq!(report.shortfall("Healthcare"), dec!(360));
    assert_eq!(report.shortfall("Finance"), Decimal::ZERO);
    assert_eq!(report.shortfall("Unknown"), Decimal::ZERO);

    let sectors: Vec<&str> = report.sector_breakdown.iter().map(|b| b.sector.as_str()).collect();
    assert_eq!(sectors, vec!["Finance", "Energy"]);
}

#[test]
fn test_report_stock_insights() {
    let report = analyze_snapshot(&create_test_snapshot(), now(), &AnalyticsConfig::default());

    let hdfc = &report.stocks[0];
    assert_eq!(hdfc.ma_signal, MaSignal::TooLow);
    assert_eq!(hdfc.action, Some(SignalAction::NoBuy));
    assert_eq!(hdfc.range_position, dec!(50));
    assert_eq!(hdfc.range_severity, Some(RangeSeverity::Medium));
    assert_eq!(hdfc.profit_loss_direction, ProfitLossDirection::Gain);
    assert!(!hdfc.is_stale);
    assert_eq!(hdfc.last_updated, "Today");

    let ongc = &report.stocks[1];
    assert_eq!(ongc.ma_signal, MaSignal::NoData);
    assert_eq!(ongc.action, None);
    assert_eq!(ongc.range_position, Decimal::ZERO);
    assert_eq!(ongc.range_severity, None);
    assert_eq!(ongc.profit_loss_direction, ProfitLossDirection::Loss);
    assert!(ongc.is_stale);
    assert_eq!(ongc.last_updated, "4 days ago");
}

#[test]
fn test_report_recommendations() {
    let report = analyze_snapshot(&create_test_snapshot(), now(), &AnalyticsConfig::default());

    let ids: Vec<i64> = report.recommendations.iter().map(|r| r.recommendation.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let hdfc = &report.recommendations[0];
    assert_eq!(hdfc.sector.as_deref(), Some("Finance"));
    assert!(!hdfc.is_priority);
    assert_eq!(hdfc.rsi_zone, None);
    assert!(!hdfc.is_stale);

    let steel = &report.recommendations[2];
    assert_eq!(steel.sector, None);
    assert!(steel.is_priority);
    assert_eq!(steel.rsi_zone, Some(RsiZone::Oversold));

    assert_eq!(
        report.recommendations_summary,
        RecommendationsSummary {
            total_count: 3,
            buy_count: 2,
            sell_count: 1,
            hold_count: 0,
        }
    );
}

#[test]
fn test_report_uses_config() {
    let config = AnalyticsConfig {
        range_low_below: dec!(60),
        range_medium_below: dec!(80),
        stale_after_days: 5,
        recommendation_types: vec![RecommendationType::Sell],
        ..AnalyticsConfig::default()
    };

    let report = analyze_snapshot(&create_test_snapshot(), now(), &config);

    assert_eq!(report.stocks[0].range_severity, Some(RangeSeverity::Low));
    assert!(!report.stocks[1].is_stale);
    assert_eq!(report.recommendations.len(), 1);
    assert_eq!(report.recommendations[0].recommendation.stock_symbol, "ONGC");
    // Summary still counts every active record
    assert_eq!(report.recommendations_summary.total_count, 3);
}

#[test]
fn test_report_prefers_supplied_summary() {
    let mut snapshot = create_test_snapshot();
    let supplied = RecommendationsSummary {
        total_count: 10,
        buy_count: 4,
        sell_count: 3,
        hold_count: 3,
    };
    snapshot.recommendations_summary = Some(supplied.clone());

    let report = analyze_snapshot(&snapshot, now(), &AnalyticsConfig::default());

    assert_eq!(report.recommendations_summary, supplied);
}

#[test]
fn test_report_on_empty_snapshot() {
    let snapshot = HoldingsSnapshot {
        account_id: None,
        holdings: Holdings::default(),
        recommendations: Vec::new(),
        recommendations_summary: None,
    };

    let report = analyze_snapshot(&snapshot, now(), &AnalyticsConfig::default());

    assert!(report.sector_gaps.is_empty());
    assert!(report.under_target_sectors.is_empty());
    assert!(report.sector_breakdown.is_empty());
    assert!(report.stocks.is_empty());
    assert_eq!(report.grand_total.count, 0);
    assert_eq!(report.recommendations_summary, RecommendationsSummary::default());
}

#[test]
fn test_report_serializes_camel_case() {
    let report = analyze_snapshot(&create_test_snapshot(), now(), &AnalyticsConfig::default());
    let json = serde_json::to_value(&report).unwrap();

    assert!(json.get("sectorGaps").is_some());
    assert!(json.get("underTargetSectors").is_some());
    assert_eq!(json["stocks"][0]["maSignal"], "TOO_LOW");
    assert_eq!(json["stocks"][0]["rangeSeverity"], "MEDIUM");
}
