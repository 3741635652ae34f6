//! Unit tests for sector allocation analysis.

use super::*;
use crate::portfolio::holdings::StockHolding;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn create_test_stock(symbol: &str, sector: Option<&str>, invested: Decimal, current: Decimal) -> StockHolding {
    StockHolding {
        id: 1,
        symbol: symbol.to_string(),
        sector: sector.map(str::to_string),
        quantity: dec!(1),
        average_price: invested,
        invested_value: invested,
        current_value: current,
        profit_loss: current - invested,
        profit_loss_percentage: Decimal::ZERO,
        currency: "INR".to_string(),
        updated_at: Utc.with_ymd_and_hms(2024, 6, 10, 9, 30, 0).unwrap(),
        last_close_price: None,
        price_52w_low: None,
        price_52w_high: None,
        moving_average_20: None,
        moving_average_200: None,
    }
}

fn find<'a>(analysis: &'a [SectorAnalysis], sector: &str) -> &'a SectorAnalysis {
    analysis
        .iter()
        .find(|a| a.sector == sector)
        .unwrap_or_else(|| panic!("no analysis for {}", sector))
}

#[test]
fn test_finance_and_energy_gaps() {
    let holdings = vec![
        (Some("Finance"), dec!(1800)),
        (Some("Energy"), dec!(200)),
    ];

    let analysis = analyze_sector_gaps(&holdings);

    let finance = find(&analysis, "Finance");
    assert_eq!(finance.invested, dec!(1800));
    assert_eq!(finance.actual_pct, dec!(90));
    assert_eq!(finance.target_pct, dec!(18));
    assert_eq!(finance.gap, dec!(-72));
    assert!(!finance.is_under);
    assert_eq!(finance.status, AllocationStatus::Over);

    let energy = find(&analysis, "Energy");
    assert_eq!(energy.actual_pct, dec!(10));
    assert_eq!(energy.gap, dec!(-2));
    assert!(!energy.is_under);
    assert_eq!(energy.status, AllocationStatus::OnTarget);

    // Sectors with no holdings are reported at 0% and flagged
    let others = find(&analysis, "Others");
    assert_eq!(others.actual_pct, Decimal::ZERO);
    assert_eq!(others.gap, dec!(10));
    assert!(others.is_under);

    assert_eq!(
        under_target_sectors(&analysis),
        vec!["Auto Ancillary", "FMCG", "Healthcare", "Software Services", "Others"]
    );
}

#[test]
fn test_one_record_per_bucket_in_table_order() {
    let holdings = vec![(Some("Energy"), dec!(100))];

    let analysis = analyze_sector_gaps(&holdings);
    let sectors: Vec<&str> = analysis.iter().map(|a| a.sector.as_str()).collect();

    assert_eq!(
        sectors,
        vec![
            "Finance",
            "Auto Ancillary",
            "FMCG",
            "Healthcare",
            "Software Services",
            "Energy",
            "Others"
        ]
    );
}

#[test]
fn test_empty_and_zero_totals_yield_no_analysis() {
    let empty: Vec<(Option<&str>, Decimal)> = Vec::new();
    assert!(analyze_sector_gaps(&empty).is_empty());

    let zero = vec![(Some("Finance"), Decimal::ZERO), (None, Decimal::ZERO)];
    assert!(analyze_sector_gaps(&zero).is_empty());
}

#[test]
fn test_unmapped_and_missing_sectors_go_to_others() {
    let holdings = vec![
        (Some("Finance"), dec!(500)),
        (Some("Metals"), dec!(300)),
        (None, dec!(200)),
        // Matching is exact
        (Some("finance"), dec!(0)),
    ];

    let analysis = analyze_sector_gaps(&holdings);

    let others = find(&analysis, "Others");
    assert_eq!(others.invested, dec!(500));
    assert_eq!(others.actual_pct, dec!(50));
    assert_eq!(others.gap, dec!(-40));
    assert_eq!(find(&analysis, "Finance").invested, dec!(500));
}

#[test]
fn test_gap_equal_to_threshold_is_not_flagged() {
    // Finance at 16% of total leaves a gap of exactly 2
    let holdings = vec![(Some("Finance"), dec!(16)), (Some("Energy"), dec!(84))];

    let analysis = analyze_sector_gaps(&holdings);
    let finance = find(&analysis, "Finance");

    assert_eq!(finance.gap, dec!(2));
    assert!(!finance.is_under);
    assert_eq!(finance.status, AllocationStatus::OnTarget);
}

#[test]
fn test_actual_percentages_sum_to_hundred() {
    let holdings = vec![
        create_test_stock("A", Some("Finance"), dec!(333.33), dec!(300)),
        create_test_stock("B", Some("FMCG"), dec!(1000), dec!(1100)),
        create_test_stock("C", None, dec!(1234.56), dec!(1200)),
    ];

    let analysis = analyze_sector_gaps(&holdings);
    let total: Decimal = analysis.iter().map(|a| a.actual_pct).sum();

    assert!((total - dec!(100)).abs() < dec!(0.0000001));
}

#[test]
fn test_custom_targets_and_threshold() {
    let targets = SectorTargets::new(
        vec![SectorTarget::new("Tech", dec!(70))],
        dec!(30),
        dec!(5),
    )
    .unwrap();
    let holdings = vec![(Some("Tech"), dec!(66)), (Some("Banks"), dec!(34))];

    let analysis = analyze_sector_gaps_with(&holdings, &targets);

    assert_eq!(analysis.len(), 2);
    let tech = find(&analysis, "Tech");
    assert_eq!(tech.gap, dec!(4));
    assert!(!tech.is_under);
    assert_eq!(find(&analysis, "Others").gap, dec!(-4));
}

#[test]
fn test_shortfall() {
    let holdings = vec![(Some("Finance"), dec!(1800)), (Some("Energy"), dec!(200))];
    let analysis = analyze_sector_gaps(&holdings);

    // 16% of 2000
    assert_eq!(find(&analysis, "FMCG").shortfall(dec!(2000)), dec!(320));
    assert_eq!(find(&analysis, "Finance").shortfall(dec!(2000)), Decimal::ZERO);
}

#[test]
fn test_allocation_status_bounds() {
    assert_eq!(AllocationStatus::from_gap(dec!(2.01), dec!(2)), AllocationStatus::Under);
    assert_eq!(AllocationStatus::from_gap(dec!(-2.01), dec!(2)), AllocationStatus::Over);
    assert_eq!(AllocationStatus::from_gap(dec!(-2), dec!(2)), AllocationStatus::OnTarget);
}

#[test]
fn test_sector_breakdown_groups_and_rounds() {
    let holdings = vec![
        create_test_stock("A", Some("Finance"), dec!(1000), dec!(1100)),
        create_test_stock("B", Some("Metals"), dec!(300.333), dec!(250)),
        create_test_stock("C", Some("Finance"), dec!(500), dec!(450)),
    ];

    let breakdown = sector_breakdown(&holdings, SectorTargets::shared());

    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown[0].sector, "Finance");
    assert_eq!(breakdown[0].invested, dec!(1500));
    assert_eq!(breakdown[0].current, dec!(1550));
    assert_eq!(breakdown[0].profit_loss, dec!(50));
    assert_eq!(breakdown[0].profit_loss_pct, dec!(3.33));

    assert_eq!(breakdown[1].sector, "Others");
    assert_eq!(breakdown[1].invested, dec!(300.33));
    assert_eq!(breakdown[1].profit_loss, dec!(-50.33));
}

#[test]
fn test_sector_breakdown_follows_target_table_order() {
    let holdings = vec![
        create_test_stock("SUNPHARMA", Some("Healthcare"), dec!(100), dec!(100)),
        create_test_stock("ONGC", Some("Energy"), dec!(100), dec!(100)),
        create_test_stock("MOTHERSON", Some("Auto Ancillary"), dec!(100), dec!(100)),
        create_test_stock("HUL", Some("FMCG"), dec!(100), dec!(100)),
        create_test_stock("TCS", Some("Software Services"), dec!(100), dec!(100)),
        create_test_stock("HDFCBANK", Some("Finance"), dec!(100), dec!(100)),
        create_test_stock("TATASTEEL", Some("Metals"), dec!(100), dec!(100)),
    ];

    let breakdown = sector_breakdown(&holdings, SectorTargets::shared());
    let sectors: Vec<&str> = breakdown.iter().map(|b| b.sector.as_str()).collect();

    assert_eq!(
        sectors,
        vec![
            "Finance",
            "Auto Ancillary",
            "FMCG",
            "Healthcare",
            "Software Services",
            "Energy",
            "Others"
        ]
    );

    let custom = SectorTargets::new(
        vec![
            SectorTarget::new("Energy", dec!(50)),
            SectorTarget::new("Healthcare", dec!(40)),
        ],
        dec!(10),
        dec!(2),
    )
    .unwrap();
    let sectors: Vec<String> = sector_breakdown(&holdings, &custom)
        .into_iter()
        .map(|b| b.sector)
        .collect();
    assert_eq!(sectors, vec!["Energy", "Healthcare", "Others"]);
}

#[test]
fn test_sector_breakdown_zero_invested_bucket() {
    let holdings = vec![create_test_stock("GIFT", Some("Energy"), Decimal::ZERO, dec!(40))];

    let breakdown = sector_breakdown(&holdings, SectorTargets::shared());

    assert_eq!(breakdown.len(), 1);
    assert_eq!(breakdown[0].current, dec!(40));
    assert_eq!(breakdown[0].profit_loss_pct, Decimal::ZERO);
}

#[test]
fn test_bucket_resolution() {
    let targets = SectorTargets::standard();
    assert_eq!(targets.bucket_for(Some("FMCG")), "FMCG");
    assert_eq!(targets.bucket_for(Some("Fmcg")), "Others");
    assert_eq!(targets.bucket_for(None), "Others");
    assert_eq!(targets.bucket_index("Others"), 6);
    assert_eq!(targets.bucket_count(), 7);
    assert!(targets.is_named("Energy"));
}
