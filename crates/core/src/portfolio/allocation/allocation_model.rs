//! Sector target table and sector allocation models.

use std::collections::HashSet;
use std::sync::OnceLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::{OTHERS_SECTOR, SECTOR_GAP_THRESHOLD};
use crate::errors::{Error, Result};

/// Target allocation for one named sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorTarget {
    pub name: String,
    /// Target share of total invested value (0-100)
    pub target_pct: Decimal,
}

impl SectorTarget {
    pub fn new(name: impl Into<String>, target_pct: Decimal) -> Self {
        Self {
            name: name.into(),
            target_pct,
        }
    }
}

/// Ordered sector target table plus the implicit "Others" bucket.
///
/// Iteration order is the order of `named`, followed by "Others". The table is
/// configuration: it is read by the analysis and never derived from holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorTargets {
    named: Vec<SectorTarget>,
    others_pct: Decimal,
    /// Gap in percentage points above which a sector is flagged as under-invested
    #[serde(default = "default_gap_threshold")]
    gap_threshold: Decimal,
}

fn default_gap_threshold() -> Decimal {
    SECTOR_GAP_THRESHOLD
}

static STANDARD_TARGETS: OnceLock<SectorTargets> = OnceLock::new();

impl SectorTargets {
    /// Builds a validated target table.
    pub fn new(named: Vec<SectorTarget>, others_pct: Decimal, gap_threshold: Decimal) -> Result<Self> {
        let targets = Self {
            named,
            others_pct,
            gap_threshold,
        };
        targets.validate()?;
        Ok(targets)
    }

    /// The house allocation strategy.
    pub fn standard() -> Self {
        Self {
            named: vec![
                SectorTarget::new("Finance", dec!(18)),
                SectorTarget::new("Auto Ancillary", dec!(18)),
                SectorTarget::new("FMCG", dec!(16)),
                SectorTarget::new("Healthcare", dec!(18)),
                SectorTarget::new("Software Services", dec!(12)),
                SectorTarget::new("Energy", dec!(8)),
            ],
            others_pct: dec!(10),
            gap_threshold: SECTOR_GAP_THRESHOLD,
        }
    }

    /// Process-wide shared copy of [`SectorTargets::standard`].
    pub fn shared() -> &'static SectorTargets {
        STANDARD_TARGETS.get_or_init(SectorTargets::standard)
    }

    pub fn named(&self) -> &[SectorTarget] {
        &self.named
    }

    pub fn others_pct(&self) -> Decimal {
        self.others_pct
    }

    pub fn gap_threshold(&self) -> Decimal {
        self.gap_threshold
    }

    pub fn is_named(&self, sector: &str) -> bool {
        self.named.iter().any(|t| t.name == sector)
    }

    /// Resolves a raw holding sector to the target bucket it counts against.
    ///
    /// Matching is exact. Missing and unlisted sectors resolve to "Others".
    pub fn bucket_for<'a>(&'a self, sector: Option<&str>) -> &'a str {
        sector
            .and_then(|raw| self.named.iter().find(|t| t.name == raw))
            .map(|t| t.name.as_str())
            .unwrap_or(OTHERS_SECTOR)
    }

    /// Position of a bucket in iteration order. "Others" is always last.
    pub fn bucket_index(&self, bucket: &str) -> usize {
        self.named
            .iter()
            .position(|t| t.name == bucket)
            .unwrap_or(self.named.len())
    }

    /// Number of buckets including "Others".
    pub fn bucket_count(&self) -> usize {
        self.named.len() + 1
    }

    /// `(bucket name, target %)` in configuration order, "Others" last.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> + '_ {
        self.named
            .iter()
            .map(|t| (t.name.as_str(), t.target_pct))
            .chain(std::iter::once((OTHERS_SECTOR, self.others_pct)))
    }

    pub fn total_pct(&self) -> Decimal {
        self.iter().map(|(_, pct)| pct).sum()
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for target in &self.named {
            let name = target.name.trim();
            if name.is_empty() {
                return Err(Error::InvalidConfigValue(
                    "sector target name must not be empty".to_string(),
                ));
            }
            if name == OTHERS_SECTOR {
                return Err(Error::InvalidConfigValue(format!(
                    "'{}' is implicit and cannot be listed as a named sector",
                    OTHERS_SECTOR
                )));
            }
            if !seen.insert(target.name.as_str()) {
                return Err(Error::InvalidConfigValue(format!(
                    "sector '{}' is listed more than once",
                    target.name
                )));
            }
            if target.target_pct < Decimal::ZERO {
                return Err(Error::InvalidConfigValue(format!(
                    "target for sector '{}' is negative: {}",
                    target.name, target.target_pct
                )));
            }
        }

        if self.others_pct < Decimal::ZERO {
            return Err(Error::InvalidConfigValue(format!(
                "target for '{}' is negative: {}",
                OTHERS_SECTOR, self.others_pct
            )));
        }

        let total = self.total_pct();
        if total != dec!(100) {
            return Err(Error::InvalidConfigValue(format!(
                "sector targets must sum to 100, got {}",
                total
            )));
        }

        if self.gap_threshold < Decimal::ZERO {
            return Err(Error::InvalidConfigValue(format!(
                "sector gap threshold must not be negative, got {}",
                self.gap_threshold
            )));
        }

        Ok(())
    }
}

impl Default for SectorTargets {
    fn default() -> Self {
        Self::standard()
    }
}

/// Where a sector stands against its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AllocationStatus {
    /// Gap exceeds the threshold: more should be invested here
    Under,
    /// Actual exceeds target by more than the threshold
    Over,
    OnTarget,
}

impl AllocationStatus {
    pub fn from_gap(gap: Decimal, threshold: Decimal) -> Self {
        if gap > threshold {
            AllocationStatus::Under
        } else if gap < -threshold {
            AllocationStatus::Over
        } else {
            AllocationStatus::OnTarget
        }
    }
}

/// Actual vs. target allocation for one sector bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorAnalysis {
    pub sector: String,
    pub invested: Decimal,
    pub actual_pct: Decimal,
    pub target_pct: Decimal,
    /// target - actual; positive means under-invested
    pub gap: Decimal,
    pub is_under: bool,
    pub status: AllocationStatus,
}

impl SectorAnalysis {
    /// Amount that would close a positive gap, given the total invested value.
    pub fn shortfall(&self, total_invested: Decimal) -> Decimal {
        if self.gap > Decimal::ZERO {
            self.gap / dec!(100) * total_invested
        } else {
            Decimal::ZERO
        }
    }
}

/// Invested, current and P&L figures aggregated per sector bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorBreakdown {
    pub sector: String,
    pub invested: Decimal,
    pub current: Decimal,
    pub profit_loss: Decimal,
    pub profit_loss_pct: Decimal,
}
