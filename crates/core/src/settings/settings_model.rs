//! Analytics configuration.
//!
//! Every threshold the analytics read lives here. The defaults reproduce the house
//! strategy; a JSON override can be loaded with [`AnalyticsConfig::from_json`] and
//! is validated before use. Nothing in this struct is derived from holdings data.

use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    RANGE_LOW_THRESHOLD, RANGE_MEDIUM_THRESHOLD, RSI_OVERBOUGHT, RSI_OVERSOLD, STALE_AFTER_DAYS,
};
use crate::errors::{Error, Result};
use crate::portfolio::allocation::SectorTargets;
use crate::recommendations::RecommendationType;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsConfig {
    /// Sector target table and gap threshold
    pub sector_targets: SectorTargets,

    /// 52-week positions below this read as Low (default: 28)
    pub range_low_below: Decimal,

    /// 52-week positions below this read as Medium (default: 55)
    pub range_medium_below: Decimal,

    /// RSI below this is oversold (default: 30)
    pub rsi_oversold_below: Decimal,

    /// RSI above this is overbought (default: 70)
    pub rsi_overbought_above: Decimal,

    /// Days without refresh before a holding is stale (default: 2)
    pub stale_after_days: i64,

    /// Recommendation actions included in reports (default: all)
    pub recommendation_types: Vec<RecommendationType>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            sector_targets: SectorTargets::standard(),
            range_low_below: RANGE_LOW_THRESHOLD,
            range_medium_below: RANGE_MEDIUM_THRESHOLD,
            rsi_oversold_below: RSI_OVERSOLD,
            rsi_overbought_above: RSI_OVERBOUGHT,
            stale_after_days: STALE_AFTER_DAYS,
            recommendation_types: RecommendationType::ALL.to_vec(),
        }
    }
}

impl AnalyticsConfig {
    /// Parses and validates a configuration. Missing keys take their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: AnalyticsConfig = serde_json::from_str(raw)
            .map_err(|e| Error::ConfigParse(format!("invalid analytics config: {}", e)))?;
        if let Err(e) = config.validate() {
            warn!("Rejecting analytics config: {}", e);
            return Err(e);
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.sector_targets.validate()?;

        if self.range_low_below < Decimal::ZERO || self.range_low_below > self.range_medium_below {
            return Err(Error::InvalidConfigValue(format!(
                "range thresholds must satisfy 0 <= low ({}) <= medium ({})",
                self.range_low_below, self.range_medium_below
            )));
        }

        if self.rsi_oversold_below > self.rsi_overbought_above {
            return Err(Error::InvalidConfigValue(format!(
                "RSI oversold bound {} is above overbought bound {}",
                self.rsi_oversold_below, self.rsi_overbought_above
            )));
        }

        if self.stale_after_days < 0 {
            return Err(Error::InvalidConfigValue(format!(
                "stale_after_days must not be negative, got {}",
                self.stale_after_days
            )));
        }

        Ok(())
    }
}
