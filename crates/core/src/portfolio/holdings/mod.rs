//! Holdings snapshot model and per-asset-class totals.

mod holdings_model;
mod holdings_totals;


pub use holdings_model::*;
pub use holdings_totals::{summarize, HoldingsTotals};
