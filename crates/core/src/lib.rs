//! Holdings Analytics Core - Portfolio analytics for a holdings dashboard.
//!
//! This crate derives sector allocation gaps, moving-average signals, 52-week range
//! positions and display formatting from a holdings snapshot. It performs no I/O:
//! callers fetch the snapshot and hand it to [`analyze_snapshot`].

pub mod constants;
pub mod errors;
pub mod formatting;
pub mod portfolio;
pub mod recommendations;
pub mod settings;
pub mod utils;

// Re-export common types from portfolio and settings modules
pub use portfolio::*;
pub use settings::AnalyticsConfig;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
