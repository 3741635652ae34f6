//! Portfolio analytics: holdings totals, sector allocation, price signals and the
//! combined dashboard report.

pub mod allocation;
pub mod holdings;
pub mod report;
pub mod signals;

pub use allocation::*;
pub use holdings::*;
pub use report::*;
pub use signals::*;
