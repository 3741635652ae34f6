//! Per-stock price signals: moving-average classification and 52-week range.

mod ma_signal;
mod range_position;

pub use ma_signal::*;
pub use range_position::*;
