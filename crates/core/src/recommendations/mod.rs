//! Recommendation records, filtering and sector-aware prioritisation.

mod recommendations_model;
mod recommendations_service;


pub use recommendations_model::*;
pub use recommendations_service::*;
