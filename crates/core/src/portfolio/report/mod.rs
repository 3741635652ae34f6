//! Dashboard report assembled from a holdings snapshot.

mod report_model;
mod report_service;

#[cfg(test)]
mod report_service_tests;

pub use report_model::*;
pub use report_service::*;
