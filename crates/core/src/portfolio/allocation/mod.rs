//! Sector allocation against a fixed target table.

mod allocation_model;
mod allocation_service;

#[cfg(test)]
mod allocation_service_tests;

pub use allocation_model::*;
pub use allocation_service::*;
