//! Shipledger — business-records core for a Mexico-Cuba courier operation.
//!
//! The crate owns the pricing and weight-reconciliation computations for
//! parcel shipments: weight-to-charge selection, packaging fee tiers,
//! tariff and customs-duty lookups, multi-suitcase weight distribution with
//! its cross-record invariant, and per-shipment-date financial rollups.
//! Persistence is modeled by in-memory repositories behind trait seams.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use crate::core::{AppError, Result};
pub use modules::catalog;
pub use modules::containers;
pub use modules::intake;
pub use modules::shipment_dates;
pub use modules::shipments;
