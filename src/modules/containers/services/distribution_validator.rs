//! The weight-distribution invariant: a shipment's weight can be spread over
//! several suitcases, but the committed sum must never exceed the weight the
//! customer was billed for.
//!
//! The check is cross-record (it needs the current siblings), so the store
//! runs it inside the same write guard as the mutation; see
//! `InMemoryDistributionRepository`.

use rust_decimal::Decimal;

use crate::core::{AppError, Result};

/// Validate one distribution write against its current siblings.
///
/// `weight` is the value being written; `sibling_total` is the sum over all
/// other distributions of the same shipment (the record being updated
/// excluded); `billable_weight` is the shipment's billable weight at the time
/// of the check. A violation rejects the write and leaves prior state
/// untouched.
pub fn check_distribution(
    weight: Decimal,
    sibling_total: Decimal,
    billable_weight: Decimal,
) -> Result<()> {
    if weight <= Decimal::ZERO {
        return Err(AppError::validation(format!(
            "Distributed weight must be greater than 0, got: {}",
            weight
        )));
    }

    let total = sibling_total + weight;
    if total > billable_weight {
        return Err(AppError::validation(format!(
            "Distributed weight ({} lb) exceeds the shipment's billable weight ({} lb)",
            total, billable_weight
        )));
    }

    Ok(())
}
