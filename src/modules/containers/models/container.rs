// A container ("maleta") is a physical transport suitcase. Its contents are
// described by distribution records; the tallies here are derived from those
// on read, never stored.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};

/// Staff-supplied fields for registering a suitcase.
#[derive(Debug, Clone, Deserialize)]
pub struct NewContainer {
    /// Full display name (e.g. "Maleta #1 Azul Clara")
    pub name: String,
    /// Consecutive suitcase number
    pub number: i32,
    pub color: Option<String>,
    pub shipment_date_id: Option<String>,
}

/// Physical transport suitcase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Container {
    pub id: String,
    pub name: String,
    pub number: i32,
    pub color: Option<String>,
    pub created_on: NaiveDate,
    pub shipment_date_id: Option<String>,
    /// Admin who registered the suitcase
    pub created_by: String,
    /// Inactive suitcases accept no new distributions but keep their history
    pub active: bool,
}

impl Container {
    pub fn new(request: NewContainer, created_by: &str, created_on: NaiveDate) -> Result<Self> {
        if request.name.trim().is_empty() {
            return Err(AppError::validation("Container name cannot be empty"));
        }
        if request.number < 1 {
            return Err(AppError::validation(format!(
                "Container number must be at least 1, got: {}",
                request.number
            )));
        }
        if created_by.trim().is_empty() {
            return Err(AppError::validation("Creating admin must be set"));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            number: request.number,
            color: request.color,
            created_on,
            shipment_date_id: request.shipment_date_id,
            created_by: created_by.to_string(),
            active: true,
        })
    }
}

/// Read-time tallies over a container's distribution records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerSummary {
    /// Sum of weights across all distributions in the suitcase
    pub total_weight: Decimal,
    /// Distinct shipments with a share in the suitcase, sorted
    pub shipment_ids: Vec<String>,
    pub shipment_count: usize,
}

impl ContainerSummary {
    /// Tally (shipment_id, weight) pairs from the container's distributions.
    pub fn compute(entries: &[(String, Decimal)]) -> Self {
        let total_weight = entries.iter().map(|(_, weight)| *weight).sum();

        let mut shipment_ids: Vec<String> =
            entries.iter().map(|(id, _)| id.clone()).collect();
        shipment_ids.sort();
        shipment_ids.dedup();
        let shipment_count = shipment_ids.len();

        Self {
            total_weight,
            shipment_ids,
            shipment_count,
        }
    }
}
