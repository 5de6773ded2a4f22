use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};

/// Staff-supplied fields for placing part of a shipment into a suitcase.
#[derive(Debug, Clone, Deserialize)]
pub struct NewDistribution {
    pub shipment_id: String,
    pub container_id: String,
    /// Pounds of the shipment packed into this suitcase
    pub weight: Decimal,
    /// How it was packed (e.g. "2 bolsas azules, 1 nylon transparente")
    pub packing_note: String,
}

/// Records that N pounds of a shipment were physically packed into a
/// specific suitcase. Owned by the shipment; the suitcase is only referenced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Distribution {
    pub id: String,
    pub shipment_id: String,
    pub container_id: String,
    pub weight: Decimal,
    pub packing_note: String,
}

impl Distribution {
    pub fn new(request: NewDistribution) -> Result<Self> {
        if request.packing_note.trim().is_empty() {
            return Err(AppError::validation("Packing description is required"));
        }
        // The > 0 weight rule is re-checked by the store together with the
        // cumulative cap; validating here gives an early, cheaper failure.
        if request.weight <= Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Distributed weight must be greater than 0, got: {}",
                request.weight
            )));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            shipment_id: request.shipment_id,
            container_id: request.container_id,
            weight: request.weight,
            packing_note: request.packing_note,
        })
    }
}
