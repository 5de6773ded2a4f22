// A line item is one duty-bearing article entry on a shipment. Its unit duty
// depends on the parent shipment's customer tier and destination, so the
// service re-derives every line item whenever either changes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::catalog::models::ArticleType;
use crate::modules::shipments::models::CustomerTier;
use crate::modules::shipments::services::rates;

/// Staff-supplied fields for adding a line item. Quantity defaults to 1.
#[derive(Debug, Clone, Deserialize)]
pub struct NewLineItem {
    pub article_id: String,
    pub quantity: Option<i32>,
}

/// One duty-bearing article entry on a shipment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,

    pub shipment_id: String,

    /// Catalog article this entry charges duty for
    pub article_id: String,

    pub quantity: i32,

    /// Derived: per-unit duty for the parent shipment's tier and destination
    pub unit_duty: Decimal,

    /// Derived: quantity x unit_duty
    pub subtotal: Decimal,
}

impl LineItem {
    pub fn new(shipment_id: String, request: NewLineItem) -> Result<Self> {
        let quantity = request.quantity.unwrap_or(1);
        Self::validate_quantity(quantity)?;

        if request.article_id.trim().is_empty() {
            return Err(AppError::validation("Line item article cannot be empty"));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            shipment_id,
            article_id: request.article_id,
            quantity,
            unit_duty: Decimal::ZERO,
            subtotal: Decimal::ZERO,
        })
    }

    /// Re-derive unit duty and subtotal for the parent shipment's current
    /// tier and destination. A shipment without a province uses the
    /// non-capital duty column.
    pub fn recalculate(
        &mut self,
        article_type: ArticleType,
        fixed_duty: Decimal,
        tier: CustomerTier,
        capital_destination: bool,
    ) {
        self.unit_duty = rates::duty_rate(article_type, tier, capital_destination, fixed_duty);
        self.subtotal = Decimal::from(self.quantity) * self.unit_duty;
    }

    pub fn set_quantity(&mut self, quantity: i32) -> Result<()> {
        Self::validate_quantity(quantity)?;
        self.quantity = quantity;
        Ok(())
    }

    fn validate_quantity(quantity: i32) -> Result<()> {
        if quantity < 1 {
            return Err(AppError::validation(format!(
                "Quantity must be at least 1, got: {}",
                quantity
            )));
        }
        Ok(())
    }
}
