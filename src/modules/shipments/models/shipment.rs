// The shipment record: one package move from a Mexican sender to a Cuban
// recipient. Raw inputs (weights, tier, destination, extra costs) are set by
// staff; everything under "derived fields" is recomputed by the shipment
// service whenever a dependency changes and must never be written directly.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::shipments::services::rates;

/// Customer tier; VIP gets the preferential tariff and duty columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerTier {
    #[serde(rename = "normal")]
    Normal,

    #[serde(rename = "vip")]
    Vip,
}

impl Default for CustomerTier {
    fn default() -> Self {
        CustomerTier::Normal
    }
}

impl std::fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CustomerTier::Normal => write!(f, "normal"),
            CustomerTier::Vip => write!(f, "vip"),
        }
    }
}

impl std::str::FromStr for CustomerTier {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "normal" => Ok(CustomerTier::Normal),
            "vip" => Ok(CustomerTier::Vip),
            _ => Err(format!("Invalid customer tier: {}", s)),
        }
    }
}

/// How the shipment was paid. Unset means not yet settled; such shipments
/// count toward a date's total revenue but toward neither per-method bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "cash")]
    Cash,

    #[serde(rename = "transfer")]
    Transfer,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "cash"),
            PaymentMethod::Transfer => write!(f, "transfer"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "cash" => Ok(PaymentMethod::Cash),
            "transfer" => Ok(PaymentMethod::Transfer),
            _ => Err(format!("Invalid payment method: {}", s)),
        }
    }
}

/// Staff-supplied fields for creating a shipment.
#[derive(Debug, Clone, Deserialize)]
pub struct NewShipment {
    pub sender_name: String,
    pub sender_phone: Option<String>,
    pub recipient_name: String,
    pub recipient_phone: Option<String>,
    pub customer_tier: CustomerTier,
    pub province_id: Option<String>,
    /// Weight recorded at the central warehouse, informational only
    pub scale_weight: Decimal,
    /// Weight printed on the label
    pub label_weight: Decimal,
    /// Computed volumetric weight
    pub volumetric_weight: Decimal,
    pub payment_method: Option<PaymentMethod>,
    /// Flat extra cost for document handling
    pub document_fee: Decimal,
    pub shipment_date_id: Option<String>,
}

/// Partial update; `None` fields are left untouched. Option-valued fields use
/// a double `Option` so "clear" and "leave alone" stay distinguishable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShipmentUpdate {
    pub customer_tier: Option<CustomerTier>,
    pub province_id: Option<Option<String>>,
    pub scale_weight: Option<Decimal>,
    pub label_weight: Option<Decimal>,
    pub volumetric_weight: Option<Decimal>,
    pub payment_method: Option<Option<PaymentMethod>>,
    pub document_fee: Option<Decimal>,
    pub shipment_date_id: Option<Option<String>>,
}

/// One package move, with its derived pricing and distribution tallies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shipment {
    pub id: String,

    /// Sequence-generated shipment number, immutable once assigned
    pub number: String,

    pub sender_name: String,
    pub sender_phone: Option<String>,
    pub recipient_name: String,
    pub recipient_phone: Option<String>,

    pub customer_tier: CustomerTier,
    pub province_id: Option<String>,

    pub scale_weight: Decimal,
    pub label_weight: Decimal,
    pub volumetric_weight: Decimal,

    pub payment_method: Option<PaymentMethod>,
    pub document_fee: Decimal,
    pub shipment_date_id: Option<String>,

    /// Admin who processed the shipment
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    // ----- derived fields, recomputed by the shipment service -----
    /// max(label, volumetric); the scale weight never participates
    pub billable_weight: Decimal,
    pub packaging_fee: Decimal,
    /// 0 while no destination province is set
    pub tariff_rate: Decimal,
    /// Sum of the line items' subtotals
    pub duty_total: Decimal,
    /// billable_weight x tariff_rate
    pub subtotal: Decimal,
    /// subtotal + packaging + duty + document fee
    pub grand_total: Decimal,
    /// Number of suitcase distribution records
    pub container_count: u32,
    /// Sum of weights placed into suitcases
    pub distributed_weight: Decimal,
    /// billable - distributed; the distribution validator keeps this >= 0
    /// in committed state
    pub pending_weight: Decimal,
}

impl Shipment {
    /// Build a validated shipment from staff input. Derived fields start at
    /// their no-dependency values; the service recalculates before persisting.
    pub fn new(number: String, request: NewShipment, created_by: &str) -> Result<Self> {
        Self::validate_party(&request.sender_name, "Sender name")?;
        Self::validate_party(&request.recipient_name, "Recipient name")?;
        Self::validate_weight(request.scale_weight, "Scale weight")?;
        Self::validate_weight(request.label_weight, "Label weight")?;
        Self::validate_weight(request.volumetric_weight, "Volumetric weight")?;
        Self::validate_weight(request.document_fee, "Document fee")?;

        if created_by.trim().is_empty() {
            return Err(AppError::validation("Processing admin must be set"));
        }

        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            number,
            sender_name: request.sender_name,
            sender_phone: request.sender_phone,
            recipient_name: request.recipient_name,
            recipient_phone: request.recipient_phone,
            customer_tier: request.customer_tier,
            province_id: request.province_id,
            scale_weight: request.scale_weight,
            label_weight: request.label_weight,
            volumetric_weight: request.volumetric_weight,
            payment_method: request.payment_method,
            document_fee: request.document_fee,
            shipment_date_id: request.shipment_date_id,
            created_by: created_by.to_string(),
            created_at: now,
            updated_at: now,
            billable_weight: Decimal::ZERO,
            packaging_fee: Decimal::ZERO,
            tariff_rate: Decimal::ZERO,
            duty_total: Decimal::ZERO,
            subtotal: Decimal::ZERO,
            grand_total: Decimal::ZERO,
            container_count: 0,
            distributed_weight: Decimal::ZERO,
            pending_weight: Decimal::ZERO,
        })
    }

    /// Apply a partial update, re-validating the touched inputs.
    pub fn apply_update(&mut self, update: ShipmentUpdate) -> Result<()> {
        if let Some(tier) = update.customer_tier {
            self.customer_tier = tier;
        }
        if let Some(province_id) = update.province_id {
            self.province_id = province_id;
        }
        if let Some(weight) = update.scale_weight {
            Self::validate_weight(weight, "Scale weight")?;
            self.scale_weight = weight;
        }
        if let Some(weight) = update.label_weight {
            Self::validate_weight(weight, "Label weight")?;
            self.label_weight = weight;
        }
        if let Some(weight) = update.volumetric_weight {
            Self::validate_weight(weight, "Volumetric weight")?;
            self.volumetric_weight = weight;
        }
        if let Some(method) = update.payment_method {
            self.payment_method = method;
        }
        if let Some(fee) = update.document_fee {
            Self::validate_weight(fee, "Document fee")?;
            self.document_fee = fee;
        }
        if let Some(date_id) = update.shipment_date_id {
            self.shipment_date_id = date_id;
        }

        self.updated_at = Utc::now();
        Ok(())
    }

    /// Recompute the pricing side of the derived fields.
    ///
    /// `capital_destination` is `None` while no province is set, which pins
    /// the tariff rate (and therefore the weight subtotal) to zero.
    /// `duty_total` is the already-summed line-item subtotals.
    pub fn recalculate_pricing(&mut self, capital_destination: Option<bool>, duty_total: Decimal) {
        self.billable_weight = rates::billable_weight(self.label_weight, self.volumetric_weight);
        self.packaging_fee = rates::packaging_fee(self.billable_weight);
        self.tariff_rate = match capital_destination {
            Some(capital) => rates::tariff_rate(self.customer_tier, capital),
            None => Decimal::ZERO,
        };
        self.duty_total = duty_total;
        self.subtotal = self.billable_weight * self.tariff_rate;
        self.grand_total = self.subtotal + self.packaging_fee + self.duty_total + self.document_fee;
    }

    /// Recompute the suitcase-distribution tallies from the current set of
    /// distribution records.
    pub fn recalculate_distribution(&mut self, container_count: u32, distributed_weight: Decimal) {
        self.container_count = container_count;
        self.distributed_weight = distributed_weight;
        self.pending_weight = self.billable_weight - self.distributed_weight;
    }

    fn validate_party(name: &str, label: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(AppError::validation(format!("{} cannot be empty", label)));
        }
        Ok(())
    }

    fn validate_weight(value: Decimal, label: &str) -> Result<()> {
        if value < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "{} must be non-negative, got: {}",
                label, value
            )));
        }
        Ok(())
    }
}
