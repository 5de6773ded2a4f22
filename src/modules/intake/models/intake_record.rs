// An intake record is what a regional admin logs when a customer hands over
// a parcel in Mexico: who sends, who receives, the weight charged at the
// counter, and photo evidence of the contents. Shipments are created later at
// the central warehouse; intake records are not linked to them afterwards.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};

/// Staff-supplied fields for logging a received parcel.
#[derive(Debug, Clone, Deserialize)]
pub struct NewIntakeRecord {
    /// Mexican state the receiving admin operates in
    pub origin_state: String,
    pub received_on: NaiveDate,
    pub sender_name: String,
    pub sender_phone: Option<String>,
    pub recipient_name: String,
    pub recipient_phone: Option<String>,
    pub province_id: String,
    /// Weight weighed and charged at the counter; must be positive
    pub label_weight: Decimal,
    /// Attachment references for the photo evidence
    pub photos: Vec<String>,
    /// Free-text list of the articles in the parcel
    pub article_description: String,
}

/// Parcel reception logged by a regional admin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeRecord {
    pub id: String,

    /// Sequence-generated reception number
    pub number: String,

    /// Admin who received the parcel
    pub received_by: String,
    pub origin_state: String,
    pub received_on: NaiveDate,

    pub sender_name: String,
    pub sender_phone: Option<String>,
    pub recipient_name: String,
    pub recipient_phone: Option<String>,
    pub province_id: String,

    pub label_weight: Decimal,

    pub photos: Vec<String>,
    pub article_description: String,

    pub created_at: DateTime<Utc>,
}

impl IntakeRecord {
    pub fn new(number: String, request: NewIntakeRecord, received_by: &str) -> Result<Self> {
        if received_by.trim().is_empty() {
            return Err(AppError::validation("Receiving admin must be set"));
        }
        if request.origin_state.trim().is_empty() {
            return Err(AppError::validation("Origin state cannot be empty"));
        }
        if request.sender_name.trim().is_empty() {
            return Err(AppError::validation("Sender name cannot be empty"));
        }
        if request.recipient_name.trim().is_empty() {
            return Err(AppError::validation("Recipient name cannot be empty"));
        }
        if request.province_id.trim().is_empty() {
            return Err(AppError::validation("Destination province must be set"));
        }
        if request.label_weight <= Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Label weight must be greater than 0, got: {}",
                request.label_weight
            )));
        }
        if request.article_description.trim().is_empty() {
            return Err(AppError::validation("Article description is required"));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            number,
            received_by: received_by.to_string(),
            origin_state: request.origin_state,
            received_on: request.received_on,
            sender_name: request.sender_name,
            sender_phone: request.sender_phone,
            recipient_name: request.recipient_name,
            recipient_phone: request.recipient_phone,
            province_id: request.province_id,
            label_weight: request.label_weight,
            photos: request.photos,
            article_description: request.article_description,
            created_at: Utc::now(),
        })
    }

    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }
}
