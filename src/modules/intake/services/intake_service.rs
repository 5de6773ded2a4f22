use std::sync::Arc;

use tracing::info;

use crate::core::sequence::INTAKE_SEQUENCE;
use crate::core::{AppError, Result, SequenceGenerator};
use crate::modules::catalog::repositories::ProvinceRepository;
use crate::modules::intake::models::{IntakeRecord, NewIntakeRecord};
use crate::modules::intake::repositories::IntakeRepository;

/// Service for parcel reception records.
pub struct IntakeService {
    records: Arc<dyn IntakeRepository>,
    provinces: Arc<dyn ProvinceRepository>,
    sequences: Arc<dyn SequenceGenerator>,
}

impl IntakeService {
    pub fn new(
        records: Arc<dyn IntakeRepository>,
        provinces: Arc<dyn ProvinceRepository>,
        sequences: Arc<dyn SequenceGenerator>,
    ) -> Self {
        Self {
            records,
            provinces,
            sequences,
        }
    }

    /// Log a received parcel. The receiving admin is passed explicitly; the
    /// reception number comes from the shared sequence and its absence is a
    /// configuration failure.
    pub async fn create_record(
        &self,
        request: NewIntakeRecord,
        received_by: &str,
    ) -> Result<IntakeRecord> {
        self.provinces
            .find_by_id(&request.province_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Province {}", request.province_id)))?;

        let number = self
            .sequences
            .next_by_code(INTAKE_SEQUENCE)
            .ok_or_else(|| AppError::configuration("Intake sequence not initialized"))?;

        let record = IntakeRecord::new(number, request, received_by)?;
        let record = self.records.insert(record).await?;
        info!(number = %record.number, photos = record.photo_count(), "logged intake record");
        Ok(record)
    }

    pub async fn get_record(&self, id: &str) -> Result<IntakeRecord> {
        self.records
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Intake record {}", id)))
    }

    pub async fn list_records(&self) -> Result<Vec<IntakeRecord>> {
        self.records.list().await
    }

    /// Attachment references of a record's photo evidence.
    pub async fn photos(&self, id: &str) -> Result<Vec<String>> {
        Ok(self.get_record(id).await?.photos)
    }

    pub async fn add_photo(&self, id: &str, attachment_id: &str) -> Result<IntakeRecord> {
        let mut record = self.get_record(id).await?;
        if attachment_id.trim().is_empty() {
            return Err(AppError::validation("Attachment reference cannot be empty"));
        }
        record.photos.push(attachment_id.to_string());
        self.records.update(record).await
    }
}
