use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::core::{AppError, Result};
use crate::modules::catalog::repositories::ProvinceRepository;
use crate::modules::containers::repositories::ContainerRepository;
use crate::modules::shipment_dates::models::{DateRollup, ShipmentDate};
use crate::modules::shipment_dates::repositories::ShipmentDateRepository;
use crate::modules::shipments::repositories::ShipmentRepository;

/// Service for shipment-date groupings and their rollups.
pub struct RollupService {
    dates: Arc<dyn ShipmentDateRepository>,
    shipments: Arc<dyn ShipmentRepository>,
    containers: Arc<dyn ContainerRepository>,
    provinces: Arc<dyn ProvinceRepository>,
}

impl RollupService {
    pub fn new(
        dates: Arc<dyn ShipmentDateRepository>,
        shipments: Arc<dyn ShipmentRepository>,
        containers: Arc<dyn ContainerRepository>,
        provinces: Arc<dyn ProvinceRepository>,
    ) -> Self {
        Self {
            dates,
            shipments,
            containers,
            provinces,
        }
    }

    pub async fn create_date(&self, date: NaiveDate) -> Result<ShipmentDate> {
        self.dates.insert(ShipmentDate::new(date)).await
    }

    pub async fn get_date(&self, id: &str) -> Result<ShipmentDate> {
        self.dates
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Shipment date {}", id)))
    }

    pub async fn list_dates(&self) -> Result<Vec<ShipmentDate>> {
        self.dates.list().await
    }

    /// A grouping can only be removed once no shipment or suitcase points
    /// at it.
    pub async fn delete_date(&self, id: &str) -> Result<()> {
        let date = self.get_date(id).await?;
        if !self.shipments.list_by_date(id).await?.is_empty() {
            return Err(AppError::conflict(format!(
                "'{}' still has shipments assigned",
                date.display_name()
            )));
        }
        if !self.containers.list_by_date(id).await?.is_empty() {
            return Err(AppError::conflict(format!(
                "'{}' still has containers assigned",
                date.display_name()
            )));
        }
        self.dates.delete(id).await
    }

    /// Compute the grouping's rollup from its current shipments and
    /// suitcases. Pure with respect to stored state; calling it twice in a
    /// row yields the same result.
    pub async fn rollup(&self, date_id: &str) -> Result<DateRollup> {
        let date = self.get_date(date_id).await?;
        let shipments = self.shipments.list_by_date(date_id).await?;
        let containers = self.containers.list_by_date(date_id).await?;

        let mut province_names = Vec::new();
        for shipment in &shipments {
            if let Some(province_id) = &shipment.province_id {
                let province = self
                    .provinces
                    .find_by_id(province_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::not_found(format!("Province {}", province_id))
                    })?;
                province_names.push(province.name);
            }
        }

        let rollup = DateRollup::compute(
            Some(date.date),
            &shipments,
            containers.len(),
            &province_names,
        );
        debug!(
            name = %rollup.display_name,
            shipments = rollup.total_shipments,
            revenue = %rollup.total_revenue,
            "computed date rollup"
        );
        Ok(rollup)
    }
}
