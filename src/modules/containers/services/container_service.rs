use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;

use crate::core::{AppError, Result};
use crate::modules::containers::models::{
    Container, ContainerSummary, Distribution, NewContainer, NewDistribution,
};
use crate::modules::containers::repositories::{ContainerRepository, DistributionRepository};
use crate::modules::shipments::services::ShipmentService;

/// Service for suitcases and the distribution of shipment weight into them.
pub struct ContainerService {
    containers: Arc<dyn ContainerRepository>,
    distributions: Arc<dyn DistributionRepository>,
    shipments: Arc<ShipmentService>,
}

impl ContainerService {
    pub fn new(
        containers: Arc<dyn ContainerRepository>,
        distributions: Arc<dyn DistributionRepository>,
        shipments: Arc<ShipmentService>,
    ) -> Self {
        Self {
            containers,
            distributions,
            shipments,
        }
    }

    pub async fn create_container(
        &self,
        request: NewContainer,
        created_by: &str,
    ) -> Result<Container> {
        let container = Container::new(request, created_by, Utc::now().date_naive())?;
        let container = self.containers.insert(container).await?;
        info!(name = %container.name, number = container.number, "registered container");
        Ok(container)
    }

    pub async fn get_container(&self, id: &str) -> Result<Container> {
        self.containers
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Container {}", id)))
    }

    pub async fn list_containers(&self) -> Result<Vec<Container>> {
        self.containers.list().await
    }

    pub async fn set_container_active(&self, id: &str, active: bool) -> Result<Container> {
        let mut container = self.get_container(id).await?;
        container.active = active;
        self.containers.update(container).await
    }

    /// Hard delete, only allowed once nothing is packed in the suitcase.
    /// Deactivation is the soft path for suitcases with history.
    pub async fn delete_container(&self, id: &str) -> Result<()> {
        let container = self.get_container(id).await?;
        if self.distributions.exists_for_container(id).await? {
            return Err(AppError::conflict(format!(
                "Container '{}' still has shipment weight distributed into it",
                container.name
            )));
        }
        self.containers.delete(id).await
    }

    /// Read-time tallies: total weight and distinct shipments in a suitcase.
    pub async fn container_summary(&self, id: &str) -> Result<ContainerSummary> {
        self.get_container(id).await?;
        let entries: Vec<(String, Decimal)> = self
            .distributions
            .list_by_container(id)
            .await?
            .into_iter()
            .map(|d| (d.shipment_id, d.weight))
            .collect();
        Ok(ContainerSummary::compute(&entries))
    }

    /// Place part of a shipment into a suitcase. The cumulative-weight cap is
    /// checked against the shipment's billable weight atomically with the
    /// insert; afterwards the shipment's distribution tallies are recomputed.
    pub async fn add_distribution(&self, request: NewDistribution) -> Result<Distribution> {
        let shipment = self.shipments.get_shipment(&request.shipment_id).await?;
        let container = self.get_container(&request.container_id).await?;
        if !container.active {
            return Err(AppError::validation(format!(
                "Container '{}' is inactive",
                container.name
            )));
        }

        let distribution = Distribution::new(request)?;
        let distribution = self
            .distributions
            .insert_validated(distribution, shipment.billable_weight)
            .await?;

        let shipment = self.shipments.recalculate(&shipment.id).await?;
        info!(
            number = %shipment.number,
            container = %container.name,
            weight = %distribution.weight,
            pending = %shipment.pending_weight,
            "distributed shipment weight"
        );
        Ok(distribution)
    }

    pub async fn update_distribution_weight(
        &self,
        distribution_id: &str,
        weight: Decimal,
    ) -> Result<Distribution> {
        let mut distribution = self.require_distribution(distribution_id).await?;
        let shipment = self.shipments.get_shipment(&distribution.shipment_id).await?;

        distribution.weight = weight;
        let distribution = self
            .distributions
            .update_validated(distribution, shipment.billable_weight)
            .await?;

        self.shipments.recalculate(&shipment.id).await?;
        Ok(distribution)
    }

    pub async fn remove_distribution(&self, distribution_id: &str) -> Result<()> {
        let distribution = self.require_distribution(distribution_id).await?;
        self.distributions.delete(distribution_id).await?;
        self.shipments.recalculate(&distribution.shipment_id).await?;
        Ok(())
    }

    pub async fn shipment_distributions(&self, shipment_id: &str) -> Result<Vec<Distribution>> {
        self.distributions.list_by_shipment(shipment_id).await
    }

    async fn require_distribution(&self, id: &str) -> Result<Distribution> {
        self.distributions
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Distribution {}", id)))
    }
}
