use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::core::sequence::SHIPMENT_SEQUENCE;
use crate::core::{AppError, Result, SequenceGenerator};
use crate::modules::catalog::models::Article;
use crate::modules::catalog::repositories::{ArticleRepository, ProvinceRepository};
use crate::modules::containers::repositories::DistributionRepository;
use crate::modules::shipments::models::{
    LineItem, NewLineItem, NewShipment, Shipment, ShipmentUpdate,
};
use crate::modules::shipments::repositories::ShipmentRepository;

/// Service for shipment business logic.
///
/// Every mutating operation here finishes by recomputing the touched
/// shipment's derived fields, which is how the declarative
/// "recompute when a dependency changes" contract is realized: eagerly, in
/// the same call that performed the write.
pub struct ShipmentService {
    shipments: Arc<dyn ShipmentRepository>,
    distributions: Arc<dyn DistributionRepository>,
    articles: Arc<dyn ArticleRepository>,
    provinces: Arc<dyn ProvinceRepository>,
    sequences: Arc<dyn SequenceGenerator>,
}

impl ShipmentService {
    pub fn new(
        shipments: Arc<dyn ShipmentRepository>,
        distributions: Arc<dyn DistributionRepository>,
        articles: Arc<dyn ArticleRepository>,
        provinces: Arc<dyn ProvinceRepository>,
        sequences: Arc<dyn SequenceGenerator>,
    ) -> Self {
        Self {
            shipments,
            distributions,
            articles,
            provinces,
            sequences,
        }
    }

    /// Create a shipment. The acting admin is passed explicitly; the
    /// shipment number comes from the shared sequence and its absence is a
    /// configuration failure, not a silent default.
    pub async fn create_shipment(
        &self,
        request: NewShipment,
        created_by: &str,
    ) -> Result<Shipment> {
        if let Some(province_id) = &request.province_id {
            self.require_province(province_id).await?;
        }

        let number = self
            .sequences
            .next_by_code(SHIPMENT_SEQUENCE)
            .ok_or_else(|| {
                AppError::configuration("Shipment sequence not initialized")
            })?;

        let mut shipment = Shipment::new(number, request, created_by)?;
        let capital = self.capital_destination(&shipment).await?;
        shipment.recalculate_pricing(capital, Decimal::ZERO);
        shipment.recalculate_distribution(0, Decimal::ZERO);

        let shipment = self.shipments.insert(shipment).await?;
        info!(number = %shipment.number, grand_total = %shipment.grand_total, "created shipment");
        Ok(shipment)
    }

    pub async fn get_shipment(&self, id: &str) -> Result<Shipment> {
        self.shipments
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Shipment {}", id)))
    }

    pub async fn list_shipments(&self) -> Result<Vec<Shipment>> {
        self.shipments.list().await
    }

    /// Apply a partial update and recompute the derived fields.
    pub async fn update_shipment(&self, id: &str, update: ShipmentUpdate) -> Result<Shipment> {
        if let Some(Some(province_id)) = &update.province_id {
            self.require_province(province_id).await?;
        }

        let mut shipment = self.get_shipment(id).await?;
        shipment.apply_update(update)?;
        self.shipments.update(shipment).await?;

        self.recalculate(id).await
    }

    /// Delete a shipment together with its owned line items and suitcase
    /// distributions.
    pub async fn delete_shipment(&self, id: &str) -> Result<()> {
        let shipment = self.get_shipment(id).await?;
        self.distributions.delete_by_shipment(id).await?;
        self.shipments.delete(id).await?;
        info!(number = %shipment.number, "deleted shipment");
        Ok(())
    }

    /// Add a duty-bearing article entry. Only active catalog articles can be
    /// added; existing entries keep resolving after deactivation.
    pub async fn add_line_item(&self, shipment_id: &str, request: NewLineItem) -> Result<LineItem> {
        self.get_shipment(shipment_id).await?;
        let article = self.require_article(&request.article_id).await?;
        if !article.active {
            return Err(AppError::validation(format!(
                "Article '{}' is inactive",
                article.name
            )));
        }

        let item = LineItem::new(shipment_id.to_string(), request)?;
        let item = self.shipments.insert_line_item(item).await?;
        let shipment = self.recalculate(shipment_id).await?;
        debug!(number = %shipment.number, duty_total = %shipment.duty_total, "added line item");

        // The stored item was re-derived during recalculation
        self.shipments
            .find_line_item(&item.id)
            .await?
            .ok_or_else(|| AppError::internal("Line item vanished during recalculation"))
    }

    pub async fn set_line_item_quantity(&self, item_id: &str, quantity: i32) -> Result<LineItem> {
        let mut item = self
            .shipments
            .find_line_item(item_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Line item {}", item_id)))?;
        item.set_quantity(quantity)?;
        let shipment_id = item.shipment_id.clone();
        self.shipments.update_line_item(item).await?;
        self.recalculate(&shipment_id).await?;

        self.shipments
            .find_line_item(item_id)
            .await?
            .ok_or_else(|| AppError::internal("Line item vanished during recalculation"))
    }

    pub async fn remove_line_item(&self, item_id: &str) -> Result<()> {
        let item = self
            .shipments
            .find_line_item(item_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Line item {}", item_id)))?;
        self.shipments.delete_line_item(item_id).await?;
        self.recalculate(&item.shipment_id).await?;
        Ok(())
    }

    pub async fn line_items(&self, shipment_id: &str) -> Result<Vec<LineItem>> {
        self.shipments.find_line_items(shipment_id).await
    }

    /// Recompute every derived field of a shipment from its current inputs
    /// and children, and persist the result. Idempotent.
    ///
    /// Order matters: line items are re-derived first because their unit
    /// duty depends on the shipment's tier and destination, and the duty
    /// total feeds the grand total.
    pub async fn recalculate(&self, shipment_id: &str) -> Result<Shipment> {
        let mut shipment = self.get_shipment(shipment_id).await?;
        let capital = self.capital_destination(&shipment).await?;

        let mut duty_total = Decimal::ZERO;
        for mut item in self.shipments.find_line_items(shipment_id).await? {
            let article = self.require_article(&item.article_id).await?;
            item.recalculate(
                article.article_type,
                article.fixed_duty,
                shipment.customer_tier,
                capital.unwrap_or(false),
            );
            duty_total += item.subtotal;
            self.shipments.update_line_item(item).await?;
        }

        shipment.recalculate_pricing(capital, duty_total);

        let distributions = self.distributions.list_by_shipment(shipment_id).await?;
        let distributed: Decimal = distributions.iter().map(|d| d.weight).sum();
        shipment.recalculate_distribution(distributions.len() as u32, distributed);

        self.shipments.update(shipment).await
    }

    /// `None` while the shipment has no destination province.
    async fn capital_destination(&self, shipment: &Shipment) -> Result<Option<bool>> {
        match &shipment.province_id {
            Some(province_id) => {
                let province = self.require_province(province_id).await?;
                Ok(Some(province.is_capital()))
            }
            None => Ok(None),
        }
    }

    async fn require_province(
        &self,
        province_id: &str,
    ) -> Result<crate::modules::catalog::models::Province> {
        self.provinces
            .find_by_id(province_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Province {}", province_id)))
    }

    async fn require_article(&self, article_id: &str) -> Result<Article> {
        self.articles
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Article {}", article_id)))
    }
}
