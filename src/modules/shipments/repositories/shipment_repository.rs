// Shipments and their owned line items live in one store so cascade deletes
// happen under a single write guard.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::{AppError, Result};
use crate::modules::shipments::models::{LineItem, Shipment};

#[async_trait]
pub trait ShipmentRepository: Send + Sync {
    async fn insert(&self, shipment: Shipment) -> Result<Shipment>;
    async fn update(&self, shipment: Shipment) -> Result<Shipment>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Shipment>>;
    async fn find_by_number(&self, number: &str) -> Result<Option<Shipment>>;
    async fn list(&self) -> Result<Vec<Shipment>>;
    async fn list_by_date(&self, shipment_date_id: &str) -> Result<Vec<Shipment>>;

    /// Delete a shipment and, with it, all of its line items.
    async fn delete(&self, id: &str) -> Result<()>;

    async fn insert_line_item(&self, item: LineItem) -> Result<LineItem>;
    async fn update_line_item(&self, item: LineItem) -> Result<LineItem>;
    async fn delete_line_item(&self, id: &str) -> Result<()>;
    async fn find_line_item(&self, id: &str) -> Result<Option<LineItem>>;
    async fn find_line_items(&self, shipment_id: &str) -> Result<Vec<LineItem>>;
}

#[derive(Default)]
struct Inner {
    shipments: HashMap<String, Shipment>,
    line_items: HashMap<String, LineItem>,
}

pub struct InMemoryShipmentRepository {
    inner: RwLock<Inner>,
}

impl InMemoryShipmentRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }
}

impl Default for InMemoryShipmentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShipmentRepository for InMemoryShipmentRepository {
    async fn insert(&self, shipment: Shipment) -> Result<Shipment> {
        let mut inner = self.inner.write().await;
        if inner
            .shipments
            .values()
            .any(|s| s.number == shipment.number)
        {
            return Err(AppError::validation(format!(
                "Shipment number '{}' already exists",
                shipment.number
            )));
        }
        inner.shipments.insert(shipment.id.clone(), shipment.clone());
        Ok(shipment)
    }

    async fn update(&self, shipment: Shipment) -> Result<Shipment> {
        let mut inner = self.inner.write().await;
        match inner.shipments.get(&shipment.id) {
            Some(existing) if existing.number != shipment.number => {
                // Shipment numbers are immutable once assigned
                Err(AppError::validation(format!(
                    "Shipment number cannot change ('{}' -> '{}')",
                    existing.number, shipment.number
                )))
            }
            Some(_) => {
                inner.shipments.insert(shipment.id.clone(), shipment.clone());
                Ok(shipment)
            }
            None => Err(AppError::not_found(format!("Shipment {}", shipment.id))),
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Shipment>> {
        let inner = self.inner.read().await;
        Ok(inner.shipments.get(id).cloned())
    }

    async fn find_by_number(&self, number: &str) -> Result<Option<Shipment>> {
        let inner = self.inner.read().await;
        Ok(inner.shipments.values().find(|s| s.number == number).cloned())
    }

    async fn list(&self) -> Result<Vec<Shipment>> {
        let inner = self.inner.read().await;
        let mut shipments: Vec<Shipment> = inner.shipments.values().cloned().collect();
        shipments.sort_by(|a, b| b.number.cmp(&a.number));
        Ok(shipments)
    }

    async fn list_by_date(&self, shipment_date_id: &str) -> Result<Vec<Shipment>> {
        let inner = self.inner.read().await;
        let mut shipments: Vec<Shipment> = inner
            .shipments
            .values()
            .filter(|s| s.shipment_date_id.as_deref() == Some(shipment_date_id))
            .cloned()
            .collect();
        shipments.sort_by(|a, b| a.number.cmp(&b.number));
        Ok(shipments)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut inner = self.inner.write().await;
        if inner.shipments.remove(id).is_none() {
            return Err(AppError::not_found(format!("Shipment {}", id)));
        }
        inner.line_items.retain(|_, item| item.shipment_id != id);
        Ok(())
    }

    async fn insert_line_item(&self, item: LineItem) -> Result<LineItem> {
        let mut inner = self.inner.write().await;
        if !inner.shipments.contains_key(&item.shipment_id) {
            return Err(AppError::not_found(format!(
                "Shipment {}",
                item.shipment_id
            )));
        }
        inner.line_items.insert(item.id.clone(), item.clone());
        Ok(item)
    }

    async fn update_line_item(&self, item: LineItem) -> Result<LineItem> {
        let mut inner = self.inner.write().await;
        if !inner.line_items.contains_key(&item.id) {
            return Err(AppError::not_found(format!("Line item {}", item.id)));
        }
        inner.line_items.insert(item.id.clone(), item.clone());
        Ok(item)
    }

    async fn delete_line_item(&self, id: &str) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner
            .line_items
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Line item {}", id)))
    }

    async fn find_line_item(&self, id: &str) -> Result<Option<LineItem>> {
        let inner = self.inner.read().await;
        Ok(inner.line_items.get(id).cloned())
    }

    async fn find_line_items(&self, shipment_id: &str) -> Result<Vec<LineItem>> {
        let inner = self.inner.read().await;
        let mut items: Vec<LineItem> = inner
            .line_items
            .values()
            .filter(|item| item.shipment_id == shipment_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(items)
    }
}
