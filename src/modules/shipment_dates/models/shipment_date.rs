//! Shipment-date groupings and their financial/operational rollups.
//!
//! A grouping is one logical travel day: the shipments leaving that day and
//! the suitcases packed for it. The rollup is a pure function of the current
//! children, recomputed on read.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::shipments::models::{PaymentMethod, Shipment};

/// Shown when a grouping has no date yet.
const UNSCHEDULED_NAME: &str = "Unscheduled shipment";
/// Shown as the destination summary of an empty grouping.
const NO_SHIPMENTS: &str = "no shipments";
/// Distinct destinations listed before the summary is elided.
const SUMMARY_LIMIT: usize = 3;

/// One logical shipping day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentDate {
    pub id: String,
    pub date: NaiveDate,
}

impl ShipmentDate {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
        }
    }

    pub fn display_name(&self) -> String {
        display_name(Some(self.date))
    }
}

/// Grouping display name: "Shipment DD-MM-YYYY", or a fixed fallback while
/// no date is set.
pub fn display_name(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => format!("Shipment {}", date.format("%d-%m-%Y")),
        None => UNSCHEDULED_NAME.to_string(),
    }
}

/// Distinct destination provinces of a grouping's shipments, case-sensitive
/// distinct and sorted. Up to three names are listed; beyond that the first
/// three are shown with a "(+K)" remainder.
pub fn destination_summary(province_names: &[String]) -> String {
    if province_names.is_empty() {
        return NO_SHIPMENTS.to_string();
    }

    let mut distinct: Vec<&str> = province_names.iter().map(String::as_str).collect();
    distinct.sort_unstable();
    distinct.dedup();

    if distinct.len() <= SUMMARY_LIMIT {
        distinct.join(", ")
    } else {
        format!(
            "{}... (+{})",
            distinct[..SUMMARY_LIMIT].join(", "),
            distinct.len() - SUMMARY_LIMIT
        )
    }
}

/// Financial and operational rollup over one grouping's children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRollup {
    pub display_name: String,
    pub total_shipments: usize,
    pub total_containers: usize,
    /// Sum of billable weights
    pub total_weight: Decimal,
    /// Sum of grand totals regardless of payment method
    pub total_revenue: Decimal,
    pub total_revenue_cash: Decimal,
    pub total_revenue_transfer: Decimal,
    pub destination_summary: String,
}

impl DateRollup {
    /// Compute the rollup from the grouping's current children.
    /// `province_names` are the (possibly repeated) destination names of the
    /// referenced shipments. Shipments with no payment method set count
    /// toward total revenue but toward neither per-method bucket.
    pub fn compute(
        date: Option<NaiveDate>,
        shipments: &[Shipment],
        total_containers: usize,
        province_names: &[String],
    ) -> Self {
        let mut total_weight = Decimal::ZERO;
        let mut total_revenue = Decimal::ZERO;
        let mut total_revenue_cash = Decimal::ZERO;
        let mut total_revenue_transfer = Decimal::ZERO;

        for shipment in shipments {
            total_weight += shipment.billable_weight;
            total_revenue += shipment.grand_total;
            match shipment.payment_method {
                Some(PaymentMethod::Cash) => total_revenue_cash += shipment.grand_total,
                Some(PaymentMethod::Transfer) => total_revenue_transfer += shipment.grand_total,
                None => {}
            }
        }

        Self {
            display_name: display_name(date),
            total_shipments: shipments.len(),
            total_containers,
            total_weight,
            total_revenue,
            total_revenue_cash,
            total_revenue_transfer,
            destination_summary: destination_summary(province_names),
        }
    }
}
