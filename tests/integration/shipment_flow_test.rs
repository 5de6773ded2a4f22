// End-to-end shipment lifecycle: sequence numbering, pricing on create, and
// the eager recompute after every change to a pricing dependency.

use rust_decimal_macros::dec;

use shipledger::shipments::models::{CustomerTier, NewLineItem, ShipmentUpdate};
use shipledger::AppError;

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::{new_shipment, spawn_app, spawn_app_without_sequences};

#[tokio::test]
async fn test_create_prices_the_reference_scenario() {
    let app = spawn_app().await;

    // 10 lb label weight, normal tier, capital destination
    let shipment = app
        .shipments
        .create_shipment(
            new_shipment(Some(&app.habana.id), CustomerTier::Normal, "10"),
            "admin",
        )
        .await
        .unwrap();

    assert_eq!(shipment.number, "SHP00001");
    assert_eq!(shipment.billable_weight, dec!(10));
    assert_eq!(shipment.packaging_fee, dec!(50));
    assert_eq!(shipment.tariff_rate, dec!(150));
    assert_eq!(shipment.subtotal, dec!(1500));
    assert_eq!(shipment.duty_total, dec!(0));
    assert_eq!(shipment.grand_total, dec!(1550));
    assert_eq!(shipment.pending_weight, dec!(10));
}

#[tokio::test]
async fn test_shipment_numbers_are_sequential() {
    let app = spawn_app().await;

    for expected in ["SHP00001", "SHP00002", "SHP00003"] {
        let shipment = app
            .shipments
            .create_shipment(
                new_shipment(Some(&app.habana.id), CustomerTier::Normal, "5"),
                "admin",
            )
            .await
            .unwrap();
        assert_eq!(shipment.number, expected);
    }
}

#[tokio::test]
async fn test_create_fails_without_a_registered_sequence() {
    let app = spawn_app_without_sequences().await;

    let result = app
        .shipments
        .create_shipment(
            new_shipment(Some(&app.habana.id), CustomerTier::Normal, "10"),
            "admin",
        )
        .await;

    assert!(matches!(result, Err(AppError::Configuration(_))));
}

#[tokio::test]
async fn test_create_rejects_unknown_province() {
    let app = spawn_app().await;

    let result = app
        .shipments
        .create_shipment(
            new_shipment(Some("no-such-province"), CustomerTier::Normal, "10"),
            "admin",
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_tier_change_reprices_the_shipment() {
    let app = spawn_app().await;
    let shipment = app
        .shipments
        .create_shipment(
            new_shipment(Some(&app.habana.id), CustomerTier::Normal, "10"),
            "admin",
        )
        .await
        .unwrap();

    let updated = app
        .shipments
        .update_shipment(
            &shipment.id,
            ShipmentUpdate {
                customer_tier: Some(CustomerTier::Vip),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.tariff_rate, dec!(140));
    assert_eq!(updated.subtotal, dec!(1400));
    assert_eq!(updated.grand_total, dec!(1450));
}

#[tokio::test]
async fn test_destination_change_reprices_the_shipment() {
    let app = spawn_app().await;
    let shipment = app
        .shipments
        .create_shipment(
            new_shipment(Some(&app.habana.id), CustomerTier::Normal, "10"),
            "admin",
        )
        .await
        .unwrap();

    // Capital -> interior: the per-pound rate jumps to 180
    let updated = app
        .shipments
        .update_shipment(
            &shipment.id,
            ShipmentUpdate {
                province_id: Some(Some(app.santiago.id.clone())),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.tariff_rate, dec!(180));
    assert_eq!(updated.grand_total, dec!(1850));

    // Clearing the destination pins the tariff to zero; packaging remains
    let cleared = app
        .shipments
        .update_shipment(
            &shipment.id,
            ShipmentUpdate {
                province_id: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(cleared.tariff_rate, dec!(0));
    assert_eq!(cleared.subtotal, dec!(0));
    assert_eq!(cleared.grand_total, dec!(50));
}

#[tokio::test]
async fn test_volumetric_weight_can_win_the_billable_weight() {
    let app = spawn_app().await;
    let shipment = app
        .shipments
        .create_shipment(
            new_shipment(Some(&app.habana.id), CustomerTier::Normal, "10"),
            "admin",
        )
        .await
        .unwrap();

    let updated = app
        .shipments
        .update_shipment(
            &shipment.id,
            ShipmentUpdate {
                volumetric_weight: Some(dec!(12.5)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.billable_weight, dec!(12.5));
    assert_eq!(updated.packaging_fee, dec!(100));
    assert_eq!(updated.subtotal, dec!(1875));
    assert_eq!(updated.grand_total, dec!(1975));
}

#[tokio::test]
async fn test_line_items_charge_duty_for_the_current_tier_and_destination() {
    let app = spawn_app().await;
    let shipment = app
        .shipments
        .create_shipment(
            new_shipment(Some(&app.habana.id), CustomerTier::Normal, "10"),
            "admin",
        )
        .await
        .unwrap();

    // Phone, normal tier, capital: 800 per unit
    let item = app
        .shipments
        .add_line_item(
            &shipment.id,
            NewLineItem {
                article_id: app.phone.id.clone(),
                quantity: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(item.quantity, 1);
    assert_eq!(item.unit_duty, dec!(800));

    let shipment = app.shipments.get_shipment(&shipment.id).await.unwrap();
    assert_eq!(shipment.duty_total, dec!(800));
    assert_eq!(shipment.grand_total, dec!(2350));

    // Quantity change recomputes the subtotal and the parent total
    let item = app
        .shipments
        .set_line_item_quantity(&item.id, 2)
        .await
        .unwrap();
    assert_eq!(item.subtotal, dec!(1600));
    let shipment = app.shipments.get_shipment(&shipment.id).await.unwrap();
    assert_eq!(shipment.grand_total, dec!(3150));

    // A tier change re-derives the unit duty of every line item
    app.shipments
        .update_shipment(
            &shipment.id,
            ShipmentUpdate {
                customer_tier: Some(CustomerTier::Vip),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let items = app.shipments.line_items(&shipment.id).await.unwrap();
    assert_eq!(items[0].unit_duty, dec!(700));

    // Removing the item drops the duty from the total
    app.shipments.remove_line_item(&item.id).await.unwrap();
    let shipment = app.shipments.get_shipment(&shipment.id).await.unwrap();
    assert_eq!(shipment.duty_total, dec!(0));
    assert_eq!(shipment.grand_total, dec!(1450));
}

#[tokio::test]
async fn test_fixed_duty_articles_charge_the_catalog_amount() {
    let app = spawn_app().await;
    let shipment = app
        .shipments
        .create_shipment(
            new_shipment(Some(&app.santiago.id), CustomerTier::Vip, "5"),
            "admin",
        )
        .await
        .unwrap();

    let item = app
        .shipments
        .add_line_item(
            &shipment.id,
            NewLineItem {
                article_id: app.misc.id.clone(),
                quantity: Some(3),
            },
        )
        .await
        .unwrap();

    assert_eq!(item.unit_duty, dec!(60));
    assert_eq!(item.subtotal, dec!(180));
}

#[tokio::test]
async fn test_inactive_articles_are_not_offered_for_new_line_items() {
    let app = spawn_app().await;
    let shipment = app
        .shipments
        .create_shipment(
            new_shipment(Some(&app.habana.id), CustomerTier::Normal, "10"),
            "admin",
        )
        .await
        .unwrap();

    app.article_repo
        .set_active(&app.misc.id, false)
        .await
        .unwrap();

    let result = app
        .shipments
        .add_line_item(
            &shipment.id,
            NewLineItem {
                article_id: app.misc.id.clone(),
                quantity: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_deleting_a_shipment_removes_its_line_items() {
    let app = spawn_app().await;
    let shipment = app
        .shipments
        .create_shipment(
            new_shipment(Some(&app.habana.id), CustomerTier::Normal, "10"),
            "admin",
        )
        .await
        .unwrap();
    app.shipments
        .add_line_item(
            &shipment.id,
            NewLineItem {
                article_id: app.phone.id.clone(),
                quantity: None,
            },
        )
        .await
        .unwrap();

    app.shipments.delete_shipment(&shipment.id).await.unwrap();

    assert!(matches!(
        app.shipments.get_shipment(&shipment.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(app
        .shipments
        .line_items(&shipment.id)
        .await
        .unwrap()
        .is_empty());
}
