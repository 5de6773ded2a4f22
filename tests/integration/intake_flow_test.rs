// Parcel reception at the regional offices: sequence numbering, validation
// and photo evidence.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use shipledger::intake::models::NewIntakeRecord;
use shipledger::AppError;

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::{spawn_app, spawn_app_without_sequences, TestApp};

fn reception(app: &TestApp) -> NewIntakeRecord {
    NewIntakeRecord {
        origin_state: "Ciudad de Mexico".to_string(),
        received_on: NaiveDate::from_ymd_opt(2026, 1, 8).unwrap(),
        sender_name: "Maria Perez".to_string(),
        sender_phone: Some("+52 55 1234 5678".to_string()),
        recipient_name: "Jose Perez".to_string(),
        recipient_phone: None,
        province_id: app.habana.id.clone(),
        label_weight: dec!(12.4),
        photos: vec!["att-001".to_string(), "att-002".to_string()],
        article_description: "Ropa, medicamentos y un telefono".to_string(),
    }
}

#[tokio::test]
async fn test_reception_numbers_are_sequential() {
    let app = spawn_app().await;

    let first = app.intake.create_record(reception(&app), "admin").await.unwrap();
    let second = app.intake.create_record(reception(&app), "admin").await.unwrap();

    assert_eq!(first.number, "RCP00001");
    assert_eq!(second.number, "RCP00002");
    assert_eq!(first.photo_count(), 2);
}

#[tokio::test]
async fn test_create_fails_without_a_registered_sequence() {
    let app = spawn_app_without_sequences().await;

    let result = app.intake.create_record(reception(&app), "admin").await;
    assert!(matches!(result, Err(AppError::Configuration(_))));
}

#[tokio::test]
async fn test_label_weight_must_be_positive() {
    let app = spawn_app().await;

    let mut bad = reception(&app);
    bad.label_weight = dec!(0);
    let result = app.intake.create_record(bad, "admin").await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_destination_province_must_exist() {
    let app = spawn_app().await;

    let mut bad = reception(&app);
    bad.province_id = "no-such-province".to_string();
    let result = app.intake.create_record(bad, "admin").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_photos_can_be_added_after_creation() {
    let app = spawn_app().await;
    let record = app.intake.create_record(reception(&app), "admin").await.unwrap();

    app.intake.add_photo(&record.id, "att-003").await.unwrap();

    let photos = app.intake.photos(&record.id).await.unwrap();
    assert_eq!(photos.len(), 3);
    assert_eq!(photos[2], "att-003");

    assert!(matches!(
        app.intake.add_photo(&record.id, "  ").await,
        Err(AppError::Validation(_))
    ));
}

#[tokio::test]
async fn test_records_list_newest_first() {
    let app = spawn_app().await;

    let mut earlier = reception(&app);
    earlier.received_on = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
    app.intake.create_record(earlier, "admin").await.unwrap();

    let later = reception(&app); // 2026-01-08
    app.intake.create_record(later, "admin").await.unwrap();

    let records = app.intake.list_records().await.unwrap();
    assert_eq!(records.len(), 2);
    assert!(records[0].received_on > records[1].received_on);
}
