use std::sync::Arc;

use assert_matches::assert_matches;
use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;

use booking_cell::models::ConfirmationError;
use booking_cell::services::ConfirmationService;
use shared_models::{
    BookingStatus, ContactDetails, ExperienceLevel, ScheduleSelection, ServiceType,
};
use shared_storage::{BookingRepository, InMemoryStore, LocalStore, StoreError, BOOKINGS_KEY};

mock! {
    Store {}

    #[async_trait]
    impl LocalStore for Store {
        async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
        async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
    }
}

fn schedule() -> ScheduleSelection {
    ScheduleSelection {
        date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
        time: "14:30".to_string(),
    }
}

fn details() -> ContactDetails {
    ContactDetails {
        customer_name: "Ana Silva".to_string(),
        email: Some("ana@example.com".to_string()),
        phone: "1234567890".to_string(),
        service: ServiceType::PrivateGroup,
        group_size: 10,
        special_requests: Some("Two rental markers".to_string()),
        emergency_contact: None,
        experience: Some(ExperienceLevel::Casual),
    }
}

#[tokio::test]
async fn confirm_appends_one_pending_record_with_equal_timestamps() -> anyhow::Result<()> {
    let store = Arc::new(InMemoryStore::new());
    let service = ConfirmationService::new(store.clone());

    let record = service.confirm(&schedule(), &details()).await?;

    assert_eq!(record.status, BookingStatus::Pending);
    assert_eq!(record.created_at, record.updated_at);
    assert_eq!(record.created_at, record.booked_at);
    assert_eq!(record.booking_time, "14:30");

    let persisted = BookingRepository::new(store).fetch_bookings().await?;
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0], record);
    Ok(())
}

#[tokio::test]
async fn confirm_twice_appends_two_distinct_records() -> anyhow::Result<()> {
    let store = Arc::new(InMemoryStore::new());
    let service = ConfirmationService::new(store.clone());

    let first = service.confirm(&schedule(), &details()).await?;
    let second = service.confirm(&schedule(), &details()).await?;
    assert_ne!(first.id, second.id);

    let persisted = BookingRepository::new(store).fetch_bookings().await?;
    assert_eq!(persisted.len(), 2);
    Ok(())
}

#[tokio::test]
async fn write_failure_surfaces_and_leaves_no_partial_record() {
    let mut store = MockStore::new();
    store
        .expect_get()
        .returning(|_| Ok(Some("[]".to_string())));
    store
        .expect_set()
        .returning(|_, _| Err(StoreError::Write("quota exceeded".to_string())));

    let service = ConfirmationService::new(Arc::new(store));
    let result = service.confirm(&schedule(), &details()).await;

    assert_matches!(result, Err(ConfirmationError::Storage(StoreError::Write(_))));
}

#[tokio::test]
async fn summary_formats_date_and_time_for_display() {
    let service = ConfirmationService::new(Arc::new(InMemoryStore::new()));
    let summary = service.summary(&schedule(), &details());

    assert_eq!(summary.display_date, "Monday, January 8, 2024");
    assert_eq!(summary.display_time, "2:30 PM");
    assert_eq!(summary.service, "Private Group Game");
    assert_eq!(summary.experience.as_deref(), Some("Casual Player"));
}

#[tokio::test]
async fn confirmed_record_survives_a_json_round_trip() -> anyhow::Result<()> {
    let store = Arc::new(InMemoryStore::new());
    let service = ConfirmationService::new(store.clone());
    let record = service.confirm(&schedule(), &details()).await?;

    let raw = store.get(BOOKINGS_KEY).await?.expect("collection written");
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(value[0]["status"], "Pending");
    assert_eq!(value[0]["service"], "Private Group Game");
    assert_eq!(value[0]["id"], serde_json::json!(record.id));
    Ok(())
}
