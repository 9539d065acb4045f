// libs/shared/storage/src/repository.rs
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

use shared_models::{AppointmentRecord, BookingRecord, UnavailableSchedule};

use crate::store::{LocalStore, StoreError};

/// Externally managed collection of appointment records. Read-only input.
pub const APPOINTMENTS_KEY: &str = "appointments";

/// Externally managed unavailability entries. Read-only input.
pub const UNAVAILABLE_SCHEDULES_KEY: &str = "unavailable_schedules";

/// The booking collection this subsystem appends to exclusively.
pub const BOOKINGS_KEY: &str = "paintball_bookings";

/// Typed access to the persisted collections, so the wizard cells never
/// touch raw keys or JSON themselves.
#[derive(Clone)]
pub struct BookingRepository {
    store: Arc<dyn LocalStore>,
}

impl BookingRepository {
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self { store }
    }

    /// Appointment records from the rest of the system. Malformed or missing
    /// data degrades to an empty collection rather than blocking the wizard.
    pub async fn fetch_appointments(&self) -> Result<Vec<AppointmentRecord>, StoreError> {
        let raw = self.store.get(APPOINTMENTS_KEY).await?;
        Ok(parse_collection(APPOINTMENTS_KEY, raw))
    }

    pub async fn fetch_unavailable_schedules(
        &self,
    ) -> Result<Vec<UnavailableSchedule>, StoreError> {
        let raw = self.store.get(UNAVAILABLE_SCHEDULES_KEY).await?;
        Ok(parse_collection(UNAVAILABLE_SCHEDULES_KEY, raw))
    }

    pub async fn fetch_bookings(&self) -> Result<Vec<BookingRecord>, StoreError> {
        let raw = self.store.get(BOOKINGS_KEY).await?;
        Ok(parse_collection(BOOKINGS_KEY, raw))
    }

    /// Append one booking to the persisted collection. The write replaces the
    /// whole JSON array in a single set, so a failure leaves no partial record.
    pub async fn append_booking(&self, record: BookingRecord) -> Result<BookingRecord, StoreError> {
        let mut bookings = self.fetch_bookings().await?;
        debug!(
            booking_id = %record.id,
            existing = bookings.len(),
            "Appending booking record"
        );

        bookings.push(record.clone());
        let encoded = serde_json::to_string(&bookings).map_err(|e| StoreError::Encode {
            collection: BOOKINGS_KEY.to_string(),
            message: e.to_string(),
        })?;
        self.store.set(BOOKINGS_KEY, encoded).await?;

        Ok(record)
    }
}

fn parse_collection<T: DeserializeOwned>(key: &str, raw: Option<String>) -> Vec<T> {
    let raw = match raw {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Vec::new(),
    };

    match serde_json::from_str(&raw) {
        Ok(records) => records,
        Err(e) => {
            warn!(key, error = %e, "Malformed persisted collection, treating as empty");
            Vec::new()
        }
    }
}
