// libs/booking-cell/src/services/confirmation.rs
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use shared_models::{BookingRecord, BookingStatus, ContactDetails, ScheduleSelection};
use shared_storage::{BookingRepository, LocalStore};

use crate::models::{BookingSummary, ConfirmationError};

/// Final wizard step: turns the accumulated selection and details into a
/// persisted booking record.
pub struct ConfirmationService {
    repository: BookingRepository,
}

impl ConfirmationService {
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self {
            repository: BookingRepository::new(store),
        }
    }

    pub fn with_repository(repository: BookingRepository) -> Self {
        Self { repository }
    }

    /// The read-only summary shown before the confirm action.
    pub fn summary(
        &self,
        schedule: &ScheduleSelection,
        details: &ContactDetails,
    ) -> BookingSummary {
        BookingSummary::new(schedule, details)
    }

    /// Persist the booking: generate an identifier, stamp status Pending and
    /// three identical timestamps, and append to the collection. On storage
    /// failure nothing is written and the caller can retry.
    pub async fn confirm(
        &self,
        schedule: &ScheduleSelection,
        details: &ContactDetails,
    ) -> Result<BookingRecord, ConfirmationError> {
        let existing = self.repository.fetch_bookings().await?;
        let id = generate_booking_id(&existing);
        let now = Utc::now();

        let record = BookingRecord {
            id,
            customer_name: details.customer_name.clone(),
            email: details.email.clone(),
            phone: details.phone.clone(),
            service: details.service,
            booking_date: schedule.date,
            booking_time: schedule.time.clone(),
            group_size: details.group_size,
            special_requests: details.special_requests.clone(),
            emergency_contact: details.emergency_contact.clone(),
            experience: details.experience,
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
            booked_at: now,
        };

        match self.repository.append_booking(record).await {
            Ok(record) => {
                info!(booking_id = %record.id, date = %record.booking_date,
                      time = %record.booking_time, "Booking confirmed");
                Ok(record)
            }
            Err(e) => {
                warn!(error = %e, "Failed to persist booking");
                Err(e.into())
            }
        }
    }
}

/// Time-based identifier, collision-checked against the loaded collection.
/// Good enough for single-user local storage; not suitable for any shared
/// backend.
fn generate_booking_id(existing: &[BookingRecord]) -> String {
    let base = Utc::now().timestamp_millis();
    let mut offset = 0;
    loop {
        let candidate = format!("BK-{}", base + offset);
        if !existing.iter().any(|record| record.id == candidate) {
            return candidate;
        }
        offset += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use shared_models::ServiceType;

    #[test]
    fn generated_ids_avoid_existing_records() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let taken = generate_booking_id(&[]);
        let existing = vec![BookingRecord {
            id: taken.clone(),
            customer_name: "Ana Silva".to_string(),
            email: None,
            phone: "0871234567".to_string(),
            service: ServiceType::WalkOn,
            booking_date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            booking_time: "10:00".to_string(),
            group_size: 4,
            special_requests: None,
            emergency_contact: None,
            experience: None,
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
            booked_at: now,
        }];

        let fresh = generate_booking_id(&existing);
        assert_ne!(fresh, taken);
        assert!(fresh.starts_with("BK-"));
    }
}
