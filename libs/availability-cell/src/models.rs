// libs/availability-cell/src/models.rs
use chrono::{NaiveDate, Weekday};

use shared_models::{AppointmentRecord, UnavailableSchedule};
use shared_storage::StoreError;

/// Static business rules for which dates can be booked.
#[derive(Debug, Clone)]
pub struct BookingRules {
    pub max_advance_days: i64,
    pub closed_weekday: Weekday,
}

impl Default for BookingRules {
    fn default() -> Self {
        Self {
            max_advance_days: 60,
            closed_weekday: Weekday::Sun,
        }
    }
}

/// One-shot snapshot of the persisted collections the availability
/// predicates read. Taken at component activation and never re-polled, so
/// it can go stale within a session; that is accepted for the single-user
/// model.
#[derive(Debug, Clone, Default)]
pub struct AvailabilitySnapshot {
    pub appointments: Vec<AppointmentRecord>,
    pub unavailable: Vec<UnavailableSchedule>,
}

impl AvailabilitySnapshot {
    pub fn new(
        appointments: Vec<AppointmentRecord>,
        unavailable: Vec<UnavailableSchedule>,
    ) -> Self {
        // Cancelled appointments never count against a slot.
        let appointments = appointments
            .into_iter()
            .filter(|a| !a.is_cancelled())
            .collect();
        Self {
            appointments,
            unavailable,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AvailabilityError {
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Date {0} is not open for booking")]
    DateDisabled(NaiveDate),

    #[error("Unknown time slot: {0}")]
    UnknownSlot(String),

    #[error("Time slot {0} is not available")]
    SlotNotAvailable(String),

    #[error("No date selected")]
    NoDateSelected,
}
