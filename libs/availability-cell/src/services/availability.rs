// libs/availability-cell/src/services/availability.rs
use chrono::{Datelike, Duration, Local, NaiveDate};
use tracing::debug;

use shared_models::{ScheduleSelection, TIME_SLOTS};
use shared_storage::BookingRepository;

use crate::models::{AvailabilityError, AvailabilitySnapshot, BookingRules};

/// The date/time step of the wizard: availability predicates over a snapshot
/// of the persisted collections plus the current selection.
///
/// The predicates are pure reads; nothing here writes to storage. Selecting
/// a new date resets any previously chosen time.
pub struct AvailabilityService {
    rules: BookingRules,
    today: NaiveDate,
    snapshot: AvailabilitySnapshot,
    selected_date: Option<NaiveDate>,
    selected_time: Option<String>,
}

impl AvailabilityService {
    /// Load the snapshot once at activation, using the venue-local date as
    /// "today".
    pub async fn load(repository: &BookingRepository) -> Result<Self, AvailabilityError> {
        Self::load_with(repository, BookingRules::default(), Local::now().date_naive()).await
    }

    /// As [`load`](Self::load), with explicit rules and reference date.
    pub async fn load_with(
        repository: &BookingRepository,
        rules: BookingRules,
        today: NaiveDate,
    ) -> Result<Self, AvailabilityError> {
        let appointments = repository.fetch_appointments().await?;
        let unavailable = repository.fetch_unavailable_schedules().await?;
        let snapshot = AvailabilitySnapshot::new(appointments, unavailable);

        debug!(
            appointments = snapshot.appointments.len(),
            unavailable = snapshot.unavailable.len(),
            %today,
            "Loaded availability snapshot"
        );

        Ok(Self {
            rules,
            today,
            snapshot,
            selected_date: None,
            selected_time: None,
        })
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn selected_time(&self) -> Option<&str> {
        self.selected_time.as_deref()
    }

    /// The completed selection, present only once both halves are chosen.
    pub fn selection(&self) -> Option<ScheduleSelection> {
        match (self.selected_date, self.selected_time.as_ref()) {
            (Some(date), Some(time)) => Some(ScheduleSelection {
                date,
                time: time.clone(),
            }),
            _ => None,
        }
    }

    /// Re-apply a selection carried back from a later wizard step so the
    /// calendar shows it pre-selected.
    pub fn restore_selection(&mut self, selection: &ScheduleSelection) {
        self.selected_date = Some(selection.date);
        self.selected_time = Some(selection.time.clone());
    }

    /// True if the calendar should not offer this date: in the past, beyond
    /// the advance-booking window, on the weekly closing day, or blocked by
    /// a full-day unavailability entry.
    pub fn is_date_disabled(&self, date: NaiveDate) -> bool {
        if date < self.today {
            return true;
        }
        if date > self.today + Duration::days(self.rules.max_advance_days) {
            return true;
        }
        if date.weekday() == self.rules.closed_weekday {
            return true;
        }
        self.snapshot
            .unavailable
            .iter()
            .any(|entry| entry.blocks_whole_day(date))
    }

    /// True if the slot can be booked on the selected date. Always false
    /// while no date is selected.
    pub fn is_time_slot_available(&self, time: &str) -> bool {
        let date = match self.selected_date {
            Some(date) => date,
            None => return false,
        };

        let booked = self.snapshot.appointments.iter().any(|a| {
            a.appointment_date == date && a.appointment_time == time && a.blocks_slot()
        });
        if booked {
            return false;
        }

        !self
            .snapshot
            .unavailable
            .iter()
            .any(|entry| entry.blocks_time(date, time))
    }

    /// How many of the fixed slots remain bookable on the selected date.
    pub fn available_times_count(&self) -> usize {
        TIME_SLOTS
            .iter()
            .filter(|time| self.is_time_slot_available(time))
            .count()
    }

    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), AvailabilityError> {
        if self.is_date_disabled(date) {
            return Err(AvailabilityError::DateDisabled(date));
        }

        debug!(%date, "Date selected, resetting chosen time");
        self.selected_date = Some(date);
        self.selected_time = None;
        Ok(())
    }

    pub fn select_time(&mut self, time: &str) -> Result<(), AvailabilityError> {
        if self.selected_date.is_none() {
            return Err(AvailabilityError::NoDateSelected);
        }
        if !TIME_SLOTS.contains(&time) {
            return Err(AvailabilityError::UnknownSlot(time.to_string()));
        }
        if !self.is_time_slot_available(time) {
            return Err(AvailabilityError::SlotNotAvailable(time.to_string()));
        }

        self.selected_time = Some(time.to_string());
        Ok(())
    }
}
