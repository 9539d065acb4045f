// libs/shared/models/src/schedule.rs
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// The fixed daily slot table: a morning block before 12:00 and an
/// afternoon block from 14:00, in venue-local time.
pub const TIME_SLOTS: [&str; 13] = [
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "14:00", "14:30", "15:00", "15:30",
    "16:00", "16:30", "17:00",
];

/// External appointment records carry this status when the group never
/// turned up; such records do not block a slot.
pub const NO_SHOW_STATUS: &str = "Didn't show up";

pub fn is_morning_slot(time: &str) -> bool {
    // Slots are zero-padded HH:MM, so lexicographic order matches clock order.
    time < "12:00"
}

pub fn is_afternoon_slot(time: &str) -> bool {
    time >= "14:00"
}

pub fn morning_slots() -> impl Iterator<Item = &'static str> {
    TIME_SLOTS.iter().copied().filter(|t| is_morning_slot(t))
}

pub fn afternoon_slots() -> impl Iterator<Item = &'static str> {
    TIME_SLOTS.iter().copied().filter(|t| is_afternoon_slot(t))
}

/// A completed step-1 selection: both halves present by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSelection {
    pub date: NaiveDate,
    pub time: String,
}

/// An appointment record from the externally managed `appointments`
/// collection. Only the fields relevant to availability are read; the
/// status is free-form text owned by the other side of the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentRecord {
    pub appointment_date: NaiveDate,
    pub appointment_time: String,
    pub status: String,
}

impl AppointmentRecord {
    /// A booked slot stays blocked unless the group was marked a no-show.
    pub fn blocks_slot(&self) -> bool {
        self.status != NO_SHOW_STATUS
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == "Cancelled"
    }
}

/// An entry from the externally managed `unavailable_schedules` collection.
/// Full-day entries disable the whole date; otherwise only the given time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnavailableSchedule {
    pub unavailable_date: NaiveDate,
    pub is_full_day: bool,
    #[serde(default)]
    pub unavailable_time: Option<String>,
}

impl UnavailableSchedule {
    pub fn blocks_whole_day(&self, date: NaiveDate) -> bool {
        self.is_full_day && self.unavailable_date == date
    }

    pub fn blocks_time(&self, date: NaiveDate, time: &str) -> bool {
        !self.is_full_day
            && self.unavailable_date == date
            && self.unavailable_time.as_deref() == Some(time)
    }
}

/// Format a date for the confirmation summary, e.g.
/// "Monday, January 8, 2024".
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Format a 24-hour slot for the confirmation summary, e.g. "2:30 PM".
/// Slots outside HH:MM shape are shown as-is rather than dropped.
pub fn format_display_time(time: &str) -> String {
    match NaiveTime::parse_from_str(time, "%H:%M") {
        Ok(parsed) => parsed.format("%-I:%M %p").to_string(),
        Err(_) => time.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_table_splits_into_morning_and_afternoon_blocks() {
        assert_eq!(TIME_SLOTS.len(), 13);
        assert_eq!(morning_slots().count(), 6);
        assert_eq!(afternoon_slots().count(), 7);
        assert_eq!(morning_slots().count() + afternoon_slots().count(), TIME_SLOTS.len());
    }

    #[test]
    fn no_show_appointments_do_not_block() {
        let record = AppointmentRecord {
            appointment_date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            appointment_time: "10:00".to_string(),
            status: NO_SHOW_STATUS.to_string(),
        };
        assert!(!record.blocks_slot());
    }

    #[test]
    fn display_formatting_uses_long_date_and_twelve_hour_clock() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        assert_eq!(format_display_date(date), "Monday, January 8, 2024");
        assert_eq!(format_display_time("09:00"), "9:00 AM");
        assert_eq!(format_display_time("14:30"), "2:30 PM");
    }

    #[test]
    fn unavailable_entries_deserialize_without_time_field() {
        let entry: UnavailableSchedule = serde_json::from_str(
            r#"{"unavailable_date":"2024-01-10","is_full_day":true}"#,
        )
        .unwrap();
        assert!(entry.is_full_day);
        assert!(entry.unavailable_time.is_none());
    }
}
