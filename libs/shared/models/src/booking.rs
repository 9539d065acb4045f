// libs/shared/models/src/booking.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::schedule::ScheduleSelection;

pub const MIN_GROUP_SIZE: u32 = 1;
pub const MAX_GROUP_SIZE: u32 = 50;
pub const MIN_NAME_LEN: usize = 2;
pub const MIN_PHONE_DIGITS: usize = 10;

/// Fixed catalog of bookable paintball sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    #[serde(rename = "Walk-On Session", alias = "walk_on")]
    WalkOn,

    #[serde(rename = "Private Group Game", alias = "private_group")]
    PrivateGroup,

    #[serde(rename = "Kids Party Package", alias = "kids_party")]
    KidsParty,

    #[serde(rename = "Corporate Event", alias = "corporate_event")]
    CorporateEvent,

    #[serde(rename = "Scenario Big Game", alias = "scenario_game")]
    ScenarioGame,
}

impl ServiceType {
    pub const ALL: [ServiceType; 5] = [
        ServiceType::WalkOn,
        ServiceType::PrivateGroup,
        ServiceType::KidsParty,
        ServiceType::CorporateEvent,
        ServiceType::ScenarioGame,
    ];

    /// Parse the catalog name shown in the service picker.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.to_string() == name)
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceType::WalkOn => write!(f, "Walk-On Session"),
            ServiceType::PrivateGroup => write!(f, "Private Group Game"),
            ServiceType::KidsParty => write!(f, "Kids Party Package"),
            ServiceType::CorporateEvent => write!(f, "Corporate Event"),
            ServiceType::ScenarioGame => write!(f, "Scenario Big Game"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "First Timer", alias = "first_timer")]
    FirstTimer,

    #[serde(rename = "Casual Player", alias = "casual")]
    Casual,

    #[serde(rename = "Experienced", alias = "experienced")]
    Experienced,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::FirstTimer,
        ExperienceLevel::Casual,
        ExperienceLevel::Experienced,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.to_string() == name)
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperienceLevel::FirstTimer => write!(f, "First Timer"),
            ExperienceLevel::Casual => write!(f, "Casual Player"),
            ExperienceLevel::Experienced => write!(f, "Experienced"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Pending => write!(f, "Pending"),
            BookingStatus::Confirmed => write!(f, "Confirmed"),
            BookingStatus::Completed => write!(f, "Completed"),
            BookingStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// Contact and session details collected by the second wizard step,
/// already validated against the field constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactDetails {
    pub customer_name: String,
    pub email: Option<String>,
    pub phone: String,
    pub service: ServiceType,
    pub group_size: u32,
    pub special_requests: Option<String>,
    pub emergency_contact: Option<String>,
    pub experience: Option<ExperienceLevel>,
}

/// Booking data accumulated across wizard steps. Every field stays optional
/// until the confirmation step; merging a step's output overwrites only the
/// fields that step produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingDraft {
    pub customer_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub service: Option<ServiceType>,
    pub booking_date: Option<NaiveDate>,
    pub booking_time: Option<String>,
    pub group_size: Option<u32>,
    pub special_requests: Option<String>,
    pub emergency_contact: Option<String>,
    pub experience: Option<ExperienceLevel>,
}

impl BookingDraft {
    /// Merge another partial draft into this one. Later values win per field;
    /// fields absent from `update` are left untouched.
    pub fn merge(&mut self, update: BookingDraft) {
        if update.customer_name.is_some() {
            self.customer_name = update.customer_name;
        }
        if update.email.is_some() {
            self.email = update.email;
        }
        if update.phone.is_some() {
            self.phone = update.phone;
        }
        if update.service.is_some() {
            self.service = update.service;
        }
        if update.booking_date.is_some() {
            self.booking_date = update.booking_date;
        }
        if update.booking_time.is_some() {
            self.booking_time = update.booking_time;
        }
        if update.group_size.is_some() {
            self.group_size = update.group_size;
        }
        if update.special_requests.is_some() {
            self.special_requests = update.special_requests;
        }
        if update.emergency_contact.is_some() {
            self.emergency_contact = update.emergency_contact;
        }
        if update.experience.is_some() {
            self.experience = update.experience;
        }
    }

    pub fn apply_schedule(&mut self, selection: &ScheduleSelection) {
        self.booking_date = Some(selection.date);
        self.booking_time = Some(selection.time.clone());
    }

    pub fn apply_details(&mut self, details: &ContactDetails) {
        self.customer_name = Some(details.customer_name.clone());
        self.email = details.email.clone();
        self.phone = Some(details.phone.clone());
        self.service = Some(details.service);
        self.group_size = Some(details.group_size);
        self.special_requests = details.special_requests.clone();
        self.emergency_contact = details.emergency_contact.clone();
        self.experience = details.experience;
    }

    /// The date/time pair counts as selected only once both are present.
    pub fn schedule(&self) -> Option<ScheduleSelection> {
        match (self.booking_date, self.booking_time.as_ref()) {
            (Some(date), Some(time)) => Some(ScheduleSelection {
                date,
                time: time.clone(),
            }),
            _ => None,
        }
    }
}

/// A booking as persisted in the `paintball_bookings` collection.
/// Records are append-only; this subsystem never mutates or deletes one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: String,
    pub customer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone: String,
    pub service: ServiceType,
    pub booking_date: NaiveDate,
    pub booking_time: String,
    pub group_size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<ExperienceLevel>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub booked_at: DateTime<Utc>,
}
