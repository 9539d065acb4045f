// libs/booking-cell/src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use shared_models::{
    format_display_date, format_display_time, BookingDraft, ContactDetails, ScheduleSelection,
};
use shared_storage::StoreError;

/// Raw submission from the contact/details form, before validation. Fields
/// arrive as entered; empty strings mean "left blank".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuestDetailsRequest {
    pub customer_name: String,
    #[serde(default)]
    pub email: String,
    pub phone: String,
    pub service: String,
    pub group_size: Option<u32>,
    #[serde(default)]
    pub special_requests: String,
    #[serde(default)]
    pub emergency_contact: String,
    #[serde(default)]
    pub experience: String,
}

impl GuestDetailsRequest {
    /// Pre-fill the form from state accumulated on an earlier pass, so
    /// navigating back and forward loses nothing.
    pub fn from_draft(draft: &BookingDraft) -> Self {
        Self {
            customer_name: draft.customer_name.clone().unwrap_or_default(),
            email: draft.email.clone().unwrap_or_default(),
            phone: draft.phone.clone().unwrap_or_default(),
            service: draft.service.map(|s| s.to_string()).unwrap_or_default(),
            group_size: draft.group_size,
            special_requests: draft.special_requests.clone().unwrap_or_default(),
            emergency_contact: draft.emergency_contact.clone().unwrap_or_default(),
            experience: draft.experience.map(|e| e.to_string()).unwrap_or_default(),
        }
    }
}

/// A validation failure scoped to a single form field, rendered beside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All field failures from one submission. Submission stays blocked while
/// this is non-empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl std::error::Error for ValidationErrors {}

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfirmationError {
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

/// Read-only, human-formatted view of the accumulated booking, rendered by
/// the confirmation step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingSummary {
    pub customer_name: String,
    pub email: Option<String>,
    pub phone: String,
    pub service: String,
    pub display_date: String,
    pub display_time: String,
    pub group_size: u32,
    pub special_requests: Option<String>,
    pub emergency_contact: Option<String>,
    pub experience: Option<String>,
}

impl BookingSummary {
    pub fn new(schedule: &ScheduleSelection, details: &ContactDetails) -> Self {
        Self {
            customer_name: details.customer_name.clone(),
            email: details.email.clone(),
            phone: details.phone.clone(),
            service: details.service.to_string(),
            display_date: format_display_date(schedule.date),
            display_time: format_display_time(&schedule.time),
            group_size: details.group_size,
            special_requests: details.special_requests.clone(),
            emergency_contact: details.emergency_contact.clone(),
            experience: details.experience.map(|level| level.to_string()),
        }
    }
}
