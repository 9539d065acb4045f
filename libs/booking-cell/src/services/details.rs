// libs/booking-cell/src/services/details.rs
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use shared_models::{
    ContactDetails, ExperienceLevel, ServiceType, MAX_GROUP_SIZE, MIN_GROUP_SIZE, MIN_NAME_LEN,
    MIN_PHONE_DIGITS,
};

use crate::models::{GuestDetailsRequest, ValidationErrors};

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

/// Validates the contact/details step against the booking schema. Each
/// failing field yields its own message; the step cannot complete while any
/// required field is invalid.
#[derive(Debug, Default)]
pub struct DetailsForm;

impl DetailsForm {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(
        &self,
        request: &GuestDetailsRequest,
    ) -> Result<ContactDetails, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let customer_name = request.customer_name.trim();
        if customer_name.chars().count() < MIN_NAME_LEN {
            errors.push(
                "customer_name",
                format!("Name must be at least {} characters", MIN_NAME_LEN),
            );
        }

        let email = request.email.trim();
        let email = if email.is_empty() {
            None
        } else if email_pattern().is_match(email) {
            Some(email.to_string())
        } else {
            errors.push("email", "Please enter a valid email address");
            None
        };

        let phone = request.phone.trim();
        let digit_count = phone.chars().filter(|c| c.is_ascii_digit()).count();
        if digit_count < MIN_PHONE_DIGITS {
            errors.push(
                "phone",
                format!("Phone number must be at least {} digits", MIN_PHONE_DIGITS),
            );
        }

        let service = match ServiceType::from_name(request.service.trim()) {
            Some(service) => Some(service),
            None => {
                errors.push("service", "Please select a service");
                None
            }
        };

        let group_size = match request.group_size {
            Some(size) if (MIN_GROUP_SIZE..=MAX_GROUP_SIZE).contains(&size) => Some(size),
            _ => {
                errors.push(
                    "group_size",
                    format!(
                        "Group size must be between {} and {}",
                        MIN_GROUP_SIZE, MAX_GROUP_SIZE
                    ),
                );
                None
            }
        };

        let experience = request.experience.trim();
        let experience = if experience.is_empty() {
            None
        } else {
            match ExperienceLevel::from_name(experience) {
                Some(level) => Some(level),
                None => {
                    errors.push("experience", "Please choose an experience level");
                    None
                }
            }
        };

        if !errors.is_empty() {
            debug!(failures = errors.errors.len(), "Details form rejected");
            return Err(errors);
        }

        let optional = |value: &str| {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };

        Ok(ContactDetails {
            customer_name: customer_name.to_string(),
            email,
            phone: phone.to_string(),
            service: service.expect("service validated above"),
            group_size: group_size.expect("group size validated above"),
            special_requests: optional(&request.special_requests),
            emergency_contact: optional(&request.emergency_contact),
            experience,
        })
    }
}
