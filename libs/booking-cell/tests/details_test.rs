use booking_cell::models::GuestDetailsRequest;
use booking_cell::services::DetailsForm;
use shared_models::{ExperienceLevel, ServiceType};

fn valid_request() -> GuestDetailsRequest {
    GuestDetailsRequest {
        customer_name: "Ana Silva".to_string(),
        email: "ana@example.com".to_string(),
        phone: "1234567890".to_string(),
        service: "Walk-On Session".to_string(),
        group_size: Some(6),
        special_requests: String::new(),
        emergency_contact: "Rui Silva 0879876543".to_string(),
        experience: "First Timer".to_string(),
    }
}

#[test]
fn valid_submission_produces_contact_details() {
    let details = DetailsForm::new()
        .validate(&valid_request())
        .expect("request should validate");

    assert_eq!(details.customer_name, "Ana Silva");
    assert_eq!(details.email.as_deref(), Some("ana@example.com"));
    assert_eq!(details.service, ServiceType::WalkOn);
    assert_eq!(details.group_size, 6);
    assert_eq!(details.experience, Some(ExperienceLevel::FirstTimer));
    assert_eq!(details.special_requests, None);
}

#[test]
fn short_phone_blocks_submission_with_min_length_error() {
    let mut request = valid_request();
    request.phone = "12345".to_string();

    let errors = DetailsForm::new().validate(&request).unwrap_err();
    assert_eq!(
        errors.message_for("phone"),
        Some("Phone number must be at least 10 digits")
    );
}

#[test]
fn ten_digit_phone_passes_even_with_separators() {
    let mut request = valid_request();
    request.phone = "(123) 456-7890".to_string();

    assert!(DetailsForm::new().validate(&request).is_ok());
}

#[test]
fn one_character_name_is_rejected() {
    let mut request = valid_request();
    request.customer_name = " A ".to_string();

    let errors = DetailsForm::new().validate(&request).unwrap_err();
    assert_eq!(
        errors.message_for("customer_name"),
        Some("Name must be at least 2 characters")
    );
}

#[test]
fn email_is_optional_but_must_be_well_formed_when_present() {
    let mut request = valid_request();
    request.email = String::new();
    let details = DetailsForm::new().validate(&request).unwrap();
    assert_eq!(details.email, None);

    request.email = "not-an-email".to_string();
    let errors = DetailsForm::new().validate(&request).unwrap_err();
    assert!(errors.message_for("email").is_some());
}

#[test]
fn unknown_service_and_out_of_range_group_size_are_field_scoped() {
    let mut request = valid_request();
    request.service = "Laser Tag".to_string();
    request.group_size = Some(51);

    let errors = DetailsForm::new().validate(&request).unwrap_err();
    assert_eq!(errors.message_for("service"), Some("Please select a service"));
    assert_eq!(
        errors.message_for("group_size"),
        Some("Group size must be between 1 and 50")
    );
    // Valid fields carry no message.
    assert_eq!(errors.message_for("phone"), None);
}

#[test]
fn every_invalid_field_reports_its_own_message() {
    let request = GuestDetailsRequest {
        customer_name: "A".to_string(),
        email: "bad".to_string(),
        phone: "123".to_string(),
        service: String::new(),
        group_size: None,
        special_requests: String::new(),
        emergency_contact: String::new(),
        experience: "Pro Legend".to_string(),
    };

    let errors = DetailsForm::new().validate(&request).unwrap_err();
    for field in ["customer_name", "email", "phone", "service", "group_size", "experience"] {
        assert!(errors.message_for(field).is_some(), "missing error for {field}");
    }
}
