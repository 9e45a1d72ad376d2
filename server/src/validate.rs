//! Request field validation.
//!
//! Each validator checks every field and returns the full list of problems
//! at once, so the client sees one itemized `{errors: [...]}` body instead
//! of a message per round trip.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use uuid::Uuid;

use super::error::AppError;
use super::payloads::{BookingRequest, LoginRequest, RegisterRequest};

pub const MAX_NOTES_LEN: usize = 500;

#[derive(Debug)]
pub struct ValidRegistration {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug)]
pub struct ValidLogin {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct ValidBooking {
    pub salon_id: String,
    pub stylist_id: String,
    pub service_ids: Vec<String>,
    pub datetime: DateTime<Utc>,
    pub notes: Option<String>,
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\+?[0-9 ().-]{7,20}$").unwrap())
}

fn valid_email(value: Option<&str>) -> bool {
    value.is_some_and(|v| email_pattern().is_match(v))
}

fn valid_name(value: Option<&str>) -> bool {
    value.is_none_or(|v| !v.is_empty() && v.chars().count() <= 50)
}

fn valid_uuid(value: Option<&str>) -> bool {
    value.is_some_and(|v| Uuid::parse_str(v).is_ok())
}

pub fn validate_register(request: &RegisterRequest) -> Result<ValidRegistration, AppError> {
    let mut errors = Vec::new();

    if !valid_email(request.email.as_deref()) {
        errors.push("Please provide a valid email".to_string());
    }
    if request.password.as_deref().map_or(0, |p| p.chars().count()) < 6 {
        errors.push("Password must be at least 6 characters long".to_string());
    }
    if !valid_name(request.first_name.as_deref()) {
        errors.push("First name must be 1-50 characters".to_string());
    }
    if !valid_name(request.last_name.as_deref()) {
        errors.push("Last name must be 1-50 characters".to_string());
    }
    if let Some(phone) = request.phone.as_deref() {
        if !phone_pattern().is_match(phone) {
            errors.push("Please provide a valid phone number".to_string());
        }
    }

    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    Ok(ValidRegistration {
        email: request.email.clone().unwrap_or_default(),
        password: request.password.clone().unwrap_or_default(),
        first_name: request.first_name.clone(),
        last_name: request.last_name.clone(),
        phone: request.phone.clone(),
    })
}

pub fn validate_login(request: &LoginRequest) -> Result<ValidLogin, AppError> {
    let mut errors = Vec::new();

    if !valid_email(request.email.as_deref()) {
        errors.push("Please provide a valid email".to_string());
    }
    if request.password.as_deref().is_none_or(str::is_empty) {
        errors.push("Password is required".to_string());
    }

    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    Ok(ValidLogin {
        email: request.email.clone().unwrap_or_default(),
        password: request.password.clone().unwrap_or_default(),
    })
}

pub fn validate_booking(request: &BookingRequest) -> Result<ValidBooking, AppError> {
    let mut errors = Vec::new();

    if !valid_uuid(request.salon_id.as_deref()) {
        errors.push("Valid salon ID is required".to_string());
    }
    if !valid_uuid(request.stylist_id.as_deref()) {
        errors.push("Valid stylist ID is required".to_string());
    }
    match request.service_ids.as_deref() {
        None | Some([]) => errors.push("At least one service must be selected".to_string()),
        Some(ids) => {
            if !ids.iter().all(|id| valid_uuid(Some(id))) {
                errors.push("All service IDs must be valid".to_string());
            }
        }
    }

    let datetime = request
        .datetime
        .as_deref()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|parsed| parsed.with_timezone(&Utc));
    if datetime.is_none() {
        errors.push("Valid datetime is required".to_string());
    }

    if request.notes.as_deref().map_or(0, |n| n.chars().count()) > MAX_NOTES_LEN {
        errors.push("Notes must be less than 500 characters".to_string());
    }

    match (errors.is_empty(), datetime) {
        (true, Some(datetime)) => Ok(ValidBooking {
            salon_id: request.salon_id.clone().unwrap_or_default(),
            stylist_id: request.stylist_id.clone().unwrap_or_default(),
            service_ids: request.service_ids.clone().unwrap_or_default(),
            datetime,
            notes: request.notes.clone(),
        }),
        _ => Err(AppError::Validation(errors)),
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::error::AppError;

    fn messages(result: Result<impl std::fmt::Debug, AppError>) -> Vec<String> {
        match result {
            Err(AppError::Validation(errors)) => errors,
            other => panic!("expected validation errors, got {other:?}"),
        }
    }

    #[test]
    fn test_register_accepts_minimal_fields() {
        let valid = validate_register(&RegisterRequest {
            email: Some("customer@example.com".to_string()),
            password: Some("password123".to_string()),
            ..RegisterRequest::default()
        })
        .unwrap();

        assert_eq!(valid.email, "customer@example.com");
    }

    #[test]
    fn test_register_collects_every_problem() {
        let errors = messages(validate_register(&RegisterRequest {
            email: Some("not-an-email".to_string()),
            password: Some("short".to_string()),
            first_name: Some(String::new()),
            ..RegisterRequest::default()
        }));

        assert_eq!(
            errors,
            vec![
                "Please provide a valid email",
                "Password must be at least 6 characters long",
                "First name must be 1-50 characters",
            ]
        );
    }

    #[test]
    fn test_login_requires_password() {
        let errors = messages(validate_login(&LoginRequest {
            email: Some("customer@example.com".to_string()),
            password: Some(String::new()),
        }));

        assert_eq!(errors, vec!["Password is required"]);
    }

    #[test]
    fn test_booking_requires_uuids_and_rfc3339_datetime() {
        let errors = messages(validate_booking(&BookingRequest {
            salon_id: Some("nope".to_string()),
            stylist_id: Some(Uuid::new_v4().to_string()),
            service_ids: Some(vec!["also-nope".to_string()]),
            datetime: Some("tomorrow".to_string()),
            notes: None,
        }));

        assert_eq!(
            errors,
            vec![
                "Valid salon ID is required",
                "All service IDs must be valid",
                "Valid datetime is required",
            ]
        );
    }

    #[test]
    fn test_booking_rejects_empty_service_list() {
        let errors = messages(validate_booking(&BookingRequest {
            salon_id: Some(Uuid::new_v4().to_string()),
            stylist_id: Some(Uuid::new_v4().to_string()),
            service_ids: Some(vec![]),
            datetime: Some("2026-08-07T10:00:00Z".to_string()),
            notes: None,
        }));

        assert_eq!(errors, vec!["At least one service must be selected"]);
    }

    #[test]
    fn test_booking_parses_datetime_to_utc() {
        let valid = validate_booking(&BookingRequest {
            salon_id: Some(Uuid::new_v4().to_string()),
            stylist_id: Some(Uuid::new_v4().to_string()),
            service_ids: Some(vec![Uuid::new_v4().to_string()]),
            datetime: Some("2026-08-07T10:00:00-04:00".to_string()),
            notes: Some("window seat please".to_string()),
        })
        .unwrap();

        assert_eq!(valid.datetime.to_rfc3339(), "2026-08-07T14:00:00+00:00");
    }
}
