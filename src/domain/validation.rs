use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::contact::Draft;
use crate::errors::{AppError, Field};

pub const MIN_PHONE_DIGITS: usize = 7;

// Digits, spaces, hyphens and parentheses, with an optional leading '+'.
static PHONE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s\-()]+$").expect("phone pattern compiles"));

// local-part@domain.tld, no whitespace, a single '@'.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub struct ValidationReq;

impl ValidationReq {
    pub const NAME_REQUIRED: &'static str = "Name is required!";
    pub const PHONE_REQUIRED: &'static str = "Phone number is required!";
    pub const PHONE_INVALID: &'static str = "Please enter a valid phone number!";
    pub const EMAIL_INVALID: &'static str = "Please enter a valid email address!";
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_SHAPE.is_match(phone)
        && phone.chars().filter(|c| c.is_ascii_digit()).count() >= MIN_PHONE_DIGITS
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Checks a draft field by field (name, phone, email) and stops at the first
/// failure. On success the draft comes back trimmed, with blank optional
/// fields dropped.
pub fn validate_draft(draft: Draft) -> Result<Draft, AppError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(AppError::validation(Field::Name, ValidationReq::NAME_REQUIRED));
    }

    let phone = draft.phone.trim();
    if phone.is_empty() {
        return Err(AppError::validation(Field::Phone, ValidationReq::PHONE_REQUIRED));
    }
    if !is_valid_phone(phone) {
        return Err(AppError::validation(Field::Phone, ValidationReq::PHONE_INVALID));
    }

    let email = non_blank(draft.email);
    if let Some(email) = &email
        && !is_valid_email(email)
    {
        return Err(AppError::validation(Field::Email, ValidationReq::EMAIL_INVALID));
    }

    Ok(Draft {
        name: name.to_string(),
        phone: phone.to_string(),
        email,
        address: non_blank(draft.address),
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
