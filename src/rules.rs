//! Field rule set
//!
//! Pure validation predicates for every registration field. Each rule is a
//! function of the current values only. The required check runs before the
//! shape check, and each failure maps to a fixed message.

use regex::Regex;
use std::sync::LazyLock;

use crate::state::{FieldId, RegistrationValues};

// Letters and spaces only.
static FULL_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z ]*$").expect("FULL_NAME_REGEX: invalid regex pattern")
});

// North American number: optional +1 country code, 3-digit area code with
// optional parentheses, then 3-3-4 digit groups separated by space, dot,
// or hyphen.
static CONTACT_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+?1)?\(?\d{3}\)?[\s.-]\d{3}[\s.-]\d{4}$")
        .expect("CONTACT_NUMBER_REGEX: invalid regex pattern")
});

// Local part, `@`, domain containing a dot.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

pub const FULL_NAME_REQUIRED: &str = "Full Name is required";
pub const FULL_NAME_INVALID: &str = "Full name must contain only alphabets and spaces";
pub const CONTACT_NUMBER_REQUIRED: &str = "Contact number is required";
pub const CONTACT_NUMBER_INVALID: &str = "Invalid Canadian phone number format";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email address";
pub const DAY_REQUIRED: &str = "Birthdate is required";
pub const MONTH_REQUIRED: &str = "Birth month is required";
pub const YEAR_REQUIRED: &str = "Birth year is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_INVALID: &str =
    "Password must contain at least 8 characters, one uppercase letter, one lowercase letter, and one number";
pub const CONFIRM_PASSWORD_REQUIRED: &str = "Confirm Password is required";
pub const CONFIRM_PASSWORD_MISMATCH: &str = "Passwords must match";

/// Check one field against its rule
///
/// Returns the message for the first rule the current value breaks. The
/// confirm-password rule is the only one that reads a second field.
pub fn check(field: FieldId, values: &RegistrationValues) -> Result<(), String> {
    match field {
        FieldId::FullName => text_rule(
            &values.full_name,
            FULL_NAME_REQUIRED,
            &FULL_NAME_REGEX,
            FULL_NAME_INVALID,
        ),
        FieldId::ContactNumber => text_rule(
            &values.contact_number,
            CONTACT_NUMBER_REQUIRED,
            &CONTACT_NUMBER_REGEX,
            CONTACT_NUMBER_INVALID,
        ),
        FieldId::Email => text_rule(&values.email, EMAIL_REQUIRED, &EMAIL_REGEX, EMAIL_INVALID),
        FieldId::Day => selection_rule(values.day, DAY_REQUIRED),
        FieldId::Month => selection_rule(values.month, MONTH_REQUIRED),
        FieldId::Year => selection_rule(values.year, YEAR_REQUIRED),
        FieldId::Password => password_rule(&values.password),
        FieldId::ConfirmPassword => confirm_password_rule(values),
    }
}

fn text_rule(
    value: &str,
    required: &str,
    pattern: &Regex,
    invalid: &str,
) -> Result<(), String> {
    if value.is_empty() {
        return Err(required.to_string());
    }
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(invalid.to_string())
    }
}

fn selection_rule(value: Option<u32>, required: &str) -> Result<(), String> {
    if value.is_some() {
        Ok(())
    } else {
        Err(required.to_string())
    }
}

// At least 8 characters with one lowercase letter, one uppercase letter,
// and one digit, and every character a letter or digit. Symbols fail the
// rule.
fn password_rule(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(PASSWORD_REQUIRED.to_string());
    }
    let alphanumeric = value.chars().all(|c| c.is_ascii_alphanumeric());
    let long_enough = value.len() >= 8;
    let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    if alphanumeric && long_enough && has_lower && has_upper && has_digit {
        Ok(())
    } else {
        Err(PASSWORD_INVALID.to_string())
    }
}

fn confirm_password_rule(values: &RegistrationValues) -> Result<(), String> {
    if values.confirm_password.is_empty() {
        return Err(CONFIRM_PASSWORD_REQUIRED.to_string());
    }
    if values.confirm_password == values.password {
        Ok(())
    } else {
        Err(CONFIRM_PASSWORD_MISMATCH.to_string())
    }
}
