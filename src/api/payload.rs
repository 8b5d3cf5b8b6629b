//! Request body for the create-user call

use serde::Serialize;

use crate::state::RegistrationValues;

/// JSON body posted to the registration service
///
/// Carries every form field plus the derived `date_of_birth` string.
/// Built fresh at submit time and discarded once the request resolves.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub full_name: String,
    pub contact_number: String,
    pub email: String,
    pub day: u32,
    pub month: u32,
    pub year: u32,
    pub password: String,
    pub confirm_password: String,
    pub date_of_birth: String,
}

impl SubmissionPayload {
    /// Project the current values into a payload
    ///
    /// Returns `None` until all three date selectors have a value.
    pub fn from_values(values: &RegistrationValues) -> Option<Self> {
        let date_of_birth = values.date_of_birth()?;
        Some(Self {
            full_name: values.full_name.clone(),
            contact_number: values.contact_number.clone(),
            email: values.email.clone(),
            day: values.day?,
            month: values.month?,
            year: values.year?,
            password: values.password.clone(),
            confirm_password: values.confirm_password.clone(),
            date_of_birth,
        })
    }
}
