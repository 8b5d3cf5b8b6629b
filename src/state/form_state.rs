//! Registration form state

use std::collections::{HashMap, HashSet};

use super::date;
use super::field::{FieldId, FieldValue};

/// Submission status of the form's single in-flight attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Current values of every registration field
///
/// Text fields default to the empty string; the date selectors default to
/// unselected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationValues {
    pub full_name: String,
    pub contact_number: String,
    pub email: String,
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<u32>,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationValues {
    /// Get one field's value
    pub fn get(&self, field: FieldId) -> FieldValue {
        match field {
            FieldId::FullName => FieldValue::Text(self.full_name.clone()),
            FieldId::ContactNumber => FieldValue::Text(self.contact_number.clone()),
            FieldId::Email => FieldValue::Text(self.email.clone()),
            FieldId::Day => FieldValue::Selection(self.day),
            FieldId::Month => FieldValue::Selection(self.month),
            FieldId::Year => FieldValue::Selection(self.year),
            FieldId::Password => FieldValue::Text(self.password.clone()),
            FieldId::ConfirmPassword => FieldValue::Text(self.confirm_password.clone()),
        }
    }

    /// Set one field's value
    pub fn set(&mut self, field: FieldId, value: FieldValue) {
        match field {
            FieldId::FullName => self.full_name = value.into_text(),
            FieldId::ContactNumber => self.contact_number = value.into_text(),
            FieldId::Email => self.email = value.into_text(),
            FieldId::Day => self.day = value.into_selection(),
            FieldId::Month => self.month = value.into_selection(),
            FieldId::Year => self.year = value.into_selection(),
            FieldId::Password => self.password = value.into_text(),
            FieldId::ConfirmPassword => self.confirm_password = value.into_text(),
        }
    }

    /// Wire-format date of birth, once all three selectors are set
    pub fn date_of_birth(&self) -> Option<String> {
        match (self.day, self.month, self.year) {
            (Some(day), Some(month), Some(year)) => {
                Some(date::format_date_of_birth(day, month, year))
            }
            _ => None,
        }
    }
}

/// Form state: values, touched flags, per-field errors, submission status
///
/// The field set is fixed at construction; fields are never added or
/// removed. The touched set only grows until a reset.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: RegistrationValues,
    touched: HashSet<FieldId>,
    errors: HashMap<FieldId, String>,
    pub status: SubmitStatus,
}

impl FormState {
    /// Create a fresh form with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the current values
    pub fn values(&self) -> &RegistrationValues {
        &self.values
    }

    /// Update a field and mark it touched
    ///
    /// Only the given field is marked; selecting a date sub-field leaves its
    /// siblings untouched.
    pub fn set_value(&mut self, field: FieldId, value: FieldValue) {
        self.values.set(field, value);
        self.touched.insert(field);
    }

    /// Mark one field touched
    pub fn touch(&mut self, field: FieldId) {
        self.touched.insert(field);
    }

    /// Mark every field touched
    pub fn touch_all(&mut self) {
        for field in FieldId::ALL {
            self.touched.insert(field);
        }
    }

    /// Whether the user has interacted with a field
    pub fn is_touched(&self, field: FieldId) -> bool {
        self.touched.contains(&field)
    }

    /// Current error for a field, regardless of touched state
    pub fn error(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Whether any field currently has an error recorded
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub(crate) fn set_error(&mut self, field: FieldId, message: String) {
        self.errors.insert(field, message);
    }

    pub(crate) fn clear_error(&mut self, field: FieldId) {
        self.errors.remove(&field);
    }

    /// Restore defaults: values, touched flags, and errors are cleared and
    /// the status returns to idle
    pub fn reset(&mut self) {
        self.values = RegistrationValues::default();
        self.touched.clear();
        self.errors.clear();
        self.status = SubmitStatus::Idle;
    }
}

/// Per-field snapshot for the rendering boundary
///
/// `error` is the displayable error: present only when the field is touched
/// and currently failing its rule.
#[derive(Debug, Clone)]
pub struct FieldView<'a> {
    pub field: FieldId,
    pub label: &'static str,
    pub value: FieldValue,
    pub touched: bool,
    pub error: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    mod values {
        use super::*;

        #[test]
        fn test_defaults_are_empty() {
            let values = RegistrationValues::default();
            for field in FieldId::ALL {
                assert!(values.get(field).is_empty(), "{field:?} should be empty");
            }
        }

        #[test]
        fn test_set_and_get_text_field() {
            let mut values = RegistrationValues::default();
            values.set(FieldId::Email, FieldValue::text("jane@example.com"));
            assert_eq!(values.get(FieldId::Email).as_text(), "jane@example.com");
            assert_eq!(values.email, "jane@example.com");
        }

        #[test]
        fn test_set_and_get_selection_field() {
            let mut values = RegistrationValues::default();
            values.set(FieldId::Month, FieldValue::selection(7));
            assert_eq!(values.get(FieldId::Month).as_selection(), Some(7));
            assert_eq!(values.month, Some(7));
        }

        #[test]
        fn test_date_of_birth_requires_all_three_selectors() {
            let mut values = RegistrationValues::default();
            assert_eq!(values.date_of_birth(), None);
            values.day = Some(5);
            values.month = Some(7);
            assert_eq!(values.date_of_birth(), None);
            values.year = Some(1990);
            assert_eq!(values.date_of_birth(), Some("5-7-1990".to_string()));
        }
    }

    mod form_state {
        use super::*;

        #[test]
        fn test_new_form_is_idle_and_untouched() {
            let state = FormState::new();
            assert_eq!(state.status, SubmitStatus::Idle);
            assert!(!state.has_errors());
            for field in FieldId::ALL {
                assert!(!state.is_touched(field));
            }
        }

        #[test]
        fn test_set_value_touches_only_that_field() {
            let mut state = FormState::new();
            state.set_value(FieldId::Day, FieldValue::selection(31));
            assert!(state.is_touched(FieldId::Day));
            assert!(!state.is_touched(FieldId::Month));
            assert!(!state.is_touched(FieldId::Year));
        }

        #[test]
        fn test_touch_all_marks_every_field() {
            let mut state = FormState::new();
            state.touch_all();
            for field in FieldId::ALL {
                assert!(state.is_touched(field));
            }
        }

        #[test]
        fn test_errors_are_recorded_per_field() {
            let mut state = FormState::new();
            state.set_error(FieldId::Email, "Invalid email address".to_string());
            assert_eq!(state.error(FieldId::Email), Some("Invalid email address"));
            assert_eq!(state.error(FieldId::Password), None);
            state.clear_error(FieldId::Email);
            assert_eq!(state.error(FieldId::Email), None);
        }

        #[test]
        fn test_reset_restores_defaults() {
            let mut state = FormState::new();
            state.set_value(FieldId::FullName, FieldValue::text("Jane Doe"));
            state.set_error(FieldId::Email, "Email is required".to_string());
            state.touch_all();
            state.status = SubmitStatus::Succeeded;

            state.reset();

            assert_eq!(state.values(), &RegistrationValues::default());
            assert!(!state.has_errors());
            assert!(!state.is_touched(FieldId::FullName));
            assert_eq!(state.status, SubmitStatus::Idle);
        }
    }
}
