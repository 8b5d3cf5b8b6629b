//! Validation engine
//!
//! Applies the field rule set to the form state and maintains the error
//! map. The per-field error is recorded exactly when the current value
//! fails its rule.

use crate::rules;
use crate::state::{FieldId, FormState};

/// Re-evaluate one field, recording the outcome in the error map
///
/// Returns true when the field passes.
pub fn validate_field(state: &mut FormState, field: FieldId) -> bool {
    match rules::check(field, state.values()) {
        Ok(()) => {
            state.clear_error(field);
            true
        }
        Err(message) => {
            state.set_error(field, message);
            false
        }
    }
}

/// Validate the whole form and mark every field touched
///
/// Every field is evaluated even after a failure so that all errors become
/// visible at once. Returns true iff no field has an error. This is the
/// single gate for submission.
pub fn validate_all(state: &mut FormState) -> bool {
    state.touch_all();
    let mut all_valid = true;
    for field in FieldId::ALL {
        if !validate_field(state, field) {
            all_valid = false;
        }
    }
    all_valid
}

/// Error to display for a field, if any
///
/// Untouched fields stay silent even when currently invalid.
pub fn visible_error(state: &FormState, field: FieldId) -> Option<&str> {
    if state.is_touched(field) {
        state.error(field)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{EMAIL_INVALID, FULL_NAME_REQUIRED};
    use crate::state::FieldValue;

    fn filled_valid_form() -> FormState {
        let mut state = FormState::new();
        state.set_value(FieldId::FullName, FieldValue::text("Jane Doe"));
        state.set_value(FieldId::ContactNumber, FieldValue::text("416-555-1234"));
        state.set_value(FieldId::Email, FieldValue::text("jane@example.com"));
        state.set_value(FieldId::Day, FieldValue::selection(5));
        state.set_value(FieldId::Month, FieldValue::selection(7));
        state.set_value(FieldId::Year, FieldValue::selection(1990));
        state.set_value(FieldId::Password, FieldValue::text("Abcdefg1"));
        state.set_value(FieldId::ConfirmPassword, FieldValue::text("Abcdefg1"));
        state
    }

    #[test]
    fn test_validate_field_records_error() {
        let mut state = FormState::new();
        state.set_value(FieldId::Email, FieldValue::text("not-an-email"));
        assert!(!validate_field(&mut state, FieldId::Email));
        assert_eq!(state.error(FieldId::Email), Some(EMAIL_INVALID));
    }

    #[test]
    fn test_validate_field_clears_stale_error() {
        let mut state = FormState::new();
        state.set_value(FieldId::Email, FieldValue::text("not-an-email"));
        validate_field(&mut state, FieldId::Email);
        state.set_value(FieldId::Email, FieldValue::text("jane@example.com"));
        assert!(validate_field(&mut state, FieldId::Email));
        assert_eq!(state.error(FieldId::Email), None);
    }

    #[test]
    fn test_validate_all_on_empty_form_surfaces_every_error() {
        let mut state = FormState::new();
        assert!(!validate_all(&mut state));
        for field in FieldId::ALL {
            assert!(state.is_touched(field), "{field:?} not touched");
            assert!(state.error(field).is_some(), "{field:?} has no error");
        }
    }

    #[test]
    fn test_validate_all_passes_on_valid_form() {
        let mut state = filled_valid_form();
        assert!(validate_all(&mut state));
        assert!(!state.has_errors());
    }

    #[test]
    fn test_validate_all_accepts_impossible_calendar_date() {
        // The selectors are independent; day 31 of month 2 passes.
        let mut state = filled_valid_form();
        state.set_value(FieldId::Day, FieldValue::selection(31));
        state.set_value(FieldId::Month, FieldValue::selection(2));
        state.set_value(FieldId::Year, FieldValue::selection(2000));
        assert!(validate_all(&mut state));
    }

    #[test]
    fn test_visible_error_requires_touched() {
        let mut state = FormState::new();
        // Invalid but untouched: validate directly without touching.
        assert!(!validate_field(&mut state, FieldId::FullName));
        assert_eq!(state.error(FieldId::FullName), Some(FULL_NAME_REQUIRED));
        assert_eq!(visible_error(&state, FieldId::FullName), None);

        state.touch(FieldId::FullName);
        assert_eq!(
            visible_error(&state, FieldId::FullName),
            Some(FULL_NAME_REQUIRED)
        );
    }
}
