//! regform - validation and submission engine for a user registration form
//!
//! The engine owns the field rule set, the composite date-of-birth field,
//! the form state, the submission state machine, and the notification that
//! reports the outcome. A UI shell renders what the engine exposes (values,
//! visible errors, touched flags, status, notification) and routes raw
//! input events back into it; the shell holds no logic of its own.

pub mod api;
pub mod config;
pub mod controller;
pub mod engine;
pub mod rules;
pub mod state;

pub use api::{CreateUserApi, RegistrationClient, SubmissionPayload, SubmitError};
pub use config::EngineConfig;
pub use controller::{FormEngine, FALLBACK_ERROR_MESSAGE};
pub use state::{
    FieldId, FieldValue, FieldView, FormState, Notification, RegistrationValues, Severity,
    SubmitStatus,
};
