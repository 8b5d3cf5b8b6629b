//! Submission controller
//!
//! Orchestrates one submission attempt: gate on whole-form validation,
//! project the payload, call the registration service, and map the outcome
//! onto the form state and notification.

use std::time::Duration;

use crate::api::{CreateUserApi, RegistrationClient, SubmissionPayload, SubmitError};
use crate::config::EngineConfig;
use crate::engine;
use crate::state::{FieldId, FieldValue, FieldView, FormState, Notification, SubmitStatus};

/// Message shown when the service response carries no description
pub const FALLBACK_ERROR_MESSAGE: &str = "Registration failed. Please try again.";

/// One registration form instance: state, rules, and the service client
///
/// The UI shell renders what the accessors expose and routes raw input
/// through [`FormEngine::set_value`]; all validation and submission logic
/// lives here.
pub struct FormEngine<C: CreateUserApi> {
    state: FormState,
    api: C,
    notification: Option<Notification>,
    clear_delay: Duration,
}

impl FormEngine<RegistrationClient> {
    /// Create an engine backed by the HTTP registration client
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_client(RegistrationClient::new(config), config)
    }
}

impl<C: CreateUserApi> FormEngine<C> {
    /// Create an engine with a specific service client
    pub fn with_client(api: C, config: &EngineConfig) -> Self {
        Self {
            state: FormState::new(),
            api,
            notification: None,
            clear_delay: config.clear_delay(),
        }
    }

    /// Update a field from the UI shell and re-validate that field only
    pub fn set_value(&mut self, field: FieldId, value: FieldValue) {
        self.state.set_value(field, value);
        engine::validate_field(&mut self.state, field);
    }

    /// Current submission status
    pub fn status(&self) -> SubmitStatus {
        self.state.status
    }

    /// Current notification, if one is showing
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Read access to the underlying form state
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Snapshot of one field for rendering
    pub fn field_view(&self, field: FieldId) -> FieldView<'_> {
        FieldView {
            field,
            label: field.label(),
            value: self.state.values().get(field),
            touched: self.state.is_touched(field),
            error: engine::visible_error(&self.state, field),
        }
    }

    /// Run one submission attempt
    ///
    /// An invalid form never reaches the network; a submit issued while a
    /// request is in flight is ignored. Returns the terminal status of the
    /// attempt.
    pub async fn submit(&mut self) -> SubmitStatus {
        if self.state.status == SubmitStatus::Submitting {
            tracing::debug!("submit ignored: a request is already in flight");
            return SubmitStatus::Submitting;
        }

        // A new attempt supersedes whatever message is still showing and
        // any terminal status left from the previous one.
        self.notification = None;
        self.state.status = SubmitStatus::Idle;

        if !engine::validate_all(&mut self.state) {
            tracing::debug!("submit blocked: form has validation errors");
            return SubmitStatus::Idle;
        }

        let Some(payload) = SubmissionPayload::from_values(self.state.values()) else {
            // validate_all guarantees a complete date selection
            return SubmitStatus::Idle;
        };

        self.state.status = SubmitStatus::Submitting;
        match self.api.create_user(&payload).await {
            Ok(description) => {
                tracing::info!("registration accepted");
                self.state.reset();
                self.state.status = SubmitStatus::Succeeded;
                self.notification = Some(Notification::success(description, self.clear_delay));
                SubmitStatus::Succeeded
            }
            Err(err) => {
                tracing::warn!("registration failed: {err}");
                let message = match err {
                    SubmitError::Rejected {
                        description: Some(description),
                    } => description,
                    _ => FALLBACK_ERROR_MESSAGE.to_string(),
                };
                self.notification = Some(Notification::error(message));
                // The attempt is over; values stay for correction and an
                // immediate retry is never blocked.
                self.state.status = SubmitStatus::Idle;
                SubmitStatus::Failed
            }
        }
    }

    /// Drop an expired notification
    ///
    /// Call from the host's event loop. Once a success notification clears,
    /// the engine returns to idle.
    pub fn tick(&mut self) {
        if self.notification.as_ref().is_some_and(|n| n.is_expired()) {
            self.notification = None;
            if self.state.status == SubmitStatus::Succeeded {
                self.state.status = SubmitStatus::Idle;
            }
        }
    }

    /// User-initiated reset: restore defaults and drop any notification
    pub fn reset(&mut self) {
        self.state.reset();
        self.notification = None;
    }
}
