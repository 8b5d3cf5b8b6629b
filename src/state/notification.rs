//! Transient submission-outcome notifications

use std::time::{Duration, Instant};

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A transient user-facing message reporting the submission outcome
///
/// Success notifications record a clearance deadline; error notifications
/// stay until the next submit attempt or an explicit reset.
#[derive(Debug, Clone)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
    expires_at: Option<Instant>,
}

impl Notification {
    /// Success message that clears itself after `ttl`
    pub fn success(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
            expires_at: Some(Instant::now() + ttl),
        }
    }

    /// Error message with no clearance deadline
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            expires_at: None,
        }
    }

    /// Whether the clearance deadline has passed
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Instant::now() >= at)
    }
}
