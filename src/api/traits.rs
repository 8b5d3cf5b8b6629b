//! Trait abstraction for the registration service client to enable mocking in tests

use async_trait::async_trait;
use thiserror::Error;

use super::payload::SubmissionPayload;

/// Failure modes of a create-user call
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The request never produced a usable server response
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a rejection
    #[error("submission rejected by the registration service")]
    Rejected {
        /// Server-supplied reason, when the response carried one
        description: Option<String>,
    },
}

/// Trait for registration service operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreateUserApi: Send + Sync {
    /// Create a user account from a submitted registration form
    ///
    /// Returns the server's `description` message on success.
    async fn create_user(&self, payload: &SubmissionPayload) -> Result<String, SubmitError>;
}
