//! HTTP client for the registration service
//!
//! Posts the submission payload as JSON to the create-user endpoint and
//! interprets the service's `{"description": ...}` response envelope.

use async_trait::async_trait;
use serde::Deserialize;

use super::payload::SubmissionPayload;
use super::traits::{CreateUserApi, SubmitError};
use crate::config::EngineConfig;

/// Default create-user endpoint
const DEFAULT_ENDPOINT: &str = "https://fullstack-test-navy.vercel.app/api/users/create";

/// Response envelope returned by the registration service
#[derive(Debug, Deserialize)]
struct ResponseEnvelope {
    description: Option<String>,
}

/// Client for the remote registration service
pub struct RegistrationClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RegistrationClient {
    /// Create a new client
    ///
    /// The endpoint comes from the config when set, then the
    /// `REGFORM_ENDPOINT` environment variable, then the built-in default.
    pub fn new(config: &EngineConfig) -> Self {
        let endpoint = config
            .endpoint
            .clone()
            .or_else(|| std::env::var("REGFORM_ENDPOINT").ok())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    /// The endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CreateUserApi for RegistrationClient {
    async fn create_user(&self, payload: &SubmissionPayload) -> Result<String, SubmitError> {
        tracing::debug!("posting registration to {}", self.endpoint);
        let response = self.http.post(&self.endpoint).json(payload).send().await?;
        let status = response.status();
        if status.is_success() {
            let body: ResponseEnvelope = response.json().await?;
            Ok(body.description.unwrap_or_default())
        } else {
            tracing::warn!("registration service rejected the submission: {status}");
            let description = response
                .json::<ResponseEnvelope>()
                .await
                .ok()
                .and_then(|body| body.description);
            Err(SubmitError::Rejected { description })
        }
    }
}
