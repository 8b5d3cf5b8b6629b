//! Client module for the remote registration service

mod client;
mod payload;
mod traits;

pub use client::RegistrationClient;
pub use payload::SubmissionPayload;
pub use traits::{CreateUserApi, SubmitError};

#[cfg(test)]
pub use traits::MockCreateUserApi;
