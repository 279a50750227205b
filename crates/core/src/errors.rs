//! Core error types for the Avanza session core.
//!
//! The state machine itself never fails: rejected transitions are no-ops.
//! These types cover the edges around it (configuration, decoding inbound
//! actions, validating onboarding answers and the external collaborators).

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the session core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Failed to decode action: {0}")]
    ActionDecode(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Collaborator call failed: {0}")]
    Advisor(#[from] AdvisorError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Applicant must be at least {min} years old, got {age}")]
    Underage { age: u32, min: u32 },

    #[error("Currency '{0}' is not supported")]
    UnsupportedCurrency(String),
}

/// Failures reported by the AI plan generator or the document analyzer.
///
/// These never reach the state machine: the advisor service turns them into
/// the deterministic fallback content before dispatching.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdvisorError {
    #[error("Collaborator is not configured")]
    Unavailable,

    #[error("Collaborator timed out after {0} seconds")]
    Timeout(u64),

    #[error("Collaborator returned an unusable response: {0}")]
    InvalidResponse(String),

    #[error("Collaborator request failed: {0}")]
    Request(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
