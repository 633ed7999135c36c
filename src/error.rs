//! Error Types
//!
//! Everything here ends up as text in the shared error modal.

use thiserror::Error;

/// Local form validation failure. No request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid age.")]
    InvalidAge,

    #[error("Please enter a valid weight.")]
    InvalidWeight,

    #[error("Please enter a valid height.")]
    InvalidHeight,
}

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Network failure or an unreadable body
    #[error("{0}")]
    Transport(String),

    /// The backend answered with an `error` field
    #[error("{0}")]
    Remote(String),
}

impl ApiError {
    /// Modal text; transport failures are prefixed with what was being attempted
    pub fn describe(&self, prefix: &str) -> String {
        match self {
            ApiError::Transport(detail) => format!("{}: {}", prefix, detail),
            ApiError::Remote(message) => message.clone(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
