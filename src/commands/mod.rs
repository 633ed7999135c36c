//! Backend HTTP Bindings
//!
//! Frontend bindings to the backend endpoints, organized by domain.

mod bmi;
mod plan;
mod visualization;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::endpoint;
use crate::error::ApiError;

// Re-export all public items
pub use bmi::*;
pub use plan::*;
pub use visualization::*;

/// Every endpoint answers either with its payload or with `{"error": "..."}`
#[derive(Deserialize)]
#[serde(untagged)]
enum Reply<T> {
    Failure { error: String },
    Success(T),
}

/// Decode a response body. The HTTP status is not consulted: error replies
/// come with 4xx/5xx codes but still carry a JSON body.
pub fn decode_reply<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    match serde_json::from_str::<Reply<T>>(body)? {
        Reply::Failure { error } => Err(ApiError::Remote(error)),
        Reply::Success(payload) => Ok(payload),
    }
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&endpoint(path)).send().await?;
    let body = response.text().await?;
    decode_reply(&body)
}

async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, args: &B) -> Result<T, ApiError> {
    let response = Request::post(&endpoint(path)).json(args)?.send().await?;
    let body = response.text().await?;
    decode_reply(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BmiResponse;

    #[test]
    fn test_decode_success() {
        let reply: BmiResponse = decode_reply(r#"{"bmi": 22.9}"#).unwrap();
        assert_eq!(reply.bmi, 22.9);
    }

    #[test]
    fn test_decode_error_field() {
        let err = decode_reply::<BmiResponse>(r#"{"error": "Weight and height must be positive values"}"#)
            .unwrap_err();
        assert_eq!(err, ApiError::Remote("Weight and height must be positive values".into()));
    }

    #[test]
    fn test_decode_malformed_body_is_transport_error() {
        let err = decode_reply::<BmiResponse>("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));

        let err = decode_reply::<BmiResponse>(r#"{"value": 1}"#).unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
