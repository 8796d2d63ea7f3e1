//! Backend API Bindings
//!
//! Async HTTP wrappers over the Yello admin API and the Kakao OAuth
//! provider, organized by domain. Authenticated calls read the bearer
//! token from storage at call time.

pub mod auth;
pub mod question;
pub mod user;

use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::Envelope;
use crate::storage;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Transport(String),
    /// The response body did not match the expected shape
    #[error("malformed response: {0}")]
    Decode(String),
    /// Backend-reported business error (`{status, message}` envelope)
    #[error("{message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    /// Message surfaced to the operator, the server's own where available
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Attach the persisted bearer token, if any
fn with_bearer(req: RequestBuilder) -> RequestBuilder {
    match storage::access_token() {
        Some(token) => req.header("Authorization", &format!("Bearer {token}")),
        None => req,
    }
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Unwrap the `{status, message, data}` envelope, mapping non-success
/// responses to `ApiError::Server` carrying the server's message.
async fn read_envelope<T: DeserializeOwned>(resp: Response) -> Result<Envelope<T>, ApiError> {
    if resp.ok() {
        resp.json::<Envelope<T>>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    } else {
        let status = resp.status();
        let message = resp
            .text()
            .await
            .ok()
            .and_then(|body| serde_json::from_str::<serde_json::Value>(&body).ok())
            .and_then(|body| body.get("message").and_then(|m| m.as_str()).map(str::to_owned))
            .unwrap_or_else(|| format!("요청이 실패했습니다 (status {status})"));
        Err(ApiError::Server { status, message })
    }
}
