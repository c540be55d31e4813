//! Reqwest-backed careers API client.
//!
//! Owns transport details only: URL building, the JSON content type, timeout
//! and the mapping of failures onto [`ApiError`].

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::{ApiError, Operation, UserApi};
use crate::model::{Draft, User};

/// Blocking HTTP client for one careers backend.
#[derive(Debug, Clone)]
pub struct HttpUserApi {
    client: Client,
    base_url: String,
}

impl HttpUserApi {
    /// Build a client for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn execute<T: DeserializeOwned>(
        &self,
        op: Operation,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().map_err(|error| {
            warn!(?op, %error, "request failed before a response arrived");
            op.error()
        })?;

        let status = response.status();
        let body = response.bytes().map_err(|error| {
            warn!(?op, %status, %error, "failed to read response body");
            op.error()
        })?;
        if !status.is_success() {
            return Err(status_error(op, status, body.as_ref()));
        }

        debug!(?op, %status, bytes = body.len(), "request succeeded");
        serde_json::from_slice(body.as_ref()).map_err(|error| {
            warn!(?op, %error, "response body did not decode");
            op.error()
        })
    }
}

impl UserApi for HttpUserApi {
    fn create_user(&self, draft: &Draft) -> Result<User, ApiError> {
        let request = self.client.post(self.url("/users")).json(draft);
        self.execute(Operation::CreateUser, request)
    }

    fn get_users(&self) -> Result<Vec<User>, ApiError> {
        let request = self.client.get(self.url("/users"));
        self.execute(Operation::GetUsers, request)
    }

    fn get_user_by_id(&self, id: i64) -> Result<User, ApiError> {
        let request = self.client.get(self.url(&format!("/users/{id}")));
        self.execute(Operation::GetUser, request)
    }
}

fn status_error(op: Operation, status: StatusCode, body: &[u8]) -> ApiError {
    let message = server_message(body);
    warn!(?op, %status, server_message = message.as_deref(), "request rejected");
    message.map_or_else(|| op.error(), ApiError::new)
}

/// The `message` field of an error body. Validation errors from some backends
/// carry a list of messages, which are joined.
fn server_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    let message = match value.get("message")? {
        Value::String(s) => s.trim().to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        _ => return None,
    };
    if message.is_empty() { None } else { Some(message) }
}
