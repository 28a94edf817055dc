//! HTTP transport seam between the client core and the browser

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::TransportError;

/// Authorization header carried by a request
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Authorization {
  /// Already Base64-encoded `email:password`
  Basic(String),
  Bearer(String),
}

impl Authorization {
  pub fn header_value(&self) -> String {
    match self {
      Authorization::Basic(encoded) => format!("Basic {}", encoded),
      Authorization::Bearer(token) => format!("Bearer {}", token),
    }
  }
}

/// A POST request. A `json` body implies `Content-Type: application/json`;
/// `None` sends an empty body.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
  pub url: String,
  pub authorization: Authorization,
  pub json: Option<serde_json::Value>,
}

/// Status and raw body text of a completed request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
  pub status: u16,
  pub body: String,
}

impl ApiResponse {
  pub fn new(status: u16, body: impl Into<String>) -> Self {
    Self {
      status,
      body: body.into(),
    }
  }

  pub fn ok(&self) -> bool {
    (200..300).contains(&self.status)
  }

  pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
    serde_json::from_str(&self.body)
  }
}

/// Sends requests to the backend.
///
/// Non-2xx statuses are returned as responses, not errors; only failures to
/// obtain a response at all surface as `TransportError`.
#[async_trait(?Send)]
pub trait ApiTransport {
  async fn post(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}
