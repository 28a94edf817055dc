//! Backend API client: endpoint layout and request/response shapes

use serde::{Deserialize, Serialize};

use crate::credentials::Credentials;
use crate::error::TransportError;
use crate::transport::{ApiRequest, ApiResponse, ApiTransport, Authorization};

pub const LOGIN_PATH: &str = "/auth/login";
pub const UPLOAD_PATH: &str = "/upload";

/// Body of a successful login
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
  pub access_token: String,
}

/// Body of an upload call
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
  pub target_dir: String,
  /// Raw Base64 payload, without any data-URL prefix
  pub zip_file: String,
}

pub struct ApiClient<T> {
  base_url: String,
  transport: T,
}

impl<T: ApiTransport> ApiClient<T> {
  /// An empty `base_url` produces same-origin relative URLs.
  pub fn new(base_url: impl Into<String>, transport: T) -> Self {
    let base_url = base_url.into().trim_end_matches('/').to_string();
    Self { base_url, transport }
  }

  pub fn endpoint(&self, path: &str) -> String {
    format!("{}{}", self.base_url, path)
  }

  pub fn transport(&self) -> &T {
    &self.transport
  }

  /// `POST /auth/login` with Basic credentials and no body
  pub async fn login(&self, credentials: &Credentials) -> Result<ApiResponse, TransportError> {
    let request = ApiRequest {
      url: self.endpoint(LOGIN_PATH),
      authorization: Authorization::Basic(credentials.encode()),
      json: None,
    };
    tracing::debug!(url = %request.url, email = %credentials.email, "sending login request");
    self.transport.post(request).await
  }

  /// `POST /upload` with a Bearer token and a JSON body
  pub async fn upload(&self, token: &str, body: &UploadRequest) -> Result<ApiResponse, TransportError> {
    let request = ApiRequest {
      url: self.endpoint(UPLOAD_PATH),
      authorization: Authorization::Bearer(token.to_string()),
      json: Some(serde_json::to_value(body)?),
    };
    tracing::debug!(
      url = %request.url,
      target_dir = %body.target_dir,
      payload_len = body.zip_file.len(),
      "sending upload request"
    );
    self.transport.post(request).await
  }
}
