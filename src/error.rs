//! Error types for the admin client core

use thiserror::Error;

/// Shown when the backend rejects a login or the request never completes.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials. Please try again.";
/// Shown when the backend accepts a login but the body has no usable token.
pub const UNEXPECTED_AUTH_RESPONSE: &str = "Unexpected response from the authentication server.";
/// Shown when the session token cannot be written to browser storage.
pub const SESSION_NOT_SAVED: &str = "Could not save your session. Please check your browser storage settings.";
pub const MISSING_UPLOAD_INPUT: &str = "Please provide both target directory and ZIP file.";
pub const FILE_READ_FAILED: &str = "Failed to read the file. Please try a different file.";
pub const UPLOAD_FAILED: &str = "Failed to upload the file. Please try again.";
pub const SESSION_EXPIRED: &str = "Your session has ended. Please log in again.";

/// Failure to get a response out of the backend at all.
#[derive(Debug, Error)]
pub enum TransportError {
  #[error("network error: {0}")]
  Network(String),
  #[error("failed to encode request body: {0}")]
  Encode(#[from] serde_json::Error),
}

/// Failure to access the persisted session slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
  #[error("browser storage is unavailable")]
  Unavailable,
  #[error("browser storage rejected the operation: {0}")]
  Rejected(String),
}

/// Failure to turn the selected file into a Base64 payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
  #[error("failed to read file: {0}")]
  Io(String),
  #[error("not a data URL: missing ',' separator")]
  MalformedDataUrl,
}

#[derive(Debug, Error)]
pub enum LoginError {
  #[error("authentication rejected with HTTP {0}")]
  Rejected(u16),
  #[error(transparent)]
  Transport(#[from] TransportError),
  #[error("malformed authentication response: {0}")]
  MalformedResponse(String),
  #[error("failed to persist session token: {0}")]
  Storage(#[from] StorageError),
}

impl LoginError {
  /// Text shown under the login form. Backend detail never reaches the user.
  pub fn user_message(&self) -> &'static str {
    match self {
      LoginError::Rejected(_) | LoginError::Transport(_) => INVALID_CREDENTIALS,
      LoginError::MalformedResponse(_) => UNEXPECTED_AUTH_RESPONSE,
      LoginError::Storage(_) => SESSION_NOT_SAVED,
    }
  }
}

#[derive(Debug, Error)]
pub enum UploadError {
  #[error("target directory and ZIP file are both required")]
  MissingInput,
  #[error("no session token is stored")]
  NotAuthenticated,
  #[error(transparent)]
  Read(#[from] ReadError),
  #[error("upload rejected with HTTP {status}: {body}")]
  Rejected { status: u16, body: String },
  #[error(transparent)]
  Transport(#[from] TransportError),
  #[error("upload response is not JSON: {0}")]
  MalformedResponse(String),
}

impl UploadError {
  pub fn user_message(&self) -> &'static str {
    match self {
      UploadError::MissingInput => MISSING_UPLOAD_INPUT,
      UploadError::NotAuthenticated => SESSION_EXPIRED,
      UploadError::Read(_) => FILE_READ_FAILED,
      UploadError::Rejected { .. } | UploadError::Transport(_) | UploadError::MalformedResponse(_) => {
        UPLOAD_FAILED
      }
    }
  }

  /// Whether the previously displayed response should be cleared.
  ///
  /// Only failures after the request was attempted do so; local validation
  /// and read errors leave the last response on screen.
  pub fn clears_response(&self) -> bool {
    matches!(
      self,
      UploadError::Rejected { .. } | UploadError::Transport(_) | UploadError::MalformedResponse(_)
    )
  }
}
