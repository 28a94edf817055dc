//! Login credentials and HTTP Basic encoding

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use std::fmt;

/// Email/password pair held only for the duration of a login attempt
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
  pub email: String,
  pub password: String,
}

impl Credentials {
  pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
    Self {
      email: email.into(),
      password: password.into(),
    }
  }

  /// Standard Base64 of `email:password`, padded.
  pub fn encode(&self) -> String {
    BASE64.encode(format!("{}:{}", self.email, self.password))
  }
}

impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credentials")
      .field("email", &self.email)
      .field("password", &"<redacted>")
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_encode_known_value() {
    let creds = Credentials::new("admin@example.com", "hunter2");
    assert_eq!(creds.encode(), "YWRtaW5AZXhhbXBsZS5jb206aHVudGVyMg==");
  }

  #[test]
  fn test_debug_redacts_password() {
    let creds = Credentials::new("a@b.c", "s3cret");
    let printed = format!("{:?}", creds);
    assert!(printed.contains("a@b.c"));
    assert!(!printed.contains("s3cret"));
  }
}
