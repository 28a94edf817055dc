//! Persisted session slot

use crate::error::StorageError;

/// Storage key holding the session token
pub const TOKEN_KEY: &str = "token";

/// Accessor for the single persisted session token.
///
/// Implementations do not validate the token; the backend owns its meaning.
pub trait TokenStore {
  fn get(&self) -> Result<Option<String>, StorageError>;
  fn set(&self, token: &str) -> Result<(), StorageError>;
  fn clear(&self) -> Result<(), StorageError>;
}

/// Read the stored token, treating storage failures and empty values as absent.
pub fn current_token<S: TokenStore + ?Sized>(store: &S) -> Option<String> {
  match store.get() {
    Ok(Some(token)) if !token.is_empty() => Some(token),
    Ok(_) => None,
    Err(e) => {
      tracing::warn!(error = %e, "session storage unavailable, treating as logged out");
      None
    }
  }
}
