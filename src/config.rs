//! Client configuration: where the backend API lives

use serde::{Deserialize, Serialize};

/// Path at which the static host publishes runtime client configuration
pub const RUNTIME_CONFIG_PATH: &str = "/env.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
  /// Base URL of the backend API. Empty means same origin.
  #[serde(default)]
  pub api_url: String,
}

impl ClientConfig {
  pub fn new(api_url: impl Into<String>) -> Self {
    Self { api_url: api_url.into() }
  }

  /// Value baked in at compile time via `ZIPGATE_API_URL`.
  pub fn from_build_env() -> Self {
    Self::new(option_env!("ZIPGATE_API_URL").unwrap_or_default())
  }

  /// Prefer a non-empty runtime value over this one.
  pub fn overlay(self, runtime: Option<ClientConfig>) -> Self {
    match runtime {
      Some(rt) if !rt.api_url.trim().is_empty() => rt,
      _ => self,
    }
  }
}
