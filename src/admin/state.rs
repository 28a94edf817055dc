//! Global state for the admin UI

use leptos::*;

use crate::admin::apiclient::GlooTransport;
use crate::api::ApiClient;
use crate::config::ClientConfig;

/// Shared through context by `App`
#[derive(Clone, Copy)]
pub struct AppState {
  pub config: RwSignal<ClientConfig>,
}

impl AppState {
  pub fn new(config: ClientConfig) -> Self {
    Self {
      config: create_rw_signal(config),
    }
  }

  /// API client for the configured backend
  pub fn api(&self) -> ApiClient<GlooTransport> {
    ApiClient::new(self.config.with_untracked(|c| c.api_url.clone()), GlooTransport)
  }
}
