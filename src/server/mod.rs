//! Static host for the compiled admin bundle

mod config;

pub use config::{HostConfig, LoggingSection, ServerSection};

use axum::{
  extract::State,
  http::{HeaderValue, StatusCode},
  routing::get,
  Json, Router,
};
use tokio::sync::broadcast;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::config::{ClientConfig, RUNTIME_CONFIG_PATH};

/// Serves the WASM admin panel and its runtime configuration
pub struct AdminHost {
  config: HostConfig,
  shutdown_rx: broadcast::Receiver<()>,
}

impl AdminHost {
  pub fn new(config: HostConfig, shutdown_rx: broadcast::Receiver<()>) -> Self {
    Self { config, shutdown_rx }
  }

  pub async fn run(mut self) -> Result<(), anyhow::Error> {
    let addr = self.config.address();
    if !self.config.server.dist_dir.join("index.html").exists() {
      tracing::warn!(
        "No index.html in {}, client routes will 404 until the bundle is built",
        self.config.server.dist_dir.display()
      );
    }

    let app = router(&self.config);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Admin UI at http://{}", addr);
    if self.config.client.api_url.is_empty() {
      tracing::info!("Backend API: same origin");
    } else {
      tracing::info!("Backend API: {}", self.config.client.api_url);
    }

    axum::serve(listener, app.into_make_service())
      .with_graceful_shutdown(async move {
        let _ = self.shutdown_rx.recv().await;
        tracing::info!("Admin host shutting down");
      })
      .await?;
    Ok(())
  }
}

/// Build the host router: health probe, runtime config, then the bundle with
/// an `index.html` fallback so client routes like `/admin` deep-link.
pub fn router(config: &HostConfig) -> Router {
  let cors = if config.permissive_cors() {
    CorsLayer::permissive()
  } else {
    let origins: Vec<HeaderValue> = config
      .server
      .cors_origins
      .iter()
      .filter_map(|o| o.parse().ok())
      .collect();
    CorsLayer::new()
      .allow_origin(origins)
      .allow_methods(Any)
      .allow_headers(Any)
  };

  let dist = &config.server.dist_dir;
  Router::new()
    .route("/health", get(health_check))
    .route(RUNTIME_CONFIG_PATH, get(runtime_config))
    .fallback_service(ServeDir::new(dist).fallback(ServeFile::new(dist.join("index.html"))))
    .layer(cors)
    .with_state(config.client.clone())
}

async fn health_check() -> StatusCode {
  StatusCode::OK
}

async fn runtime_config(State(client): State<ClientConfig>) -> Json<ClientConfig> {
  Json(client)
}
