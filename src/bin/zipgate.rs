use clap::Parser;
use std::path::PathBuf;
use tokio::sync::broadcast;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zipgate::server::{AdminHost, HostConfig};

#[derive(Parser)]
#[command(name = "zipgate", about = "Serve the zipgate admin panel", version)]
struct Args {
  #[arg(short, long)]
  config: Option<String>,
  #[arg(long)]
  host: Option<String>,
  #[arg(short, long)]
  port: Option<u16>,
  /// Directory containing the built WASM bundle
  #[arg(long)]
  dist: Option<PathBuf>,
  /// Base URL of the backend API the panel talks to
  #[arg(long, env = "ZIPGATE_API_URL")]
  api_url: Option<String>,
  #[arg(long)]
  log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
  let args = Args::parse();

  // Load config: explicit path > auto-detect > defaults
  let mut config = if let Some(path) = &args.config {
    HostConfig::from_file(path)?
  } else {
    HostConfig::find_and_load()?.unwrap_or_default()
  };

  // CLI args override config file
  if let Some(host) = args.host {
    config.server.host = host;
  }
  if let Some(port) = args.port {
    config.server.port = port;
  }
  if let Some(dist) = args.dist {
    config.server.dist_dir = dist;
  }
  if let Some(url) = args.api_url {
    config.client.api_url = url;
  }
  if let Some(level) = args.log_level {
    config.logging.level = level;
  }

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.level.clone().into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
  tokio::spawn(async move {
    shutdown_signal().await;
    let _ = shutdown_tx.send(());
  });

  AdminHost::new(config, shutdown_rx).run().await
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      tracing::error!("Failed to listen for Ctrl+C: {}", e);
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
      Ok(mut sig) => {
        sig.recv().await;
      }
      Err(e) => {
        tracing::error!("Failed to install SIGTERM handler: {}", e);
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    _ = ctrl_c => tracing::info!("Received SIGINT"),
    _ = terminate => tracing::info!("Received SIGTERM"),
  }
}
