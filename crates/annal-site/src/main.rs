//! annal-site server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`) plus
//! `ANNAL_*` environment variables and serves the timeline over HTTP.
//! The server starts with or without subscriber credentials; without them
//! the subscription endpoints answer with a configuration error.

use std::{path::PathBuf, sync::Arc};

use annal_sheets::SheetsStore;
use annal_site::{AppState, ServerConfig};
use anyhow::Context as _;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Annal timeline server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("ANNAL"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Connect the subscriber backend if credentials are configured.
  let store = match server_cfg.sheets_config() {
    Some(sheets) => {
      let store =
        SheetsStore::new(sheets).context("failed to build sheets client")?;
      Some(Arc::new(store))
    }
    None => {
      let flags = server_cfg.credential_flags();
      tracing::warn!(?flags, "subscriber credentials incomplete; subscriptions disabled");
      None
    }
  };

  // Build application state.
  let state = AppState {
    store,
    config: Arc::new(server_cfg.clone()),
  };

  let app = annal_site::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
