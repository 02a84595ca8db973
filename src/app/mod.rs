//! Application setup and runtime.

use crate::{db, http};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Process configuration, read once at startup and injected everywhere.
#[derive(Debug, Clone)]
pub struct Config {
  /// sqlx database URL, e.g. `sqlite://mailbin.db`.
  pub db_url: String,
  /// Listen address for the HTTP server.
  pub http_addr: String,
  /// Directory attachment bytes are written to and served from.
  pub upload_dir: PathBuf,
  /// Directory of static assets served under `/static`.
  pub static_dir: PathBuf,
  /// Cloudflare API token; absent degrades domain discovery to the fallback.
  pub cf_api_token: Option<String>,
  /// Cloudflare account id; absent degrades domain discovery to the fallback.
  pub cf_account_id: Option<String>,
  /// Domain returned when the provider is unavailable or unconfigured.
  pub fallback_domain: String,
  /// Shared secret the mail worker must send as `X-Webhook-Token`. Unset
  /// leaves the webhook open.
  pub webhook_token: Option<String>,
}

impl Config {
  /// Build configuration from environment variables, defaulting everything.
  pub fn from_env() -> Self {
    let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
    Config {
      db_url: var("MAILBIN_DATABASE").unwrap_or_else(|| "sqlite://mailbin.db".to_string()),
      http_addr: var("MAILBIN_ADDR").unwrap_or_else(|| "127.0.0.1:8080".to_string()),
      upload_dir: PathBuf::from(var("MAILBIN_UPLOAD_DIR").unwrap_or_else(|| "attachments".to_string())),
      static_dir: PathBuf::from(var("MAILBIN_STATIC_DIR").unwrap_or_else(|| "static".to_string())),
      cf_api_token: var("CF_API_TOKEN"),
      cf_account_id: var("CF_ACCOUNT_ID"),
      fallback_domain: var("MAILBIN_FALLBACK_DOMAIN").unwrap_or_else(|| "yasir.id".to_string()),
      webhook_token: var("MAILBIN_WEBHOOK_TOKEN"),
    }
  }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
  pub db: sqlx::SqlitePool,
  pub config: Arc<Config>,
}

/// Start the HTTP server with configured environment.
pub async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
  crate::util::init_tracing();

  let config = Arc::new(Config::from_env());

  let pool = db::connect(&config.db_url).await?;
  db::run_migrations(&pool).await?;

  std::fs::create_dir_all(&config.upload_dir)?;

  let state = AppState {
    db: pool,
    config: config.clone(),
  };

  let app = http::build_router(state);

  let addr: SocketAddr = config.http_addr.parse()?;

  info!("mailbin inbox ui:   http://{}/", addr);
  info!("webhook endpoint:   POST http://{}/webhook", addr);
  info!("inbox api:          GET  http://{}/api/inbox/{{address}}", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;
  Ok(())
}
