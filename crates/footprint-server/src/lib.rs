//! HTTP layer for the footprint service.
//!
//! Exposes an axum [`Router`] serving the JSON API under `/api`, backed by any
//! [`FootprintStore`].

pub mod auth;
pub mod error;
pub mod handlers;

pub use error::ApiError;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  http::{HeaderValue, Method, header},
  routing::{get, post},
};
use footprint_core::{auth::CredentialAuthority, store::FootprintStore};
use serde::Deserialize;
use tower_http::{
  cors::{AllowOrigin, CorsLayer},
  trace::TraceLayer,
};

use handlers::{accounts, calculate, contact, history};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `FOOTPRINT_*` environment variables.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:            String,
  #[serde(default = "default_port")]
  pub port:            u16,
  #[serde(default = "default_store_path")]
  pub store_path:      PathBuf,
  /// HS256 signing secret for bearer tokens. Required.
  pub jwt_secret:      String,
  /// Origins allowed to call the API from a browser.
  #[serde(default)]
  pub allowed_origins: Vec<String>,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 5000 }

fn default_store_path() -> PathBuf { PathBuf::from("footprint.db") }

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: FootprintStore> {
  pub store:     Arc<S>,
  pub authority: Arc<CredentialAuthority>,
  pub config:    Arc<ServerConfig>,
}

impl<S: FootprintStore> AppState<S> {
  pub fn new(store: S, config: ServerConfig) -> footprint_core::Result<Self> {
    let authority = CredentialAuthority::new(&config.jwt_secret)?;
    Ok(Self {
      store:     Arc::new(store),
      authority: Arc::new(authority),
      config:    Arc::new(config),
    })
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: FootprintStore + Clone + 'static,
{
  let cors = cors_layer(&state.config.allowed_origins);

  Router::new()
    .route("/health",        get(|| async { "ok" }))
    .route("/api/register",  post(accounts::register::<S>))
    .route("/api/login",     post(accounts::login::<S>))
    .route("/api/calculate", post(calculate::handler::<S>))
    .route("/api/history",   get(history::handler::<S>))
    .route("/api/contact",   post(contact::handler::<S>))
    .layer(cors)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
  let origins: Vec<HeaderValue> = origins
    .iter()
    .filter_map(|o| match HeaderValue::from_str(o) {
      Ok(v) => Some(v),
      Err(_) => {
        tracing::warn!(origin = %o, "ignoring invalid CORS origin");
        None
      }
    })
    .collect();

  CorsLayer::new()
    .allow_origin(AllowOrigin::list(origins))
    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
    .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

// ─── Integration tests ────────────────────────────────────────────────────────
