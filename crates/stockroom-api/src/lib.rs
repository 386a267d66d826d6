//! JSON REST API for Stockroom — the web front-end surface.
//!
//! Exposes an axum [`Router`] backed by any
//! [`stockroom_core::store::ItemStore`]. The form-based view is a thin
//! consumer of these routes; TLS and transport concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", stockroom_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod export;
pub mod items;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, put},
};
use serde::Deserialize;
use stockroom_core::store::ItemStore;

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

fn default_host() -> String {
  "127.0.0.1".to_string()
}

fn default_port() -> u16 {
  8080
}

fn default_store_path() -> PathBuf {
  PathBuf::from("inventory.db")
}

/// Runtime server configuration, deserialised from `stockroom.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ItemStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/items", get(items::list::<S>).post(items::create::<S>))
    .route(
      "/items/{id}",
      put(items::update_one::<S>).delete(items::delete_one::<S>),
    )
    .route("/export.csv", get(export::handler::<S>))
    .with_state(store)
}
