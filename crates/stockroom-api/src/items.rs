//! Handlers for `/items` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/items` | Optional `?q=<substring>` name filter |
//! | `POST`   | `/items` | Body: [`ItemBody`]; returns 201 + stored item |
//! | `PUT`    | `/items/:id` | Body: [`ItemBody`]; 404 if not found |
//! | `DELETE` | `/items/:id` | 204 on success; 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use stockroom_core::{
  item::{Item, NewItem},
  store::ItemStore,
  validate::validate,
};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  /// Substring filter applied to item names (case-insensitive for ASCII).
  pub q: Option<String>,
}

/// `GET /items[?q=<substring>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Item>>, ApiError>
where
  S: ItemStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let items = store.list(params.q).await.map_err(ApiError::store)?;
  Ok(Json(items))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /items` and `PUT /items/:id`.
#[derive(Debug, Deserialize)]
pub struct ItemBody {
  pub name:   String,
  pub bought: i64,
  pub sold:   i64,
}

impl From<ItemBody> for NewItem {
  fn from(b: ItemBody) -> Self {
    NewItem {
      name:   b.name,
      bought: b.bought,
      sold:   b.sold,
    }
  }
}

/// `POST /items` — returns 201 + the stored [`Item`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<ItemBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ItemStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let input = NewItem::from(body);
  validate(&input).map_err(|e| ApiError::BadRequest(e.to_string()))?;

  let item = store.add(input).await.map_err(ApiError::store)?;
  Ok((StatusCode::CREATED, Json(item)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /items/:id` — overwrites all fields; 404 when the id is unknown.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<ItemBody>,
) -> Result<Json<Item>, ApiError>
where
  S: ItemStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let input = NewItem::from(body);
  validate(&input).map_err(|e| ApiError::BadRequest(e.to_string()))?;

  let item = store
    .update(id, input)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("item {id} not found")))?;
  Ok(Json(item))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /items/:id` — 204 on success; 404 when the id is unknown.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: ItemStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let deleted = store.delete(id).await.map_err(ApiError::store)?;
  if !deleted {
    return Err(ApiError::NotFound(format!("item {id} not found")));
  }
  Ok(StatusCode::NO_CONTENT)
}
