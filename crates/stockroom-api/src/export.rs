//! Handler for `GET /export.csv` — the current view as a CSV download.

use std::sync::Arc;

use axum::{
  extract::{Query, State},
  http::{StatusCode, header},
  response::IntoResponse,
};
use stockroom_core::{export::csv_string, store::ItemStore};

use crate::{error::ApiError, items::ListParams};

/// `GET /export.csv[?q=<substring>]`
///
/// Exports the same (filtered) view as `GET /items`: header row
/// `ID,Name,Bought,Sold,Remaining` plus one line per item.
pub async fn handler<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ItemStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let items = store.list(params.q).await.map_err(ApiError::store)?;
  let body = csv_string(&items).map_err(ApiError::store)?;

  Ok((
    StatusCode::OK,
    [
      (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
      (
        header::CONTENT_DISPOSITION,
        "attachment; filename=\"vendor_inventory.csv\"",
      ),
    ],
    body,
  ))
}
