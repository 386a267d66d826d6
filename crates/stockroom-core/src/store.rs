//! The `ItemStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `stockroom-store-sqlite`). The front-ends (`stockroom-api`,
//! `stockroom-cli`) depend on this abstraction, not on any concrete
//! backend.

use std::future::Future;

use crate::item::{Item, NewItem};

/// Abstraction over an inventory store backend.
///
/// Mutations are single-row; atomicity beyond one row is not provided and
/// callers observe changes by re-fetching. Every read path populates the
/// derived `remaining` field.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ItemStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// List items ordered by name, each carrying its computed `remaining`.
  ///
  /// With a filter, only items whose name contains it as a substring are
  /// returned (case-insensitive for ASCII); `None` or an empty string
  /// return everything.
  fn list(
    &self,
    filter: Option<String>,
  ) -> impl Future<Output = Result<Vec<Item>, Self::Error>> + Send + '_;

  /// Retrieve a single item by id. Returns `None` if not found.
  fn get(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Item>, Self::Error>> + Send + '_;

  /// Validate and insert a new item, returning the persisted row with its
  /// store-assigned id. No row is written when validation fails.
  fn add(
    &self,
    input: NewItem,
  ) -> impl Future<Output = Result<Item, Self::Error>> + Send + '_;

  /// Validate and overwrite all fields of an existing item.
  ///
  /// Returns `Ok(None)` — never a silent no-op — when the id does not
  /// exist; the updated row otherwise.
  fn update(
    &self,
    id: i64,
    input: NewItem,
  ) -> impl Future<Output = Result<Option<Item>, Self::Error>> + Send + '_;

  /// Remove an item. Returns `false` when the id does not exist. Deleted
  /// ids are not reused.
  fn delete(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
