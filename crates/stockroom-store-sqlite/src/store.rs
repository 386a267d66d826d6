//! [`SqliteStore`] — the SQLite implementation of [`ItemStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use stockroom_core::{
  item::{Item, NewItem},
  store::ItemStore,
  validate::validate,
};

use crate::{Error, Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An inventory store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
///
/// Name filtering uses SQL `LIKE`, which SQLite evaluates
/// case-insensitively for ASCII. That is the documented match semantics
/// for the whole application; both front-ends rely on it.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

/// Map a `SELECT id, name, bought, sold` row, deriving `remaining`.
fn item_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Item> {
  let bought: i64 = row.get(2)?;
  let sold: i64 = row.get(3)?;
  Ok(Item {
    id: row.get(0)?,
    name: row.get(1)?,
    bought,
    sold,
    remaining: bought - sold,
  })
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── ItemStore impl ──────────────────────────────────────────────────────────

impl ItemStore for SqliteStore {
  type Error = Error;

  async fn list(&self, filter: Option<String>) -> Result<Vec<Item>> {
    let pattern = filter
      .filter(|f| !f.is_empty())
      .map(|f| format!("%{f}%"));

    let items: Vec<Item> = self
      .conn
      .call(move |conn| {
        let rows = if let Some(p) = pattern {
          let mut stmt = conn.prepare(
            "SELECT id, name, bought, sold FROM items
             WHERE name LIKE ?1 ORDER BY name",
          )?;
          stmt
            .query_map(rusqlite::params![p], item_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        } else {
          let mut stmt = conn
            .prepare("SELECT id, name, bought, sold FROM items ORDER BY name")?;
          stmt
            .query_map([], item_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        };
        Ok(rows)
      })
      .await?;

    Ok(items)
  }

  async fn get(&self, id: i64) -> Result<Option<Item>> {
    let item = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, name, bought, sold FROM items WHERE id = ?1",
              rusqlite::params![id],
              item_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    Ok(item)
  }

  async fn add(&self, input: NewItem) -> Result<Item> {
    validate(&input).map_err(stockroom_core::Error::from)?;

    let name = input.name.trim().to_owned();
    let stored = name.clone();
    let (bought, sold) = (input.bought, input.sold);

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO items (name, bought, sold) VALUES (?1, ?2, ?3)",
          rusqlite::params![name, bought, sold],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Item {
      id,
      name: stored,
      bought,
      sold,
      remaining: bought - sold,
    })
  }

  async fn update(&self, id: i64, input: NewItem) -> Result<Option<Item>> {
    validate(&input).map_err(stockroom_core::Error::from)?;

    let name = input.name.trim().to_owned();
    let stored = name.clone();
    let (bought, sold) = (input.bought, input.sold);

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE items SET name = ?1, bought = ?2, sold = ?3 WHERE id = ?4",
          rusqlite::params![name, bought, sold, id],
        )?)
      })
      .await?;

    if changed == 0 {
      return Ok(None);
    }

    Ok(Some(Item {
      id,
      name: stored,
      bought,
      sold,
      remaining: bought - sold,
    }))
  }

  async fn delete(&self, id: i64) -> Result<bool> {
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM items WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;

    Ok(changed > 0)
  }
}
