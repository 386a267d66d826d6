//! Item — the sole entity of the inventory store.

use serde::{Deserialize, Serialize};

/// One inventory record, as returned by a store's read path.
///
/// `remaining` is derived (`bought - sold`) and never persisted; the store
/// populates it on every fetch so all consumers — table views, API
/// responses, CSV export — observe the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
  pub id:        i64,
  pub name:      String,
  pub bought:    i64,
  pub sold:      i64,
  pub remaining: i64,
}

/// Write-side input for `add` and `update`. The store assigns the id on
/// insert; on update the id is fixed and all three fields are replaced
/// wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
  pub name:   String,
  pub bought: i64,
  pub sold:   i64,
}

impl NewItem {
  pub fn new(name: impl Into<String>, bought: i64, sold: i64) -> Self {
    Self {
      name: name.into(),
      bought,
      sold,
    }
  }
}
