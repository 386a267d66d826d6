//! Application state machine and event dispatcher.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use stockroom_core::{
  export::write_csv,
  item::Item,
  store::ItemStore,
  validate::validate,
};
use stockroom_store_sqlite::SqliteStore;

use crate::form::ItemForm;

/// File the `e` key exports the current view to.
pub const EXPORT_PATH: &str = "vendor_inventory.csv";

// ─── Mode ─────────────────────────────────────────────────────────────────────

/// Input mode — determines where keystrokes go.
#[derive(Debug, Clone)]
pub enum Mode {
  /// Table navigation.
  Normal,
  /// Typing into the name filter; every keystroke re-queries the store.
  Filter,
  /// The add/edit dialog is open.
  Form(ItemForm),
  /// Waiting for `y` to confirm deletion of the named item.
  ConfirmDelete { id: i64, name: String },
}

// ─── Sorting ──────────────────────────────────────────────────────────────────

/// Table column, selectable for sorting with keys `1`–`5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
  Id,
  Name,
  Bought,
  Sold,
  Remaining,
}

impl SortColumn {
  fn from_key(c: char) -> Option<Self> {
    match c {
      '1' => Some(SortColumn::Id),
      '2' => Some(SortColumn::Name),
      '3' => Some(SortColumn::Bought),
      '4' => Some(SortColumn::Sold),
      '5' => Some(SortColumn::Remaining),
      _ => None,
    }
  }
}

/// Order the view by `column`, ascending or descending.
fn sort_items(items: &mut [Item], column: SortColumn, ascending: bool) {
  items.sort_by(|a, b| {
    let ord = match column {
      SortColumn::Id => a.id.cmp(&b.id),
      SortColumn::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
      SortColumn::Bought => a.bought.cmp(&b.bought),
      SortColumn::Sold => a.sold.cmp(&b.sold),
      SortColumn::Remaining => a.remaining.cmp(&b.remaining),
    };
    if ascending { ord } else { ord.reverse() }
  });
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  /// Current input mode.
  pub mode: Mode,

  /// The current view, fetched fresh from the store after every mutation.
  pub items: Vec<Item>,

  /// Cursor position within `items`.
  pub cursor: usize,

  /// Current name filter (substring, matched by the store).
  pub filter: String,

  /// Active sort, if any. `None` means the store's order (by name).
  /// The same key pressed again flips the direction.
  pub sort: Option<(SortColumn, bool)>,

  /// One-line status message shown in the status bar.
  pub status_msg: String,

  /// Shown in the header so the user knows which file they are editing.
  pub db_label: String,

  store: SqliteStore,
}

impl App {
  /// Create an [`App`] with an empty item list.
  pub fn new(store: SqliteStore, db_label: String) -> Self {
    Self {
      mode: Mode::Normal,
      items: Vec::new(),
      cursor: 0,
      filter: String::new(),
      sort: None,
      status_msg: String::new(),
      db_label,
      store,
    }
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Re-fetch the view from the store and re-apply the active sort.
  pub async fn refresh(&mut self) -> anyhow::Result<()> {
    let filter = (!self.filter.is_empty()).then(|| self.filter.clone());
    match self.store.list(filter).await {
      Ok(items) => {
        self.items = items;
        if let Some((column, ascending)) = self.sort {
          sort_items(&mut self.items, column, ascending);
        }
        if self.cursor >= self.items.len() {
          self.cursor = self.items.len().saturating_sub(1);
        }
        Ok(())
      }
      Err(e) => {
        self.status_msg = format!("Error: {e}");
        Err(e.into())
      }
    }
  }

  /// The item under the cursor, if any.
  pub fn cursor_item(&self) -> Option<&Item> {
    self.items.get(self.cursor)
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return Ok(false);
    }

    match &self.mode {
      Mode::Normal => self.handle_normal_key(key).await,
      Mode::Filter => self.handle_filter_key(key).await,
      Mode::Form(_) => self.handle_form_key(key).await,
      Mode::ConfirmDelete { .. } => self.handle_confirm_key(key).await,
    }
  }

  async fn handle_normal_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      // Quit
      KeyCode::Char('q') => return Ok(false),

      // Navigation
      KeyCode::Down | KeyCode::Char('j') => {
        if !self.items.is_empty() && self.cursor + 1 < self.items.len() {
          self.cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        if self.cursor > 0 {
          self.cursor -= 1;
        }
      }

      // Filter
      KeyCode::Char('/') => {
        self.mode = Mode::Filter;
        self.status_msg.clear();
      }

      // Add / edit
      KeyCode::Char('a') => {
        self.mode = Mode::Form(ItemForm::add());
        self.status_msg.clear();
      }
      KeyCode::Enter => {
        if let Some(item) = self.cursor_item() {
          self.mode = Mode::Form(ItemForm::edit(item));
          self.status_msg.clear();
        }
      }

      // Delete (with confirmation)
      KeyCode::Char('d') => {
        if let Some(item) = self.cursor_item() {
          self.mode = Mode::ConfirmDelete {
            id:   item.id,
            name: item.name.clone(),
          };
          self.status_msg.clear();
        }
      }

      // Export
      KeyCode::Char('e') => self.export_csv(),

      // Sort by column; the active column's key flips direction.
      KeyCode::Char(c) => {
        if let Some(column) = SortColumn::from_key(c) {
          let ascending = match self.sort {
            Some((active, asc)) if active == column => !asc,
            _ => true,
          };
          self.sort = Some((column, ascending));
          sort_items(&mut self.items, column, ascending);
          self.cursor = 0;
        }
      }

      _ => {}
    }
    Ok(true)
  }

  async fn handle_filter_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      KeyCode::Esc => {
        self.filter.clear();
        self.mode = Mode::Normal;
        self.cursor = 0;
        self.refresh().await?;
      }
      KeyCode::Enter => {
        self.mode = Mode::Normal;
      }
      KeyCode::Backspace => {
        self.filter.pop();
        self.cursor = 0;
        self.refresh().await?;
      }
      KeyCode::Char(c) => {
        self.filter.push(c);
        self.cursor = 0;
        self.refresh().await?;
      }
      _ => {}
    }
    Ok(true)
  }

  async fn handle_form_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    let Mode::Form(form) = &mut self.mode else {
      return Ok(true);
    };

    match key.code {
      KeyCode::Esc => {
        self.mode = Mode::Normal;
      }
      KeyCode::Tab | KeyCode::Down => form.focus_next(),
      KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
      KeyCode::Backspace => form.backspace(),
      KeyCode::Enter => {
        let form = form.clone();
        self.submit_form(form).await?;
      }
      KeyCode::Char(c) => form.push(c),
      _ => {}
    }
    Ok(true)
  }

  async fn handle_confirm_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    let Mode::ConfirmDelete { id, name } = &self.mode else {
      return Ok(true);
    };
    let (id, name) = (*id, name.clone());

    // Only `y` confirms; any other key cancels.
    if key.code == KeyCode::Char('y') {
      match self.store.delete(id).await {
        Ok(true) => {
          self.status_msg = format!("Deleted \"{name}\"");
          self.refresh().await?;
        }
        Ok(false) => {
          self.status_msg = format!("\"{name}\" no longer exists");
          self.refresh().await?;
        }
        Err(e) => self.status_msg = format!("Error: {e}"),
      }
    }
    self.mode = Mode::Normal;
    Ok(true)
  }

  // ── Mutations ─────────────────────────────────────────────────────────────

  /// Parse, validate and persist the form. On any rejection the dialog stays
  /// open with the reason in the status bar; nothing is written.
  async fn submit_form(&mut self, form: ItemForm) -> anyhow::Result<()> {
    let input = match form.parse() {
      Ok(input) => input,
      Err(msg) => {
        self.status_msg = msg;
        return Ok(());
      }
    };
    if let Err(e) = validate(&input) {
      self.status_msg = e.to_string();
      return Ok(());
    }

    let result = match form.editing_id {
      None => match self.store.add(input).await {
        Ok(item) => Some(format!("Added \"{}\"", item.name)),
        Err(e) => {
          self.status_msg = format!("Error: {e}");
          None
        }
      },
      Some(id) => match self.store.update(id, input).await {
        Ok(Some(item)) => Some(format!("Updated \"{}\"", item.name)),
        Ok(None) => Some(format!("Item {id} no longer exists")),
        Err(e) => {
          self.status_msg = format!("Error: {e}");
          None
        }
      },
    };

    if let Some(msg) = result {
      self.status_msg = msg;
      self.mode = Mode::Normal;
      self.refresh().await?;
    }
    Ok(())
  }

  // ── Export ────────────────────────────────────────────────────────────────

  /// Write the current (filtered, sorted) view to [`EXPORT_PATH`].
  fn export_csv(&mut self) {
    let result = std::fs::File::create(EXPORT_PATH)
      .map_err(stockroom_core::Error::from)
      .and_then(|file| write_csv(&self.items, file));

    self.status_msg = match result {
      Ok(()) => format!("Exported {} item(s) to {EXPORT_PATH}", self.items.len()),
      Err(e) => format!("Export failed: {e}"),
    };
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn item(id: i64, name: &str, bought: i64, sold: i64) -> Item {
    Item {
      id,
      name: name.to_string(),
      bought,
      sold,
      remaining: bought - sold,
    }
  }

  #[test]
  fn sorts_by_remaining_descending() {
    let mut items = vec![item(1, "Bolt", 10, 3), item(2, "Nut", 5, 0), item(3, "Washer", 2, 2)];
    sort_items(&mut items, SortColumn::Remaining, false);
    let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Bolt", "Nut", "Washer"]);
  }

  #[test]
  fn name_sort_ignores_case() {
    let mut items = vec![item(1, "widget", 0, 0), item(2, "Bolt", 0, 0)];
    sort_items(&mut items, SortColumn::Name, true);
    assert_eq!(items[0].name, "Bolt");
  }
}
