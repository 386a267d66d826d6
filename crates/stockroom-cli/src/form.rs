//! Add/edit item form state.
//!
//! The form holds raw text for all three fields; quantities are parsed on
//! submit so a half-typed number never reaches the store.

use stockroom_core::item::{Item, NewItem};

/// Which field currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
  Name,
  Bought,
  Sold,
}

impl Field {
  fn next(self) -> Self {
    match self {
      Field::Name => Field::Bought,
      Field::Bought => Field::Sold,
      Field::Sold => Field::Name,
    }
  }

  fn prev(self) -> Self {
    match self {
      Field::Name => Field::Sold,
      Field::Bought => Field::Name,
      Field::Sold => Field::Bought,
    }
  }
}

/// State of the add/edit dialog.
#[derive(Debug, Clone)]
pub struct ItemForm {
  /// `Some(id)` when editing an existing item, `None` when adding.
  pub editing_id: Option<i64>,
  pub name:       String,
  pub bought:     String,
  pub sold:       String,
  pub focus:      Field,
}

impl ItemForm {
  /// An empty form for adding a new item.
  pub fn add() -> Self {
    Self {
      editing_id: None,
      name:       String::new(),
      bought:     String::new(),
      sold:       String::new(),
      focus:      Field::Name,
    }
  }

  /// A form pre-filled from an existing item.
  pub fn edit(item: &Item) -> Self {
    Self {
      editing_id: Some(item.id),
      name:       item.name.clone(),
      bought:     item.bought.to_string(),
      sold:       item.sold.to_string(),
      focus:      Field::Name,
    }
  }

  pub fn focus_next(&mut self) {
    self.focus = self.focus.next();
  }

  pub fn focus_prev(&mut self) {
    self.focus = self.focus.prev();
  }

  fn focused_field(&mut self) -> &mut String {
    match self.focus {
      Field::Name => &mut self.name,
      Field::Bought => &mut self.bought,
      Field::Sold => &mut self.sold,
    }
  }

  pub fn push(&mut self, c: char) {
    self.focused_field().push(c);
  }

  pub fn backspace(&mut self) {
    self.focused_field().pop();
  }

  /// Parse the text fields into a [`NewItem`].
  ///
  /// Only the parse boundary lives here; the inventory rules (empty name,
  /// negative quantities, sold > bought) are checked by
  /// [`stockroom_core::validate::validate`] on submit.
  pub fn parse(&self) -> Result<NewItem, String> {
    let bought = self
      .bought
      .trim()
      .parse::<i64>()
      .map_err(|_| format!("bought must be a whole number (got {:?})", self.bought.trim()))?;
    let sold = self
      .sold
      .trim()
      .parse::<i64>()
      .map_err(|_| format!("sold must be a whole number (got {:?})", self.sold.trim()))?;
    Ok(NewItem::new(self.name.clone(), bought, sold))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_valid_fields() {
    let mut form = ItemForm::add();
    form.name = "Widget".into();
    form.bought = " 10 ".into();
    form.sold = "3".into();

    let input = form.parse().unwrap();
    assert_eq!(input.name, "Widget");
    assert_eq!(input.bought, 10);
    assert_eq!(input.sold, 3);
  }

  #[test]
  fn rejects_non_integer_quantity() {
    let mut form = ItemForm::add();
    form.name = "Widget".into();
    form.bought = "ten".into();
    form.sold = "0".into();

    let err = form.parse().unwrap_err();
    assert!(err.contains("bought"));
  }

  #[test]
  fn rejects_empty_quantity() {
    let mut form = ItemForm::add();
    form.name = "Widget".into();
    form.bought = "1".into();
    form.sold = "".into();

    assert!(form.parse().is_err());
  }

  #[test]
  fn edit_prefills_from_item() {
    let item = Item {
      id:        7,
      name:      "Bolt".into(),
      bought:    4,
      sold:      1,
      remaining: 3,
    };
    let form = ItemForm::edit(&item);
    assert_eq!(form.editing_id, Some(7));
    assert_eq!(form.name, "Bolt");
    assert_eq!(form.bought, "4");
    assert_eq!(form.sold, "1");
  }

  #[test]
  fn tab_cycles_focus() {
    let mut form = ItemForm::add();
    assert_eq!(form.focus, Field::Name);
    form.focus_next();
    assert_eq!(form.focus, Field::Bought);
    form.focus_next();
    assert_eq!(form.focus, Field::Sold);
    form.focus_next();
    assert_eq!(form.focus, Field::Name);
    form.focus_prev();
    assert_eq!(form.focus, Field::Sold);
  }
}
