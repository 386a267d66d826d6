//! Modal dialogs — the add/edit form and the delete confirmation.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph},
};

use crate::form::{Field, ItemForm};

/// A `width`×`height` rectangle centred within `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
  let width = width.min(area.width);
  let height = height.min(area.height);
  Rect {
    x: area.x + (area.width - width) / 2,
    y: area.y + (area.height - height) / 2,
    width,
    height,
  }
}

// ─── Add/edit form ────────────────────────────────────────────────────────────

/// Render the add/edit dialog over the table.
pub fn draw_form(f: &mut Frame, area: Rect, form: &ItemForm) {
  let popup = centered_rect(44, 7, area);
  f.render_widget(Clear, popup);

  let title = if form.editing_id.is_some() {
    " Edit item "
  } else {
    " Add item "
  };
  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));
  let inner = block.inner(popup);
  f.render_widget(block, popup);

  let lines = vec![
    field_line("Name", &form.name, form.focus == Field::Name),
    field_line("Bought", &form.bought, form.focus == Field::Bought),
    field_line("Sold", &form.sold, form.focus == Field::Sold),
    Line::from(""),
    Line::from(Span::styled(
      "Enter save   Tab next   Esc cancel",
      Style::default().fg(Color::DarkGray),
    )),
  ];
  f.render_widget(Paragraph::new(lines), inner);
}

fn field_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
  let label_style = Style::default()
    .fg(Color::Cyan)
    .add_modifier(Modifier::BOLD);

  let (value_text, value_style) = if focused {
    (format!("{value}_"), Style::default().fg(Color::Yellow))
  } else {
    (value.to_string(), Style::default())
  };

  Line::from(vec![
    Span::styled(format!("{label:<8}"), label_style),
    Span::styled(value_text, value_style),
  ])
}

// ─── Delete confirmation ──────────────────────────────────────────────────────

/// Render the delete confirmation over the table.
pub fn draw_confirm(f: &mut Frame, area: Rect, name: &str) {
  let popup = centered_rect(44, 5, area);
  f.render_widget(Clear, popup);

  let block = Block::default()
    .title(" Delete item ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Red));
  let inner = block.inner(popup);
  f.render_widget(block, popup);

  let lines = vec![
    Line::from(format!("Delete \"{name}\"?")),
    Line::from(""),
    Line::from(Span::styled(
      "y confirm   any other key cancels",
      Style::default().fg(Color::DarkGray),
    )),
  ];
  f.render_widget(Paragraph::new(lines), inner);
}
