//! Item table pane — the main body.

use ratatui::{
  Frame,
  layout::{Constraint, Rect},
  style::{Color, Modifier, Style},
  widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::app::{App, Mode, SortColumn};

const COLUMNS: [(&str, SortColumn); 5] = [
  ("[1] ID", SortColumn::Id),
  ("[2] Name", SortColumn::Name),
  ("[3] Bought", SortColumn::Bought),
  ("[4] Sold", SortColumn::Sold),
  ("[5] Remaining", SortColumn::Remaining),
];

/// Render the item table into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let filter_active = matches!(app.mode, Mode::Filter);

  let title = format!(" Items ({}) ", app.items.len());
  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let mut inner_area = block.inner(area);
  f.render_widget(block, area);

  // If a filter is being typed or set, show it at the bottom of the pane.
  if (filter_active || !app.filter.is_empty()) && inner_area.height > 2 {
    let filter_area = Rect {
      x:      inner_area.x,
      y:      inner_area.y + inner_area.height - 1,
      width:  inner_area.width,
      height: 1,
    };
    inner_area.height = inner_area.height.saturating_sub(1);

    let filter_text = if filter_active {
      format!("/{}_", app.filter)
    } else {
      format!("/{}", app.filter)
    };
    f.render_widget(
      Paragraph::new(filter_text).style(Style::default().fg(Color::Yellow)),
      filter_area,
    );
  }

  // Header row, with a direction marker on the active sort column.
  let header_cells = COLUMNS.map(|(label, column)| {
    let marker = match app.sort {
      Some((active, true)) if active == column => " ▲",
      Some((active, false)) if active == column => " ▼",
      _ => "",
    };
    Cell::from(format!("{label}{marker}")).style(
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    )
  });
  let header = Row::new(header_cells);

  let rows = app.items.iter().map(|item| {
    Row::new([
      Cell::from(item.id.to_string()),
      Cell::from(item.name.clone()),
      Cell::from(item.bought.to_string()),
      Cell::from(item.sold.to_string()),
      Cell::from(item.remaining.to_string()),
    ])
  });

  let widths = [
    Constraint::Length(8),
    Constraint::Min(20),
    Constraint::Length(12),
    Constraint::Length(12),
    Constraint::Length(14),
  ];

  let mut state = TableState::default();
  state.select(if app.items.is_empty() {
    None
  } else {
    Some(app.cursor)
  });

  f.render_stateful_widget(
    Table::new(rows, widths).header(header).row_highlight_style(
      Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD),
    ),
    inner_area,
    &mut state,
  );
}
