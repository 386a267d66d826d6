//! CSV export of the current inventory view.
//!
//! Both front-ends export through here so the column layout is defined in
//! exactly one place.

use std::io::Write;

use csv::WriterBuilder;

use crate::{Result, item::Item};

/// Column order of the export, mirrored by the header row.
const HEADER: [&str; 5] = ["ID", "Name", "Bought", "Sold", "Remaining"];

/// Write `items` as CSV: the header row plus one record per item, in the
/// given order. `remaining` is taken from the item, not recomputed.
pub fn write_csv<W: Write>(items: &[Item], out: W) -> Result<()> {
  let mut wtr = WriterBuilder::new().from_writer(out);

  wtr.write_record(HEADER)?;
  for item in items {
    wtr.write_record([
      item.id.to_string(),
      item.name.clone(),
      item.bought.to_string(),
      item.sold.to_string(),
      item.remaining.to_string(),
    ])?;
  }

  wtr.flush()?;
  Ok(())
}

/// Render `items` to an in-memory CSV string (HTTP responses, tests).
pub fn csv_string(items: &[Item]) -> Result<String> {
  let mut buf = Vec::new();
  write_csv(items, &mut buf)?;
  Ok(String::from_utf8(buf).expect("csv output is valid UTF-8"))
}
