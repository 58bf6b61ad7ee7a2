//! CSV report export: a full-table dump with a header row.

use std::fs;
use std::path::{Path, PathBuf};

use restaurant_records::RecordStore;
use restaurant_records::schema::TableSpec;
use tracing::debug;

use crate::error::Result;

/// Render rows as CSV text: a header equal to the comma-joined column
/// list, then one comma-joined line per row.
///
/// Values are written as-is; embedded commas or newlines are not escaped,
/// matching the report format this replaces.
pub fn render_report(columns: &[&str], rows: &[Vec<String>]) -> String {
   let mut out = String::new();
   out.push_str(&columns.join(","));
   out.push('\n');

   for row in rows {
      out.push_str(&row.join(","));
      out.push('\n');
   }

   out
}

/// Re-query `table` in full and write `<table>_report.csv` under `dir`.
///
/// Returns the path of the written file.
pub async fn write_report(records: &RecordStore, table: &TableSpec, dir: &Path) -> Result<PathBuf> {
   let columns = table.column_names();
   let rows = records.fetch_all(table.name, &columns).await?;

   let report = render_report(&columns, &rows);
   let path = dir.join(format!("{}_report.csv", table.name));
   fs::write(&path, report)?;

   debug!(
      "Wrote report for {} ({} row(s)) to {}",
      table.name,
      rows.len(),
      path.display()
   );
   Ok(path)
}
