use std::collections::HashMap;
use std::fs::create_dir_all;
use std::path::PathBuf;

use restaurant_export::Receipt;
use restaurant_records::schema::{self, TableSpec};
use restaurant_records::{RecordStore, RowFilter};
use restaurant_store::Store;
use serde::Serialize;
use tauri::{AppHandle, Manager, Runtime, State, command};

use crate::{Error, LoadedDb, Result};

/// Grid payload: column headers plus one textual row per record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableData {
   pub columns: Vec<&'static str>,
   pub rows: Vec<Vec<String>>,
}

/// Open the database file (relative to the app config dir) and keep the
/// handle for the rest of the session. A previously loaded handle is
/// closed and replaced.
#[command]
pub(crate) async fn load<R: Runtime>(
   app: AppHandle<R>,
   state: State<'_, LoadedDb>,
   path: String,
) -> Result<()> {
   let abs_path = resolve_database_path(&path, &app);
   let store = Store::connect(&abs_path, None).await?;

   let previous = state.0.write().await.replace(RecordStore::new(store));
   if let Some(previous) = previous {
      previous.store().close().await?;
   }

   Ok(())
}

/// The static per-table descriptors the frontend renders the selector and
/// input fields from.
#[command]
pub(crate) fn tables() -> Vec<TableSpec> {
   schema::TABLES.to_vec()
}

/// Re-read the selected table in full for the grid.
#[command]
pub(crate) async fn fetch_table(state: State<'_, LoadedDb>, table: String) -> Result<TableData> {
   let spec = lookup(&table)?;
   let records = loaded(&state).await?;

   let columns = spec.column_names();
   let rows = records.fetch_all(spec.name, &columns).await?;

   Ok(TableData { columns, rows })
}

/// Insert a new row from the input fields. Returns whether a row was
/// added.
#[command]
pub(crate) async fn add_record(
   state: State<'_, LoadedDb>,
   table: String,
   fields: HashMap<String, String>,
) -> Result<bool> {
   let spec = lookup(&table)?;
   let records = loaded(&state).await?;

   let columns = spec.insert_columns();
   let values = ordered_values(&columns, &fields)?;

   let outcome = records.insert(spec.name, &columns, &values).await?;
   Ok(outcome.changed())
}

/// Update the row selected in the grid (addressed by its key column).
/// Returns whether a row changed.
#[command]
pub(crate) async fn update_record(
   state: State<'_, LoadedDb>,
   table: String,
   key: String,
   fields: HashMap<String, String>,
) -> Result<bool> {
   let spec = lookup(&table)?;
   let records = loaded(&state).await?;

   let columns = spec.update_columns();
   let values = ordered_values(&columns, &fields)?;
   require_filled(&columns, &values)?;

   let filter = RowFilter::key(spec.key_column(), key);
   let outcome = records.update(spec.name, &columns, &values, &filter).await?;
   Ok(outcome.changed())
}

/// Delete the row selected in the grid. Returns whether a row was removed.
#[command]
pub(crate) async fn delete_record(
   state: State<'_, LoadedDb>,
   table: String,
   key: String,
) -> Result<bool> {
   let spec = lookup(&table)?;
   let records = loaded(&state).await?;

   let filter = RowFilter::key(spec.key_column(), key);
   let outcome = records.delete(spec.name, &filter).await?;
   Ok(outcome.changed())
}

/// Dump the selected table to `<table>_report.csv` and return the written
/// path.
#[command]
pub(crate) async fn generate_report<R: Runtime>(
   app: AppHandle<R>,
   state: State<'_, LoadedDb>,
   table: String,
   dir: Option<String>,
) -> Result<String> {
   let spec = lookup(&table)?;
   let records = loaded(&state).await?;

   let dir = resolve_export_dir(dir, &app)?;
   let path = restaurant_export::write_report(&records, spec, &dir).await?;

   Ok(path.display().to_string())
}

/// Write the bill for the selected customer row and return the rendered
/// receipt for the confirmation dialog.
#[command]
pub(crate) async fn generate_bill<R: Runtime>(
   app: AppHandle<R>,
   state: State<'_, LoadedDb>,
   customer_name: String,
   order_code: String,
   dir: Option<String>,
) -> Result<Receipt> {
   let records = loaded(&state).await?;
   let dir = resolve_export_dir(dir, &app)?;

   Ok(restaurant_export::generate_bill(&records, &customer_name, &order_code, &dir).await?)
}

/// Release the database handle explicitly.
#[command]
pub(crate) async fn close(state: State<'_, LoadedDb>) -> Result<()> {
   let records = state.0.write().await.take().ok_or(Error::NotLoaded)?;
   records.store().close().await?;
   Ok(())
}

async fn loaded(state: &State<'_, LoadedDb>) -> Result<RecordStore> {
   state.0.read().await.clone().ok_or(Error::NotLoaded)
}

fn lookup(table: &str) -> Result<&'static TableSpec> {
   schema::table_spec(table).ok_or_else(|| Error::UnknownTable(table.to_string()))
}

/// Assemble values for `columns` from the name-keyed field map, in column
/// order.
fn ordered_values(
   columns: &[&'static str],
   fields: &HashMap<String, String>,
) -> Result<Vec<String>> {
   columns
      .iter()
      .map(|&column| {
         fields
            .get(column)
            .cloned()
            .ok_or(Error::MissingField(column))
      })
      .collect()
}

/// The update form requires every field filled before touching the row.
fn require_filled(columns: &[&'static str], values: &[String]) -> Result<()> {
   for (&column, value) in columns.iter().zip(values) {
      if value.is_empty() {
         return Err(Error::EmptyField(column));
      }
   }
   Ok(())
}

/// Resolve the database file path relative to the app config directory.
fn resolve_database_path<R: Runtime>(path: &str, app: &AppHandle<R>) -> PathBuf {
   let app_path = app
      .path()
      .app_config_dir()
      .expect("No App config path was found!");

   create_dir_all(&app_path).expect("Couldn't create app config dir");

   // Join the relative path to the app config directory
   app_path.join(path)
}

/// Resolve where report and bill files land: an explicit directory when
/// given, otherwise the app config directory.
fn resolve_export_dir<R: Runtime>(dir: Option<String>, app: &AppHandle<R>) -> Result<PathBuf> {
   let dir = match dir {
      Some(dir) => PathBuf::from(dir),
      None => app
         .path()
         .app_config_dir()
         .expect("No App config path was found!"),
   };

   create_dir_all(&dir)?;
   Ok(dir)
}

#[cfg(test)]
mod tests {
   use super::*;

   fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
      pairs
         .iter()
         .map(|(k, v)| (k.to_string(), v.to_string()))
         .collect()
   }

   #[test]
   fn test_ordered_values_follow_column_order_not_map_order() {
      let fields = fields(&[("status", "Late"), ("date", "2024-11-02")]);
      let values = ordered_values(&["date", "status"], &fields).unwrap();

      assert_eq!(values, vec!["2024-11-02", "Late"]);
   }

   #[test]
   fn test_ordered_values_reject_missing_field() {
      let fields = fields(&[("date", "2024-11-02")]);
      let err = ordered_values(&["date", "status"], &fields).unwrap_err();

      assert!(matches!(err, Error::MissingField("status")));
   }

   #[test]
   fn test_require_filled_rejects_empty_values() {
      let values = vec!["2024-11-02".to_string(), String::new()];
      let err = require_filled(&["date", "status"], &values).unwrap_err();

      assert!(matches!(err, Error::EmptyField("status")));
   }

   #[test]
   fn test_lookup_rejects_unknown_tables() {
      assert!(lookup("menu").is_ok());
      assert!(matches!(lookup("orders"), Err(Error::UnknownTable(_))));
   }
}
