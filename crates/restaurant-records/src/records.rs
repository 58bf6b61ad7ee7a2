//! Dynamic CRUD operations over the restaurant store

use std::sync::Arc;

use restaurant_store::Store;
use sqlx::Row;
use tracing::debug;

use crate::decode::to_text;
use crate::error::{Error, Result};

/// Result returned from write operations (e.g. INSERT, UPDATE, DELETE).
#[derive(Debug, Clone, Copy, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteOutcome {
   /// The number of rows affected by the write operation.
   pub rows_affected: u64,
   /// The last inserted row ID (SQLite ROWID).
   ///
   /// Only meaningful for INSERT operations on tables with a ROWID.
   pub last_insert_id: i64,
}

impl WriteOutcome {
   /// Whether the store reported at least one affected row.
   ///
   /// A filter matching zero rows is not an error; it simply leaves this
   /// false.
   pub fn changed(&self) -> bool {
      self.rows_affected > 0
   }
}

/// A structured single-column predicate for update/delete.
///
/// The column name is validated and quoted, and the value bound as a
/// parameter; no caller-supplied SQL text ever reaches the statement.
#[derive(Debug, Clone)]
pub struct RowFilter {
   column: String,
   value: String,
}

impl RowFilter {
   /// Filter on `column = value`, the single-row key match the application
   /// uses to address grid selections.
   pub fn key(column: impl Into<String>, value: impl Into<String>) -> Self {
      Self {
         column: column.into(),
         value: value.into(),
      }
   }

   /// The filtered column.
   pub fn column(&self) -> &str {
      &self.column
   }

   /// The literal the column is compared against.
   pub fn value(&self) -> &str {
      &self.value
   }
}

/// Generic CRUD facade over the restaurant database.
///
/// Operations are parameterized by table name and an explicit column list;
/// the caller, not this layer, knows the schema. Values cross the layer as
/// text in the caller's column order.
#[derive(Clone)]
pub struct RecordStore {
   db: Arc<Store>,
}

impl RecordStore {
   /// Create a record store over an owned connection handle.
   pub fn new(db: Arc<Store>) -> Self {
      Self { db }
   }

   /// The underlying connection handle.
   pub fn store(&self) -> &Store {
      &self.db
   }

   /// Fetch every row of `table`, returning one textual value per requested
   /// column per row, in result order.
   ///
   /// Fails with a statement error if the table or any column does not
   /// exist.
   pub async fn fetch_all(&self, table: &str, columns: &[&str]) -> Result<Vec<Vec<String>>> {
      let sql = build_select(table, columns)?;
      let pool = self.db.pool()?;

      let rows = sqlx::query(&sql).fetch_all(pool).await?;

      let mut records = Vec::with_capacity(rows.len());
      for row in rows {
         let mut record = Vec::with_capacity(columns.len());
         for i in 0..columns.len() {
            record.push(to_text(row.try_get_raw(i)?)?);
         }
         records.push(record);
      }

      Ok(records)
   }

   /// Insert one row, binding every value as text.
   ///
   /// Requires `columns.len() == values.len()`; a mismatch is a typed
   /// validation error and nothing is written.
   pub async fn insert(
      &self,
      table: &str,
      columns: &[&str],
      values: &[String],
   ) -> Result<WriteOutcome> {
      check_counts(columns, values)?;

      let sql = build_insert(table, columns)?;
      let outcome = self.execute(&sql, values).await?;

      debug!(
         "Inserted into {}: {} row(s) affected",
         table, outcome.rows_affected
      );
      Ok(outcome)
   }

   /// Update the row matched by `filter`, binding every value as text.
   ///
   /// Same length validation as [`insert`](Self::insert). A filter matching
   /// zero rows succeeds with `changed() == false`.
   pub async fn update(
      &self,
      table: &str,
      columns: &[&str],
      values: &[String],
      filter: &RowFilter,
   ) -> Result<WriteOutcome> {
      check_counts(columns, values)?;

      let sql = build_update(table, columns, filter.column())?;
      let mut bound = values.to_vec();
      bound.push(filter.value().to_owned());
      let outcome = self.execute(&sql, &bound).await?;

      debug!(
         "Updated {} where {} = '{}': {} row(s) affected",
         table,
         filter.column(),
         filter.value(),
         outcome.rows_affected
      );
      Ok(outcome)
   }

   /// Delete the row matched by `filter`.
   ///
   /// A filter matching zero rows succeeds with `changed() == false`.
   pub async fn delete(&self, table: &str, filter: &RowFilter) -> Result<WriteOutcome> {
      let sql = build_delete(table, filter.column())?;
      let bound = [filter.value().to_owned()];
      let outcome = self.execute(&sql, &bound).await?;

      debug!(
         "Deleted from {} where {} = '{}': {} row(s) affected",
         table,
         filter.column(),
         filter.value(),
         outcome.rows_affected
      );
      Ok(outcome)
   }

   async fn execute(&self, sql: &str, values: &[String]) -> Result<WriteOutcome> {
      let pool = self.db.pool()?;

      let mut q = sqlx::query(sql);
      for value in values {
         q = q.bind(value.clone());
      }

      let result = q.execute(pool).await?;
      Ok(WriteOutcome {
         rows_affected: result.rows_affected(),
         last_insert_id: result.last_insert_rowid(),
      })
   }
}

fn check_counts(columns: &[&str], values: &[String]) -> Result<()> {
   if columns.is_empty() {
      return Err(Error::EmptyColumns);
   }
   if columns.len() != values.len() {
      return Err(Error::ColumnCountMismatch {
         columns: columns.len(),
         values: values.len(),
      });
   }
   Ok(())
}

fn build_select(table: &str, columns: &[&str]) -> Result<String> {
   if columns.is_empty() {
      return Err(Error::EmptyColumns);
   }
   validate_identifier(table)?;

   let mut cols = Vec::with_capacity(columns.len());
   for column in columns {
      validate_identifier(column)?;
      cols.push(quote_identifier(column));
   }

   Ok(format!(
      "SELECT {} FROM {}",
      cols.join(", "),
      quote_identifier(table)
   ))
}

fn build_insert(table: &str, columns: &[&str]) -> Result<String> {
   validate_identifier(table)?;

   let mut cols = Vec::with_capacity(columns.len());
   for column in columns {
      validate_identifier(column)?;
      cols.push(quote_identifier(column));
   }
   let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("${i}")).collect();

   Ok(format!(
      "INSERT INTO {} ({}) VALUES ({})",
      quote_identifier(table),
      cols.join(", "),
      placeholders.join(", ")
   ))
}

fn build_update(table: &str, columns: &[&str], filter_column: &str) -> Result<String> {
   validate_identifier(table)?;
   validate_identifier(filter_column)?;

   let mut assignments = Vec::with_capacity(columns.len());
   for (i, column) in columns.iter().enumerate() {
      validate_identifier(column)?;
      assignments.push(format!("{} = ${}", quote_identifier(column), i + 1));
   }

   Ok(format!(
      "UPDATE {} SET {} WHERE {} = ${}",
      quote_identifier(table),
      assignments.join(", "),
      quote_identifier(filter_column),
      columns.len() + 1
   ))
}

fn build_delete(table: &str, filter_column: &str) -> Result<String> {
   validate_identifier(table)?;
   validate_identifier(filter_column)?;

   Ok(format!(
      "DELETE FROM {} WHERE {} = $1",
      quote_identifier(table),
      quote_identifier(filter_column)
   ))
}

/// Validate that a table or column name is safe for SQL interpolation.
///
/// Accepts names matching `[a-zA-Z_][a-zA-Z0-9_]*`.
fn validate_identifier(name: &str) -> Result<()> {
   let mut chars = name.chars();
   let Some(first) = chars.next() else {
      return Err(Error::InvalidIdentifier {
         name: name.to_string(),
      });
   };

   if !first.is_ascii_alphabetic() && first != '_' {
      return Err(Error::InvalidIdentifier {
         name: name.to_string(),
      });
   }

   for ch in chars {
      if !ch.is_ascii_alphanumeric() && ch != '_' {
         return Err(Error::InvalidIdentifier {
            name: name.to_string(),
         });
      }
   }

   Ok(())
}

/// Quote an identifier with double-quote delimiters for defense-in-depth.
///
/// Any embedded double quotes are doubled per SQL standard (`"` → `""`).
fn quote_identifier(name: &str) -> String {
   format!("\"{}\"", name.replace('"', "\"\""))
}
