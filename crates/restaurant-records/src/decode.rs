//! Decoding of SQLite result values to the textual row model

use sqlx::sqlite::SqliteValueRef;
use sqlx::{Decode, Sqlite, TypeInfo, ValueRef};

use crate::error::{Error, Result};

/// Decode a single result value to text.
///
/// NULL decodes to the empty string; INTEGER and REAL decode to their
/// canonical text form. BLOB columns have no place in the textual row model
/// and are rejected.
pub(crate) fn to_text(value: SqliteValueRef<'_>) -> Result<String> {
   if value.is_null() {
      return Ok(String::new());
   }

   let type_name = value.type_info().name().to_string();
   match type_name.as_str() {
      "TEXT" | "DATE" | "DATETIME" | "TIME" => decode_as::<&str>(value).map(str::to_owned),
      "INTEGER" | "BOOLEAN" => decode_as::<i64>(value).map(|v| v.to_string()),
      "REAL" => decode_as::<f64>(value).map(|v| v.to_string()),
      other => Err(Error::UnsupportedDatatype(other.to_string())),
   }
}

fn decode_as<'r, T: Decode<'r, Sqlite>>(value: SqliteValueRef<'r>) -> Result<T> {
   T::decode(value).map_err(|e| Error::Decode(e.to_string()))
}
