/// Result type alias for record operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for record access operations.
///
/// These are pure database-operation errors with no Tauri dependencies.
#[derive(Debug, thiserror::Error)]
pub enum Error {
   /// Error from SQLx operations.
   #[error(transparent)]
   Sqlx(#[from] sqlx::Error),

   /// Error from the connection handle.
   #[error(transparent)]
   Store(#[from] restaurant_store::Error),

   /// Column and value lists differ in length for insert/update.
   #[error("got {columns} column(s) but {values} value(s)")]
   ColumnCountMismatch { columns: usize, values: usize },

   /// Insert/update/select called with no columns at all.
   #[error("at least one column is required")]
   EmptyColumns,

   /// Table or column name that is not safe for SQL interpolation.
   ///
   /// Identifiers must match `[a-zA-Z_][a-zA-Z0-9_]*`.
   #[error("invalid identifier '{name}': must match [a-zA-Z_][a-zA-Z0-9_]*")]
   InvalidIdentifier { name: String },

   /// SQLite storage class with no place in the textual row model.
   #[error("unsupported datatype: {0}")]
   UnsupportedDatatype(String),

   /// A result value failed to decode.
   #[error("decode error: {0}")]
   Decode(String),
}

impl Error {
   /// Extract a structured error code from the error type.
   ///
   /// This provides machine-readable error codes for error handling.
   pub fn error_code(&self) -> String {
      match self {
         Error::Sqlx(e) => {
            if let Some(code) = e.as_database_error().and_then(|db_err| db_err.code()) {
               return format!("SQLITE_{}", code);
            }
            "SQLX_ERROR".to_string()
         }
         Error::Store(_) => "CONNECTION_ERROR".to_string(),
         Error::ColumnCountMismatch { .. } => "COLUMN_COUNT_MISMATCH".to_string(),
         Error::EmptyColumns => "EMPTY_COLUMNS".to_string(),
         Error::InvalidIdentifier { .. } => "INVALID_IDENTIFIER".to_string(),
         Error::UnsupportedDatatype(_) => "UNSUPPORTED_DATATYPE".to_string(),
         Error::Decode(_) => "DECODE_ERROR".to_string(),
      }
   }
}
