/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for report and bill generation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
   /// Error from the record access layer.
   #[error(transparent)]
   Records(#[from] restaurant_records::Error),

   /// I/O error writing an output file.
   #[error("io error: {0}")]
   Io(#[from] std::io::Error),

   /// Bill requested for an order code absent from the menu table.
   #[error("order code '{0}' not found in the menu")]
   UnknownOrderCode(String),

   /// Menu price that does not parse as a number.
   #[error("menu price '{value}' is not a number")]
   InvalidPrice { value: String },
}
