use serde::{Serialize, Serializer};

/// Result type alias for plugin commands.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to the frontend.
///
/// Every failure ends up in a modal message, so the serialized form is
/// simply the display string.
#[derive(Debug, thiserror::Error)]
pub enum Error {
   /// No database has been loaded yet.
   #[error("no database is loaded")]
   NotLoaded,

   /// Table name that is not in the registry.
   #[error("unknown table: {0}")]
   UnknownTable(String),

   /// Input payload is missing a value for a column.
   #[error("missing value for field '{0}'")]
   MissingField(&'static str),

   /// Empty value where the form requires one.
   #[error("field '{0}' must not be empty")]
   EmptyField(&'static str),

   /// Error from the connection handle.
   #[error(transparent)]
   Store(#[from] restaurant_store::Error),

   /// Error from the record access layer.
   #[error(transparent)]
   Records(#[from] restaurant_records::Error),

   /// Error from report or bill generation.
   #[error(transparent)]
   Export(#[from] restaurant_export::Error),

   /// I/O error resolving output locations.
   #[error("io error: {0}")]
   Io(#[from] std::io::Error),
}

impl Serialize for Error {
   fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
   where
      S: Serializer,
   {
      serializer.serialize_str(&self.to_string())
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_errors_display_as_user_messages() {
      assert_eq!(Error::NotLoaded.to_string(), "no database is loaded");
      assert_eq!(
         Error::UnknownTable("orders".into()).to_string(),
         "unknown table: orders"
      );
      assert_eq!(
         Error::EmptyField("status").to_string(),
         "field 'status' must not be empty"
      );
   }

   #[test]
   fn test_wrapped_errors_display_transparently() {
      let err = Error::Export(restaurant_export::Error::UnknownOrderCode("M9".into()));
      assert_eq!(err.to_string(), "order code 'M9' not found in the menu");
   }
}
