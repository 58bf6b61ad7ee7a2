//! Configuration for the store's connection pool

use std::time::Duration;

/// Configuration for the [`Store`](crate::Store) connection pool
///
/// # Examples
///
/// ```
/// use restaurant_store::StoreConfig;
/// use std::time::Duration;
///
/// // Use defaults
/// let config = StoreConfig::default();
///
/// // Override just one field
/// let config = StoreConfig {
///     idle_timeout: Duration::from_secs(60),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
   /// Maximum number of concurrent connections
   ///
   /// The application reads and writes on one shared connection, so this
   /// defaults to 1. Raising it relaxes the serialization of queries.
   ///
   /// Default: 1
   pub max_connections: u32,

   /// Idle timeout for the connection
   ///
   /// A connection that remains idle for this duration is closed and
   /// re-opened transparently on the next query.
   ///
   /// Default: 30 seconds
   pub idle_timeout: Duration,
}

impl Default for StoreConfig {
   fn default() -> Self {
      Self {
         max_connections: 1,
         idle_timeout: Duration::from_secs(30),
      }
   }
}
