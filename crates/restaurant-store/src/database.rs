//! SQLite store handle with an explicit open/close lifecycle

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use tracing::debug;

use crate::config::StoreConfig;
use crate::error::{Error, Result};

/// Owned handle to the restaurant database.
///
/// ## State Management
///
/// - **`pool`**: single-connection pool all queries run on
/// - **`closed`**: prevents use after the store has been closed
/// - **`path`**: database file path, retained for logging and diagnostics
///
/// ## Usage Pattern
///
/// ```text
/// 1. Connect at load time (creates the file when missing)
/// 2. Run queries against pool()
/// 3. Close at process shutdown
/// ```
#[derive(Debug)]
pub struct Store {
   /// Connection pool holding at most `max_connections` (default 1) connections
   pool: Pool<Sqlite>,

   /// Marks the store as closed to prevent further operations
   closed: AtomicBool,

   /// Path to the database file
   path: PathBuf,
}

impl Store {
   /// Open the database file, creating it when missing.
   ///
   /// The schema itself is assumed to exist already; this opens a handle,
   /// it does not provision tables.
   pub async fn connect(path: impl AsRef<Path>, config: Option<StoreConfig>) -> Result<Arc<Self>> {
      let config = config.unwrap_or_default();
      let path = path.as_ref().to_path_buf();

      let options = SqliteConnectOptions::new()
         .filename(&path)
         .create_if_missing(true);

      let pool = SqlitePoolOptions::new()
         .max_connections(config.max_connections)
         .idle_timeout(config.idle_timeout)
         .connect_with(options)
         .await?;

      debug!("Connected to database at {}", path.display());

      Ok(Arc::new(Self {
         pool,
         closed: AtomicBool::new(false),
         path,
      }))
   }

   /// The connection pool, for running queries against.
   pub fn pool(&self) -> Result<&Pool<Sqlite>> {
      if self.is_closed() {
         return Err(Error::DatabaseClosed);
      }
      Ok(&self.pool)
   }

   /// The path the store was opened with.
   pub fn path(&self) -> &Path {
      &self.path
   }

   /// Whether [`close`](Self::close) has been called.
   pub fn is_closed(&self) -> bool {
      self.closed.load(Ordering::Acquire)
   }

   /// Close the store. Idempotent; any later [`pool`](Self::pool) call
   /// fails with [`Error::DatabaseClosed`].
   pub async fn close(&self) -> Result<()> {
      if self.closed.swap(true, Ordering::AcqRel) {
         return Ok(());
      }

      self.pool.close().await;
      debug!("Closed database at {}", self.path.display());
      Ok(())
   }
}

#[cfg(test)]
mod tests {
   use super::*;
   use tempfile::TempDir;

   async fn create_test_store() -> (Arc<Store>, TempDir) {
      let temp_dir = TempDir::new().expect("Failed to create temp directory");
      let db_path = temp_dir.path().join("test.db");
      let store = Store::connect(&db_path, None)
         .await
         .expect("Failed to connect to test database");

      (store, temp_dir)
   }

   #[tokio::test]
   async fn test_connect_creates_database_file() {
      let (store, temp) = create_test_store().await;

      assert!(store.path().exists());
      assert_eq!(store.path(), temp.path().join("test.db"));
      assert!(!store.is_closed());
   }

   #[tokio::test]
   async fn test_queries_run_on_the_pool() {
      let (store, _temp) = create_test_store().await;

      sqlx::query("CREATE TABLE t (id INTEGER PRIMARY KEY, name TEXT)")
         .execute(store.pool().unwrap())
         .await
         .unwrap();

      let result = sqlx::query("INSERT INTO t (name) VALUES ('Alice')")
         .execute(store.pool().unwrap())
         .await
         .unwrap();

      assert_eq!(result.rows_affected(), 1);
   }

   #[tokio::test]
   async fn test_close_prevents_further_use() {
      let (store, _temp) = create_test_store().await;

      store.close().await.unwrap();

      assert!(store.is_closed());
      assert!(matches!(store.pool(), Err(Error::DatabaseClosed)));
   }

   #[tokio::test]
   async fn test_close_is_idempotent() {
      let (store, _temp) = create_test_store().await;

      store.close().await.unwrap();
      store.close().await.unwrap();

      assert!(store.is_closed());
   }
}
