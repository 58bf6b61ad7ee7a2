//! Tauri plugin backing the restaurant management window: a table picker,
//! a grid, dynamic per-column input fields, and the Add / Update / Delete /
//! Generate Report / Generate Bill actions.
//!
//! The Rust side owns the database handle and everything the frontend binds
//! to; the webview renders the widgets from the [`schema`] descriptors and
//! invokes the commands registered here.

use tauri::plugin::Builder as PluginBuilder;
use tauri::{Manager, RunEvent, Runtime};
use tokio::sync::RwLock;

mod commands;
mod error;

pub use error::{Error, Result};
pub use restaurant_records::{RecordStore, RowFilter, WriteOutcome, schema};
pub use restaurant_store::{Store, StoreConfig};

/// The currently loaded database, if any.
///
/// The handle is owned here for the whole process: `load` stores it, and
/// the `close` command or the exit event releases it.
#[derive(Default)]
pub struct LoadedDb(pub RwLock<Option<RecordStore>>);

/// Builder for the restaurant plugin.
///
/// # Example
///
/// ```ignore
/// use tauri_plugin_restaurant::Builder;
///
/// // In your Tauri app setup:
/// tauri::Builder::default()
///     .plugin(Builder::new().build())
///     .run(tauri::generate_context!())
///     .expect("error while running tauri application");
/// ```
#[derive(Default)]
pub struct Builder;

impl Builder {
   /// Create a new builder instance.
   pub fn new() -> Self {
      Self
   }

   /// Build the plugin with command registration and state management.
   pub fn build<R: Runtime>(self) -> tauri::plugin::TauriPlugin<R> {
      PluginBuilder::<R>::new("restaurant")
         .invoke_handler(tauri::generate_handler![
            commands::load,
            commands::tables,
            commands::fetch_table,
            commands::add_record,
            commands::update_record,
            commands::delete_record,
            commands::generate_report,
            commands::generate_bill,
            commands::close,
         ])
         .setup(|app, _api| {
            app.manage(LoadedDb::default());
            Ok(())
         })
         .on_event(|app, event| {
            if let RunEvent::Exit = event {
               // Release the connection before the process goes away
               let state = app.state::<LoadedDb>();
               tauri::async_runtime::block_on(async {
                  if let Some(records) = state.0.write().await.take() {
                     if let Err(e) = records.store().close().await {
                        tracing::warn!("Failed to close database on exit: {}", e);
                     }
                  }
               });
            }
         })
         .build()
   }
}

/// Initializes the plugin with default configuration.
pub fn init<R: Runtime>() -> tauri::plugin::TauriPlugin<R> {
   Builder::new().build()
}
