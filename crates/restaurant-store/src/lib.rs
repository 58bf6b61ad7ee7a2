//! # restaurant-store
//!
//! An explicitly owned connection handle for the restaurant database.
//!
//! ## Core types
//!
//! - **[`Store`]**: the database handle, opened at load time and closed at
//!   process shutdown
//! - **[`StoreConfig`]**: connection settings
//! - **[`Error`]**: error type for store operations
//!
//! ## Architecture
//!
//! The handle wraps a single-connection SQLx pool, so reads and writes
//! serialize on one shared connection. The pool's idle timeout may drop the
//! connection between user interactions; the next query transparently
//! re-opens it. Ownership is explicit: whoever calls [`Store::connect`] is
//! responsible for calling [`Store::close`] when the process winds down.

mod config;
mod database;
mod error;

pub use config::StoreConfig;
pub use database::Store;
pub use error::{Error, Result};
