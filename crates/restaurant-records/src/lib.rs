//! # restaurant-records
//!
//! Generic record access layer for the restaurant database: dynamic,
//! table-name-parameterized CRUD over an owned [`restaurant_store::Store`]
//! handle, plus the static table registry the presentation layer renders
//! its selector and input fields from.
//!
//! ## Core types
//!
//! - **[`RecordStore`]**: CRUD facade (fetch_all / insert / update / delete)
//! - **[`RowFilter`]**: structured single-column predicate for update/delete
//! - **[`WriteOutcome`]**: affected-row count and last insert id
//! - **[`schema::TableSpec`]**: ordered column-to-input-capability mapping
//!
//! The caller, not this layer, knows the schema: every operation takes the
//! table name and an explicit column list. Values cross the layer as text in
//! the caller's column order; identifiers are validated and quoted, and all
//! values (filter values included) are bound as parameters.

mod decode;
mod error;
mod records;
pub mod schema;

pub use error::{Error, Result};
pub use records::{RecordStore, RowFilter, WriteOutcome};
