//! # restaurant-export
//!
//! Derived, read-only outputs over the record access layer:
//!
//! - **[`write_report`]**: dump a table to `<table>_report.csv`
//! - **[`generate_bill`]**: join a customer's order code against the menu
//!   table and write a `<customer>_bill.txt` receipt
//!
//! Both routines re-query the database on every call; no state survives
//! between exports.

mod bill;
mod error;
mod report;

pub use bill::{Receipt, generate_bill, render_receipt};
pub use error::{Error, Result};
pub use report::{render_report, write_report};
