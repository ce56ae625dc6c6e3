//! Google Sheets append client: service-account JWT auth plus one-row
//! appends to a named spreadsheet tab.

mod auth;
mod client;
mod error;

pub use auth::ServiceAccountKey;
pub use client::{RowSink, SheetsClient};
pub use error::SheetsError;
