//! Google Sheets adapter
//!
//! Implementation of the Sheets API client and the roster and section stores
//! backed by it.

pub mod auth;
pub mod client;
pub mod roster_store;
pub mod section_store;
pub mod table;
pub mod teams;

pub use auth::Credentials;
pub use client::SheetsClient;
pub use roster_store::SheetsStudentStore;
pub use section_store::SheetsSectionStore;
pub use teams::load_team_directory;
