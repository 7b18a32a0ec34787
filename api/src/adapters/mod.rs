//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod sheets;

pub use sheets::{
    load_team_directory, Credentials, SheetsClient, SheetsSectionStore, SheetsStudentStore,
};
