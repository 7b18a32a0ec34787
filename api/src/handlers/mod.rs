//! HTTP handlers
//!
//! Axum request handlers for the pages and form endpoints.

pub mod pages;
pub mod progress;
pub mod students;

pub use pages::{get_dashboard, get_roster, get_roster_json, get_standings_json, index};
pub use progress::{
    get_progress, get_section_detail, get_student_progress, get_student_progress_json,
};
pub use students::{add_student, delete_student};
