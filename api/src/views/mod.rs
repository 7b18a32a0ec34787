//! Views module
//!
//! HTML rendering for the roster, dashboard and progress pages.

pub mod progress;
pub mod renderer;

pub use progress::{render_progress_index, render_section_detail, render_student_progress};
pub use renderer::{render_dashboard, render_roster};
