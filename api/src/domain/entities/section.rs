//! Completed-section domain entity
//!
//! One row per section a student finished, with the credits earned for it.
//! Rows are recorded outside this service; here they are only read.

use serde::{Deserialize, Serialize};

/// A completed section as recorded for one student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRecord {
    pub name: String,
    pub team: String,
    /// Meeting date as displayed in the sheet
    pub date: String,
    pub section: String,
    pub section_complete: bool,
    pub silver_credit: bool,
    pub gold_credit: bool,
}

impl SectionRecord {
    pub fn is_for(&self, student_name: &str) -> bool {
        same_student(&self.name, student_name)
    }
}

/// Progress lookups match names case-insensitively, ignoring outer whitespace
pub fn same_student(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
