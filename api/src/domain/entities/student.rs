//! Student domain entity
//!
//! A tracked reader belonging to exactly one team.

use serde::{Deserialize, Serialize};

/// A student row from the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Display name, used as the lookup key for deletion
    pub name: String,
    /// Name of the team this student belongs to
    pub team: String,
    pub sections_completed: u32,
    pub points: u32,
}

impl Student {
    /// A freshly enrolled student with no progress recorded
    pub fn enrolled(name: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
            sections_completed: 0,
            points: 0,
        }
    }
}
