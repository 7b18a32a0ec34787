//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{SectionRecord, Student, TeamDirectory};

/// Create a student with explicit progress
pub fn test_student(name: &str, team: &str, sections_completed: u32, points: u32) -> Student {
    Student {
        name: name.to_string(),
        team: team.to_string(),
        sections_completed,
        points,
    }
}

/// Ann and Bo on Red (40 points), Cy on Blue (5 points)
pub fn sample_students() -> Vec<Student> {
    vec![
        test_student("Ann", "Red", 3, 30),
        test_student("Bo", "Red", 1, 10),
        test_student("Cy", "Blue", 1, 5),
    ]
}

/// Red, Blue and an empty Green team
pub fn test_teams() -> TeamDirectory {
    TeamDirectory::parse("Red=#e53935,Blue=#1e88e5,Green=#43a047")
        .expect("fixture team table parses")
}

/// A completed section on a fixed date
pub fn test_section(name: &str, team: &str, section: &str, silver: bool, gold: bool) -> SectionRecord {
    SectionRecord {
        name: name.to_string(),
        team: team.to_string(),
        date: "6/1/2025".to_string(),
        section: section.to_string(),
        section_complete: true,
        silver_credit: silver,
        gold_credit: gold,
    }
}

/// Three sections for Ann (one logged as "ann"), one for Bo, none for Cy
pub fn sample_sections() -> Vec<SectionRecord> {
    vec![
        test_section("Ann", "Red", "1:1", true, false),
        test_section("Bo", "Red", "1:1", false, false),
        test_section("Ann", "Red", "1:2", true, true),
        test_section("ann", "Red", "1:3", false, false),
    ]
}
