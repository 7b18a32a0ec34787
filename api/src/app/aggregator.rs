//! Team aggregation
//!
//! Turns the flat student list into the two grouped projections the pages
//! render: the roster grouping and the dashboard standings. Both are
//! recomputed from scratch on every read.

use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::entities::{same_student, SectionRecord, Student, TeamDirectory};
use crate::error::DomainError;

/// Group label for students whose team cell is blank
pub const UNASSIGNED_TEAM: &str = "Unassigned";

/// Team name → members, in first-seen team order
pub type TeamGroups = IndexMap<String, Vec<Student>>;

/// Team name → standing, in configured team order
pub type Standings = IndexMap<String, TeamStanding>;

/// One team's line on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamStanding {
    pub color: String,
    /// Sum of every member's points
    pub points: u64,
    pub members: Vec<MemberStanding>,
}

/// A member's individual contribution shown under their team
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberStanding {
    pub name: String,
    pub sections_completed: u32,
    pub points: u32,
}

impl From<&Student> for MemberStanding {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            sections_completed: student.sections_completed,
            points: student.points,
        }
    }
}

fn team_key(student: &Student) -> &str {
    let team = student.team.trim();
    if team.is_empty() {
        UNASSIGNED_TEAM
    } else {
        team
    }
}

/// Group students by team.
///
/// Teams appear in the order they are first seen and members keep their source
/// order. No team list is needed up front.
pub fn group_by_team(students: &[Student]) -> TeamGroups {
    let mut groups = TeamGroups::new();
    for student in students {
        groups
            .entry(team_key(student).to_string())
            .or_default()
            .push(student.clone());
    }
    groups
}

/// Compute per-team totals for the dashboard.
///
/// Every configured team appears, empty ones included. A student whose team
/// has no color entry is a configuration error and fails the whole
/// projection.
pub fn compute_standings(
    students: &[Student],
    teams: &TeamDirectory,
) -> Result<Standings, DomainError> {
    let mut standings: Standings = teams
        .teams()
        .map(|team| {
            (
                team.name,
                TeamStanding {
                    color: team.color,
                    points: 0,
                    members: Vec::new(),
                },
            )
        })
        .collect();

    for student in students {
        let key = team_key(student);
        let standing = standings.get_mut(key).ok_or_else(|| {
            DomainError::MissingConfiguration(format!(
                "Team '{}' of student '{}' has no color entry",
                key, student.name
            ))
        })?;
        standing.points += u64::from(student.points);
        standing.members.push(MemberStanding::from(student));
    }

    Ok(standings)
}

/// One student's completed sections and the credits they earned
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentProgress {
    pub name: String,
    /// Roster row, absent once the student has left the roster
    pub student: Option<Student>,
    /// Display color of the student's team, if configured
    pub color: Option<String>,
    pub sections: Vec<SectionRecord>,
    pub total_sections: usize,
    pub silver_earned: usize,
    pub gold_earned: usize,
}

/// Collect the sections recorded for `name` and count their credits.
///
/// Names match case-insensitively. The team is taken from the roster, or
/// from the section rows for students no longer enrolled.
pub fn summarize_progress(
    name: &str,
    students: &[Student],
    sections: &[SectionRecord],
    teams: &TeamDirectory,
) -> StudentProgress {
    let student = students.iter().find(|s| same_student(&s.name, name)).cloned();
    let sections: Vec<SectionRecord> = sections.iter().filter(|s| s.is_for(name)).cloned().collect();

    let team = student
        .as_ref()
        .map(|s| s.team.as_str())
        .or_else(|| sections.first().map(|s| s.team.as_str()));
    let color = team.and_then(|t| teams.color_of(t.trim())).map(str::to_string);

    StudentProgress {
        name: student
            .as_ref()
            .map(|s| s.name.clone())
            .unwrap_or_else(|| name.trim().to_string()),
        color,
        total_sections: sections.len(),
        silver_earned: sections.iter().filter(|s| s.silver_credit).count(),
        gold_earned: sections.iter().filter(|s| s.gold_credit).count(),
        student,
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_sections, sample_students, test_section, test_student, test_teams};

    #[test]
    fn standings_sum_points_per_team() {
        let standings = compute_standings(&sample_students(), &test_teams()).unwrap();

        let red = &standings["Red"];
        assert_eq!(red.points, 40);
        assert_eq!(red.members.len(), 2);
        assert_eq!(red.color, "#e53935");

        let blue = &standings["Blue"];
        assert_eq!(blue.points, 5);
        assert_eq!(blue.members.len(), 1);
        assert_eq!(blue.members[0].sections_completed, 1);
    }

    #[test]
    fn standings_include_empty_configured_teams() {
        let standings = compute_standings(&sample_students(), &test_teams()).unwrap();

        let green = &standings["Green"];
        assert_eq!(green.points, 0);
        assert!(green.members.is_empty());
        let order: Vec<&str> = standings.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["Red", "Blue", "Green"]);
    }

    #[test]
    fn standings_total_matches_student_total() {
        let cases = vec![
            vec![],
            sample_students(),
            vec![
                test_student("A", "Green", 0, 0),
                test_student("B", "Green", 7, 70),
                test_student("C", "Red", 2, 15),
                test_student("D", "Blue", 9, 1_000_000),
            ],
        ];

        for students in cases {
            let standings = compute_standings(&students, &test_teams()).unwrap();
            let team_total: u64 = standings.values().map(|t| t.points).sum();
            let student_total: u64 = students.iter().map(|s| u64::from(s.points)).sum();
            assert_eq!(team_total, student_total);
        }
    }

    #[test]
    fn standings_fail_on_team_without_color() {
        let mut students = sample_students();
        students.push(test_student("Dee", "Purple", 1, 10));

        let err = compute_standings(&students, &test_teams()).unwrap_err();
        assert!(matches!(err, DomainError::MissingConfiguration(msg) if msg.contains("Purple")));
    }

    #[test]
    fn standings_fail_on_blank_team() {
        let students = vec![test_student("Eve", "  ", 0, 0)];
        let err = compute_standings(&students, &test_teams()).unwrap_err();
        assert!(matches!(err, DomainError::MissingConfiguration(_)));
    }

    #[test]
    fn group_by_team_keeps_first_seen_order() {
        let students = vec![
            test_student("Zoe", "Blue", 0, 0),
            test_student("Ann", "Red", 0, 0),
            test_student("Bo", "Blue", 0, 0),
            test_student("Al", "Red", 0, 0),
        ];

        let groups = group_by_team(&students);

        let order: Vec<&str> = groups.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["Blue", "Red"]);
        let blue: Vec<&str> = groups["Blue"].iter().map(|s| s.name.as_str()).collect();
        assert_eq!(blue, vec!["Zoe", "Bo"]);
        let red: Vec<&str> = groups["Red"].iter().map(|s| s.name.as_str()).collect();
        assert_eq!(red, vec!["Ann", "Al"]);
    }

    #[test]
    fn group_by_team_partitions_students() {
        let students = vec![
            test_student("Ann", "Red", 3, 30),
            test_student("Bo", "Red", 1, 10),
            test_student("Cy", "Blue", 1, 5),
            test_student("Dee", "Purple", 0, 0),
            test_student("Eve", "", 0, 0),
        ];

        let groups = group_by_team(&students);

        let grouped: usize = groups.values().map(Vec::len).sum();
        assert_eq!(grouped, students.len());
        for student in &students {
            let hits = groups
                .values()
                .filter(|members| members.contains(student))
                .count();
            assert_eq!(hits, 1, "{} should be in exactly one group", student.name);
        }
        assert!(groups.contains_key("Purple"));
        assert_eq!(groups[UNASSIGNED_TEAM][0].name, "Eve");
    }

    #[test]
    fn group_by_team_of_nothing_is_empty() {
        assert!(group_by_team(&[]).is_empty());
    }

    #[test]
    fn progress_counts_credits_case_insensitively() {
        let progress =
            summarize_progress("ANN", &sample_students(), &sample_sections(), &test_teams());

        assert_eq!(progress.name, "Ann");
        assert_eq!(progress.total_sections, 3);
        assert_eq!(progress.silver_earned, 2);
        assert_eq!(progress.gold_earned, 1);
        assert_eq!(progress.color.as_deref(), Some("#e53935"));
        assert_eq!(progress.student, Some(test_student("Ann", "Red", 3, 30)));
    }

    #[test]
    fn progress_keeps_section_order() {
        let progress =
            summarize_progress("Ann", &sample_students(), &sample_sections(), &test_teams());

        let order: Vec<&str> = progress.sections.iter().map(|s| s.section.as_str()).collect();
        assert_eq!(order, vec!["1:1", "1:2", "1:3"]);
    }

    #[test]
    fn progress_of_departed_student_uses_section_team() {
        let sections = vec![test_section("Zoe", "Blue", "2:1", true, true)];

        let progress = summarize_progress("zoe", &sample_students(), &sections, &test_teams());

        assert!(progress.student.is_none());
        assert_eq!(progress.name, "zoe");
        assert_eq!(progress.color.as_deref(), Some("#1e88e5"));
        assert_eq!(progress.gold_earned, 1);
    }

    #[test]
    fn progress_without_sections_is_empty() {
        let progress = summarize_progress("Cy", &sample_students(), &sample_sections(), &test_teams());

        assert_eq!(progress.total_sections, 0);
        assert_eq!(progress.silver_earned, 0);
        assert!(progress.sections.is_empty());
        assert_eq!(progress.color.as_deref(), Some("#1e88e5"));
    }

    #[test]
    fn progress_of_unconfigured_team_has_no_color() {
        let students = vec![test_student("Eve", "Purple", 0, 0)];

        let progress = summarize_progress("Eve", &students, &[], &test_teams());

        assert!(progress.color.is_none());
    }
}
