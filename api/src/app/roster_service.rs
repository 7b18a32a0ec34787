//! Roster service
//!
//! Read projections for the roster and dashboard pages, and the add/delete
//! student mutations. Each call is a single read-aggregate or
//! validate-write cycle against the record store; nothing is cached between
//! calls.

use std::sync::Arc;

use serde::Serialize;

use crate::app::aggregator::{compute_standings, group_by_team, Standings, TeamGroups};
use crate::domain::entities::{Student, TeamDirectory};
use crate::domain::ports::StudentStore;
use crate::error::DomainError;

/// Everything the roster page needs
#[derive(Debug, Clone, Serialize)]
pub struct RosterView {
    pub groups: TeamGroups,
    /// Known team names, for the add-student form
    pub teams: Vec<String>,
}

/// Service for reading and editing the roster
pub struct RosterService<S>
where
    S: StudentStore + ?Sized,
{
    store: Arc<S>,
    teams: Arc<TeamDirectory>,
}

impl<S> RosterService<S>
where
    S: StudentStore + ?Sized,
{
    pub fn new(store: Arc<S>, teams: Arc<TeamDirectory>) -> Self {
        Self { store, teams }
    }

    /// Students grouped by team plus the known team list
    pub async fn roster(&self) -> Result<RosterView, DomainError> {
        let students = self.store.list_students().await?;
        tracing::debug!("Grouping {} students for roster", students.len());

        Ok(RosterView {
            groups: group_by_team(&students),
            teams: self.teams.names().map(str::to_string).collect(),
        })
    }

    /// Per-team point totals for the dashboard
    pub async fn standings(&self) -> Result<Standings, DomainError> {
        let students = self.store.list_students().await?;
        tracing::debug!("Computing standings for {} students", students.len());

        compute_standings(&students, &self.teams)
    }

    /// Enroll a new student with no progress.
    ///
    /// The name is trimmed and must be non-empty, the team must be a known
    /// team, and no existing student (in any team) may already carry the name.
    pub async fn add_student(&self, name: &str, team: &str) -> Result<Student, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation(
                "Student name must not be empty".to_string(),
            ));
        }

        let team = team.trim();
        if !self.teams.contains(team) {
            return Err(DomainError::Validation(format!("Unknown team '{}'", team)));
        }

        let existing = self.store.list_students().await?;
        if let Some(other) = existing.iter().find(|s| s.name == name) {
            return Err(DomainError::AlreadyExists(format!(
                "Student '{}' is already on team '{}'",
                name, other.team
            )));
        }

        let student = Student::enrolled(name, team);
        self.store.append_student(&student).await?;
        tracing::info!(name = %student.name, team = %student.team, "Student added");

        Ok(student)
    }

    /// Remove every student with exactly this name; returns how many went.
    pub async fn delete_student(&self, name: &str) -> Result<usize, DomainError> {
        let existing = self.store.list_students().await?;
        if !existing.iter().any(|s| s.name == name) {
            return Err(DomainError::NotFound(format!("Student '{}'", name)));
        }

        let removed = self.store.remove_students(name).await?;
        if removed == 0 {
            // Row vanished between the read and the write
            return Err(DomainError::NotFound(format!("Student '{}'", name)));
        }
        tracing::info!(name = %name, removed, "Student deleted");

        Ok(removed)
    }
}
