//! Progress service
//!
//! Read-only views over the completed-sections log: who is enrolled, what
//! each student has finished, and the credits recorded per section.

use std::sync::Arc;

use serde::Serialize;

use crate::app::aggregator::{summarize_progress, StudentProgress};
use crate::domain::entities::{SectionRecord, Student, TeamDirectory};
use crate::domain::ports::{SectionStore, StudentStore};
use crate::error::DomainError;

/// A single recorded section, addressed by its position in the student's list
#[derive(Debug, Clone, Serialize)]
pub struct SectionDetail {
    pub name: String,
    pub index: usize,
    pub record: SectionRecord,
}

pub struct ProgressService<S, C>
where
    S: StudentStore + ?Sized,
    C: SectionStore + ?Sized,
{
    students: Arc<S>,
    sections: Arc<C>,
    teams: Arc<TeamDirectory>,
}

impl<S, C> ProgressService<S, C>
where
    S: StudentStore + ?Sized,
    C: SectionStore + ?Sized,
{
    pub fn new(students: Arc<S>, sections: Arc<C>, teams: Arc<TeamDirectory>) -> Self {
        Self {
            students,
            sections,
            teams,
        }
    }

    /// Every enrolled student, in roster order
    pub async fn overview(&self) -> Result<Vec<Student>, DomainError> {
        self.students.list_students().await
    }

    /// Sections and credit totals for one student.
    ///
    /// A name with neither a roster row nor any recorded section is unknown.
    pub async fn student_progress(&self, name: &str) -> Result<StudentProgress, DomainError> {
        let (students, sections) = tokio::try_join!(
            self.students.list_students(),
            self.sections.list_sections()
        )?;

        let progress = summarize_progress(name, &students, &sections, &self.teams);
        if progress.student.is_none() && progress.sections.is_empty() {
            return Err(DomainError::NotFound(format!("Student '{}'", name)));
        }
        tracing::debug!(
            name = %progress.name,
            sections = progress.total_sections,
            "Summarized progress"
        );

        Ok(progress)
    }

    /// The `index`-th section recorded for a student (0-based, source order)
    pub async fn section_detail(
        &self,
        name: &str,
        index: usize,
    ) -> Result<SectionDetail, DomainError> {
        let record = self
            .sections
            .list_sections()
            .await?
            .into_iter()
            .filter(|s| s.is_for(name))
            .nth(index)
            .ok_or_else(|| {
                DomainError::NotFound(format!("Section {} for student '{}'", index, name))
            })?;

        Ok(SectionDetail {
            name: record.name.clone(),
            index,
            record,
        })
    }
}
