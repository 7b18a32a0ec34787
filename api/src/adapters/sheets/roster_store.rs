//! Google Sheets adapter for StudentStore

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::client::{sheet_range, SheetsClient};
use super::table::{cell_count, cell_text, SheetTable};
use crate::domain::entities::Student;
use crate::domain::ports::StudentStore;
use crate::error::{DomainError, SheetsError};

const NAME_COLUMN: &str = "Name";
/// Older sheets label the team column `Team`
const TEAM_COLUMNS: [&str; 2] = ["Group", "Team"];
const SECTIONS_COLUMN: &str = "Sections_Completed";
const POINTS_COLUMN: &str = "Points";

/// Roster stored as rows of a spreadsheet tab
pub struct SheetsStudentStore {
    client: Arc<SheetsClient>,
    sheet: String,
}

impl SheetsStudentStore {
    pub fn new(client: Arc<SheetsClient>, sheet: String) -> Self {
        Self { client, sheet }
    }

    async fn load_table(&self) -> Result<SheetTable, SheetsError> {
        let values = self
            .client
            .get_values(&sheet_range(&self.sheet, "A1:ZZ"))
            .await?;
        Ok(SheetTable::from_values(&self.sheet, values))
    }

    /// Students with their 0-based sheet row index
    async fn indexed_students(&self) -> Result<Vec<(usize, Student)>, SheetsError> {
        let table = self.load_table().await?;
        if table.width() == 0 {
            return Ok(Vec::new());
        }

        let name_col = table.require_column(&[NAME_COLUMN])?;
        let team_col = table.require_column(&TEAM_COLUMNS)?;
        let sections_col = table.column(SECTIONS_COLUMN);
        let points_col = table.column(POINTS_COLUMN);

        let students = table
            .rows()
            .filter_map(|(index, row)| {
                let name = cell_text(row.get(name_col));
                if name.is_empty() {
                    return None;
                }
                Some((
                    index,
                    Student {
                        name,
                        team: cell_text(row.get(team_col)),
                        sections_completed: cell_count(sections_col.and_then(|c| row.get(c))),
                        points: cell_count(points_col.and_then(|c| row.get(c))),
                    },
                ))
            })
            .collect();

        Ok(students)
    }

    async fn append(&self, student: &Student) -> Result<(), SheetsError> {
        let header = self
            .client
            .get_values(&sheet_range(&self.sheet, "A1:ZZ1"))
            .await?;
        let table = SheetTable::from_values(&self.sheet, header);

        let name_col = table.require_column(&[NAME_COLUMN])?;
        let team_col = table.require_column(&TEAM_COLUMNS)?;

        let mut row = vec![Value::String(String::new()); table.width()];
        row[name_col] = Value::from(student.name.as_str());
        row[team_col] = Value::from(student.team.as_str());
        if let Some(col) = table.column(SECTIONS_COLUMN) {
            row[col] = Value::from(student.sections_completed);
        }
        if let Some(col) = table.column(POINTS_COLUMN) {
            row[col] = Value::from(student.points);
        }

        self.client
            .append_row(&sheet_range(&self.sheet, "A1"), &row)
            .await
    }

    async fn remove(&self, name: &str) -> Result<usize, SheetsError> {
        let rows: Vec<usize> = self
            .indexed_students()
            .await?
            .into_iter()
            .filter(|(_, s)| s.name == name)
            .map(|(index, _)| index)
            .collect();

        if rows.is_empty() {
            return Ok(0);
        }

        let sheet_id = self.client.sheet_id(&self.sheet).await?;
        self.client.delete_rows(sheet_id, &rows).await?;
        Ok(rows.len())
    }
}

#[async_trait]
impl StudentStore for SheetsStudentStore {
    async fn list_students(&self) -> Result<Vec<Student>, DomainError> {
        let students = self.indexed_students().await?;
        Ok(students.into_iter().map(|(_, s)| s).collect())
    }

    async fn append_student(&self, student: &Student) -> Result<(), DomainError> {
        Ok(self.append(student).await?)
    }

    async fn remove_students(&self, name: &str) -> Result<usize, DomainError> {
        Ok(self.remove(name).await?)
    }
}
