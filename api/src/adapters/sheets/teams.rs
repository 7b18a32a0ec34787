//! Team color table read from the Teams sheet

use super::client::{sheet_range, SheetsClient};
use super::table::{cell_text, SheetTable};
use crate::domain::entities::{Team, TeamDirectory};
use crate::error::SheetsError;

const TEAM_COLUMN: &str = "Team";
const COLOR_COLUMN: &str = "Color";

/// Read the team → color table once, at start-up
pub async fn load_team_directory(
    client: &SheetsClient,
    sheet: &str,
) -> Result<TeamDirectory, SheetsError> {
    let values = client.get_values(&sheet_range(sheet, "A1:ZZ")).await?;
    let table = SheetTable::from_values(sheet, values);

    let team_col = table.require_column(&[TEAM_COLUMN])?;
    let color_col = table.require_column(&[COLOR_COLUMN])?;

    let mut teams = Vec::new();
    for (index, row) in table.rows() {
        let name = cell_text(row.get(team_col));
        if name.is_empty() {
            continue;
        }
        let color = cell_text(row.get(color_col));
        match Team::new(&name, &color) {
            Ok(team) => teams.push(team),
            Err(e) => tracing::warn!("Skipping team on row {}: {}", index + 1, e),
        }
    }

    Ok(TeamDirectory::new(teams))
}
