//! Google Sheets adapter for SectionStore

use std::sync::Arc;

use async_trait::async_trait;

use super::client::{sheet_range, SheetsClient};
use super::table::{cell_flag, cell_text, SheetTable};
use crate::domain::entities::SectionRecord;
use crate::domain::ports::SectionStore;
use crate::error::{DomainError, SheetsError};

const NAME_COLUMN: &str = "Name";
const TEAM_COLUMN: &str = "Team";
const DATE_COLUMN: &str = "Date";
const SECTION_COLUMN: &str = "Section";
const COMPLETE_COLUMN: &str = "Section Complete";
const SILVER_COLUMN: &str = "Silver Credit";
const GOLD_COLUMN: &str = "Gold Credit";

/// Completed sections stored as rows of a spreadsheet tab
pub struct SheetsSectionStore {
    client: Arc<SheetsClient>,
    sheet: String,
}

impl SheetsSectionStore {
    pub fn new(client: Arc<SheetsClient>, sheet: String) -> Self {
        Self { client, sheet }
    }

    async fn load(&self) -> Result<Vec<SectionRecord>, SheetsError> {
        let values = self
            .client
            .get_values(&sheet_range(&self.sheet, "A1:ZZ"))
            .await?;
        let table = SheetTable::from_values(&self.sheet, values);
        if table.width() == 0 {
            return Ok(Vec::new());
        }

        let name_col = table.require_column(&[NAME_COLUMN])?;
        let section_col = table.require_column(&[SECTION_COLUMN])?;
        let team_col = table.column(TEAM_COLUMN);
        let date_col = table.column(DATE_COLUMN);
        let complete_col = table.column(COMPLETE_COLUMN);
        let silver_col = table.column(SILVER_COLUMN);
        let gold_col = table.column(GOLD_COLUMN);

        let records = table
            .rows()
            .filter_map(|(_, row)| {
                let cell = |col: Option<usize>| col.and_then(|c| row.get(c));
                let name = cell_text(row.get(name_col));
                if name.is_empty() {
                    return None;
                }
                Some(SectionRecord {
                    name,
                    team: cell_text(cell(team_col)),
                    date: cell_text(cell(date_col)),
                    section: cell_text(row.get(section_col)),
                    section_complete: cell_flag(cell(complete_col)),
                    silver_credit: cell_flag(cell(silver_col)),
                    gold_credit: cell_flag(cell(gold_col)),
                })
            })
            .collect();

        Ok(records)
    }
}

#[async_trait]
impl SectionStore for SheetsSectionStore {
    async fn list_sections(&self) -> Result<Vec<SectionRecord>, DomainError> {
        Ok(self.load().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sheets::Credentials;
    use crate::test_utils::test_section;
    use serde_json::json;
    use wiremock::matchers::{method, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn store_with(values: serde_json::Value) -> (MockServer, SheetsSectionStore) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex(r"/values/.*Completed.*A1%3AZZ$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "values": values })))
            .mount(&server)
            .await;
        let client = SheetsClient::new(
            server.uri(),
            "sheet-123".to_string(),
            Credentials::AccessToken("test-token".to_string()),
        );
        let store = SheetsSectionStore::new(Arc::new(client), "Completed Sections RAW".to_string());
        (server, store)
    }

    #[tokio::test]
    async fn reads_sections_by_header() {
        let (_server, store) = store_with(json!([
            ["timestamp", "Name", "Team", "Date", "Section", "Section Complete", "Silver Credit", "Gold Credit"],
            ["2025-06-01 10:00:00", "Ann", "Red", "6/1/2025", "1:1", true, true, false],
            ["2025-06-01 10:05:00", "Bo", "Red", "6/1/2025", "1:1", "TRUE", "FALSE", "FALSE"],
            [],
            ["", "", "Red", "6/1/2025", "1:2"]
        ]))
        .await;

        let sections = store.list_sections().await.unwrap();

        assert_eq!(
            sections,
            vec![
                test_section("Ann", "Red", "1:1", true, false),
                test_section("Bo", "Red", "1:1", false, false),
            ]
        );
    }

    #[tokio::test]
    async fn credit_columns_are_optional() {
        let (_server, store) = store_with(json!([["Name", "Section"], ["Ann", 3]])).await;

        let sections = store.list_sections().await.unwrap();

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].section, "3");
        assert!(!sections[0].silver_credit);
        assert!(!sections[0].section_complete);
        assert_eq!(sections[0].team, "");
    }

    #[tokio::test]
    async fn missing_section_column_is_store_error() {
        let (_server, store) = store_with(json!([["Name", "Team"], ["Ann", "Red"]])).await;

        let err = store.list_sections().await.unwrap_err();

        assert!(matches!(err, DomainError::StoreUnavailable(msg) if msg.contains("Section")));
    }

    #[tokio::test]
    async fn blank_sheet_has_no_sections() {
        let (_server, store) = store_with(json!([])).await;

        assert!(store.list_sections().await.unwrap().is_empty());
    }
}
