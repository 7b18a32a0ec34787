//! Google Sheets API client implementation
//!
//! Covers the handful of v4 endpoints the roster needs: reading a range,
//! appending a row, resolving a sheet's numeric id and deleting rows.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use urlencoding::encode;

use super::auth::{Credentials, TokenProvider};
use crate::error::SheetsError;

/// Sheet-qualified A1 range; the title is quoted so spaces survive
pub fn sheet_range(sheet: &str, cells: &str) -> String {
    format!("'{}'!{}", sheet.replace('\'', "''"), cells)
}

/// Client for a single spreadsheet
pub struct SheetsClient {
    http: Client,
    base_url: String,
    spreadsheet_id: String,
    auth: TokenProvider,
}

/// Request/response types for the Sheets API
#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

#[derive(Serialize)]
struct AppendRequest<'a> {
    values: [&'a [Value]; 1],
}

#[derive(Deserialize)]
struct SpreadsheetResponse {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SheetProperties {
    sheet_id: i64,
    title: String,
}

#[derive(Serialize)]
struct BatchUpdateRequest {
    requests: Vec<UpdateRequest>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateRequest {
    delete_dimension: DeleteDimension,
}

#[derive(Serialize)]
struct DeleteDimension {
    range: DimensionRange,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DimensionRange {
    sheet_id: i64,
    dimension: &'static str,
    start_index: usize,
    end_index: usize,
}

impl SheetsClient {
    pub fn new(base_url: String, spreadsheet_id: String, credentials: Credentials) -> Self {
        let http = Client::new();
        Self {
            auth: TokenProvider::new(http.clone(), credentials),
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            spreadsheet_id,
        }
    }

    fn spreadsheet_url(&self, suffix: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}{}",
            self.base_url,
            encode(&self.spreadsheet_id),
            suffix
        )
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, SheetsError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| SheetsError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(SheetsError::Unauthorized)
        } else if status.as_u16() == 429 {
            Err(SheetsError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(SheetsError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<(), SheetsError> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else if status.as_u16() == 401 {
            Err(SheetsError::Unauthorized)
        } else if status.as_u16() == 429 {
            Err(SheetsError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(SheetsError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Read a range as raw cell values, rows in sheet order.
    ///
    /// Numbers and booleans arrive typed; dates arrive as their displayed text.
    /// Trailing empty cells and rows are omitted by the API.
    pub async fn get_values(&self, range: &str) -> Result<Vec<Vec<Value>>, SheetsError> {
        let token = self.auth.access_token().await?;
        let resp = self
            .http
            .get(self.spreadsheet_url(&format!("/values/{}", encode(range))))
            .query(&[
                ("valueRenderOption", "UNFORMATTED_VALUE"),
                ("dateTimeRenderOption", "FORMATTED_STRING"),
            ])
            .bearer_auth(token)
            .send()
            .await?;

        let range: ValueRange = self.handle_response(resp).await?;
        Ok(range.values)
    }

    /// Append one row after the last row of the table in `range`
    pub async fn append_row(&self, range: &str, row: &[Value]) -> Result<(), SheetsError> {
        let token = self.auth.access_token().await?;
        let resp = self
            .http
            .post(self.spreadsheet_url(&format!("/values/{}:append", encode(range))))
            .query(&[
                ("valueInputOption", "USER_ENTERED"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .bearer_auth(token)
            .json(&AppendRequest { values: [row] })
            .send()
            .await?;

        self.handle_empty_response(resp).await
    }

    /// Numeric id of the sheet with this title
    pub async fn sheet_id(&self, title: &str) -> Result<i64, SheetsError> {
        let token = self.auth.access_token().await?;
        let resp = self
            .http
            .get(self.spreadsheet_url(""))
            .query(&[("fields", "sheets.properties")])
            .bearer_auth(token)
            .send()
            .await?;

        let spreadsheet: SpreadsheetResponse = self.handle_response(resp).await?;
        spreadsheet
            .sheets
            .into_iter()
            .find(|s| s.properties.title == title)
            .map(|s| s.properties.sheet_id)
            .ok_or_else(|| SheetsError::SheetNotFound(title.to_string()))
    }

    /// Delete whole rows (0-based indices) in a single batch.
    ///
    /// Deletions run bottom-up so earlier deletes don't shift later indices.
    pub async fn delete_rows(&self, sheet_id: i64, rows: &[usize]) -> Result<(), SheetsError> {
        let mut rows = rows.to_vec();
        rows.sort_unstable_by(|a, b| b.cmp(a));
        rows.dedup();

        let requests = rows
            .into_iter()
            .map(|row| UpdateRequest {
                delete_dimension: DeleteDimension {
                    range: DimensionRange {
                        sheet_id,
                        dimension: "ROWS",
                        start_index: row,
                        end_index: row + 1,
                    },
                },
            })
            .collect();

        let token = self.auth.access_token().await?;
        let resp = self
            .http
            .post(self.spreadsheet_url(":batchUpdate"))
            .bearer_auth(token)
            .json(&BatchUpdateRequest { requests })
            .send()
            .await?;

        self.handle_empty_response(resp).await
    }
}
