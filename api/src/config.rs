use std::env;

use anyhow::{anyhow, Context};

use crate::adapters::Credentials;
use crate::domain::entities::TeamDirectory;

/// Throttle for the mutating routes, per client IP
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriteRateLimit {
    /// Sustained requests per second; never 0
    pub per_second: u64,
    pub burst: u32,
}

impl WriteRateLimit {
    /// Time for one request slot to refill
    pub fn replenish_interval_ms(&self) -> u64 {
        (1000 / self.per_second.max(1)).max(1)
    }
}

#[derive(Clone)]
pub struct Config {
    /// Spreadsheet holding the roster and teams tabs
    pub spreadsheet_id: String,
    pub sheets_api_url: String,
    pub roster_sheet: String,
    pub teams_sheet: String,
    /// Log of completed sections, one row per section
    pub sections_sheet: String,
    pub credentials: Credentials,
    /// Static team colors; when unset they are read from the teams sheet
    pub team_colors: Option<TeamDirectory>,
    pub write_rate_limit: Option<WriteRateLimit>,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let spreadsheet_id = get("SPREADSHEET_ID")
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| anyhow!("SPREADSHEET_ID must be set"))?;

        let team_colors = get("TEAM_COLORS")
            .map(|list| TeamDirectory::parse(&list).context("TEAM_COLORS"))
            .transpose()?;

        let write_rate_limit = match (get("WRITE_RATE_PER_SECOND"), get("WRITE_RATE_BURST")) {
            (None, None) => None,
            (per_second, burst) => {
                let limit = WriteRateLimit {
                    per_second: parse_or(per_second, "WRITE_RATE_PER_SECOND", 2)?,
                    burst: parse_or(burst, "WRITE_RATE_BURST", 5)?,
                };
                if limit.per_second == 0 || limit.burst == 0 {
                    return Err(anyhow!(
                        "WRITE_RATE_PER_SECOND and WRITE_RATE_BURST must be positive"
                    ));
                }
                Some(limit)
            }
        };

        Ok(Self {
            spreadsheet_id,
            sheets_api_url: get("SHEETS_API_URL")
                .unwrap_or_else(|| "https://sheets.googleapis.com".to_string()),
            roster_sheet: get("ROSTER_SHEET").unwrap_or_else(|| "Master Roster".to_string()),
            teams_sheet: get("TEAMS_SHEET").unwrap_or_else(|| "Teams".to_string()),
            sections_sheet: get("SECTIONS_SHEET")
                .unwrap_or_else(|| "Completed Sections RAW".to_string()),
            credentials: load_credentials(&get)?,
            team_colors,
            write_rate_limit,
            port: parse_or(get("PORT"), "PORT", 8080)?,
        })
    }
}

/// Static token first, then an inline key, then a key file
fn load_credentials(get: &impl Fn(&str) -> Option<String>) -> anyhow::Result<Credentials> {
    if let Some(token) = get("GOOGLE_ACCESS_TOKEN") {
        return Ok(Credentials::AccessToken(token));
    }

    if let Some(json) = get("GOOGLE_SHEETS_CREDS") {
        return Credentials::service_account_from_json(&json).context("GOOGLE_SHEETS_CREDS");
    }

    let path = get("GOOGLE_CREDENTIALS_FILE").unwrap_or_else(|| "client_secret.json".to_string());
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("reading Google credentials from {}", path))?;
    Credentials::service_account_from_json(&json).with_context(|| path.clone())
}

fn parse_or<T: std::str::FromStr>(
    value: Option<String>,
    key: &str,
    default: T,
) -> anyhow::Result<T> {
    match value {
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| anyhow!("{} must be a number, got '{}'", key, v)),
        None => Ok(default),
    }
}
