//! Header-addressed view over raw sheet values
//!
//! Row 1 holds column names; columns are found by name, never by position.

use serde_json::Value;

use crate::error::SheetsError;

pub struct SheetTable {
    sheet: String,
    header: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl SheetTable {
    /// Split raw values into header and data rows
    pub fn from_values(sheet: &str, mut values: Vec<Vec<Value>>) -> Self {
        let header = if values.is_empty() {
            Vec::new()
        } else {
            values
                .remove(0)
                .iter()
                .map(|cell| cell_text(Some(cell)))
                .collect()
        };

        Self {
            sheet: sheet.to_string(),
            header,
            rows: values,
        }
    }

    pub fn width(&self) -> usize {
        self.header.len()
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    /// First of `names` present in the header
    pub fn require_column(&self, names: &[&str]) -> Result<usize, SheetsError> {
        names
            .iter()
            .find_map(|name| self.column(name))
            .ok_or_else(|| SheetsError::MissingColumn {
                sheet: self.sheet.clone(),
                column: names.join("/"),
            })
    }

    /// Data rows paired with their 0-based row index in the sheet
    pub fn rows(&self) -> impl Iterator<Item = (usize, &[Value])> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| (i + 1, row.as_slice()))
    }
}

/// Cell rendered as trimmed text; missing cells read as empty
pub fn cell_text(cell: Option<&Value>) -> String {
    match cell {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Cell read as a non-negative count; blank or unreadable cells read as 0
pub fn cell_count(cell: Option<&Value>) -> u32 {
    let parsed = match cell {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Some(Value::String(s)) if s.trim().is_empty() => Some(0),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        None | Some(Value::Null) => Some(0),
        _ => None,
    };

    match parsed {
        Some(n) => u32::try_from(n).unwrap_or(u32::MAX),
        None => {
            tracing::warn!("Unreadable count cell {:?}, using 0", cell);
            0
        }
    }
}

/// Checkbox-style cell: TRUE, "true", "yes" or 1 are set; anything else is not
pub fn cell_flag(cell: Option<&Value>) -> bool {
    match cell {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64() == Some(1.0),
        Some(Value::String(s)) => matches!(s.trim().to_lowercase().as_str(), "true" | "yes" | "1"),
        _ => false,
    }
}
