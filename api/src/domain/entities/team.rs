//! Team domain entity
//!
//! Teams are not stored on their own. A team's members are derived by grouping
//! students; only the name and display color are configured up front.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::DomainError;

/// A configured team and its display color
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub name: String,
    pub color: String,
}

impl Team {
    /// Build a team, checking the color is safe to place in a style attribute
    pub fn new(name: &str, color: &str) -> Result<Self, DomainError> {
        let (name, color) = (name.trim(), color.trim());
        if name.is_empty() {
            return Err(DomainError::Validation("Team name must not be empty".to_string()));
        }
        if !is_plain_color(color) {
            return Err(DomainError::Validation(format!(
                "Team '{}' has invalid color '{}': expected #hex or a color name",
                name, color
            )));
        }
        Ok(Self {
            name: name.to_string(),
            color: color.to_string(),
        })
    }
}

/// `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, or a bare color keyword
fn is_plain_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => !color.is_empty() && color.chars().all(|c| c.is_ascii_alphabetic()),
    }
}

/// Ordered table of known teams and their colors.
///
/// Built once at start-up and shared read-only; iteration follows the order
/// teams were configured in.
#[derive(Debug, Clone, Default)]
pub struct TeamDirectory {
    colors: IndexMap<String, String>,
}

impl TeamDirectory {
    pub fn new(teams: impl IntoIterator<Item = Team>) -> Self {
        let mut colors = IndexMap::new();
        for team in teams {
            // First definition wins
            colors.entry(team.name).or_insert(team.color);
        }
        Self { colors }
    }

    /// Parse a `Name=color,Name=color` list.
    pub fn parse(list: &str) -> Result<Self, DomainError> {
        let mut teams = Vec::new();
        for entry in list.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, color) = entry.split_once('=').ok_or_else(|| {
                DomainError::Validation(format!("Expected Name=color, got '{}'", entry))
            })?;
            teams.push(Team::new(name, color)?);
        }
        Ok(Self::new(teams))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }

    pub fn color_of(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }

    /// Team names in configured order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    pub fn teams(&self) -> impl Iterator<Item = Team> + '_ {
        self.colors.iter().map(|(name, color)| Team {
            name: name.clone(),
            color: color.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_configured_order() {
        let dir = TeamDirectory::parse("Red=#e53935, Blue=#1e88e5,Green=green").unwrap();
        let names: Vec<&str> = dir.names().collect();
        assert_eq!(names, vec!["Red", "Blue", "Green"]);
        assert_eq!(dir.color_of("Blue"), Some("#1e88e5"));
        assert_eq!(dir.len(), 3);
    }

    #[test]
    fn parse_rejects_entry_without_color() {
        assert!(matches!(
            TeamDirectory::parse("Red"),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            TeamDirectory::parse("Red="),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn parse_rejects_style_injection() {
        let err = TeamDirectory::parse("Red=red; background:url(x)").unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("invalid color")));
    }

    #[test]
    fn team_colors_accept_hex_and_keywords_only() {
        assert!(Team::new("Red", "#e53935").is_ok());
        assert!(Team::new("Red", "#fff").is_ok());
        assert!(Team::new("Red", "#e53935cc").is_ok());
        assert!(Team::new("Red", "crimson").is_ok());

        assert!(Team::new("Red", "#e5393").is_err());
        assert!(Team::new("Red", "#zzzzzz").is_err());
        assert!(Team::new("Red", "rgb(1,2,3)").is_err());
        assert!(Team::new("Red", "red\" onclick=\"x").is_err());
        assert!(Team::new("Red", "").is_err());
        assert!(Team::new("  ", "red").is_err());
    }

    #[test]
    fn parse_empty_string_gives_empty_directory() {
        let dir = TeamDirectory::parse("").unwrap();
        assert!(dir.is_empty());
    }

    #[test]
    fn duplicate_team_keeps_first_color() {
        let dir = TeamDirectory::new(vec![
            Team::new("Red", "red").unwrap(),
            Team::new("Red", "crimson").unwrap(),
        ]);
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.color_of("Red"), Some("red"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let dir = TeamDirectory::parse("Red=red").unwrap();
        assert!(dir.contains("Red"));
        assert!(!dir.contains("red"));
        assert_eq!(dir.color_of("Purple"), None);
    }
}
