//! Bugboard: static QA dashboard generator
//!
//! This library turns a JSON list of documented game bugs into a single
//! self-contained HTML page with client-side filtering by game, severity
//! and bug type.

pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod loader;
pub mod markup;
pub mod output;
pub mod render;
pub mod watcher;

use serde::{Deserialize, Deserializer, Serialize};

pub use catalog::{Game, Severity};

/// Game key used when a record omits `game`
pub const DEFAULT_GAME: &str = "unknown";
/// Severity key used when a record omits `severity`
pub const DEFAULT_SEVERITY: &str = "minor";

/// One documented defect entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugRecord {
    /// Unique identifier (string or integer in the source JSON)
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Game key, looked up in the game catalog
    #[serde(default = "default_game")]
    pub game: String,
    /// Display name used when `game` is not in the catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_name: Option<String>,
    /// Short title shown in the card header
    #[serde(default)]
    pub title: String,
    /// Free-form bug type key
    #[serde(rename = "type", default)]
    pub bug_type: String,
    /// Display text for the type column (falls back to the title-cased key)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_display: Option<String>,
    /// Severity key, looked up in the severity catalog
    #[serde(default = "default_severity")]
    pub severity: String,
    /// Long description
    #[serde(default)]
    pub description: String,
    /// Tag chips
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ordered reproduction steps
    #[serde(default)]
    pub reproduction_steps: Vec<String>,
    /// Video evidence link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Link text shown while no video is attached
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_text: Option<String>,
}

impl BugRecord {
    /// Create a record with the given id and every other field defaulted
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            game: default_game(),
            game_name: None,
            title: String::new(),
            bug_type: String::new(),
            type_display: None,
            severity: default_severity(),
            description: String::new(),
            tags: Vec::new(),
            reproduction_steps: Vec::new(),
            video_url: None,
            video_text: None,
        }
    }

    /// Catalog entry for this record's game
    pub fn game(&self) -> Game {
        Game::from_key(&self.game)
    }

    /// Catalog entry for this record's severity
    pub fn severity(&self) -> Severity {
        Severity::from_key(&self.severity)
    }

    /// Label shown for the game tag
    pub fn game_label(&self) -> String {
        match self.game().label() {
            Some(label) => label.to_string(),
            None => self
                .game_name
                .clone()
                .unwrap_or_else(|| self.game.clone()),
        }
    }

    /// Text shown in the card's type column
    pub fn type_display(&self) -> String {
        match self.type_display {
            Some(ref display) => display.clone(),
            None => catalog::title_case(&self.bug_type),
        }
    }

    /// Key of this record along the given filter dimension
    pub fn key_for(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Game => &self.game,
            Dimension::Severity => &self.severity,
            Dimension::Type => &self.bug_type,
        }
    }
}

fn default_game() -> String {
    DEFAULT_GAME.to_string()
}

fn default_severity() -> String {
    DEFAULT_SEVERITY.to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// One of the three independent filter axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Game,
    Severity,
    Type,
}

impl Dimension {
    /// Membership priority when a key belongs to more than one axis
    pub const PRIORITY: [Dimension; 3] = [Dimension::Game, Dimension::Severity, Dimension::Type];
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::Game => write!(f, "game"),
            Dimension::Severity => write!(f, "severity"),
            Dimension::Type => write!(f, "type"),
        }
    }
}

/// The single active filter selection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FilterKey {
    /// Sentinel that shows every card
    #[default]
    All,
    /// A game, severity or type key
    Key(String),
}

impl FilterKey {
    pub const ALL: &'static str = "all";

    /// Parse a raw filter string; `"all"` maps to the sentinel
    pub fn parse(raw: &str) -> Self {
        if raw == Self::ALL {
            FilterKey::All
        } else {
            FilterKey::Key(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterKey::All => Self::ALL,
            FilterKey::Key(k) => k,
        }
    }
}

impl std::fmt::Display for FilterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
