//! Config schema and deserialization

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Input file used when neither CLI nor config names one
pub const DEFAULT_INPUT: &str = "bugs.json";
/// Output file used when neither CLI nor config names one
pub const DEFAULT_OUTPUT: &str = "qa-dashboard.html";
/// Remote font stylesheet linked from the page head
pub const DEFAULT_FONT_STYLESHEET: &str = "https://fonts.googleapis.com/css2?family=JetBrains+Mono:wght@300;400;600;700&family=Syne:wght@400;700;800&display=swap";

/// A headline number in the stats bar (e.g. "100+" / "Hrs User Testing")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub value: String,
    pub label: String,
}

/// Portfolio owner details rendered in the header, about panel and footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    /// Full name shown in the header
    pub name: String,
    /// Logo mark text; derived from `name` when empty
    pub initials: String,
    /// Job title under the name
    pub role: String,
    pub email: String,
    pub phone: String,
    /// Portfolio or storefront URL
    pub website: String,
    pub location: String,
    /// Availability badge text; empty hides the badge
    pub availability: String,
    /// Paragraph for the about panel
    pub background: String,
    pub skills: Vec<String>,
    /// Extra stats appended after the computed ones
    pub highlights: Vec<Highlight>,
    /// Footer tagline
    pub tagline: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: String::new(),
            initials: String::new(),
            role: "QA Tester".to_string(),
            email: String::new(),
            phone: String::new(),
            website: String::new(),
            location: String::new(),
            availability: String::new(),
            background: String::new(),
            skills: [
                "Bug documentation & reproduction steps",
                "Defect classification & severity rating",
                "Screen capture & video evidence",
                "Edge case & boundary testing",
                "Cross-title regression awareness",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            highlights: Vec::new(),
            tagline: "Built with precision".to_string(),
        }
    }
}

impl Profile {
    /// Logo initials: explicit value, else first letters of the first two words of `name`
    pub fn initials(&self) -> String {
        if !self.initials.is_empty() {
            return self.initials.clone();
        }
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Website without its scheme, for link text
    pub fn website_label(&self) -> &str {
        self.website
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/')
    }

    /// Digits and leading `+` of the phone number, for a `tel:` link
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{}", digits)
    }
}

/// Root config structure for .bugboardrc.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Bug list to read (relative to the config file)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,

    /// Dashboard to write (relative to the config file)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Document title
    #[serde(default = "default_title")]
    pub title: String,

    /// Font stylesheet URL; empty disables the link
    #[serde(default = "default_font_stylesheet")]
    pub font_stylesheet: String,

    #[serde(default)]
    pub profile: Profile,
}

fn default_title() -> String {
    "QA Portfolio".to_string()
}

fn default_font_stylesheet() -> String {
    DEFAULT_FONT_STYLESHEET.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            title: default_title(),
            font_stylesheet: default_font_stylesheet(),
            profile: Profile::default(),
        }
    }
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(mut self, cli_input: Option<&Path>, cli_output: Option<&Path>) -> Self {
        if let Some(input) = cli_input {
            self.input = Some(input.to_path_buf());
        }
        if let Some(output) = cli_output {
            self.output = Some(output.to_path_buf());
        }
        self
    }

    /// Make relative `input`/`output` relative to `base_dir`
    pub fn resolve_paths(mut self, base_dir: &Path) -> Self {
        self.input = self.input.map(|p| resolve(base_dir, p));
        self.output = self.output.map(|p| resolve(base_dir, p));
        self
    }

    pub fn input_path(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    /// Config written by `bugboard init`
    pub fn starter(name: Option<&str>) -> Self {
        let mut config = Config {
            input: Some(PathBuf::from(DEFAULT_INPUT)),
            output: Some(PathBuf::from(DEFAULT_OUTPUT)),
            ..Config::default()
        };
        if let Some(name) = name {
            config.profile.name = name.to_string();
            config.title = format!("{} · QA Portfolio", name);
        }
        config.profile.availability = "Open to Work".to_string();
        config
    }
}

fn resolve(base_dir: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base_dir.join(path)
    }
}
