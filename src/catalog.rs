//! Fixed game, severity and bug-type tables
//!
//! Games and severities are closed enumerations with an `Other` fallback so
//! unknown keys from the data still render with a sensible label. Bug types
//! are free-form; only their display labels are catalogued.

use std::fmt;

/// A game the dashboard knows how to label and color
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Game {
    DarkSouls3,
    EldenRing,
    Fallout4,
    Fallout76,
    SpiderMan,
    RedDead1,
    RedDead2,
    Witcher3,
    Wolfenstein2,
    Cyberpunk2077,
    /// Any key not in the catalog
    Other(String),
}

impl Game {
    /// Catalog games in sidebar order
    pub const KNOWN: [Game; 10] = [
        Game::DarkSouls3,
        Game::EldenRing,
        Game::Fallout4,
        Game::Fallout76,
        Game::SpiderMan,
        Game::RedDead1,
        Game::RedDead2,
        Game::Witcher3,
        Game::Wolfenstein2,
        Game::Cyberpunk2077,
    ];

    pub fn from_key(key: &str) -> Self {
        match key {
            "ds3" => Game::DarkSouls3,
            "eldenring" => Game::EldenRing,
            "fallout4" => Game::Fallout4,
            "fallout76" => Game::Fallout76,
            "spiderman" => Game::SpiderMan,
            "rdr1" => Game::RedDead1,
            "rdr2" => Game::RedDead2,
            "witcher3" => Game::Witcher3,
            "wolf" => Game::Wolfenstein2,
            "cp77" => Game::Cyberpunk2077,
            other => Game::Other(other.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Game::DarkSouls3 => "ds3",
            Game::EldenRing => "eldenring",
            Game::Fallout4 => "fallout4",
            Game::Fallout76 => "fallout76",
            Game::SpiderMan => "spiderman",
            Game::RedDead1 => "rdr1",
            Game::RedDead2 => "rdr2",
            Game::Witcher3 => "witcher3",
            Game::Wolfenstein2 => "wolf",
            Game::Cyberpunk2077 => "cp77",
            Game::Other(key) => key,
        }
    }

    /// Catalog label, or `None` for games outside the catalog
    pub fn label(&self) -> Option<&'static str> {
        Some(match self {
            Game::DarkSouls3 => "Dark Souls III",
            Game::EldenRing => "Elden Ring",
            Game::Fallout4 => "Fallout 4",
            Game::Fallout76 => "Fallout 76",
            Game::SpiderMan => "Spider-Man Remastered",
            Game::RedDead1 => "RDR Remastered",
            Game::RedDead2 => "Red Dead Redemption 2",
            Game::Witcher3 => "The Witcher III",
            Game::Wolfenstein2 => "Wolfenstein II",
            Game::Cyberpunk2077 => "Cyberpunk 2077",
            Game::Other(_) => return None,
        })
    }

    /// CSS class for the game tag
    pub fn css_class(&self) -> &'static str {
        match self {
            Game::DarkSouls3 => "game-ds3",
            Game::EldenRing => "game-eldenring",
            Game::Fallout4 => "game-fallout4",
            Game::Fallout76 => "game-fallout76",
            Game::SpiderMan => "game-spiderman",
            Game::RedDead1 => "game-rdr1",
            Game::RedDead2 => "game-rdr2",
            Game::Witcher3 => "game-witcher3",
            Game::Wolfenstein2 => "game-wolf",
            Game::Cyberpunk2077 => "game-cp77",
            Game::Other(_) => "game-default",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Game::Other(_))
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Bug severity rating
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Severity {
    Critical,
    Major,
    Minor,
    Visual,
    /// Any key not in the catalog; styled like `Minor`
    Other(String),
}

impl Severity {
    /// Catalog severities in sidebar order
    pub const KNOWN: [Severity; 4] = [
        Severity::Critical,
        Severity::Major,
        Severity::Minor,
        Severity::Visual,
    ];

    pub fn from_key(key: &str) -> Self {
        match key {
            "critical" => Severity::Critical,
            "major" => Severity::Major,
            "minor" => Severity::Minor,
            "visual" => Severity::Visual,
            other => Severity::Other(other.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Severity::Critical => "critical",
            Severity::Major => "major",
            Severity::Minor => "minor",
            Severity::Visual => "visual",
            Severity::Other(key) => key,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Severity::Critical => "Critical".to_string(),
            Severity::Major => "Major".to_string(),
            Severity::Minor => "Minor".to_string(),
            Severity::Visual => "Visual".to_string(),
            Severity::Other(key) => title_case(key),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Critical => "sev-critical",
            Severity::Major => "sev-major",
            Severity::Visual => "sev-visual",
            Severity::Minor | Severity::Other(_) => "sev-minor",
        }
    }

    /// CSS custom property holding the severity dot color
    pub fn dot_var(&self) -> &'static str {
        match self {
            Severity::Critical => "--critical",
            Severity::Major => "--major",
            Severity::Visual => "--visual",
            Severity::Minor | Severity::Other(_) => "--minor",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Severity::Other(_))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Display labels for well-known bug types
const TYPE_LABELS: &[(&str, &str)] = &[
    ("animation", "Animation / Model"),
    ("ai", "AI / Pathing"),
    ("collision", "Collision / Physics"),
    ("physics", "Physics"),
    ("rendering", "Rendering / LOD"),
    ("spawning", "Spawning / Placement"),
];

/// Sidebar label for a bug type key
pub fn type_label(key: &str) -> String {
    TYPE_LABELS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| title_case(key))
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_keys_round_trip() {
        for game in Game::KNOWN.iter() {
            assert_eq!(&Game::from_key(game.key()), game);
            assert!(game.label().is_some());
        }
    }

    #[test]
    fn test_unknown_game_degrades() {
        let game = Game::from_key("hollowknight");
        assert_eq!(game, Game::Other("hollowknight".into()));
        assert_eq!(game.label(), None);
        assert_eq!(game.css_class(), "game-default");
        assert!(!game.is_known());
    }

    #[test]
    fn test_unknown_severity_degrades() {
        let sev = Severity::from_key("cosmetic");
        assert_eq!(sev.label(), "Cosmetic");
        assert_eq!(sev.css_class(), "sev-minor");
        assert_eq!(sev.dot_var(), "--minor");
    }

    #[test]
    fn test_severity_order() {
        let keys: Vec<&str> = Severity::KNOWN.iter().map(|s| s.key()).collect();
        assert_eq!(keys, vec!["critical", "major", "minor", "visual"]);
    }

    #[test]
    fn test_type_label_lookup_and_fallback() {
        assert_eq!(type_label("ai"), "AI / Pathing");
        assert_eq!(type_label("audio"), "Audio");
        assert_eq!(type_label(""), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("softlock"), "Softlock");
        assert_eq!(title_case("UI glitch"), "Ui Glitch");
        assert_eq!(title_case("save-corruption"), "Save-Corruption");
        assert_eq!(title_case("lod2pop"), "Lod2Pop");
    }
}
