//! Per-dimension counts and sidebar ordering
//!
//! Counts are computed once from the full record set and never mutated.
//! They drive the sidebar badges, decide which filter controls exist, and
//! back the JSON summary.

use crate::catalog::{self, Game, Severity};
use crate::{BugRecord, Dimension};
use serde::Serialize;
use std::collections::HashMap;

/// Occurrence counter that remembers first-seen key order
#[derive(Debug, Clone, Default)]
pub struct Tally {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `key`
    pub fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    /// Count for `key`, zero when never seen
    pub fn get(&self, key: &str) -> usize {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Keys in first-seen order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// (key, count) pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), *c))
    }

    /// (key, count) pairs by descending count; ties keep first-seen order
    pub fn by_count_desc(&self) -> Vec<(&str, usize)> {
        let mut sorted: Vec<(&str, usize)> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }
}

/// One filter control in the sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarEntry {
    #[serde(skip)]
    pub dimension: Dimension,
    pub key: String,
    pub label: String,
    pub count: usize,
}

/// Read-only tallies for the whole record set
#[derive(Debug, Clone, Default)]
pub struct Aggregates {
    /// Total number of records
    pub total: usize,
    pub games: Tally,
    pub severities: Tally,
    pub types: Tally,
    /// Display label of each game key, taken from its first record
    game_labels: HashMap<String, String>,
}

impl Aggregates {
    pub fn from_records(records: &[BugRecord]) -> Self {
        let mut agg = Aggregates {
            total: records.len(),
            ..Aggregates::default()
        };
        for record in records {
            agg.games.add(&record.game);
            agg.severities.add(&record.severity);
            agg.types.add(&record.bug_type);
            if !agg.game_labels.contains_key(&record.game) {
                agg.game_labels
                    .insert(record.game.clone(), record.game_label());
            }
        }
        agg
    }

    pub fn tally(&self, dimension: Dimension) -> &Tally {
        match dimension {
            Dimension::Game => &self.games,
            Dimension::Severity => &self.severities,
            Dimension::Type => &self.types,
        }
    }

    /// Count of `key` along `dimension`
    pub fn count(&self, dimension: Dimension, key: &str) -> usize {
        self.tally(dimension).get(key)
    }

    /// Number of distinct games in the data
    pub fn unique_games(&self) -> usize {
        self.games.len()
    }

    /// Label for a game key as it appears in the data
    pub fn game_label(&self, key: &str) -> String {
        match Game::from_key(key).label() {
            Some(label) => label.to_string(),
            None => self
                .game_labels
                .get(key)
                .cloned()
                .unwrap_or_else(|| key.to_string()),
        }
    }

    /// Distinct game labels in first-seen order
    pub fn titles_tested(&self) -> Vec<String> {
        self.games.keys().map(|k| self.game_label(k)).collect()
    }

    /// Sidebar controls for `dimension`, in display order, zero counts omitted
    pub fn entries(&self, dimension: Dimension) -> Vec<SidebarEntry> {
        match dimension {
            Dimension::Game => self.game_entries(),
            Dimension::Severity => self.severity_entries(),
            Dimension::Type => self.type_entries(),
        }
    }

    /// Catalog games first in declaration order, then unknown games as first seen
    fn game_entries(&self) -> Vec<SidebarEntry> {
        let known = Game::KNOWN.iter().map(|g| g.key().to_string());
        let unknown = self
            .games
            .keys()
            .filter(|k| !Game::from_key(k).is_known())
            .map(str::to_string);
        known
            .chain(unknown)
            .filter_map(|key| {
                let count = self.games.get(&key);
                (count > 0).then(|| SidebarEntry {
                    dimension: Dimension::Game,
                    label: self.game_label(&key),
                    key,
                    count,
                })
            })
            .collect()
    }

    fn severity_entries(&self) -> Vec<SidebarEntry> {
        let known = Severity::KNOWN.iter().map(|s| s.key().to_string());
        let unknown = self
            .severities
            .keys()
            .filter(|k| !Severity::from_key(k).is_known())
            .map(str::to_string);
        known
            .chain(unknown)
            .filter_map(|key| {
                let count = self.severities.get(&key);
                (count > 0).then(|| SidebarEntry {
                    dimension: Dimension::Severity,
                    label: Severity::from_key(&key).label(),
                    key,
                    count,
                })
            })
            .collect()
    }

    fn type_entries(&self) -> Vec<SidebarEntry> {
        self.types
            .by_count_desc()
            .into_iter()
            .map(|(key, count)| SidebarEntry {
                dimension: Dimension::Type,
                key: key.to_string(),
                label: catalog::type_label(key),
                count,
            })
            .collect()
    }
}
