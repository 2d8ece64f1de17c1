//! Filter model shared by the embedded dashboard script
//!
//! The generated page filters cards in the browser. This module holds the
//! same rules in Rust: the key sets emitted into the script, the visibility
//! predicate, and the two single-selection state axes (active filter and
//! expanded card). [`FilterKeySets`] is emitted into the page as data
//! attributes read by the script in `render::script`, so both sides agree
//! on membership.

use crate::aggregate::Aggregates;
use crate::catalog::Severity;
use crate::{BugRecord, Dimension, FilterKey};

/// Keys recognized along each dimension
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterKeySets {
    pub games: Vec<String>,
    pub severities: Vec<String>,
    pub types: Vec<String>,
}

impl FilterKeySets {
    /// Build key sets from the data: every catalog severity is always a key
    pub fn from_aggregates(agg: &Aggregates) -> Self {
        let mut severities: Vec<String> = Severity::KNOWN
            .iter()
            .map(|s| s.key().to_string())
            .collect();
        for key in agg.severities.keys() {
            if !severities.iter().any(|s| s == key) {
                severities.push(key.to_string());
            }
        }
        Self {
            games: agg.games.keys().map(str::to_string).collect(),
            severities,
            types: agg.types.keys().map(str::to_string).collect(),
        }
    }

    pub fn keys(&self, dimension: Dimension) -> &[String] {
        match dimension {
            Dimension::Game => &self.games,
            Dimension::Severity => &self.severities,
            Dimension::Type => &self.types,
        }
    }

    pub fn contains(&self, dimension: Dimension, key: &str) -> bool {
        self.keys(dimension).iter().any(|k| k == key)
    }

    /// First dimension (game, then severity, then type) that owns `key`
    pub fn dimension_of(&self, key: &str) -> Option<Dimension> {
        Dimension::PRIORITY
            .into_iter()
            .find(|&d| self.contains(d, key))
    }

    /// Whether `record` passes `filter`
    pub fn is_visible(&self, filter: &FilterKey, record: &BugRecord) -> bool {
        match filter {
            FilterKey::All => true,
            FilterKey::Key(key) => match self.dimension_of(key) {
                Some(dimension) => record.key_for(dimension) == key,
                None => false,
            },
        }
    }

    /// Keys whose control cannot select exactly their own cards: keys equal
    /// to the `all` sentinel, and keys owned by more than one dimension
    /// (filtering by those only ever matches the first dimension).
    pub fn collisions(&self) -> Vec<KeyCollision> {
        let mut found: Vec<KeyCollision> = Vec::new();

        let reserved: Vec<Dimension> = Dimension::PRIORITY
            .into_iter()
            .filter(|&d| self.contains(d, FilterKey::ALL))
            .collect();
        if !reserved.is_empty() {
            found.push(KeyCollision::Reserved {
                key: FilterKey::ALL.to_string(),
                dimensions: reserved,
            });
        }

        for (i, &dimension) in Dimension::PRIORITY.iter().enumerate() {
            for key in self.keys(dimension) {
                if found.iter().any(|c| c.key() == key) {
                    continue;
                }
                let shadowed: Vec<Dimension> = Dimension::PRIORITY[i + 1..]
                    .iter()
                    .copied()
                    .filter(|&d| self.contains(d, key))
                    .collect();
                if !shadowed.is_empty() {
                    found.push(KeyCollision::Shadowed {
                        key: key.clone(),
                        owner: dimension,
                        shadowed,
                    });
                }
            }
        }
        found
    }
}

/// A filter key whose sidebar control does not match its own count
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyCollision {
    /// Record key equal to the `all` sentinel; its control shows every card
    Reserved {
        key: String,
        dimensions: Vec<Dimension>,
    },
    /// Key owned by `owner` and also by the later `shadowed` dimensions
    Shadowed {
        key: String,
        owner: Dimension,
        shadowed: Vec<Dimension>,
    },
}

impl KeyCollision {
    pub fn key(&self) -> &str {
        match self {
            KeyCollision::Reserved { key, .. } | KeyCollision::Shadowed { key, .. } => key,
        }
    }
}

/// Live selection state of the dashboard: one active filter, at most one expanded card
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    active: FilterKey,
    expanded: Option<String>,
}

impl FilterState {
    /// Fresh page load: everything visible, nothing expanded
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &FilterKey {
        &self.active
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    /// Make `filter` the only active filter
    pub fn select(&mut self, filter: FilterKey) {
        self.active = filter;
    }

    /// Expand `id`, collapsing any other card; clicking the expanded card collapses it
    pub fn toggle_card(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }
}

/// Filter state bound to a concrete record set
#[derive(Debug)]
pub struct FilterEngine<'a> {
    records: &'a [BugRecord],
    keys: FilterKeySets,
    state: FilterState,
}

impl<'a> FilterEngine<'a> {
    pub fn new(records: &'a [BugRecord]) -> Self {
        let agg = Aggregates::from_records(records);
        Self {
            records,
            keys: FilterKeySets::from_aggregates(&agg),
            state: FilterState::new(),
        }
    }

    pub fn keys(&self) -> &FilterKeySets {
        &self.keys
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Handle a click on a filter button
    pub fn select(&mut self, raw: &str) {
        self.state.select(FilterKey::parse(raw));
    }

    /// Handle a click on a card
    pub fn toggle_card(&mut self, id: &str) {
        self.state.toggle_card(id);
    }

    /// Records passing the active filter, in page order
    pub fn visible(&self) -> impl Iterator<Item = &'a BugRecord> + '_ {
        self.records
            .iter()
            .filter(move |r| self.keys.is_visible(self.state.active(), r))
    }

    /// Value of the "Showing N of M" readout
    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn arbitrary_records() -> impl Strategy<Value = Vec<BugRecord>> {
        prop::collection::vec(
            (
                prop::sample::select(vec!["ds3", "cp77", "rdr2", "hollowknight"]),
                prop::sample::select(vec!["critical", "major", "minor", "visual"]),
                prop::sample::select(vec!["ai", "physics", "", "audio"]),
            ),
            0..30,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (game, severity, bug_type))| {
                    let mut r = BugRecord::new(i.to_string());
                    r.game = game.to_string();
                    r.severity = severity.to_string();
                    r.bug_type = bug_type.to_string();
                    r
                })
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn visible_count_matches_aggregate(records in arbitrary_records()) {
            let agg = Aggregates::from_records(&records);
            let mut engine = FilterEngine::new(&records);
            prop_assert_eq!(engine.visible_count(), records.len());
            for dimension in Dimension::PRIORITY {
                for entry in agg.entries(dimension) {
                    engine.select(&entry.key);
                    prop_assert_eq!(engine.visible_count(), entry.count);
                }
            }
        }

        #[test]
        fn at_most_one_card_expanded(clicks in prop::collection::vec(0usize..5, 0..20)) {
            let mut state = FilterState::new();
            for click in clicks {
                let id = click.to_string();
                let was = state.expanded() == Some(id.as_str());
                state.toggle_card(&id);
                if was {
                    prop_assert_eq!(state.expanded(), None);
                } else {
                    prop_assert_eq!(state.expanded(), Some(id.as_str()));
                }
            }
        }
    }
}
