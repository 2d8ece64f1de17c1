//! JSON summary of the aggregates for machine-readable output

use crate::aggregate::{Aggregates, SidebarEntry};
use crate::Dimension;
use serde::Serialize;

/// Reporter for `--json` output
pub struct SummaryReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    total: usize,
    unique_games: usize,
    games: Vec<SidebarEntry>,
    severities: Vec<SidebarEntry>,
    types: Vec<SidebarEntry>,
}

impl SummaryReporter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Summary with per-dimension counts, in sidebar order
    pub fn report(&self, agg: &Aggregates) -> String {
        let summary = JsonSummary {
            total: agg.total,
            unique_games: agg.unique_games(),
            games: agg.entries(Dimension::Game),
            severities: agg.entries(Dimension::Severity),
            types: agg.entries(Dimension::Type),
        };
        if self.pretty {
            serde_json::to_string_pretty(&summary).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(&summary).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}
