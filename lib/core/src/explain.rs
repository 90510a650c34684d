//! Explanation lookup keyed by (artwork, level).
//!
//! Explanation content is produced by an external batch pipeline; this index
//! only resolves precomputed explanation ids. A miss is an expected,
//! user-visible gap, not an error, and there is no fallback to an adjacent
//! level.

use crate::level::Level;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// One entry of the explanation index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplanationEntry {
    pub artwork_id: String,
    pub level: Level,
    pub explanation_id: String,
}

/// Exact-match index from (artwork_id, level) to explanation id.
#[derive(Debug, Clone, Default)]
pub struct ExplanationIndex {
    entries: AHashMap<(String, Level), String>,
}

impl ExplanationIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        artwork_id: impl Into<String>,
        level: Level,
        explanation_id: impl Into<String>,
    ) {
        self.entries
            .insert((artwork_id.into(), level), explanation_id.into());
    }

    /// Exact (artwork_id, level) lookup; `None` on a miss.
    pub fn lookup(&self, artwork_id: &str, level: Level) -> Option<&str> {
        self.entries
            .get(&(artwork_id.to_string(), level))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, for snapshot export.
    pub fn entries(&self) -> Vec<ExplanationEntry> {
        self.entries
            .iter()
            .map(|((artwork_id, level), explanation_id)| ExplanationEntry {
                artwork_id: artwork_id.clone(),
                level: *level,
                explanation_id: explanation_id.clone(),
            })
            .collect()
    }
}

impl FromIterator<ExplanationEntry> for ExplanationIndex {
    fn from_iter<I: IntoIterator<Item = ExplanationEntry>>(iter: I) -> Self {
        let mut index = Self::new();
        for entry in iter {
            index.insert(entry.artwork_id, entry.level, entry.explanation_id);
        }
        index
    }
}
