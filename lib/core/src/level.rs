//! Engagement level bucketing by rank position.

use serde::{Deserialize, Serialize};

/// Three-tier affinity level assigned by rank position within a curated set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    /// Bottom band, lowest affinity.
    #[serde(rename = "1")]
    Low,
    /// Middle band.
    #[serde(rename = "2")]
    Mid,
    /// Top band, highest affinity.
    #[serde(rename = "3")]
    High,
}

impl Level {
    /// Wire representation: "1" / "2" / "3".
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "1",
            Level::Mid => "2",
            Level::High => "3",
        }
    }

    pub fn parse(s: &str) -> Option<Level> {
        match s {
            "1" => Some(Level::Low),
            "2" => Some(Level::Mid),
            "3" => Some(Level::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Band sizes for level bucketing.
///
/// The observed deployment uses N=10 candidates split top 3 / middle 4 /
/// bottom 3. The bands are configuration rather than literals; for other N
/// the counts must be chosen explicitly. Overlapping bands resolve in favor
/// of the top band, and the middle band may be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelPolicy {
    /// Ranks `1..=top` map to [`Level::High`].
    pub top: usize,
    /// The bottom `bottom` ranks map to [`Level::Low`].
    pub bottom: usize,
}

impl Default for LevelPolicy {
    fn default() -> Self {
        Self { top: 3, bottom: 3 }
    }
}

impl LevelPolicy {
    /// Level for a dense 1-based rank within a set of `total` rows.
    #[must_use]
    pub fn level_for(&self, rank: usize, total: usize) -> Level {
        if rank <= self.top {
            Level::High
        } else if rank + self.bottom > total {
            Level::Low
        } else {
            Level::Mid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bands_for_ten() {
        let policy = LevelPolicy::default();
        let levels: Vec<Level> = (1..=10).map(|rank| policy.level_for(rank, 10)).collect();
        assert_eq!(
            levels,
            vec![
                Level::High,
                Level::High,
                Level::High,
                Level::Mid,
                Level::Mid,
                Level::Mid,
                Level::Mid,
                Level::Low,
                Level::Low,
                Level::Low,
            ]
        );
    }

    #[test]
    fn test_seven_candidates() {
        let policy = LevelPolicy::default();
        assert_eq!(policy.level_for(3, 7), Level::High);
        assert_eq!(policy.level_for(4, 7), Level::Mid);
        assert_eq!(policy.level_for(5, 7), Level::Low);
    }

    #[test]
    fn test_top_wins_on_overlap() {
        let policy = LevelPolicy { top: 3, bottom: 3 };
        // Four rows: ranks 2 and 3 fall in both bands.
        assert_eq!(policy.level_for(2, 4), Level::High);
        assert_eq!(policy.level_for(3, 4), Level::High);
        assert_eq!(policy.level_for(4, 4), Level::Low);
    }

    #[test]
    fn test_wire_representation() {
        assert_eq!(Level::High.as_str(), "3");
        assert_eq!(Level::parse("1"), Some(Level::Low));
        assert_eq!(Level::parse("4"), None);
        assert_eq!(
            serde_json::to_string(&Level::Mid).unwrap(),
            "\"2\"".to_string()
        );
    }
}
