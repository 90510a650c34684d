//! Per-user rating store.
//!
//! Ratings are keyed by (user, artwork) with last-write-wins, so the core
//! engine always sees at most one rating per artwork. Per-user ratings are
//! kept sorted by artwork id; profile construction sums floats in that
//! order, which keeps repeated runs over the same data byte-identical.

use artrec_core::{Error, Rating, Result};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};

pub struct PreferenceStore {
    users: RwLock<HashMap<String, BTreeMap<String, i64>>>,
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Record one rating, replacing any previous score for the pair.
    pub fn rate(&self, user_id: &str, artwork_id: &str, score: i64) -> Result<()> {
        if !(artrec_core::rating::MIN_SCORE..=artrec_core::rating::MAX_SCORE).contains(&score) {
            return Err(Error::InvalidScore(score));
        }

        self.users
            .write()
            .entry(user_id.to_string())
            .or_default()
            .insert(artwork_id.to_string(), score);
        Ok(())
    }

    /// All ratings for a user, sorted by artwork id. Empty for unknown users.
    pub fn ratings(&self, user_id: &str) -> Vec<Rating> {
        self.users
            .read()
            .get(user_id)
            .map(|prefs| {
                prefs
                    .iter()
                    .map(|(artwork_id, score)| Rating::new(artwork_id.clone(), *score))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Ids of the artworks a user has rated, sorted.
    pub fn rated_ids(&self, user_id: &str) -> Vec<String> {
        self.users
            .read()
            .get(user_id)
            .map(|prefs| prefs.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn remove_rating(&self, user_id: &str, artwork_id: &str) -> bool {
        let mut users = self.users.write();
        match users.get_mut(user_id) {
            Some(prefs) => prefs.remove(artwork_id).is_some(),
            None => false,
        }
    }

    pub fn user_count(&self) -> usize {
        self.users.read().len()
    }

    /// Snapshot export: every (user, ratings) pair, users unsorted.
    pub fn export(&self) -> Vec<(String, Vec<Rating>)> {
        self.users
            .read()
            .iter()
            .map(|(user_id, prefs)| {
                let ratings = prefs
                    .iter()
                    .map(|(artwork_id, score)| Rating::new(artwork_id.clone(), *score))
                    .collect();
                (user_id.clone(), ratings)
            })
            .collect()
    }

    /// Snapshot restore. Invalid scores are dropped rather than aborting
    /// the whole restore.
    pub fn restore(&self, users: Vec<(String, Vec<Rating>)>) {
        for (user_id, ratings) in users {
            for rating in ratings {
                if self.rate(&user_id, &rating.artwork_id, rating.score).is_err() {
                    eprintln!(
                        "Warning: dropping invalid stored rating {}/{} = {}",
                        user_id, rating.artwork_id, rating.score
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let store = PreferenceStore::new();
        store.rate("u1", "a1", 30).unwrap();
        store.rate("u1", "a1", 80).unwrap();

        let ratings = store.ratings("u1");
        assert_eq!(ratings.len(), 1);
        assert_eq!(ratings[0].score, 80);
    }

    #[test]
    fn test_ratings_sorted_by_artwork_id() {
        let store = PreferenceStore::new();
        store.rate("u1", "b", 60).unwrap();
        store.rate("u1", "a", 40).unwrap();
        store.rate("u1", "c", 90).unwrap();

        let ids: Vec<String> = store
            .ratings("u1")
            .into_iter()
            .map(|r| r.artwork_id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_score_range_enforced() {
        let store = PreferenceStore::new();
        assert!(store.rate("u1", "a1", 101).is_err());
        assert!(store.rate("u1", "a1", -1).is_err());
        assert!(store.ratings("u1").is_empty());
    }

    #[test]
    fn test_unknown_user_is_empty() {
        let store = PreferenceStore::new();
        assert!(store.ratings("nobody").is_empty());
        assert!(store.rated_ids("nobody").is_empty());
    }
}
