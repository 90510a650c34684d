use serde::{Deserialize, Serialize};

/// Smallest score a rating may carry.
pub const MIN_SCORE: i64 = 0;
/// Largest score a rating may carry.
pub const MAX_SCORE: i64 = 100;
/// The neutral midpoint; a rating at this score carries zero weight.
pub const NEUTRAL_SCORE: i64 = 50;

/// A single user rating of an artwork.
///
/// Scores run 0..=100 with 50 as the neutral midpoint. One rating per
/// (user, artwork) pair; deduplication is the preference store's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub artwork_id: String,
    pub score: i64,
}

impl Rating {
    #[inline]
    #[must_use]
    pub fn new(artwork_id: impl Into<String>, score: i64) -> Self {
        Self {
            artwork_id: artwork_id.into(),
            score,
        }
    }

    /// Preference weight in [-1.0, +1.0]: `(score - 50) / 50`.
    ///
    /// Negative means dispreference, zero means neutral.
    #[inline]
    #[must_use]
    pub fn weight(&self) -> f32 {
        (self.score - NEUTRAL_SCORE) as f32 / NEUTRAL_SCORE as f32
    }
}
