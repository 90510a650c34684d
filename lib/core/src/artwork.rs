use crate::vector::Vector;
use serde::{Deserialize, Serialize};

/// An artwork in the catalog with its precomputed caption embedding.
///
/// The embedding is optional: artworks without one are excluded from
/// discovery scoring and score as `None` in curated mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artwork {
    pub artwork_id: String,
    pub name: String,
    /// Identifier of the source museum, used for provenance exclusion.
    pub museum_id: String,
    pub museum_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vector>,
}

impl Artwork {
    #[inline]
    #[must_use]
    pub fn new(
        artwork_id: impl Into<String>,
        name: impl Into<String>,
        museum_id: impl Into<String>,
        museum_name: impl Into<String>,
    ) -> Self {
        Self {
            artwork_id: artwork_id.into(),
            name: name.into(),
            museum_id: museum_id.into(),
            museum_name: museum_name.into(),
            embedding: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_embedding(mut self, embedding: Vector) -> Self {
        self.embedding = Some(embedding);
        self
    }

    #[inline]
    pub fn has_embedding(&self) -> bool {
        self.embedding.is_some()
    }
}
