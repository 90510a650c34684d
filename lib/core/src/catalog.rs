use crate::{Artwork, Error, Rating, Result, Vector};
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};

/// Configuration for a catalog
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Embedding dimension, uniform across the deployment.
    pub vector_dim: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { vector_dim: 1536 }
    }
}

/// A candidate artwork eligible for scoring in one request.
///
/// Curated candidates exist for every configured slot even when the id does
/// not resolve in the catalog; unresolved slots carry no name and no
/// embedding but are still scored (as null) and ranked.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub artwork_id: String,
    pub name: Option<String>,
    pub museum_name: Option<String>,
    pub embedding: Option<Vector>,
}

/// The artwork catalog: metadata plus precomputed embeddings.
pub struct Catalog {
    config: CatalogConfig,
    artworks: RwLock<HashMap<String, Artwork>>,
}

impl Catalog {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config,
            artworks: RwLock::new(HashMap::new()),
        }
    }

    pub fn vector_dim(&self) -> usize {
        self.config.vector_dim
    }

    pub fn count(&self) -> usize {
        self.artworks.read().len()
    }

    /// Insert or update an artwork.
    ///
    /// An embedding with the wrong dimension is rejected up front so every
    /// stored embedding is known to match the deployment dimension.
    pub fn upsert(&self, artwork: Artwork) -> Result<()> {
        if let Some(embedding) = &artwork.embedding {
            if embedding.dim() != self.config.vector_dim {
                return Err(Error::InvalidDimension {
                    expected: self.config.vector_dim,
                    actual: embedding.dim(),
                });
            }
        }

        self.artworks
            .write()
            .insert(artwork.artwork_id.clone(), artwork);
        Ok(())
    }

    /// Get an artwork by id
    pub fn get(&self, artwork_id: &str) -> Option<Artwork> {
        self.artworks.read().get(artwork_id).cloned()
    }

    /// Delete an artwork by id
    pub fn remove(&self, artwork_id: &str) -> bool {
        self.artworks.write().remove(artwork_id).is_some()
    }

    /// Get all artworks
    pub fn iter(&self) -> Vec<Artwork> {
        self.artworks.read().values().cloned().collect()
    }

    /// Resolve ratings to (weight, embedding) pairs for profile building.
    ///
    /// Ratings on unknown artworks or artworks without an embedding are
    /// dropped here; the caller's rating order is preserved.
    pub fn rated_embeddings(&self, ratings: &[Rating]) -> Vec<(f32, Vector)> {
        let artworks = self.artworks.read();
        ratings
            .iter()
            .filter_map(|rating| {
                artworks
                    .get(&rating.artwork_id)
                    .and_then(|artwork| artwork.embedding.clone())
                    .map(|embedding| (rating.weight(), embedding))
            })
            .collect()
    }

    /// Curated (fixed-set) candidate selection.
    ///
    /// Emits one candidate per configured id, in list order, independent of
    /// catalog membership.
    pub fn curated_candidates(&self, candidate_ids: &[String]) -> Vec<Candidate> {
        let artworks = self.artworks.read();
        candidate_ids
            .iter()
            .map(|artwork_id| match artworks.get(artwork_id) {
                Some(artwork) => Candidate {
                    artwork_id: artwork_id.clone(),
                    name: Some(artwork.name.clone()),
                    museum_name: Some(artwork.museum_name.clone()),
                    embedding: artwork.embedding.clone(),
                },
                None => Candidate {
                    artwork_id: artwork_id.clone(),
                    name: None,
                    museum_name: None,
                    embedding: None,
                },
            })
            .collect()
    }

    /// Discovery (open-corpus) candidate selection.
    ///
    /// Excludes artworks the user already rated, artworks from the excluded
    /// source museum, and artworks without an embedding. Filtering happens
    /// before any similarity is computed.
    pub fn discovery_candidates(
        &self,
        rated_ids: &HashSet<String>,
        excluded_museum_id: Option<&str>,
    ) -> Vec<Candidate> {
        let artworks = self.artworks.read();
        artworks
            .values()
            .filter(|artwork| !rated_ids.contains(&artwork.artwork_id))
            .filter(|artwork| excluded_museum_id != Some(artwork.museum_id.as_str()))
            .filter(|artwork| artwork.has_embedding())
            .map(|artwork| Candidate {
                artwork_id: artwork.artwork_id.clone(),
                name: Some(artwork.name.clone()),
                museum_name: Some(artwork.museum_name.clone()),
                embedding: artwork.embedding.clone(),
            })
            .collect()
    }
}
