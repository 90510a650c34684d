//! The recommendation pipeline.
//!
//! Both retrieval modes share one scoring path: resolve ratings to weighted
//! embeddings, build the preference profile, score candidates, rank, and
//! (curated mode) bucket ranks into levels and resolve explanations. Each
//! request is a pure function of the snapshot it is given; nothing is cached
//! between requests.

use crate::catalog::Catalog;
use crate::explain::ExplanationIndex;
use crate::level::{Level, LevelPolicy};
use crate::profile::build_profile;
use crate::ranker::{rank, TieBreak};
use crate::rating::Rating;
use crate::scorer::score_candidates;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Deployment configuration for the recommender.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendConfig {
    /// Fixed ordered candidate list for curated mode. Ids need not resolve
    /// in the catalog; list position is the curated tie-break.
    #[serde(default)]
    pub candidate_ids: Vec<String>,
    /// Source museum whose artworks are excluded from discovery.
    #[serde(default)]
    pub excluded_museum_id: Option<String>,
    #[serde(default)]
    pub level_policy: LevelPolicy,
    /// Default number of rows returned by discovery mode.
    #[serde(default = "default_discovery_limit")]
    pub discovery_limit: usize,
}

fn default_discovery_limit() -> usize {
    1
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            candidate_ids: Vec::new(),
            excluded_museum_id: None,
            level_policy: LevelPolicy::default(),
            discovery_limit: default_discovery_limit(),
        }
    }
}

/// One curated-mode output row. Always exactly one per configured slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuratedRecommendation {
    pub rank: usize,
    pub artwork_id: String,
    pub name: Option<String>,
    pub similarity: Option<f32>,
    pub level: Level,
    pub explanation_id: Option<String>,
}

/// One discovery-mode output row, with the museum-name passthrough.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryRecommendation {
    pub rank: usize,
    pub artwork_id: String,
    pub name: Option<String>,
    pub museum_name: Option<String>,
    pub similarity: Option<f32>,
}

/// Result of one recommendation request.
///
/// `NoPreferences` is a recognized result variant, not an error: the user
/// has no stored ratings at all, so scoring never runs.
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendOutcome<T> {
    NoPreferences,
    Recommendations(Vec<T>),
}

impl<T> RecommendOutcome<T> {
    pub fn recommendations(&self) -> &[T] {
        match self {
            RecommendOutcome::NoPreferences => &[],
            RecommendOutcome::Recommendations(rows) => rows,
        }
    }

    pub fn is_no_preferences(&self) -> bool {
        matches!(self, RecommendOutcome::NoPreferences)
    }
}

/// Stateless recommendation engine for one deployment configuration.
pub struct Recommender {
    config: RecommendConfig,
}

impl Recommender {
    #[must_use]
    pub fn new(config: RecommendConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RecommendConfig {
        &self.config
    }

    /// Curated mode: rank the fixed candidate list.
    ///
    /// Emits exactly one row per configured slot, in rank order. Slots that
    /// do not resolve, or that lack an embedding, or an undefined profile
    /// all degrade to null similarity; such rows still get a rank (after
    /// every defined similarity) and a level.
    pub fn curated(
        &self,
        ratings: &[Rating],
        catalog: &Catalog,
        explanations: &ExplanationIndex,
    ) -> RecommendOutcome<CuratedRecommendation> {
        if ratings.is_empty() {
            return RecommendOutcome::NoPreferences;
        }

        let profile = build_profile(&catalog.rated_embeddings(ratings));
        let candidates = catalog.curated_candidates(&self.config.candidate_ids);
        let scored = score_candidates(profile.as_ref(), candidates);
        let ranked = rank(scored, TieBreak::ListOrder);

        let total = ranked.len();
        let rows = ranked
            .into_iter()
            .map(|candidate| {
                let level = self.config.level_policy.level_for(candidate.rank, total);
                let explanation_id = explanations
                    .lookup(&candidate.artwork_id, level)
                    .map(str::to_string);
                CuratedRecommendation {
                    rank: candidate.rank,
                    artwork_id: candidate.artwork_id,
                    name: candidate.name,
                    similarity: candidate.similarity,
                    level,
                    explanation_id,
                }
            })
            .collect();

        RecommendOutcome::Recommendations(rows)
    }

    /// Discovery mode: top-K over the open catalog.
    ///
    /// Already-rated artworks, the excluded source and embedding-less
    /// artworks are filtered before scoring. Without a defined profile no
    /// similarity is defined, so the result is an empty list.
    pub fn discovery(
        &self,
        ratings: &[Rating],
        catalog: &Catalog,
        limit: Option<usize>,
    ) -> RecommendOutcome<DiscoveryRecommendation> {
        if ratings.is_empty() {
            return RecommendOutcome::NoPreferences;
        }

        let limit = limit.unwrap_or(self.config.discovery_limit);
        let profile = match build_profile(&catalog.rated_embeddings(ratings)) {
            Some(profile) => profile,
            None => return RecommendOutcome::Recommendations(Vec::new()),
        };

        let rated_ids: HashSet<String> = ratings
            .iter()
            .map(|rating| rating.artwork_id.clone())
            .collect();
        let candidates =
            catalog.discovery_candidates(&rated_ids, self.config.excluded_museum_id.as_deref());

        let mut scored = score_candidates(Some(&profile), candidates);
        // Zero-norm embeddings score as undefined; they are not discovery
        // output.
        scored.retain(|candidate| candidate.similarity.is_some());

        let mut ranked = rank(scored, TieBreak::ArtworkId);
        ranked.truncate(limit);

        let rows = ranked
            .into_iter()
            .map(|candidate| DiscoveryRecommendation {
                rank: candidate.rank,
                artwork_id: candidate.artwork_id,
                name: candidate.name,
                museum_name: candidate.museum_name,
                similarity: candidate.similarity,
            })
            .collect();

        RecommendOutcome::Recommendations(rows)
    }
}
