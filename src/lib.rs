//! # artrec
//!
//! An artwork recommendation engine: weighted preference profiles scored
//! against precomputed caption embeddings by cosine similarity, with
//! deterministic ranking, affinity leveling and explanation resolution.
//!
//! ## Two retrieval modes
//!
//! - **Curated**: a fixed, configured candidate list is always returned in
//!   full - every slot ranked, leveled ("1"/"2"/"3" by rank band) and joined
//!   against the explanation index. Slots that do not resolve in the
//!   catalog come back with null name and null similarity, ranked last.
//! - **Discovery**: top-K cosine search over the whole catalog, minus the
//!   user's already-rated artworks and one excluded source museum.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! artrec --data-dir ./data --http-port 8080 --config recommend.json
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use artrec::prelude::*;
//!
//! let catalog = Catalog::new(CatalogConfig { vector_dim: 2 });
//! catalog
//!     .upsert(
//!         Artwork::new("435621", "Bridge Over a Pond", "14", "The Met")
//!             .with_embedding(Vector::new(vec![1.0, 0.0])),
//!     )
//!     .unwrap();
//!
//! let recommender = Recommender::new(RecommendConfig {
//!     candidate_ids: vec!["435621".to_string()],
//!     ..RecommendConfig::default()
//! });
//!
//! let ratings = vec![Rating::new("435621", 90)];
//! let outcome = recommender.curated(&ratings, &catalog, &ExplanationIndex::new());
//! for row in outcome.recommendations() {
//!     println!("#{} {} level {}", row.rank, row.artwork_id, row.level);
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - `artrec-core` - The scoring pipeline (profile, scorer, ranker, levels,
//!   explanations)
//! - `artrec-storage` - Catalog, preference and explanation stores with
//!   snapshot persistence
//! - `artrec-api` - REST API

// Re-export core types
pub use artrec_core::{
    Artwork, Candidate, Catalog, CatalogConfig, CuratedRecommendation, DiscoveryRecommendation,
    Error, ExplanationEntry, ExplanationIndex, Level, LevelPolicy, RankedCandidate, Rating,
    RecommendConfig, RecommendOutcome, Recommender, Result, ScoredCandidate, TieBreak, Vector,
};

// Re-export storage
pub use artrec_storage::StorageManager;

// Re-export API
pub use artrec_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Artwork, Catalog, CatalogConfig, CuratedRecommendation, DiscoveryRecommendation, Error,
        ExplanationIndex, Level, LevelPolicy, Rating, RecommendConfig, RecommendOutcome,
        Recommender, RestApi, Result, StorageManager, Vector,
    };
}
