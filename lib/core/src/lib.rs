//! # artrec Core
//!
//! Core scoring engine for the artrec artwork recommender.
//!
//! This crate provides the staged, pure scoring pipeline:
//!
//! - [`Rating`] - A user rating with its derived preference weight
//! - [`Vector`] - Dense embedding vector with cosine similarity
//! - [`Catalog`] - Artwork store with candidate selection for both modes
//! - [`profile::build_profile`] - Weighted-centroid preference profile
//! - [`ranker::rank`] - Deterministic dense ranking with explicit null rule
//! - [`LevelPolicy`] - Rank-position level bucketing
//! - [`ExplanationIndex`] - (artwork, level) explanation lookup
//! - [`Recommender`] - The two retrieval modes wired end to end
//!
//! ## Example
//!
//! ```rust
//! use artrec_core::{
//!     Artwork, Catalog, CatalogConfig, ExplanationIndex, Rating, RecommendConfig, Recommender,
//!     Vector,
//! };
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
//! assert_eq!(outcome.recommendations().len(), 1);
//! ```

pub mod artwork;
pub mod catalog;
pub mod error;
pub mod explain;
pub mod level;
pub mod profile;
pub mod ranker;
pub mod rating;
pub mod recommend;
pub mod scorer;
pub mod vector;

pub use artwork::Artwork;
pub use catalog::{Candidate, Catalog, CatalogConfig};
pub use error::{Error, Result};
pub use explain::{ExplanationEntry, ExplanationIndex};
pub use level::{Level, LevelPolicy};
pub use ranker::{RankedCandidate, TieBreak};
pub use rating::Rating;
pub use recommend::{
    CuratedRecommendation, DiscoveryRecommendation, RecommendConfig, RecommendOutcome, Recommender,
};
pub use scorer::ScoredCandidate;
pub use vector::Vector;
