//! Cosine scoring of candidates against a preference profile.

use crate::catalog::Candidate;
use crate::vector::Vector;

/// A candidate with its computed similarity.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub artwork_id: String,
    pub name: Option<String>,
    pub museum_name: Option<String>,
    pub similarity: Option<f32>,
}

/// Score a single candidate embedding against the profile.
///
/// Undefined (`None`) whenever the profile itself is undefined, the
/// candidate has no embedding, or the cosine is undefined for the pair
/// (dimension mismatch, zero norm).
#[inline]
pub fn score(profile: Option<&Vector>, embedding: Option<&Vector>) -> Option<f32> {
    match (profile, embedding) {
        (Some(profile), Some(embedding)) => profile.cosine_similarity(embedding),
        _ => None,
    }
}

/// Score every candidate, preserving input order.
pub fn score_candidates(profile: Option<&Vector>, candidates: Vec<Candidate>) -> Vec<ScoredCandidate> {
    candidates
        .into_iter()
        .map(|candidate| {
            let similarity = score(profile, candidate.embedding.as_ref());
            ScoredCandidate {
                artwork_id: candidate.artwork_id,
                name: candidate.name,
                museum_name: candidate.museum_name,
                similarity,
            }
        })
        .collect()
}
