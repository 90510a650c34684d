//! Deterministic ranking of scored candidates.
//!
//! The ordering key is an explicit tri-state rule, never a platform null
//! ordering: defined similarity before undefined, then similarity
//! descending, then the configured tie-break.

use crate::scorer::ScoredCandidate;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// Final tie-break applied when similarities compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Position in the input list (curated mode: the fixed candidate list).
    ListOrder,
    /// Artwork id ascending (discovery mode).
    ArtworkId,
}

/// A candidate with its dense 1-based rank.
#[derive(Debug, Clone)]
pub struct RankedCandidate {
    pub rank: usize,
    pub artwork_id: String,
    pub name: Option<String>,
    pub museum_name: Option<String>,
    pub similarity: Option<f32>,
}

/// Defined similarities sort before undefined; among defined, higher first.
fn similarity_order(a: Option<f32>, b: Option<f32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => OrderedFloat(b).cmp(&OrderedFloat(a)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Assign dense 1-based ranks to every candidate.
///
/// Every input row gets exactly one rank; ranks form a permutation of
/// `1..=len` with no gaps.
pub fn rank(scored: Vec<ScoredCandidate>, tie_break: TieBreak) -> Vec<RankedCandidate> {
    let mut indexed: Vec<(usize, ScoredCandidate)> = scored.into_iter().enumerate().collect();

    indexed.sort_by(|(slot_a, a), (slot_b, b)| {
        similarity_order(a.similarity, b.similarity).then_with(|| match tie_break {
            TieBreak::ListOrder => slot_a.cmp(slot_b),
            TieBreak::ArtworkId => a.artwork_id.cmp(&b.artwork_id),
        })
    });

    indexed
        .into_iter()
        .enumerate()
        .map(|(position, (_, candidate))| RankedCandidate {
            rank: position + 1,
            artwork_id: candidate.artwork_id,
            name: candidate.name,
            museum_name: candidate.museum_name,
            similarity: candidate.similarity,
        })
        .collect()
}
