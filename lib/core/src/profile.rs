//! User preference profile construction.
//!
//! The profile is the weighted centroid of the embeddings a user has rated:
//! each dimension is `sum(w_k * emb_k[i]) / sum(|w_k|)`, with the
//! denominator computed once over the whole retained rating set.

use crate::vector::Vector;

/// Build a preference profile from (weight, embedding) pairs.
///
/// Returns `None` when no profile exists: the input is empty or the
/// absolute weights sum to zero (all ratings neutral or cancelling).
/// `None` is "no profile", not a zero vector; consumers must propagate it
/// as undefined similarity rather than scoring against it.
pub fn build_profile(rated: &[(f32, Vector)]) -> Option<Vector> {
    let denominator: f32 = rated.iter().map(|(weight, _)| weight.abs()).sum();
    if rated.is_empty() || denominator == 0.0 {
        return None;
    }

    // Catalog dimension enforcement guarantees all embeddings agree.
    let dim = rated[0].1.dim();
    let mut acc = vec![0.0f32; dim];
    for (weight, embedding) in rated {
        for (slot, value) in acc.iter_mut().zip(embedding.as_slice()) {
            *slot += weight * value;
        }
    }
    for slot in &mut acc {
        *slot /= denominator;
    }

    Some(Vector::new(acc))
}
