use std::cmp::Ordering;

use crate::data::model::Field;

use super::correlation::CorrelationMatrix;

// ---------------------------------------------------------------------------
// Ranked correlation pairs
// ---------------------------------------------------------------------------

/// One unordered field pair, stored with `first.name() < second.name()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedPair {
    pub first: Field,
    pub second: Field,
    /// Signed coefficient, possibly NaN.
    pub correlation: f64,
}

impl RankedPair {
    pub fn strength(&self) -> f64 {
        self.correlation.abs()
    }
}

/// Total order used for ranking: descending absolute correlation, NaN last,
/// ties broken by the lexicographic order of the pair's field names.
pub fn rank_order(a: &RankedPair, b: &RankedPair) -> Ordering {
    let by_strength = match (a.strength().is_nan(), b.strength().is_nan()) {
        (false, false) => b.strength().total_cmp(&a.strength()),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => Ordering::Equal,
    };
    by_strength
        .then_with(|| a.first.name().cmp(b.first.name()))
        .then_with(|| a.second.name().cmp(b.second.name()))
}

/// Every off-diagonal pair once, named in lexicographic order.
pub fn unique_pairs(matrix: &CorrelationMatrix) -> Vec<RankedPair> {
    let fields = matrix.fields();
    let mut pairs = Vec::new();
    for i in 0..fields.len() {
        for j in 0..fields.len() {
            if fields[i].name() < fields[j].name() {
                pairs.push(RankedPair {
                    first: fields[i],
                    second: fields[j],
                    correlation: matrix.at(i, j),
                });
            }
        }
    }
    pairs
}

/// The `k` strongest pairs under [`rank_order`]. Returns every pair when
/// fewer than `k` exist.
pub fn top_pairs(matrix: &CorrelationMatrix, k: usize) -> Vec<RankedPair> {
    let mut pairs = unique_pairs(matrix);
    pairs.sort_by(rank_order);
    pairs.truncate(k);
    pairs
}
