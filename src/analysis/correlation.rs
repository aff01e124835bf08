use crate::data::model::{Field, Subset};

use super::stats::mean;

// ---------------------------------------------------------------------------
// Pearson correlation
// ---------------------------------------------------------------------------

/// Pearson correlation of two equally long samples.
///
/// Returns NaN when either sample has zero variance or fewer than two
/// points. Results are clipped to [-1, 1] to absorb rounding drift.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.len() < 2 {
        return f64::NAN;
    }
    let mx = mean(x);
    let my = mean(y);
    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (&a, &b) in x.iter().zip(y) {
        let dx = a - mx;
        let dy = b - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    let divisor = (sxx * syy).sqrt();
    if divisor == 0.0 || !divisor.is_finite() {
        return f64::NAN;
    }
    (sxy / divisor).clamp(-1.0, 1.0)
}

// ---------------------------------------------------------------------------
// CorrelationMatrix
// ---------------------------------------------------------------------------

/// Square, symmetric matrix of pairwise correlations with a unit diagonal.
/// Undefined coefficients are stored as NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    fields: Vec<Field>,
    values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Correlate every field in `fields` against every other over `subset`.
    pub fn from_subset(subset: &Subset, fields: &[Field]) -> Self {
        let columns: Vec<Vec<f64>> = fields.iter().map(|&f| subset.column(f)).collect();
        let n = fields.len();
        let mut values = vec![vec![1.0; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let r = pearson(&columns[i], &columns[j]);
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        let matrix = CorrelationMatrix {
            fields: fields.to_vec(),
            values,
        };
        let degenerate = matrix.degenerate_fields();
        if !degenerate.is_empty() {
            log::warn!("Undefined correlations for zero-variance fields: {degenerate:?}");
        }
        matrix
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.fields.len()
    }

    /// Coefficient at matrix position `(i, j)`.
    pub fn at(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }

    /// Coefficient for a field pair, `None` if either field is not in the matrix.
    pub fn get(&self, a: Field, b: Field) -> Option<f64> {
        let i = self.fields.iter().position(|&f| f == a)?;
        let j = self.fields.iter().position(|&f| f == b)?;
        Some(self.values[i][j])
    }

    /// Fields whose every off-diagonal coefficient is NaN.
    pub fn degenerate_fields(&self) -> Vec<Field> {
        let n = self.size();
        if n < 2 {
            return Vec::new();
        }
        (0..n)
            .filter(|&i| (0..n).filter(|&j| j != i).all(|j| self.values[i][j].is_nan()))
            .map(|i| self.fields[i])
            .collect()
    }
}
