//! Top-X-percent magnitude norm.

use crate::error::{PruneError, Result};
use ndarray::{Array1, ArrayViewD, Axis};

/// Number of elements summed per slice: `round(elements_per_slice * x / 100)`,
/// rounding half to even.
///
/// Can be zero for small `x`; the resulting scores are then all zero.
pub fn retained_per_slice(elements_per_slice: usize, x: f64) -> usize {
    let k = (elements_per_slice as f64 * x / 100.0).round_ties_even();
    (k.max(0.0) as usize).min(elements_per_slice)
}

/// Score every slice along dimension 0 of `t`.
///
/// Each slice is flattened, its absolute values sorted descending, and the
/// first [`retained_per_slice`] of them summed. Scores come back in slice
/// order. NaN magnitudes order above every number.
///
/// # Errors
///
/// `InsufficientRank` for tensors with fewer than two dimensions.
pub fn top_x_perc_norm(t: ArrayViewD<'_, f32>, x: f64) -> Result<Array1<f32>> {
    if t.ndim() < 2 {
        return Err(PruneError::InsufficientRank { rank: t.ndim() });
    }

    let elements_per_slice: usize = t.shape()[1..].iter().product();
    let k = retained_per_slice(elements_per_slice, x);

    let mut magnitudes = Vec::with_capacity(elements_per_slice);
    let scores = t
        .axis_iter(Axis(0))
        .map(|slice| {
            magnitudes.clear();
            magnitudes.extend(slice.iter().map(|v| v.abs()));
            magnitudes.sort_unstable_by(|a, b| b.total_cmp(a));
            magnitudes[..k].iter().sum::<f32>()
        })
        .collect();

    Ok(scores)
}
