//! The pruning-method capability.

use super::PruningType;
use crate::error::Result;
use crate::mask::Mask;
use ndarray::ArrayViewD;

/// Something that turns a tensor and its current mask into a new mask.
///
/// Implementors must not loosen `default_mask`: every entry it prunes stays
/// pruned in the returned mask.
pub trait PruningMethod: Send + Sync {
    /// Granularity of the masks this method produces.
    fn pruning_type(&self) -> PruningType;

    /// Compute the mask for `t`, composed with `default_mask`.
    fn compute_mask(&self, t: ArrayViewD<'_, f32>, default_mask: &Mask) -> Result<Mask>;
}
