//! Boolean mask type and its combinators.

use crate::error::{PruneError, Result};
use ndarray::{ArrayD, ArrayViewD, Axis, IxDyn, Zip};

/// Keep/drop mask with one entry per tensor element.
///
/// `true` keeps the element, `false` prunes it. Values are binary by
/// construction; float masks are checked on the way in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    keep: ArrayD<bool>,
}

impl Mask {
    /// All-ones mask (nothing pruned).
    pub fn ones(shape: &[usize]) -> Self {
        Self { keep: ArrayD::from_elem(IxDyn(shape), true) }
    }

    /// All-zeros mask (everything pruned).
    pub fn zeros(shape: &[usize]) -> Self {
        Self { keep: ArrayD::from_elem(IxDyn(shape), false) }
    }

    /// Wrap an existing boolean array.
    pub fn from_bool(keep: ArrayD<bool>) -> Self {
        Self { keep }
    }

    /// Build from a 0/1 float array.
    ///
    /// # Errors
    ///
    /// `InvalidMask` if any entry is not exactly 0.0 or 1.0.
    pub fn from_f32(values: ArrayViewD<'_, f32>) -> Result<Self> {
        if let Some(bad) = values.iter().find(|&&v| v != 0.0 && v != 1.0) {
            return Err(PruneError::InvalidMask {
                reason: format!("mask contains non-binary value {bad}"),
            });
        }
        Ok(Self { keep: values.mapv(|v| v == 1.0) })
    }

    /// Mask that keeps only the listed slices along `dim`.
    ///
    /// # Errors
    ///
    /// `InvalidDim` if `dim` is not an axis of `shape`, `SliceOutOfRange` if
    /// an index does not address a slice along it.
    pub fn keep_slices(shape: &[usize], dim: usize, indices: &[usize]) -> Result<Self> {
        let size = *shape
            .get(dim)
            .ok_or_else(|| PruneError::InvalidDim { dim: dim as isize, rank: shape.len() })?;
        let mut mask = Self::zeros(shape);
        for &index in indices {
            if index >= size {
                return Err(PruneError::SliceOutOfRange { index, dim, size });
            }
            mask.keep.index_axis_mut(Axis(dim), index).fill(true);
        }
        Ok(mask)
    }

    /// Conjunction of two masks of the same shape.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the shapes differ.
    pub fn and(&self, other: &Mask) -> Result<Mask> {
        self.check_shape(other.shape())?;
        let keep = Zip::from(&self.keep).and(&other.keep).map_collect(|&a, &b| a && b);
        Ok(Mask { keep })
    }

    pub fn shape(&self) -> &[usize] {
        self.keep.shape()
    }

    /// Borrow the boolean data.
    pub fn as_bool(&self) -> &ArrayD<bool> {
        &self.keep
    }

    /// 0/1 float copy, ready to multiply into weights.
    pub fn to_f32(&self) -> ArrayD<f32> {
        self.keep.mapv(|k| if k { 1.0 } else { 0.0 })
    }

    /// Elementwise product of `weights` and this mask.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if `weights` does not have the mask's shape.
    pub fn apply(&self, weights: ArrayViewD<'_, f32>) -> Result<ArrayD<f32>> {
        self.check_shape(weights.shape())?;
        Ok(Zip::from(&weights).and(&self.keep).map_collect(|&w, &k| if k { w } else { 0.0 }))
    }

    /// Number of kept entries.
    pub fn nnz(&self) -> usize {
        self.keep.iter().filter(|&&k| k).count()
    }

    /// Number of pruned entries.
    pub fn num_zeros(&self) -> usize {
        self.keep.len() - self.nnz()
    }

    /// Fraction of pruned entries; 0.0 for an empty mask.
    pub fn sparsity(&self) -> f32 {
        if self.keep.is_empty() {
            0.0
        } else {
            self.num_zeros() as f32 / self.keep.len() as f32
        }
    }

    /// Indices along `dim` whose slice is entirely pruned.
    ///
    /// Returns an empty list if `dim` is not an axis of the mask.
    pub fn pruned_slices(&self, dim: usize) -> Vec<usize> {
        if dim >= self.keep.ndim() {
            return Vec::new();
        }
        self.keep
            .axis_iter(Axis(dim))
            .enumerate()
            .filter(|(_, slice)| slice.iter().all(|&k| !k))
            .map(|(i, _)| i)
            .collect()
    }

    fn check_shape(&self, actual: &[usize]) -> Result<()> {
        if self.shape() != actual {
            return Err(PruneError::ShapeMismatch {
                expected: self.shape().to_vec(),
                actual: actual.to_vec(),
            });
        }
        Ok(())
    }
}
