//! Slice importance scoring.
//!
//! A slice is scored by the sum of its largest-magnitude elements, where
//! "largest" covers the top `x` percent of the slice. Slices are always
//! taken along the leading dimension.

mod topx;

pub use topx::{retained_per_slice, top_x_perc_norm};
