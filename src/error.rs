//! Error types for structured pruning.
//!
//! Every variant is a configuration error: invalid input is rejected before
//! any scoring happens, so callers never observe a partially built mask.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pruning operations.
pub type Result<T> = std::result::Result<T, PruneError>;

/// Errors raised while validating or applying a pruning method.
#[derive(Debug, Error)]
pub enum PruneError {
    /// Structured pruning needs at least a 2-D tensor.
    #[error("Structured pruning can only be applied to multidimensional tensors, found rank {rank}\n  → Prune a weight with at least two dimensions")]
    InsufficientRank { rank: usize },

    /// Pruning dimension outside `[-rank, rank)`.
    #[error("Invalid pruning dimension {dim} for tensor of rank {rank}\n  → Use a dimension in [-{rank}, {rank})")]
    InvalidDim { dim: isize, rank: usize },

    /// Fractional amount outside `[0.0, 1.0]` or not finite.
    #[error("Invalid pruning amount {value}: a fraction must be between 0.0 and 1.0")]
    InvalidFraction { value: f64 },

    /// Amount resolves to more slices than the tensor has.
    #[error("Pruning amount {nparams} exceeds the {size} slices available along the pruning dimension")]
    AmountExceedsSize { nparams: usize, size: usize },

    /// Retention percentile outside `(0, 100]`.
    #[error("Invalid retention percentile {x}: must be in (0, 100]")]
    InvalidPercentile { x: f64 },

    /// Two tensors that must align do not.
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch { expected: Vec<usize>, actual: Vec<usize> },

    /// Mask data is not binary.
    #[error("Invalid mask: {reason}")]
    InvalidMask { reason: String },

    /// More slices must be kept than scores were produced.
    #[error("Cannot keep {requested} slices from {scores} leading-dimension scores\n  → Scores are computed along dimension 0; prune along dim 0 or match its size")]
    ScoreDimensionMismatch { scores: usize, requested: usize },

    /// A selected score index does not address a slice along the pruning dimension.
    #[error("Slice index {index} out of range for dimension {dim} of size {size}")]
    SliceOutOfRange { index: usize, dim: usize, size: usize },

    /// Module has no parameter with this name.
    #[error("Parameter '{name}' not found in module")]
    UnknownParameter { name: String },

    /// Parameter carries no mask to commit.
    #[error("Parameter '{name}' has not been pruned\n  → Apply a pruning method before removing the reparametrization")]
    NotPruned { name: String },

    /// Configuration could not be parsed.
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// IO error with context.
    #[error("IO error reading {path}\n  Cause: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
