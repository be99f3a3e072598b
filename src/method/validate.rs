//! Shape and dimension checks shared by structured methods.

use crate::error::{PruneError, Result};

/// Structured pruning needs a tensor with at least two dimensions.
pub fn validate_structured(shape: &[usize]) -> Result<()> {
    if shape.len() <= 1 {
        return Err(PruneError::InsufficientRank { rank: shape.len() });
    }
    Ok(())
}

/// Map a possibly negative `dim` onto `0..rank`.
pub fn normalize_dim(dim: isize, rank: usize) -> Result<usize> {
    let signed_rank = rank as isize;
    let normalized = if dim < 0 { dim + signed_rank } else { dim };
    if (0..signed_rank).contains(&normalized) {
        Ok(normalized as usize)
    } else {
        Err(PruneError::InvalidDim { dim, rank })
    }
}
