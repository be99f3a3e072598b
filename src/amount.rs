//! Pruning amount resolution.
//!
//! An amount is either a fraction of the slices along the pruning dimension
//! or an absolute slice count. Integer literals in a config file are counts,
//! float literals are fractions.

use crate::error::{PruneError, Result};
use serde::{Deserialize, Serialize};

/// How many slices to prune.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PruningAmount {
    /// Absolute number of slices.
    Count(usize),
    /// Fraction of slices in `[0.0, 1.0]`.
    Fraction(f64),
}

impl PruningAmount {
    /// Check the amount on its own, before any tensor is known.
    pub fn validate(&self) -> Result<()> {
        match *self {
            PruningAmount::Count(_) => Ok(()),
            PruningAmount::Fraction(value) => {
                if value.is_finite() && (0.0..=1.0).contains(&value) {
                    Ok(())
                } else {
                    Err(PruneError::InvalidFraction { value })
                }
            }
        }
    }

    /// Number of slices to prune out of `size`.
    ///
    /// Fractions round half to even, so `0.5` of 5 slices prunes 2.
    pub fn nparams_toprune(&self, size: usize) -> usize {
        match *self {
            PruningAmount::Count(n) => n,
            PruningAmount::Fraction(f) => (f * size as f64).round_ties_even() as usize,
        }
    }

    /// Resolve against `size`, rejecting amounts larger than the dimension.
    pub fn resolve(&self, size: usize) -> Result<usize> {
        self.validate()?;
        let nparams = self.nparams_toprune(size);
        if nparams > size {
            return Err(PruneError::AmountExceedsSize { nparams, size });
        }
        Ok(nparams)
    }
}

impl Default for PruningAmount {
    fn default() -> Self {
        PruningAmount::Fraction(0.5)
    }
}

impl From<usize> for PruningAmount {
    fn from(n: usize) -> Self {
        PruningAmount::Count(n)
    }
}

impl From<f64> for PruningAmount {
    fn from(f: f64) -> Self {
        PruningAmount::Fraction(f)
    }
}
