//! Top-X-percent structured pruning.

use super::validate::{normalize_dim, validate_structured};
use super::{PruningMethod, PruningType};
use crate::amount::PruningAmount;
use crate::error::{PruneError, Result};
use crate::mask::Mask;
use crate::module::Module;
use crate::norm::{retained_per_slice, top_x_perc_norm};
use ndarray::{Array1, ArrayD, ArrayViewD};
use tracing::{debug, warn};

/// Prunes whole slices along `dim`, dropping the ones whose top `x` percent
/// of magnitudes sum lowest.
///
/// Scores are always computed along dimension 0, whatever `dim` says. For
/// `dim != 0` the number of leading-dimension scores must cover the slices
/// to keep, and the selected indices must address slices along `dim`.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use recortar::{Mask, PruningAmount, PruningMethod, TopXPercStructured};
///
/// let t = array![[1.0f32, 2.0, 3.0, 4.0], [4.0, 3.0, 2.0, 1.0], [0.0, 0.0, 0.0, 10.0]].into_dyn();
/// let method = TopXPercStructured::new(PruningAmount::Count(1), 50.0, 0).unwrap();
/// let mask = method.compute_mask(t.view(), &Mask::ones(t.shape())).unwrap();
/// assert_eq!(mask.pruned_slices(0), vec![1]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TopXPercStructured {
    amount: PruningAmount,
    x: f64,
    dim: isize,
}

impl TopXPercStructured {
    /// Create the method, validating `amount` and `x`.
    ///
    /// # Errors
    ///
    /// `InvalidFraction` for a fraction outside `[0, 1]`, `InvalidPercentile`
    /// for `x` outside `(0, 100]`.
    pub fn new(amount: impl Into<PruningAmount>, x: f64, dim: isize) -> Result<Self> {
        let amount = amount.into();
        amount.validate()?;
        if !(x.is_finite() && x > 0.0 && x <= 100.0) {
            return Err(PruneError::InvalidPercentile { x });
        }
        Ok(Self { amount, x, dim })
    }

    pub fn amount(&self) -> PruningAmount {
        self.amount
    }

    /// Retention percentile.
    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn dim(&self) -> isize {
        self.dim
    }

    /// Prune parameter `name` of `module` along dimension 0.
    ///
    /// When `importance_scores` is given it is scored instead of the
    /// parameter's values. Returns the method that produced the mask.
    pub fn apply(
        module: &mut Module,
        name: &str,
        amount: impl Into<PruningAmount>,
        x: f64,
        importance_scores: Option<&ArrayD<f32>>,
    ) -> Result<Self> {
        let method = Self::new(amount, x, 0)?;
        module.prune_parameter(name, &method, importance_scores)?;
        Ok(method)
    }
}

impl PruningMethod for TopXPercStructured {
    fn pruning_type(&self) -> PruningType {
        PruningType::Structured
    }

    fn compute_mask(&self, t: ArrayViewD<'_, f32>, default_mask: &Mask) -> Result<Mask> {
        validate_structured(t.shape())?;
        let dim = normalize_dim(self.dim, t.ndim())?;
        if default_mask.shape() != t.shape() {
            return Err(PruneError::ShapeMismatch {
                expected: t.shape().to_vec(),
                actual: default_mask.shape().to_vec(),
            });
        }

        let tensor_size = t.shape()[dim];
        let nparams_toprune = self.amount.resolve(tensor_size)?;
        let nparams_tokeep = tensor_size - nparams_toprune;

        if nparams_toprune == 0 {
            debug!(dim, tensor_size, "nothing to prune, keeping default mask");
            return Ok(default_mask.clone());
        }
        if dim != 0 {
            warn!(dim, "top-x scores are computed along dimension 0, not the pruning dimension");
        }
        let num_scores = t.shape()[0];
        if nparams_tokeep > num_scores {
            return Err(PruneError::ScoreDimensionMismatch {
                scores: num_scores,
                requested: nparams_tokeep,
            });
        }

        let norm = top_x_perc_norm(t.view(), self.x)?;
        let keep = top_k_indices(&norm, nparams_tokeep)?;
        let elements_per_slice: usize = t.shape()[1..].iter().product();
        debug!(
            dim,
            tensor_size,
            nparams_toprune,
            k = retained_per_slice(elements_per_slice, self.x),
            "computed top-x structured mask"
        );

        Mask::keep_slices(t.shape(), dim, &keep)?.and(default_mask)
    }
}

/// Indices of the `k` largest scores; ties go to the lower index.
fn top_k_indices(scores: &Array1<f32>, k: usize) -> Result<Vec<usize>> {
    if k > scores.len() {
        return Err(PruneError::ScoreDimensionMismatch { scores: scores.len(), requested: k });
    }
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    order.truncate(k);
    Ok(order)
}
