//! Functional entry point for top-X-percent structured pruning.

use super::Module;
use crate::amount::PruningAmount;
use crate::error::Result;
use crate::method::TopXPercStructured;
use ndarray::ArrayD;

/// Prune parameter `name` of `module` by removing the dimension-0 slices
/// with the lowest top-`x`-percent magnitude sums.
///
/// Returns the module so calls can be chained.
pub fn top_x_perc_structured<'m>(
    module: &'m mut Module,
    name: &str,
    amount: impl Into<PruningAmount>,
    x: f64,
    importance_scores: Option<&ArrayD<f32>>,
) -> Result<&'m mut Module> {
    TopXPercStructured::apply(module, name, amount, x, importance_scores)?;
    Ok(module)
}
