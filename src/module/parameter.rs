//! Named parameters carrying an optional pruning mask.

use crate::error::{PruneError, Result};
use crate::mask::Mask;
use crate::method::PruningMethod;
use ndarray::ArrayD;
use std::collections::BTreeMap;
use tracing::debug;

/// A weight tensor and the mask currently applied to it.
///
/// The original values stay intact while a mask is attached, so later
/// rounds score the raw weights.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    original: ArrayD<f32>,
    mask: Option<Mask>,
}

impl Parameter {
    pub fn new(original: ArrayD<f32>) -> Self {
        Self { original, mask: None }
    }

    /// Unmasked values.
    pub fn original(&self) -> &ArrayD<f32> {
        &self.original
    }

    pub fn mask(&self) -> Option<&Mask> {
        self.mask.as_ref()
    }

    pub fn is_pruned(&self) -> bool {
        self.mask.is_some()
    }

    pub fn shape(&self) -> &[usize] {
        self.original.shape()
    }

    /// Effective values: original times mask.
    pub fn value(&self) -> Result<ArrayD<f32>> {
        match &self.mask {
            Some(mask) => mask.apply(self.original.view()),
            None => Ok(self.original.clone()),
        }
    }
}

/// A set of named parameters that pruning methods can be attached to.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use recortar::{top_x_perc_structured, Module};
///
/// let mut module = Module::new()
///     .with_parameter("weight", array![[0.1f32, 0.2], [3.0, 4.0]].into_dyn());
/// top_x_perc_structured(&mut module, "weight", 1usize, 50.0, None).unwrap();
/// assert!(module.is_pruned());
/// assert_eq!(module.value("weight").unwrap(), array![[0.0f32, 0.0], [3.0, 4.0]].into_dyn());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Module {
    parameters: BTreeMap<String, Parameter>,
}

impl Module {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a parameter (builder form).
    pub fn with_parameter(mut self, name: impl Into<String>, values: ArrayD<f32>) -> Self {
        self.insert(name, values);
        self
    }

    /// Add or replace a parameter; replacing drops any mask it had.
    pub fn insert(&mut self, name: impl Into<String>, values: ArrayD<f32>) {
        self.parameters.insert(name.into(), Parameter::new(values));
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.get(name)
    }

    /// Iterate parameters in name order.
    pub fn parameters(&self) -> impl Iterator<Item = (&str, &Parameter)> {
        self.parameters.iter().map(|(name, p)| (name.as_str(), p))
    }

    /// Effective (masked) values of `name`.
    pub fn value(&self, name: &str) -> Result<ArrayD<f32>> {
        self.get(name)?.value()
    }

    /// True if any parameter carries a mask.
    pub fn is_pruned(&self) -> bool {
        self.parameters.values().any(Parameter::is_pruned)
    }

    /// Compute a mask for `name` with `method` and attach it.
    ///
    /// The existing mask (all-ones if none) is passed as the default mask.
    /// `importance_scores`, when given, is scored instead of the raw values
    /// and must have the parameter's shape. Nothing is modified on error.
    pub fn prune_parameter<M: PruningMethod + ?Sized>(
        &mut self,
        name: &str,
        method: &M,
        importance_scores: Option<&ArrayD<f32>>,
    ) -> Result<&Mask> {
        let parameter = self.get(name)?;
        let scores = importance_scores.unwrap_or(&parameter.original);
        if scores.shape() != parameter.shape() {
            return Err(PruneError::ShapeMismatch {
                expected: parameter.shape().to_vec(),
                actual: scores.shape().to_vec(),
            });
        }

        let default_mask = match &parameter.mask {
            Some(mask) => mask.clone(),
            None => Mask::ones(parameter.shape()),
        };
        let mask = method.compute_mask(scores.view(), &default_mask)?;
        if mask.shape() != parameter.shape() {
            return Err(PruneError::ShapeMismatch {
                expected: parameter.shape().to_vec(),
                actual: mask.shape().to_vec(),
            });
        }
        debug!(
            parameter = name,
            pruning_type = %method.pruning_type(),
            sparsity = mask.sparsity(),
            "attached pruning mask"
        );

        let parameter = self.get_mut(name)?;
        Ok(parameter.mask.insert(mask))
    }

    /// Make pruning of `name` permanent: the masked values become the
    /// parameter and the mask is dropped.
    pub fn remove_pruning(&mut self, name: &str) -> Result<()> {
        let parameter = self.get_mut(name)?;
        if !parameter.is_pruned() {
            return Err(PruneError::NotPruned { name: name.to_string() });
        }
        parameter.original = parameter.value()?;
        parameter.mask = None;
        debug!(parameter = name, "committed pruning mask");
        Ok(())
    }

    fn get(&self, name: &str) -> Result<&Parameter> {
        self.parameters
            .get(name)
            .ok_or_else(|| PruneError::UnknownParameter { name: name.to_string() })
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Parameter> {
        self.parameters
            .get_mut(name)
            .ok_or_else(|| PruneError::UnknownParameter { name: name.to_string() })
    }
}
