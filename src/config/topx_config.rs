//! Serializable configuration for the top-X-percent structured method.

use crate::amount::PruningAmount;
use crate::error::{PruneError, Result};
use crate::method::TopXPercStructured;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for [`TopXPercStructured`].
///
/// # Example
///
/// ```
/// use recortar::{PruningAmount, TopXConfig};
///
/// let config = TopXConfig::new()
///     .with_amount(PruningAmount::Count(8))
///     .with_x(20.0)
///     .with_dim(0);
/// let method = config.build().unwrap();
/// assert_eq!(method.dim(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopXConfig {
    /// Slices to prune: a count or a fraction.
    amount: PruningAmount,

    /// Percentage of each slice's elements summed when scoring.
    x: f64,

    /// Pruning dimension; negative values count from the end.
    dim: isize,
}

impl Default for TopXConfig {
    fn default() -> Self {
        Self { amount: PruningAmount::default(), x: 10.0, dim: -1 }
    }
}

impl TopXConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pruning amount.
    pub fn with_amount(mut self, amount: impl Into<PruningAmount>) -> Self {
        self.amount = amount.into();
        self
    }

    /// Set the retention percentile.
    pub fn with_x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    /// Set the pruning dimension.
    pub fn with_dim(mut self, dim: isize) -> Self {
        self.dim = dim;
        self
    }

    pub fn amount(&self) -> PruningAmount {
        self.amount
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn dim(&self) -> isize {
        self.dim
    }

    /// Validate the configuration without building a method.
    pub fn validate(&self) -> Result<()> {
        self.build().map(|_| ())
    }

    /// Build the pruning method this configuration describes.
    pub fn build(&self) -> Result<TopXPercStructured> {
        TopXPercStructured::new(self.amount, self.x, self.dim)
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| PruneError::Config { message: e.to_string() })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| PruneError::Config { message: e.to_string() })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.json` file, or YAML for any other extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|source| PruneError::Io { path: path.to_path_buf(), source })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&contents),
            _ => Self::from_yaml(&contents),
        }
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| PruneError::Config { message: e.to_string() })
    }
}
