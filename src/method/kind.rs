//! Pruning type tag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Granularity at which a pruning method removes weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PruningType {
    /// Individual elements.
    Unstructured,
    /// Whole slices along one dimension.
    Structured,
    /// Elements ranked across several tensors at once.
    Global,
}

impl PruningType {
    /// Get the display name for this type.
    pub fn display_name(&self) -> &'static str {
        match self {
            PruningType::Unstructured => "unstructured",
            PruningType::Structured => "structured",
            PruningType::Global => "global",
        }
    }
}

impl fmt::Display for PruningType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
