//! Top-X-percent structured pruning for neural network weight tensors.
//!
//! Each slice along the leading dimension of a weight is scored by the sum
//! of its largest-magnitude elements (the top `x` percent of the slice).
//! The lowest-scoring slices along the pruning dimension are masked out,
//! and the new mask is ANDed with whatever mask earlier rounds left behind.
//!
//! - [`norm`]: slice scoring
//! - [`mask`]: boolean masks and their AND combinator
//! - [`method`]: the [`PruningMethod`] capability and [`TopXPercStructured`]
//! - [`module`]: a minimal parameter host with `apply`/`remove` semantics
//! - [`config`]: YAML/JSON configuration
//!
//! # Example
//!
//! ```
//! use ndarray::array;
//! use recortar::{Mask, PruningMethod, TopXPercStructured};
//!
//! let weight = array![[0.1f32, -0.2, 0.1], [3.0, 0.0, -1.0], [0.5, 0.5, 0.5]].into_dyn();
//! let method = TopXPercStructured::new(0.34, 50.0, 0)?;
//! let mask = method.compute_mask(weight.view(), &Mask::ones(weight.shape()))?;
//! assert_eq!(mask.pruned_slices(0), vec![0]);
//! # Ok::<(), recortar::PruneError>(())
//! ```

pub mod amount;
pub mod config;
pub mod error;
pub mod mask;
pub mod method;
pub mod module;
pub mod norm;

pub use amount::PruningAmount;
pub use config::TopXConfig;
pub use error::{PruneError, Result};
pub use mask::Mask;
pub use method::{PruningMethod, PruningType, TopXPercStructured};
pub use module::{top_x_perc_structured, Module, Parameter};
pub use norm::top_x_perc_norm;
