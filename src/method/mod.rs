//! Pruning methods.
//!
//! A method is anything implementing [`PruningMethod`]: it receives a tensor
//! and the mask left by earlier rounds and returns a stricter mask. The
//! crate ships one structured method, [`TopXPercStructured`].

mod kind;
mod topx;
mod traits;
mod validate;

pub use kind::PruningType;
pub use topx::TopXPercStructured;
pub use traits::PruningMethod;
pub use validate::{normalize_dim, validate_structured};
