//! Binary pruning masks.
//!
//! Masks are boolean arrays with the shape of the tensor they guard.
//! Composition across pruning rounds is an explicit AND, so a mask can only
//! get stricter.

mod binary;

pub use binary::Mask;
