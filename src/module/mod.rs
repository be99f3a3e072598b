//! Minimal parameter host.
//!
//! Holds named weight tensors, attaches masks produced by a
//! [`PruningMethod`](crate::PruningMethod) and commits them on request.

mod entry;
mod parameter;

pub use entry::top_x_perc_structured;
pub use parameter::{Module, Parameter};
