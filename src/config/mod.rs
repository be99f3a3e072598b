//! Pruning configuration module
//!
//! Provides the serializable configuration for the top-X-percent structured
//! method, loadable from YAML or JSON.

mod topx_config;

#[cfg(test)]
mod tests;

pub use topx_config::TopXConfig;
