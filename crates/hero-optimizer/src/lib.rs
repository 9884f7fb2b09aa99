//! Hero Optimizer
//!
//! Pipeline plumbing shared by document transformers:
//! - [`Transformer`]: one in-place document transformation
//! - [`TransformationEngine`]: runs transformers in order
//! - [`ErrorCollection`]: side channel for non-fatal problems
//! - [`PreloadConfig`]: hero image preload settings (cap and attribute names)

mod engine;
mod error;
mod preload;

pub use engine::{TransformationEngine, Transformer};
pub use error::{ErrorCollection, TransformError};
pub use preload::{ConfigError, PreloadConfig};
