pub mod config;
pub mod error;
pub mod inference;
pub mod model;
pub mod observability;
pub mod prediction;
pub mod preprocessing;
pub mod server;

#[cfg(test)]
mod observability_tests;
#[cfg(test)]
mod test_support;

// Re-export common types
pub use error::{InferenceError, ModelLoadError};
pub use prediction::{Label, Prediction};
