pub mod classifier;
pub mod loader;

pub use classifier::{Classifier, OnnxClassifier};
