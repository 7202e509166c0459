//! Iris Classifiers
//!
//! Classifiers that turn a flower's four measurements into a species label.
//!
//! The shipped model is a single linear classification head stored as a
//! safetensors file and evaluated on CPU with Candle. It is loaded once at
//! process start and shared read-only between requests.

pub mod classifier;
pub mod config;
pub mod linear;

pub use classifier::{Classifier, Prediction};
pub use config::ClassifierConfig;
pub use linear::LinearClassifier;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::{Classifier, Prediction};
    pub use crate::config::ClassifierConfig;
    pub use crate::linear::LinearClassifier;
}
