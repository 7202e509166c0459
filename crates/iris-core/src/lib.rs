//! Iris Core
//!
//! Types and error handling shared by the inference service and the form client.
//!
//! This crate provides:
//! - The feature vector and label types that travel over the wire
//! - The `/predict` request and response bodies
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    FeatureVector, Label, PredictRequest, PredictResponse, FEATURE_COUNT, FEATURE_NAMES,
    IRIS_SPECIES,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{FeatureVector, Label, PredictRequest, PredictResponse};
}
