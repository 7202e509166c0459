//! Classifier trait and common types

use async_trait::async_trait;
use iris_core::{FeatureVector, Label, Result};

/// Trait for all classifiers
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Predict the label of one specimen
    async fn predict(&self, features: &FeatureVector) -> Result<Prediction>;

    /// Get the classifier name
    fn name(&self) -> &str;

    /// Number of values a feature vector must hold
    fn num_features(&self) -> usize;
}

/// Result of a single prediction
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Predicted label
    pub label: Label,

    /// Index of the winning class
    pub class_index: usize,

    /// Latency in microseconds
    pub latency_us: u64,
}

impl Prediction {
    /// Create a new prediction
    pub fn new(label: Label, class_index: usize) -> Self {
        Self {
            label,
            class_index,
            latency_us: 0,
        }
    }

    /// Attach the measured latency
    pub fn with_latency(mut self, latency_us: u64) -> Self {
        self.latency_us = latency_us;
        self
    }
}
