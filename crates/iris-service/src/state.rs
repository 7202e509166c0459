//! Shared application state

use crate::config::ServiceConfig;
use iris_classifiers::{Classifier, LinearClassifier};
use std::sync::Arc;
use tracing::info;

/// Application state shared across all requests
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<ServiceConfig>,

    /// The model, read-only for the life of the process
    pub classifier: Arc<dyn Classifier>,
}

impl AppState {
    /// Load the configured model. Fails when the model file is missing or corrupt.
    pub fn new(config: ServiceConfig) -> anyhow::Result<Self> {
        info!(
            "Loading model from: {}",
            config.classifier.model_path.display()
        );
        let classifier = LinearClassifier::load(&config.classifier)?;

        Ok(Self::with_classifier(config, Arc::new(classifier)))
    }

    /// Build state around an already constructed classifier
    pub fn with_classifier(config: ServiceConfig, classifier: Arc<dyn Classifier>) -> Self {
        Self {
            config: Arc::new(config),
            classifier,
        }
    }
}
