//! Configuration for loading the classifier

use iris_core::{Error, Result, IRIS_SPECIES};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the model lives and how its outputs are named
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Path to the safetensors weights
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,

    /// Class names by index. Empty means answer with bare class indices.
    #[serde(default = "default_labels")]
    pub labels: Vec<String>,

    /// Tensor name prefix of the classification head
    #[serde(default = "default_tensor_prefix")]
    pub tensor_prefix: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            labels: default_labels(),
            tensor_prefix: default_tensor_prefix(),
        }
    }
}

impl ClassifierConfig {
    /// Create a configuration for the given model file with default labels
    pub fn from_local(path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: path.into(),
            ..Default::default()
        }
    }

    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| {
            Error::config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Set class names
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Answer with class indices instead of names
    pub fn with_index_labels(mut self) -> Self {
        self.labels.clear();
        self
    }

    /// Name of the weight tensor
    pub fn weight_tensor(&self) -> String {
        format!("{}.weight", self.tensor_prefix)
    }

    /// Name of the bias tensor
    pub fn bias_tensor(&self) -> String {
        format!("{}.bias", self.tensor_prefix)
    }
}

fn default_model_path() -> PathBuf {
    PathBuf::from("models/iris_model.safetensors")
}

fn default_labels() -> Vec<String> {
    IRIS_SPECIES.iter().map(|s| s.to_string()).collect()
}

fn default_tensor_prefix() -> String {
    "classifier".to_string()
}
