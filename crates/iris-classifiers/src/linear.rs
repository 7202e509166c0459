//! Linear classification head evaluated with Candle

use crate::classifier::{Classifier, Prediction};
use crate::config::ClassifierConfig;
use async_trait::async_trait;
use candle_core::{DType, Device, Tensor, D};
use candle_nn::{Linear, Module};
use iris_core::{Error, FeatureVector, Label, Result};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, info};

/// Single-layer classifier: `argmax(x · Wᵀ + b)`.
///
/// Weights are read-only after construction, so one instance can be shared
/// across concurrent requests behind an `Arc`.
pub struct LinearClassifier {
    name: String,
    head: Linear,
    device: Device,
    num_features: usize,
    num_classes: usize,
    labels: Vec<String>,
}

impl LinearClassifier {
    /// Load the classification head from the configured safetensors file
    pub fn load(config: &ClassifierConfig) -> Result<Self> {
        let path = &config.model_path;
        if !path.exists() {
            return Err(Error::model(format!(
                "model file not found: {}",
                path.display()
            )));
        }

        let device = Device::Cpu;
        let mut tensors = candle_core::safetensors::load(path, &device).map_err(|e| {
            Error::model(format!("Failed to load weights from {}: {}", path.display(), e))
        })?;
        debug!("Read {} tensors from {}", tensors.len(), path.display());

        let weight = take_tensor(&mut tensors, &config.weight_tensor())?;
        let bias = take_tensor(&mut tensors, &config.bias_tensor())?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("linear")
            .to_string();

        let classifier = Self::from_tensors(name, weight, bias, config.labels.clone())?;
        info!(
            "Loaded classifier '{}' from {} ({} features, {} classes)",
            classifier.name,
            path.display(),
            classifier.num_features,
            classifier.num_classes
        );
        Ok(classifier)
    }

    /// Build a classifier from in-memory weight `[classes, features]` and bias `[classes]`
    pub fn from_tensors(
        name: impl Into<String>,
        weight: Tensor,
        bias: Tensor,
        labels: Vec<String>,
    ) -> Result<Self> {
        let (num_classes, num_features) = weight
            .dims2()
            .map_err(|e| Error::model(format!("weight must be 2-dimensional: {}", e)))?;
        let bias_len = bias
            .dims1()
            .map_err(|e| Error::model(format!("bias must be 1-dimensional: {}", e)))?;

        if num_classes == 0 || num_features == 0 {
            return Err(Error::model(format!(
                "empty classification head: shape [{}, {}]",
                num_classes, num_features
            )));
        }
        if bias_len != num_classes {
            return Err(Error::model(format!(
                "bias has {} entries but weight has {} classes",
                bias_len, num_classes
            )));
        }
        if !labels.is_empty() && labels.len() != num_classes {
            return Err(Error::config(format!(
                "{} labels configured but model has {} classes",
                labels.len(),
                num_classes
            )));
        }

        let weight = weight.to_dtype(DType::F32).map_err(candle_err)?;
        let bias = bias.to_dtype(DType::F32).map_err(candle_err)?;
        let device = weight.device().clone();

        Ok(Self {
            name: name.into(),
            head: Linear::new(weight, Some(bias)),
            device,
            num_features,
            num_classes,
            labels,
        })
    }

    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// Configured class names; empty when answering with indices
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Raw class scores for one specimen
    pub fn logits(&self, features: &FeatureVector) -> Result<Vec<f32>> {
        let scores = self.forward(features)?;
        scores
            .squeeze(0)
            .and_then(|t| t.to_vec1::<f32>())
            .map_err(candle_err)
    }

    /// Index of the highest scoring class
    pub fn predict_index(&self, features: &FeatureVector) -> Result<usize> {
        let scores = self.forward(features)?;
        let idx = scores
            .argmax(D::Minus1)
            .and_then(|t| t.squeeze(0))
            .and_then(|t| t.to_scalar::<u32>())
            .map_err(candle_err)?;
        Ok(idx as usize)
    }

    /// Label for a class index
    pub fn label_for(&self, class_index: usize) -> Label {
        match self.labels.get(class_index) {
            Some(name) => Label::Name(name.clone()),
            None => Label::Index(class_index as u32),
        }
    }

    fn forward(&self, features: &FeatureVector) -> Result<Tensor> {
        features.validate(self.num_features)?;

        let values = features.to_f32();
        let input = Tensor::from_vec(values, (1, self.num_features), &self.device)
            .map_err(candle_err)?;
        self.head.forward(&input).map_err(candle_err)
    }
}

#[async_trait]
impl Classifier for LinearClassifier {
    async fn predict(&self, features: &FeatureVector) -> Result<Prediction> {
        let start = Instant::now();
        let class_index = self.predict_index(features)?;
        let label = self.label_for(class_index);

        Ok(Prediction::new(label, class_index).with_latency(start.elapsed().as_micros() as u64))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn num_features(&self) -> usize {
        self.num_features
    }
}

fn take_tensor(tensors: &mut HashMap<String, Tensor>, name: &str) -> Result<Tensor> {
    tensors
        .remove(name)
        .ok_or_else(|| Error::model(format!("tensor '{}' missing from model file", name)))
}

fn candle_err(e: candle_core::Error) -> Error {
    Error::model(e.to_string())
}
