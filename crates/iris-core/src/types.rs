//! Wire types for the `/predict` endpoint

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of measurements in one specimen
pub const FEATURE_COUNT: usize = 4;

/// Measurement names in wire order
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] =
    ["sepal_length", "sepal_width", "petal_length", "petal_width"];

/// Species names indexed by class id of the reference model
pub const IRIS_SPECIES: [&str; 3] = ["setosa", "versicolor", "virginica"];

/// Ordered measurements of one flower specimen.
///
/// Serialized as a bare JSON array. Arity is not enforced on construction;
/// call [`FeatureVector::validate`] against the width the model expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    /// Wrap raw values
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Build from the four named measurements, in wire order
    pub fn from_measurements(
        sepal_length: f64,
        sepal_width: f64,
        petal_length: f64,
        petal_width: f64,
    ) -> Self {
        Self(vec![sepal_length, sepal_width, petal_length, petal_width])
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check arity against the model input width and reject values that are
    /// not finite once narrowed to f32, the precision the model runs at
    pub fn validate(&self, expected: usize) -> Result<()> {
        if self.0.len() != expected {
            return Err(Error::invalid_input(format!(
                "feature_array must contain exactly {} values, got {}",
                expected,
                self.0.len()
            )));
        }

        if let Some(pos) = self.0.iter().position(|&v| !(v as f32).is_finite()) {
            return Err(Error::invalid_input(format!(
                "feature_array[{}] is not a finite number",
                pos
            )));
        }

        Ok(())
    }

    /// Values narrowed to f32 for the model
    pub fn to_f32(&self) -> Vec<f32> {
        self.0.iter().map(|&v| v as f32).collect()
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

/// Predicted class label.
///
/// Models configured with class names answer with `Name`; models without
/// them answer with the bare class index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Index(u32),
    Name(String),
}

impl Label {
    /// Human readable species name, capitalized.
    ///
    /// Indices of the reference model map onto the species names; unknown
    /// indices show as "Unknown".
    pub fn species(&self) -> String {
        match self {
            Self::Name(name) => capitalize(name),
            Self::Index(idx) => match IRIS_SPECIES.get(*idx as usize) {
                Some(name) => capitalize(name),
                None => "Unknown".to_string(),
            },
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(idx) => write!(f, "{}", idx),
            Self::Name(name) => f.write_str(name),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Body of `POST /predict`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub feature_array: FeatureVector,
}

/// Successful response of `POST /predict`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    /// One label per submitted specimen; always a single element
    pub prediction: Vec<Label>,
}

impl PredictResponse {
    pub fn single(label: Label) -> Self {
        Self {
            prediction: vec![label],
        }
    }
}
