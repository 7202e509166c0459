//! The four-field measurement form

use iris_core::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
use serde::Deserialize;

/// Human labels for each field, in wire order
pub const FIELD_LABELS: [&str; FEATURE_COUNT] = [
    "Sepal Length (cm)",
    "Sepal Width (cm)",
    "Petal Length (cm)",
    "Petal Width (cm)",
];

/// Raw form submission; values stay strings until [`PredictForm::parse`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictForm {
    #[serde(default)]
    pub sepal_length: String,
    #[serde(default)]
    pub sepal_width: String,
    #[serde(default)]
    pub petal_length: String,
    #[serde(default)]
    pub petal_width: String,
}

impl Default for PredictForm {
    /// Every field starts at zero
    fn default() -> Self {
        let zero = format_value(0.0);
        Self {
            sepal_length: zero.clone(),
            sepal_width: zero.clone(),
            petal_length: zero.clone(),
            petal_width: zero,
        }
    }
}

impl PredictForm {
    /// Form echoing `features` in the single-decimal display format
    pub fn from_features(features: &FeatureVector) -> Self {
        let mut values = features.values().iter().map(|&v| format_value(v));
        let mut next = || values.next().unwrap_or_default();
        Self {
            sepal_length: next(),
            sepal_width: next(),
            petal_length: next(),
            petal_width: next(),
        }
    }

    /// Raw values in wire order
    pub fn values(&self) -> [&str; FEATURE_COUNT] {
        [
            self.sepal_length.as_str(),
            self.sepal_width.as_str(),
            self.petal_length.as_str(),
            self.petal_width.as_str(),
        ]
    }

    /// Convert to a feature vector, enforcing the form's minimum of zero
    pub fn parse(&self) -> Result<FeatureVector, FormError> {
        let raw = self.values();
        if raw.iter().any(|v| v.trim().is_empty()) {
            return Err(FormError::MissingField);
        }

        let mut values = Vec::with_capacity(FEATURE_COUNT);
        for (idx, value) in raw.iter().enumerate() {
            let parsed: f64 = value
                .trim()
                .parse()
                .map_err(|_| FormError::NotANumber(FIELD_LABELS[idx]))?;
            if !parsed.is_finite() {
                return Err(FormError::NotANumber(FIELD_LABELS[idx]));
            }
            if parsed < 0.0 {
                return Err(FormError::Negative(FIELD_LABELS[idx]));
            }
            values.push(parsed);
        }

        Ok(FeatureVector::new(values))
    }
}

/// Reasons a submission never reaches the service
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in all fields.")]
    MissingField,

    #[error("{0} must be a number.")]
    NotANumber(&'static str),

    #[error("{0} must be at least 0.0.")]
    Negative(&'static str),
}

/// Single-decimal display format used by the inputs
pub fn format_value(value: f64) -> String {
    format!("{:.1}", value)
}

/// Form field name for each wire position
pub fn field_names() -> [&'static str; FEATURE_COUNT] {
    FEATURE_NAMES
}
