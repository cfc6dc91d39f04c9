use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::distance::location_distance;
use crate::core::features::age_credit;
use crate::models::{Location, Preferences, Profile};

/// Errors that can occur loading or running the predictive model
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("model shape invalid: {0}")]
    Shape(String),

    #[error("model artifact path not configured")]
    NotConfigured,
}

/// Known genders for one-hot encoding, in artifact column order
const GENDER_CLASSES: [&str; 3] = ["male", "female", "other"];

/// Interest vocabulary for one-hot encoding, in artifact column order
const INTEREST_VOCABULARY: [&str; 10] = [
    "music",
    "sports",
    "travel",
    "food",
    "movies",
    "reading",
    "art",
    "technology",
    "fitness",
    "fashion",
];

/// Features per user vector: age, gender one-hot, interest one-hot,
/// location proximity, age compatibility
pub const FEATURES_PER_USER: usize = 1 + GENDER_CLASSES.len() + INTEREST_VOCABULARY.len() + 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Activation {
    Relu,
    Sigmoid,
    Identity,
}

impl Activation {
    #[inline]
    fn apply(self, x: f64) -> f64 {
        match self {
            Activation::Relu => x.max(0.0),
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Identity => x,
        }
    }
}

/// One dense layer: output[j] = activation(sum_i input[i] * weights[j][i] + biases[j])
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DenseLayer {
    weights: Vec<Vec<f64>>,
    biases: Vec<f64>,
    activation: Activation,
}

impl DenseLayer {
    fn forward(&self, input: &[f64]) -> Vec<f64> {
        self.weights
            .iter()
            .zip(&self.biases)
            .map(|(row, bias)| {
                let sum: f64 = row.iter().zip(input).map(|(w, x)| w * x).sum();
                self.activation.apply(sum + bias)
            })
            .collect()
    }
}

/// Pre-trained feed-forward compatibility predictor
///
/// Loaded once per process from a JSON artifact and shape-checked up front;
/// inference reads it immutably, so one instance is safely shared across
/// concurrent scoring calls behind an `Arc`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearnedModel {
    layers: Vec<DenseLayer>,
}

impl LearnedModel {
    /// Load and validate a model artifact
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let raw = std::fs::read_to_string(path)?;
        let model: LearnedModel = serde_json::from_str(&raw)?;
        model.validate_shape()?;
        Ok(model)
    }

    fn validate_shape(&self) -> Result<(), ModelError> {
        if self.layers.is_empty() {
            return Err(ModelError::Shape("artifact has no layers".to_string()));
        }

        let mut width = 2 * FEATURES_PER_USER;
        for (index, layer) in self.layers.iter().enumerate() {
            if layer.weights.len() != layer.biases.len() {
                return Err(ModelError::Shape(format!(
                    "layer {}: {} weight rows but {} biases",
                    index,
                    layer.weights.len(),
                    layer.biases.len()
                )));
            }
            for row in &layer.weights {
                if row.len() != width {
                    return Err(ModelError::Shape(format!(
                        "layer {}: expected rows of width {}, found {}",
                        index,
                        width,
                        row.len()
                    )));
                }
            }
            width = layer.weights.len();
        }

        if width != 1 {
            return Err(ModelError::Shape(format!(
                "final layer must emit a single score, emits {}",
                width
            )));
        }

        Ok(())
    }

    /// Run inference on a viewer/candidate feature pair, yielding a score in [0, 1]
    pub fn predict(&self, features: &[f64]) -> Result<f64, ModelError> {
        if features.len() != 2 * FEATURES_PER_USER {
            return Err(ModelError::Shape(format!(
                "expected {} features, got {}",
                2 * FEATURES_PER_USER,
                features.len()
            )));
        }

        let mut activations = features.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations);
        }

        Ok(activations[0].clamp(0.0, 1.0))
    }
}

/// Numeric feature vector for one user, against the viewer's preferences
///
/// Mirrors the featurization the artifact was trained on: normalized age,
/// gender one-hot, interest one-hot over the known vocabulary, location
/// proximity (0.5 neutral when coordinates are missing) and the age
/// compatibility credit.
pub fn user_features(profile: &Profile, preferences: &Preferences) -> Vec<f64> {
    let mut features = Vec::with_capacity(FEATURES_PER_USER);

    features.push(f64::from(profile.age) / 100.0);

    for class in GENDER_CLASSES {
        features.push(if profile.gender == class { 1.0 } else { 0.0 });
    }

    for tag in INTEREST_VOCABULARY {
        features.push(if profile.interests.iter().any(|i| i == tag) {
            1.0
        } else {
            0.0
        });
    }

    features.push(proximity_feature(
        profile.location.as_ref(),
        preferences.location.as_ref(),
    ));

    features.push(age_credit(
        profile.age,
        preferences.min_age,
        preferences.max_age,
    ));

    features
}

/// Viewer and candidate vectors concatenated, the model's input row
pub fn pair_features(
    viewer: &Profile,
    candidate: &Profile,
    preferences: &Preferences,
) -> Vec<f64> {
    let mut features = user_features(viewer, preferences);
    features.extend(user_features(candidate, preferences));
    features
}

/// Distance-based proximity in [0, 1]; 0.5 neutral when either side is unknown
fn proximity_feature(profile: Option<&Location>, preferred: Option<&Location>) -> f64 {
    const PROXIMITY_RADIUS_KM: f64 = 50.0;

    match location_distance(profile, preferred) {
        Some(distance_km) => (1.0 - distance_km / PROXIMITY_RADIUS_KM).clamp(0.0, 1.0),
        None => 0.5,
    }
}
