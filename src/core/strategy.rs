use std::sync::Arc;

use crate::config::{ScoringSettings, StrategyKind};
use crate::core::model::{pair_features, LearnedModel, ModelError};
use crate::core::scoring::heuristic_score;
use crate::models::{HeuristicWeights, Preferences, Profile};

/// Pluggable scoring strategy
///
/// `Heuristic` is always available, pure and deterministic. `Learned` blends
/// a pre-trained model's prediction with the heuristic score; both variants
/// honor the same input/output contract.
#[derive(Debug, Clone)]
pub enum ScoringStrategy {
    Heuristic,
    Learned {
        model: Arc<LearnedModel>,
        /// Mixing factor in [0, 1]; 1.0 substitutes the model output entirely
        blend: f64,
    },
}

impl ScoringStrategy {
    /// Build the configured strategy, loading the model artifact if selected
    ///
    /// Fails with the underlying `ModelError` when the learned strategy is
    /// selected but cannot initialize; callers decide whether to surface
    /// that or fall back (see `Matcher::from_settings`).
    pub fn from_settings(settings: &ScoringSettings) -> Result<Self, ModelError> {
        match settings.strategy {
            StrategyKind::Heuristic => Ok(Self::Heuristic),
            StrategyKind::Learned => {
                let path = settings
                    .model_path
                    .as_deref()
                    .ok_or(ModelError::NotConfigured)?;
                let model = LearnedModel::load(path)?;
                tracing::info!("Loaded scoring model from {}", path);
                Ok(Self::Learned {
                    model: Arc::new(model),
                    blend: settings.blend.clamp(0.0, 1.0),
                })
            }
        }
    }

    /// Score a viewer/candidate pair under this strategy
    ///
    /// The heuristic score is always computed: it supplies the shared
    /// interest tags, and it is the per-call fallback when a loaded model
    /// rejects the feature vector. Model failures degrade, never propagate.
    pub fn score(
        &self,
        viewer: &Profile,
        candidate: &Profile,
        preferences: &Preferences,
        weights: &HeuristicWeights,
    ) -> (f64, Vec<String>) {
        let (heuristic, shared_interests) =
            heuristic_score(viewer, candidate, preferences, weights);

        match self {
            Self::Heuristic => (heuristic, shared_interests),
            Self::Learned { model, blend } => {
                let features = pair_features(viewer, candidate, preferences);
                match model.predict(&features) {
                    Ok(predicted) => {
                        let score = blend * predicted + (1.0 - blend) * heuristic;
                        (score.clamp(0.0, 1.0), shared_interests)
                    }
                    Err(e) => {
                        tracing::warn!("Model prediction failed, using heuristic score: {}", e);
                        (heuristic, shared_interests)
                    }
                }
            }
        }
    }

    pub fn is_learned(&self) -> bool {
        matches!(self, Self::Learned { .. })
    }
}
