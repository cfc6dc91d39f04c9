use thiserror::Error;

use crate::config::Settings;
use crate::core::model::ModelError;
use crate::core::reasons::generate_reason;
use crate::core::strategy::ScoringStrategy;
use crate::models::{
    HeuristicWeights, MatchResult, Preferences, Profile, ReasonThresholds, ScoredMatch,
    UserRecord,
};

/// Errors surfaced to the recommendation layer
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("scoring model unavailable: {0}")]
    ModelUnavailable(#[from] ModelError),
}

/// Compatibility scoring engine
///
/// Scores one viewer/candidate pair at a time and ranks candidate batches.
/// Holds no mutable state; one instance is shared freely across calls.
#[derive(Debug, Clone)]
pub struct Matcher {
    strategy: ScoringStrategy,
    weights: HeuristicWeights,
    thresholds: ReasonThresholds,
}

impl Matcher {
    pub fn new(
        strategy: ScoringStrategy,
        weights: HeuristicWeights,
        thresholds: ReasonThresholds,
    ) -> Self {
        Self {
            strategy,
            weights,
            thresholds,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(
            ScoringStrategy::Heuristic,
            HeuristicWeights::default(),
            ReasonThresholds::default(),
        )
    }

    /// Build a matcher from configuration, surfacing model errors
    ///
    /// # Errors
    /// `ModelUnavailable` when the learned strategy is selected but its
    /// artifact cannot be loaded. Use `from_settings` to degrade instead.
    pub fn try_from_settings(settings: &Settings) -> Result<Self, MatchError> {
        let strategy = ScoringStrategy::from_settings(&settings.scoring)?;

        Ok(Self::new(
            strategy,
            settings.scoring.weights.to_weights(),
            settings.scoring.thresholds.to_thresholds(),
        ))
    }

    /// Build a matcher from configuration, failing closed on model errors
    ///
    /// A learned strategy that cannot initialize degrades to the heuristic
    /// strategy with a logged warning instead of blocking recommendations.
    pub fn from_settings(settings: &Settings) -> Self {
        let strategy = match ScoringStrategy::from_settings(&settings.scoring) {
            Ok(strategy) => strategy,
            Err(e) => {
                tracing::warn!("Falling back to heuristic scoring: {}", e);
                ScoringStrategy::Heuristic
            }
        };

        Self::new(
            strategy,
            settings.scoring.weights.to_weights(),
            settings.scoring.thresholds.to_thresholds(),
        )
    }

    /// Score a single viewer/candidate pair
    ///
    /// Returns the compatibility score in [0, 1] and a non-empty reason
    /// string. Missing optional fields contribute neutral terms; this call
    /// never fails for present-but-odd data.
    pub fn score_pair(
        &self,
        viewer: &Profile,
        candidate: &Profile,
        preferences: &Preferences,
    ) -> (f64, String) {
        let (score, shared_interests) =
            self.strategy
                .score(viewer, candidate, preferences, &self.weights);

        let reason = generate_reason(
            viewer,
            candidate,
            preferences,
            &shared_interests,
            score,
            &self.thresholds,
        );

        (score, reason)
    }

    /// Score one candidate record against the viewer
    ///
    /// # Errors
    /// `InvalidInput` when the candidate record carries no profile.
    pub fn score_candidate(
        &self,
        viewer: &Profile,
        preferences: &Preferences,
        candidate: &UserRecord,
    ) -> Result<ScoredMatch, MatchError> {
        let profile = candidate.profile.as_ref().ok_or_else(|| {
            MatchError::InvalidInput(format!("candidate {} has no profile", candidate.user_id))
        })?;

        let (score, shared_interests) =
            self.strategy
                .score(viewer, profile, preferences, &self.weights);

        let reason = generate_reason(
            viewer,
            profile,
            preferences,
            &shared_interests,
            score,
            &self.thresholds,
        );

        Ok(ScoredMatch {
            user_id: candidate.user_id.clone(),
            name: candidate.name.clone(),
            age: profile.age,
            gender: profile.gender.clone(),
            profile_image: profile.profile_image.clone(),
            match_score: score,
            match_reason: reason,
            shared_interests,
        })
    }

    /// Rank a candidate batch for a viewer
    ///
    /// Scores each candidate, sorts by descending score with ties broken by
    /// ascending candidate id, and truncates to `limit`. Structurally
    /// incomplete candidate records (and the viewer's own record) are
    /// skipped and counted rather than failing the batch.
    ///
    /// # Errors
    /// `InvalidInput` when the viewer record lacks a profile or preferences.
    pub fn find_matches(
        &self,
        viewer: &UserRecord,
        candidates: Vec<UserRecord>,
        limit: usize,
    ) -> Result<MatchResult, MatchError> {
        let profile = viewer.profile.as_ref().ok_or_else(|| {
            MatchError::InvalidInput(format!("viewer {} has no profile", viewer.user_id))
        })?;
        let preferences = viewer.preferences.as_ref().ok_or_else(|| {
            MatchError::InvalidInput(format!("viewer {} has no preferences", viewer.user_id))
        })?;

        let total_candidates = candidates.len();
        let mut skipped = 0usize;

        let mut matches: Vec<ScoredMatch> = candidates
            .into_iter()
            .filter(|candidate| candidate.user_id != viewer.user_id)
            .filter_map(|candidate| {
                match self.score_candidate(profile, preferences, &candidate) {
                    Ok(scored) => Some(scored),
                    Err(e) => {
                        tracing::debug!("Skipping candidate {}: {}", candidate.user_id, e);
                        skipped += 1;
                        None
                    }
                }
            })
            .collect();

        // Sort by score (descending), ties by candidate id (ascending) so
        // output stays deterministic
        matches.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });

        matches.truncate(limit);

        tracing::debug!(
            "Ranked {} of {} candidates for viewer {} ({} skipped)",
            matches.len(),
            total_candidates,
            viewer.user_id,
            skipped
        );

        Ok(MatchResult {
            matches,
            total_candidates,
            skipped,
        })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
