use crate::core::features::{age_term, gender_term, interest_term, lifestyle_term, location_term};
use crate::models::{HeuristicWeights, Preferences, Profile};

/// Calculate a heuristic compatibility score (0-1) for a viewer/candidate pair
///
/// Scoring shape:
/// ```text
/// score = base (0.5)
///       + age_term        # inside preferred range = bonus, far outside = penalty
///       + gender_term     # candidate gender among desired genders
///       + location_term   # decays with distance, neutral without coordinates
///       + interest_term   # Jaccard overlap of interest tags, capped
///       + lifestyle_term  # smoking/drinking/exercise matches, capped
/// ```
/// clamped to [0, 1]. Also returns the shared interest tags for the caller's
/// reason string and response payload.
pub fn heuristic_score(
    viewer: &Profile,
    candidate: &Profile,
    preferences: &Preferences,
    weights: &HeuristicWeights,
) -> (f64, Vec<String>) {
    let age = age_term(candidate.age, preferences.min_age, preferences.max_age, weights);

    let gender = gender_term(&candidate.gender, &preferences.genders, weights);

    let location = location_term(
        viewer.location.as_ref(),
        candidate.location.as_ref(),
        weights,
    );

    let (interests, shared_interests) =
        interest_term(&viewer.interests, &candidate.interests, weights);

    let lifestyle = lifestyle_term(
        candidate.lifestyle.as_ref(),
        preferences.lifestyle.as_ref(),
        weights,
    );

    let total = weights.base + age + gender + location + interests + lifestyle;

    (total.clamp(0.0, 1.0), shared_interests)
}
