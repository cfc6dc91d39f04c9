use crate::core::distance::location_distance;
use crate::models::{HeuristicWeights, Lifestyle, Location};

/// Years past a range boundary at which age credit reaches zero
pub const AGE_CREDIT_FALLOFF_YEARS: f64 = 10.0;

/// Age compatibility credit (0-1)
///
/// Full credit inside the inclusive preferred range, linearly decaying to
/// zero at `AGE_CREDIT_FALLOFF_YEARS` past the nearest boundary. An inverted
/// range (min > max) never matches the inside test and simply yields a
/// degraded credit from the boundary distance; it must not panic.
#[inline]
pub fn age_credit(age: u8, min_age: u8, max_age: u8) -> f64 {
    if age >= min_age && age <= max_age {
        return 1.0;
    }

    let distance = u8::min(age.abs_diff(min_age), age.abs_diff(max_age)) as f64;
    (1.0 - distance / AGE_CREDIT_FALLOFF_YEARS).max(0.0)
}

/// Age term: `+age_bonus` at full credit, blending down to `-age_penalty`
/// at zero credit
#[inline]
pub fn age_term(age: u8, min_age: u8, max_age: u8, weights: &HeuristicWeights) -> f64 {
    let credit = age_credit(age, min_age, max_age);
    weights.age_bonus * credit - weights.age_penalty * (1.0 - credit)
}

/// Gender-preference term
///
/// A match earns the bonus; a mismatch subtracts the configured penalty,
/// which defaults to zero so mismatches stay neutral. An empty desired set
/// expresses no preference and contributes nothing.
#[inline]
pub fn gender_term(gender: &str, desired: &[String], weights: &HeuristicWeights) -> f64 {
    if desired.is_empty() {
        return 0.0;
    }
    if desired.iter().any(|g| g == gender) {
        weights.gender_bonus
    } else {
        -weights.gender_mismatch_penalty
    }
}

/// Location term (0 to `location_bonus`)
///
/// Exponential decay with distance, cut off at the configured radius.
/// Neutral 0 when either side has no coordinates.
#[inline]
pub fn location_term(
    viewer: Option<&Location>,
    candidate: Option<&Location>,
    weights: &HeuristicWeights,
) -> f64 {
    let Some(distance_km) = location_distance(viewer, candidate) else {
        return 0.0;
    };

    if distance_km >= weights.location_radius_km {
        return 0.0;
    }

    weights.location_bonus * (-distance_km / (weights.location_radius_km * 0.5)).exp()
}

/// Shared interest tags and Jaccard overlap against the union
///
/// Tags compare case-sensitively by exact match. Shared tags keep the
/// viewer's ordering so reason strings stay deterministic.
pub fn interest_overlap(viewer: &[String], candidate: &[String]) -> (f64, Vec<String>) {
    let shared: Vec<String> = viewer
        .iter()
        .filter(|&tag| candidate.contains(tag))
        .cloned()
        .collect();

    let union = viewer.len() + candidate.len() - shared.len();
    if union == 0 {
        return (0.0, shared);
    }

    (shared.len() as f64 / union as f64, shared)
}

/// Interest term: Jaccard overlap scaled to `interest_cap`
#[inline]
pub fn interest_term(viewer: &[String], candidate: &[String], weights: &HeuristicWeights) -> (f64, Vec<String>) {
    let (jaccard, shared) = interest_overlap(viewer, candidate);
    (weights.interest_cap * jaccard, shared)
}

/// Lifestyle term (0 to `lifestyle_cap`)
///
/// Each of smoking, drinking and exercise matching exactly earns a third of
/// the cap. Neutral 0 when either side states no lifestyle.
#[inline]
pub fn lifestyle_term(
    candidate: Option<&Lifestyle>,
    desired: Option<&Lifestyle>,
    weights: &HeuristicWeights,
) -> f64 {
    let (Some(candidate), Some(desired)) = (candidate, desired) else {
        return 0.0;
    };

    let mut matches = 0u8;
    if candidate.smoking == desired.smoking {
        matches += 1;
    }
    if candidate.drinking == desired.drinking {
        matches += 1;
    }
    if candidate.exercise == desired.exercise {
        matches += 1;
    }

    weights.lifestyle_cap * matches as f64 / 3.0
}
