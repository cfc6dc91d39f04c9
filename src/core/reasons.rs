use crate::core::distance::location_distance;
use crate::models::{Preferences, Profile, ReasonThresholds};

/// Fallback when no reason clause fires
pub const FALLBACK_REASON: &str = "You might be a good match!";

/// Build the human-readable match explanation
///
/// Clauses are evaluated in a fixed order so identical inputs always produce
/// an identical string, independent of the scoring arithmetic:
/// age proximity, gender preference, shared interests, shared area, and a
/// high final score. Triggered clauses join with " and " plus a trailing "!".
pub fn generate_reason(
    viewer: &Profile,
    candidate: &Profile,
    preferences: &Preferences,
    shared_interests: &[String],
    score: f64,
    thresholds: &ReasonThresholds,
) -> String {
    let mut clauses: Vec<String> = Vec::new();

    if viewer.age.abs_diff(candidate.age) <= thresholds.close_age_years {
        clauses.push("You are close in age".to_string());
    }

    if preferences.genders.iter().any(|g| g == &candidate.gender) {
        clauses.push("You share gender preferences".to_string());
    }

    if !shared_interests.is_empty() {
        clauses.push(format!("You both enjoy {}", shared_interests.join(", ")));
    }

    if let Some(distance_km) =
        location_distance(viewer.location.as_ref(), candidate.location.as_ref())
    {
        if distance_km <= thresholds.same_area_km {
            clauses.push("You live in the same area".to_string());
        }
    }

    if score > thresholds.high_score {
        clauses.push("You have a very high compatibility score".to_string());
    }

    if clauses.is_empty() {
        return FALLBACK_REASON.to_string();
    }

    format!("{}!", clauses.join(" and "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    fn profile(age: u8, gender: &str, interests: &[&str]) -> Profile {
        Profile {
            user_id: "u".to_string(),
            age,
            gender: gender.to_string(),
            location: None,
            interests: interests.iter().map(|s| s.to_string()).collect(),
            relationship_goals: None,
            lifestyle: None,
            bio: None,
            education: None,
            occupation: None,
            profile_image: None,
            created_at: None,
        }
    }

    fn preferences(genders: &[&str]) -> Preferences {
        Preferences {
            user_id: "viewer".to_string(),
            min_age: 20,
            max_age: 35,
            genders: genders.iter().map(|s| s.to_string()).collect(),
            location: None,
            interests: vec![],
            relationship_goals: None,
            lifestyle: None,
        }
    }

    #[test]
    fn test_fallback_when_nothing_fires() {
        let viewer = profile(25, "male", &[]);
        let candidate = profile(50, "male", &[]);
        let prefs = preferences(&["female"]);

        let reason = generate_reason(
            &viewer,
            &candidate,
            &prefs,
            &[],
            0.2,
            &ReasonThresholds::default(),
        );

        assert_eq!(reason, "You might be a good match!");
    }

    #[test]
    fn test_all_clauses_in_stable_order() {
        let mut viewer = profile(28, "male", &["music", "travel"]);
        let mut candidate = profile(29, "female", &["music", "travel"]);
        let nyc = Location { latitude: 40.7128, longitude: -74.0060 };
        viewer.location = Some(nyc);
        candidate.location = Some(nyc);
        let prefs = preferences(&["female"]);

        let reason = generate_reason(
            &viewer,
            &candidate,
            &prefs,
            &["music".to_string(), "travel".to_string()],
            0.95,
            &ReasonThresholds::default(),
        );

        assert_eq!(
            reason,
            "You are close in age and You share gender preferences and \
             You both enjoy music, travel and You live in the same area and \
             You have a very high compatibility score!"
        );
    }

    #[test]
    fn test_shared_interests_clause_joins_tags() {
        let viewer = profile(28, "male", &[]);
        let candidate = profile(40, "male", &[]);
        let prefs = preferences(&[]);

        let reason = generate_reason(
            &viewer,
            &candidate,
            &prefs,
            &["food".to_string(), "art".to_string()],
            0.5,
            &ReasonThresholds::default(),
        );

        assert_eq!(reason, "You both enjoy food, art!");
    }

    #[test]
    fn test_distant_pair_not_in_same_area() {
        let mut viewer = profile(28, "male", &[]);
        let mut candidate = profile(29, "male", &[]);
        viewer.location = Some(Location { latitude: 40.7128, longitude: -74.0060 });
        candidate.location = Some(Location { latitude: 42.3601, longitude: -71.0589 });
        let prefs = preferences(&[]);

        let reason = generate_reason(
            &viewer,
            &candidate,
            &prefs,
            &[],
            0.5,
            &ReasonThresholds::default(),
        );

        assert_eq!(reason, "You are close in age!");
    }

    #[test]
    fn test_high_score_clause() {
        let viewer = profile(28, "male", &[]);
        let candidate = profile(40, "male", &[]);
        let prefs = preferences(&[]);
        let thresholds = ReasonThresholds::default();

        let at_threshold = generate_reason(&viewer, &candidate, &prefs, &[], 0.8, &thresholds);
        assert_eq!(at_threshold, "You might be a good match!");

        let above = generate_reason(&viewer, &candidate, &prefs, &[], 0.81, &thresholds);
        assert_eq!(above, "You have a very high compatibility score!");
    }
}
