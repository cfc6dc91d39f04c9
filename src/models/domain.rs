use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

/// Geographic position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Exercise frequency bucket used by lifestyle matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseFrequency {
    Never,
    Sometimes,
    Regularly,
}

/// Lifestyle attributes, stored on profiles and stated in preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifestyle {
    pub smoking: bool,
    pub drinking: bool,
    pub exercise: ExerciseFrequency,
}

/// User profile with demographic, interest and location data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "userId", alias = "id")]
    pub user_id: String,
    pub age: u8,
    pub gender: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(rename = "relationshipGoals", default)]
    pub relationship_goals: Option<String>,
    #[serde(default)]
    pub lifestyle: Option<Lifestyle>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(rename = "profileImage", default)]
    pub profile_image: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Viewer-side matching preferences
///
/// The upstream store has written the desired-gender field both as a single
/// string and as an array over its lifetime; both shapes deserialize.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_age_range"))]
pub struct Preferences {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[validate(range(min = 18, max = 100))]
    #[serde(rename = "minAge")]
    pub min_age: u8,
    #[validate(range(min = 18, max = 100))]
    #[serde(rename = "maxAge")]
    pub max_age: u8,
    #[serde(
        rename = "genders",
        alias = "gender",
        alias = "preferredGenders",
        default,
        deserialize_with = "one_or_many"
    )]
    pub genders: Vec<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(rename = "relationshipGoals", default)]
    pub relationship_goals: Option<String>,
    #[serde(default)]
    pub lifestyle: Option<Lifestyle>,
}

fn validate_age_range(preferences: &Preferences) -> Result<(), ValidationError> {
    if preferences.min_age > preferences.max_age {
        return Err(ValidationError::new("age_range_inverted"));
    }
    Ok(())
}

/// Accept either `"female"` or `["female", "other"]`
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(gender) => vec![gender],
        OneOrMany::Many(genders) => genders,
    })
}

/// User row as supplied by the external store, with its included relations
///
/// A record missing `profile` (or, for the viewer, `preferences`) is
/// structurally incomplete and cannot be scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "userId", alias = "id")]
    pub user_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub preferences: Option<Preferences>,
}

/// Named constants for the heuristic scoring terms
#[derive(Debug, Clone, Copy)]
pub struct HeuristicWeights {
    /// Starting score before any term is applied
    pub base: f64,
    /// Age term at full credit (candidate inside the preferred range)
    pub age_bonus: f64,
    /// Age term at zero credit (10+ years past the nearest boundary)
    pub age_penalty: f64,
    /// Candidate gender among the desired genders
    pub gender_bonus: f64,
    /// Subtracted on gender mismatch; 0.0 keeps mismatch neutral
    pub gender_mismatch_penalty: f64,
    /// Location term at distance zero
    pub location_bonus: f64,
    /// Distance at which the location term cuts off, in km
    pub location_radius_km: f64,
    /// Interest term at full Jaccard overlap
    pub interest_cap: f64,
    /// Lifestyle term with all three attributes matching
    pub lifestyle_cap: f64,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            base: 0.5,
            age_bonus: 0.15,
            age_penalty: 0.25,
            gender_bonus: 0.2,
            gender_mismatch_penalty: 0.0,
            location_bonus: 0.1,
            location_radius_km: 50.0,
            interest_cap: 0.15,
            lifestyle_cap: 0.1,
        }
    }
}

/// Cutoffs for the reason-clause predicates
#[derive(Debug, Clone, Copy)]
pub struct ReasonThresholds {
    pub close_age_years: u8,
    pub same_area_km: f64,
    pub high_score: f64,
}

impl Default for ReasonThresholds {
    fn default() -> Self {
        Self {
            close_age_years: 2,
            same_area_km: 10.0,
            high_score: 0.8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_gender_single_string() {
        let json = r#"{
            "userId": "u1",
            "minAge": 21,
            "maxAge": 35,
            "gender": "female"
        }"#;

        let preferences: Preferences = serde_json::from_str(json).unwrap();
        assert_eq!(preferences.genders, vec!["female"]);
    }

    #[test]
    fn test_preferences_gender_array() {
        let json = r#"{
            "userId": "u1",
            "minAge": 21,
            "maxAge": 35,
            "genders": ["female", "other"]
        }"#;

        let preferences: Preferences = serde_json::from_str(json).unwrap();
        assert_eq!(preferences.genders, vec!["female", "other"]);
    }

    #[test]
    fn test_preferences_gender_missing_defaults_empty() {
        let json = r#"{"userId": "u1", "minAge": 21, "maxAge": 35}"#;

        let preferences: Preferences = serde_json::from_str(json).unwrap();
        assert!(preferences.genders.is_empty());
    }

    #[test]
    fn test_profile_optional_fields_absent() {
        let json = r#"{"userId": "u1", "age": 27, "gender": "male"}"#;

        let profile: Profile = serde_json::from_str(json).unwrap();
        assert!(profile.location.is_none());
        assert!(profile.interests.is_empty());
        assert!(profile.lifestyle.is_none());
    }

    #[test]
    fn test_exercise_frequency_wire_names() {
        let exercise: ExerciseFrequency = serde_json::from_str("\"regularly\"").unwrap();
        assert_eq!(exercise, ExerciseFrequency::Regularly);
        assert_eq!(serde_json::to_string(&exercise).unwrap(), "\"regularly\"");
    }

    #[test]
    fn test_age_range_validation() {
        let json = r#"{"userId": "u1", "minAge": 35, "maxAge": 21}"#;
        let preferences: Preferences = serde_json::from_str(json).unwrap();

        assert!(preferences.validate().is_err());
    }

    #[test]
    fn test_default_weights() {
        let weights = HeuristicWeights::default();
        assert_eq!(weights.base, 0.5);
        assert_eq!(weights.gender_bonus, 0.2);
        assert_eq!(weights.gender_mismatch_penalty, 0.0);
        assert_eq!(weights.interest_cap, 0.15);
    }
}
