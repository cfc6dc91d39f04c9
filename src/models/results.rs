use serde::{Deserialize, Serialize};

/// Scored candidate, display fields passed through unchanged
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMatch {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: Option<String>,
    pub age: u8,
    pub gender: String,
    #[serde(rename = "profileImage")]
    pub profile_image: Option<String>,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    #[serde(rename = "matchReason")]
    pub match_reason: String,
    #[serde(rename = "sharedInterests")]
    pub shared_interests: Vec<String>,
}

/// Result of ranking one viewer against a candidate batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub matches: Vec<ScoredMatch>,
    /// Candidates supplied, before any were skipped or cut by the limit
    pub total_candidates: usize,
    /// Candidates dropped for structurally incomplete records
    pub skipped: usize,
}
