// Core algorithm exports
pub mod distance;
pub mod features;
pub mod matcher;
pub mod model;
pub mod reasons;
pub mod scoring;
pub mod strategy;

pub use distance::{haversine_distance, location_distance};
pub use matcher::{MatchError, Matcher};
pub use model::{LearnedModel, ModelError};
pub use reasons::{generate_reason, FALLBACK_REASON};
pub use scoring::heuristic_score;
pub use strategy::ScoringStrategy;
