// Model exports
pub mod domain;
pub mod results;

pub use domain::{
    ExerciseFrequency, HeuristicWeights, Lifestyle, Location, Preferences, Profile,
    ReasonThresholds, UserRecord,
};
pub use results::{MatchResult, ScoredMatch};
