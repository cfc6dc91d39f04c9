use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::{HeuristicWeights, ReasonThresholds};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringSettings,
}

/// Which scoring strategy the engine runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    Heuristic,
    Learned,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub strategy: StrategyKind,
    /// Path to the learned-model artifact; required when strategy = learned
    #[serde(default)]
    pub model_path: Option<String>,
    /// Learned/heuristic mixing factor; 1.0 substitutes the model output
    #[serde(default = "default_blend")]
    pub blend: f64,
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            model_path: None,
            blend: default_blend(),
            weights: WeightsConfig::default(),
            thresholds: ThresholdsConfig::default(),
        }
    }
}

fn default_blend() -> f64 { 1.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_base")]
    pub base: f64,
    #[serde(default = "default_age_bonus")]
    pub age_bonus: f64,
    #[serde(default = "default_age_penalty")]
    pub age_penalty: f64,
    #[serde(default = "default_gender_bonus")]
    pub gender_bonus: f64,
    #[serde(default)]
    pub gender_mismatch_penalty: f64,
    #[serde(default = "default_location_bonus")]
    pub location_bonus: f64,
    #[serde(default = "default_location_radius_km")]
    pub location_radius_km: f64,
    #[serde(default = "default_interest_cap")]
    pub interest_cap: f64,
    #[serde(default = "default_lifestyle_cap")]
    pub lifestyle_cap: f64,
}

impl WeightsConfig {
    pub fn to_weights(&self) -> HeuristicWeights {
        HeuristicWeights {
            base: self.base,
            age_bonus: self.age_bonus,
            age_penalty: self.age_penalty,
            gender_bonus: self.gender_bonus,
            gender_mismatch_penalty: self.gender_mismatch_penalty,
            location_bonus: self.location_bonus,
            location_radius_km: self.location_radius_km,
            interest_cap: self.interest_cap,
            lifestyle_cap: self.lifestyle_cap,
        }
    }
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            age_bonus: default_age_bonus(),
            age_penalty: default_age_penalty(),
            gender_bonus: default_gender_bonus(),
            gender_mismatch_penalty: 0.0,
            location_bonus: default_location_bonus(),
            location_radius_km: default_location_radius_km(),
            interest_cap: default_interest_cap(),
            lifestyle_cap: default_lifestyle_cap(),
        }
    }
}

fn default_base() -> f64 { 0.5 }
fn default_age_bonus() -> f64 { 0.15 }
fn default_age_penalty() -> f64 { 0.25 }
fn default_gender_bonus() -> f64 { 0.2 }
fn default_location_bonus() -> f64 { 0.1 }
fn default_location_radius_km() -> f64 { 50.0 }
fn default_interest_cap() -> f64 { 0.15 }
fn default_lifestyle_cap() -> f64 { 0.1 }

#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsConfig {
    #[serde(default = "default_close_age_years")]
    pub close_age_years: u8,
    #[serde(default = "default_same_area_km")]
    pub same_area_km: f64,
    #[serde(default = "default_high_score")]
    pub high_score: f64,
}

impl ThresholdsConfig {
    pub fn to_thresholds(&self) -> ReasonThresholds {
        ReasonThresholds {
            close_age_years: self.close_age_years,
            same_area_km: self.same_area_km,
            high_score: self.high_score,
        }
    }
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            close_age_years: default_close_age_years(),
            same_area_km: default_same_area_km(),
            high_score: default_high_score(),
        }
    }
}

fn default_close_age_years() -> u8 { 2 }
fn default_same_area_km() -> f64 { 10.0 }
fn default_high_score() -> f64 { 0.8 }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with AMORA_)
    ///    e.g., AMORA_SCORING__STRATEGY -> scoring.strategy
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("AMORA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("AMORA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
