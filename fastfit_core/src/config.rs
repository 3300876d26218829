//! Configuration file support for fastfit.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/fastfit/config.toml`.

use crate::types::{IntensityTier, PlanConfig, WorkoutCategory};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub progression: ProgressionConfig,

    #[serde(default)]
    pub exercises: ExerciseConfig,

    /// Default planner inputs, overridable from the command line
    #[serde(default)]
    pub profile: PlanConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Session length growth for one category, in minutes
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DurationRule {
    pub base: u32,
    pub step: u32,
    pub ceiling: u32,
}

impl DurationRule {
    pub const fn new(base: u32, step: u32, ceiling: u32) -> Self {
        Self {
            base,
            step,
            ceiling,
        }
    }

    /// Minutes for a 1-based adaptation week
    pub fn minutes_for_week(&self, week: u32) -> u32 {
        let grown = self
            .base
            .saturating_add(self.step.saturating_mul(week.saturating_sub(1)));
        grown.min(self.ceiling)
    }
}

/// Per-category duration rules
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressionConfig {
    #[serde(default = "default_cardio")]
    pub cardio: DurationRule,

    #[serde(default = "default_strength")]
    pub strength: DurationRule,

    #[serde(default = "default_flexibility")]
    pub flexibility: DurationRule,

    #[serde(default = "default_mixed")]
    pub mixed: DurationRule,

    #[serde(default = "default_high_intensity")]
    pub high_intensity: DurationRule,

    #[serde(default = "default_yoga")]
    pub yoga: DurationRule,

    #[serde(default = "default_walking")]
    pub walking: DurationRule,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            cardio: default_cardio(),
            strength: default_strength(),
            flexibility: default_flexibility(),
            mixed: default_mixed(),
            high_intensity: default_high_intensity(),
            yoga: default_yoga(),
            walking: default_walking(),
        }
    }
}

impl ProgressionConfig {
    pub fn rule(&self, category: WorkoutCategory) -> &DurationRule {
        match category {
            WorkoutCategory::Cardio => &self.cardio,
            WorkoutCategory::Strength => &self.strength,
            WorkoutCategory::Flexibility => &self.flexibility,
            WorkoutCategory::Mixed => &self.mixed,
            WorkoutCategory::HighIntensity => &self.high_intensity,
            WorkoutCategory::Yoga => &self.yoga,
            WorkoutCategory::Walking => &self.walking,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for category in WorkoutCategory::ALL {
            let rule = self.rule(category);
            if rule.base == 0 {
                return Err(Error::Config(format!(
                    "progression.{}: base duration must be positive",
                    category
                )));
            }
            if rule.ceiling < rule.base {
                return Err(Error::Config(format!(
                    "progression.{}: ceiling {} is below base {}",
                    category, rule.ceiling, rule.base
                )));
            }
        }
        Ok(())
    }
}

/// A user-supplied exercise added to a category pool
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CustomExercise {
    pub category: WorkoutCategory,
    pub id: String,
    pub name: String,
    pub tiers: Vec<IntensityTier>,
}

/// Exercise catalog extensions
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct ExerciseConfig {
    #[serde(default)]
    pub custom: Vec<CustomExercise>,
}

// Default value functions
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fastfit")
}

fn default_cardio() -> DurationRule {
    DurationRule::new(25, 5, 40)
}

fn default_strength() -> DurationRule {
    DurationRule::new(30, 5, 45)
}

fn default_flexibility() -> DurationRule {
    DurationRule::new(30, 5, 40)
}

fn default_mixed() -> DurationRule {
    DurationRule::new(30, 5, 45)
}

fn default_high_intensity() -> DurationRule {
    DurationRule::new(15, 5, 30)
}

fn default_yoga() -> DurationRule {
    DurationRule::new(30, 5, 45)
}

fn default_walking() -> DurationRule {
    DurationRule::new(30, 10, 60)
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Check settings that must hold before any plan is generated.
    ///
    /// The `[profile]` section is checked later, after command-line overrides.
    pub fn validate(&self) -> Result<()> {
        self.progression.validate()
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fastfit")
            .join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
