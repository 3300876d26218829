//! Intensity and duration progression across adaptation weeks.
//!
//! Progression rules:
//! - Tier: week 1 low, weeks 2-3 medium, week 4+ high, capped per category
//! - High-intensity work runs low in week 1, medium in week 2, high after that
//! - Duration grows by a per-category step each week up to a ceiling
//! - Up to four exercises are drawn, in pool order, from the resolved tier

use crate::catalog::ExerciseCatalog;
use crate::config::ProgressionConfig;
use crate::types::{Exercise, IntensityTier, WorkoutCategory};
use crate::{Error, Result};

/// Exercises drawn per session
pub const EXERCISES_PER_SESSION: usize = 4;

/// Duration, tier and exercises for one session
#[derive(Clone, Debug, PartialEq)]
pub struct Prescription {
    pub intensity: IntensityTier,
    pub duration_minutes: u32,
    pub exercises: Vec<Exercise>,
}

/// Tier reached by `category` in a 1-based adaptation week
pub fn tier_for_week(category: WorkoutCategory, week: u32) -> IntensityTier {
    let tier = match category {
        WorkoutCategory::HighIntensity => match week {
            0 | 1 => IntensityTier::Low,
            2 => IntensityTier::Medium,
            _ => IntensityTier::High,
        },
        _ => match week {
            0 | 1 => IntensityTier::Low,
            2 | 3 => IntensityTier::Medium,
            _ => IntensityTier::High,
        },
    };
    tier.min(category.max_tier())
}

pub struct IntensityProgressionPolicy<'a> {
    catalog: &'a ExerciseCatalog,
    durations: ProgressionConfig,
}

impl<'a> IntensityProgressionPolicy<'a> {
    pub fn new(catalog: &'a ExerciseCatalog, durations: ProgressionConfig) -> Self {
        Self { catalog, durations }
    }

    pub fn resolve(&self, category: WorkoutCategory, week: u32) -> Result<Prescription> {
        let intensity = tier_for_week(category, week);
        let duration_minutes = self.durations.rule(category).minutes_for_week(week);

        let exercises: Vec<Exercise> = self
            .catalog
            .matching(category, intensity)
            .take(EXERCISES_PER_SESSION)
            .cloned()
            .collect();

        if exercises.is_empty() {
            return Err(Error::EmptyExercisePool {
                category,
                tier: intensity,
            });
        }

        tracing::debug!(
            "{} week {}: {} tier, {} min, {} exercises",
            category,
            week,
            intensity,
            duration_minutes,
            exercises.len()
        );

        Ok(Prescription {
            intensity,
            duration_minutes,
            exercises,
        })
    }
}
