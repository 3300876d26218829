//! Weekly plan generation.
//!
//! One pass per weekday, Monday to Sunday:
//! 1. Resolve candidate slots for the day
//! 2. Pick the first slot that respects the minimum rest
//! 3. Classify the slot start as fasting or fed
//! 4. Resolve tier, duration and exercises for the day's category
//! 5. Attach advisory text and carry the session forward as "previous"

use crate::advice::advisory_text;
use crate::availability::AvailabilityResolver;
use crate::catalog::{get_default_catalog, ExerciseCatalog};
use crate::config::ProgressionConfig;
use crate::fasting::FastingWindowCalculator;
use crate::progression::IntensityProgressionPolicy;
use crate::rest::{PreviousSession, RestConstraintEnforcer};
use crate::types::{PlanConfig, ScheduledSession, WeeklyPlan, WorkoutCategory};
use crate::{Error, Result};
use chrono::Weekday;

use WorkoutCategory::{Cardio, Flexibility, HighIntensity, Mixed, Strength};

/// Days in plan order
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Preferred categories per rotation day; the first selected one wins
const ROTATION_TEMPLATE: [&[WorkoutCategory]; 7] = [
    &[Cardio],
    &[Strength],
    &[Flexibility],
    &[Mixed],
    &[Cardio],
    &[HighIntensity, Strength],
    &[Flexibility],
];

/// Map the rotation template onto the selected categories.
///
/// Days whose preferred categories are all unselected take the next category
/// from a cursor cycling through `selected`.
pub fn rotation(selected: &[WorkoutCategory]) -> Vec<WorkoutCategory> {
    if selected.is_empty() {
        return Vec::new();
    }

    let mut cursor = 0;
    ROTATION_TEMPLATE
        .iter()
        .map(|preferred| {
            preferred
                .iter()
                .copied()
                .find(|c| selected.contains(c))
                .unwrap_or_else(|| {
                    let next = selected[cursor % selected.len()];
                    cursor += 1;
                    next
                })
        })
        .collect()
}

fn dedup_categories(categories: &[WorkoutCategory]) -> Vec<WorkoutCategory> {
    let mut unique = Vec::with_capacity(categories.len());
    for category in categories {
        if !unique.contains(category) {
            unique.push(*category);
        }
    }
    unique
}

impl PlanConfig {
    /// Check every input up front; the error names the first bad field
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(Error::invalid(
                "categories",
                "select at least one workout category",
            ));
        }

        if !self.min_rest_hours.is_finite() || self.min_rest_hours <= 0.0 {
            return Err(Error::invalid(
                "min_rest_hours",
                format!("must be a positive number of hours, got {}", self.min_rest_hours),
            ));
        }

        if self.adaptation_week == 0 {
            return Err(Error::invalid(
                "adaptation_week",
                "weeks are counted from 1",
            ));
        }

        self.protocol.validate()?;

        for day in WEEK {
            let commitment = self.work_schedule.day(day);
            if commitment.enabled && commitment.end <= commitment.start {
                return Err(Error::invalid(
                    format!("work_schedule.{}", day_name(day)),
                    format!(
                        "end {} is not after start {}",
                        commitment.end, commitment.start
                    ),
                ));
            }
        }

        for block in self.free_time.iter().filter(|b| b.enabled) {
            if block.end <= block.start {
                return Err(Error::invalid(
                    format!("free_time '{}'", block.label),
                    format!("end {} is not after start {}", block.end, block.start),
                ));
            }
        }

        Ok(())
    }
}

fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Per-generation collaborators, built once from the config
struct PlanContext<'c> {
    config: &'c PlanConfig,
    availability: AvailabilityResolver<'c>,
    rest: RestConstraintEnforcer,
    fasting: FastingWindowCalculator,
}

/// State carried from one day to the next
#[derive(Default)]
struct WeekAccumulator {
    previous: Option<PreviousSession>,
    sessions: Vec<ScheduledSession>,
}

pub struct WeeklyScheduler<'a> {
    policy: IntensityProgressionPolicy<'a>,
}

impl<'a> WeeklyScheduler<'a> {
    pub fn new(policy: IntensityProgressionPolicy<'a>) -> Self {
        Self { policy }
    }

    pub fn with_catalog(catalog: &'a ExerciseCatalog, progression: ProgressionConfig) -> Self {
        Self::new(IntensityProgressionPolicy::new(catalog, progression))
    }

    /// Generate a full week, or fail without producing any sessions
    pub fn generate(&self, config: &PlanConfig) -> Result<WeeklyPlan> {
        config.validate()?;

        let categories = dedup_categories(&config.categories);
        let days = rotation(&categories);

        let ctx = PlanContext {
            config,
            availability: AvailabilityResolver::new(
                config.chronotype,
                &config.work_schedule,
                &config.free_time,
            ),
            rest: RestConstraintEnforcer::new(config.min_rest_hours),
            fasting: FastingWindowCalculator::new(config.protocol, config.eating_window_start),
        };

        tracing::info!(
            "Generating week {} plan: {} chronotype, {} protocol, {}h rest, categories {:?}",
            config.adaptation_week,
            config.chronotype,
            config.protocol,
            config.min_rest_hours,
            categories
        );

        let week = WEEK
            .iter()
            .copied()
            .zip(days)
            .try_fold(WeekAccumulator::default(), |acc, (day, category)| {
                self.schedule_day(&ctx, acc, day, category)
            })?;

        let plan = WeeklyPlan {
            chronotype: config.chronotype,
            protocol: config.protocol,
            eating_window: ctx.fasting.eating_window(),
            adaptation_week: config.adaptation_week,
            min_rest_hours: config.min_rest_hours,
            sessions: week.sessions,
        };

        tracing::info!(
            "Plan ready: {} sessions, {} min total, {} fasted, {} with relaxed rest",
            plan.sessions.len(),
            plan.total_minutes(),
            plan.fasting_sessions().count(),
            plan.relaxed_sessions().count()
        );

        Ok(plan)
    }

    fn schedule_day(
        &self,
        ctx: &PlanContext<'_>,
        acc: WeekAccumulator,
        day: Weekday,
        category: WorkoutCategory,
    ) -> Result<WeekAccumulator> {
        let config = ctx.config;

        let availability = ctx.availability.resolve(day);
        let choice = ctx
            .rest
            .pick_slot(&availability.slots, day, acc.previous.as_ref())?;
        let fasting = ctx.fasting.classify(choice.slot.start, config.chronotype);
        let prescription = self.policy.resolve(category, config.adaptation_week)?;
        let commitment_enabled = config.work_schedule.day(day).enabled;

        tracing::debug!(
            "{:?}: {} at {} ({:?}, {}, relaxed={})",
            day,
            category,
            choice.slot,
            availability.source,
            fasting,
            choice.constraint_relaxed
        );

        let session = ScheduledSession {
            weekday: day,
            slot: choice.slot,
            category,
            duration_minutes: prescription.duration_minutes,
            intensity: prescription.intensity,
            exercises: prescription.exercises,
            fasting,
            advisory: advisory_text(
                fasting,
                prescription.intensity,
                config.adaptation_week,
                commitment_enabled,
            ),
            constraint_relaxed: choice.constraint_relaxed,
            rest_hours: choice.rest_hours,
        };

        let mut sessions = acc.sessions;
        sessions.push(session);

        Ok(WeekAccumulator {
            previous: Some(PreviousSession {
                weekday: day,
                start: choice.slot.start,
            }),
            sessions,
        })
    }
}

/// Generate a plan with the default catalog and progression settings
pub fn generate_plan(config: &PlanConfig) -> Result<WeeklyPlan> {
    WeeklyScheduler::with_catalog(get_default_catalog(), ProgressionConfig::default())
        .generate(config)
}
