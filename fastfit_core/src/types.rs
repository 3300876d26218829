//! Core domain types for the fasting-aware workout planner.
//!
//! This module defines the value types that flow through plan generation:
//! - Chronotypes, fasting protocols and fasting classification
//! - Workout categories, intensity tiers and exercises
//! - Weekly commitments and free-time preferences
//! - Scheduled sessions and the weekly plan itself

use crate::clock::{ClockWindow, TimeOfDay, TimeSlot};
use crate::{Error, Result};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Chronotype
// ============================================================================

/// A person's natural daily activity rhythm
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Chronotype {
    Early,
    Normal,
    Late,
}

impl Chronotype {
    pub const ALL: [Chronotype; 3] = [Chronotype::Early, Chronotype::Normal, Chronotype::Late];

    pub fn as_str(&self) -> &'static str {
        match self {
            Chronotype::Early => "early",
            Chronotype::Normal => "normal",
            Chronotype::Late => "late",
        }
    }
}

impl FromStr for Chronotype {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "early" => Ok(Chronotype::Early),
            "normal" => Ok(Chronotype::Normal),
            "late" => Ok(Chronotype::Late),
            other => Err(Error::invalid(
                "chronotype",
                format!("unknown chronotype '{}' (expected early, normal or late)", other),
            )),
        }
    }
}

impl fmt::Display for Chronotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// ============================================================================
// Fasting
// ============================================================================

/// An intermittent-fasting split, e.g. 16 hours fasting / 8 hours eating
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FastingProtocol {
    pub fasting_hours: u32,
    pub eating_hours: u32,
}

impl FastingProtocol {
    pub const TWELVE_TWELVE: FastingProtocol = FastingProtocol::preset(12, 12);
    pub const FOURTEEN_TEN: FastingProtocol = FastingProtocol::preset(14, 10);
    pub const SIXTEEN_EIGHT: FastingProtocol = FastingProtocol::preset(16, 8);
    pub const EIGHTEEN_SIX: FastingProtocol = FastingProtocol::preset(18, 6);
    pub const TWENTY_FOUR_SPLIT: FastingProtocol = FastingProtocol::preset(20, 4);

    pub const PRESETS: [FastingProtocol; 5] = [
        Self::TWELVE_TWELVE,
        Self::FOURTEEN_TEN,
        Self::SIXTEEN_EIGHT,
        Self::EIGHTEEN_SIX,
        Self::TWENTY_FOUR_SPLIT,
    ];

    const fn preset(fasting_hours: u32, eating_hours: u32) -> Self {
        Self {
            fasting_hours,
            eating_hours,
        }
    }

    /// Build and validate a protocol
    pub fn new(fasting_hours: u32, eating_hours: u32) -> Result<Self> {
        let protocol = Self {
            fasting_hours,
            eating_hours,
        };
        protocol.validate()?;
        Ok(protocol)
    }

    pub fn validate(&self) -> Result<()> {
        if self.fasting_hours == 0 {
            return Err(Error::invalid("protocol", "fasting hours must be positive"));
        }
        if self.eating_hours == 0 {
            return Err(Error::invalid("protocol", "eating hours must be positive"));
        }
        let total = self.fasting_hours.checked_add(self.eating_hours);
        if total != Some(24) {
            return Err(Error::invalid(
                "protocol",
                format!("{} must cover exactly 24 hours", self),
            ));
        }
        Ok(())
    }
}

impl Default for FastingProtocol {
    fn default() -> Self {
        Self::SIXTEEN_EIGHT
    }
}

impl FromStr for FastingProtocol {
    type Err = Error;

    /// Parse the `"fasting:eating"` form, e.g. `"16:8"`
    fn from_str(s: &str) -> Result<Self> {
        let (fasting, eating) = s.trim().split_once(':').ok_or_else(|| {
            Error::invalid("protocol", format!("'{}' is not in fasting:eating form", s))
        })?;
        let parse = |part: &str| {
            part.trim().parse::<u32>().map_err(|e| {
                Error::invalid("protocol", format!("'{}' in '{}': {}", part, s, e))
            })
        };
        Ok(Self {
            fasting_hours: parse(fasting)?,
            eating_hours: parse(eating)?,
        })
    }
}

impl TryFrom<String> for FastingProtocol {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<FastingProtocol> for String {
    fn from(protocol: FastingProtocol) -> Self {
        protocol.to_string()
    }
}

impl fmt::Display for FastingProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.fasting_hours, self.eating_hours)
    }
}

/// Whether a moment falls in the fasted or the fed part of the day
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FastingState {
    Fasting,
    Fed,
}

impl FastingState {
    pub fn is_fasting(&self) -> bool {
        matches!(self, FastingState::Fasting)
    }
}

impl fmt::Display for FastingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FastingState::Fasting => f.pad("fasting"),
            FastingState::Fed => f.pad("fed"),
        }
    }
}

// ============================================================================
// Workouts
// ============================================================================

/// Discrete effort level governing duration and exercise choice
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IntensityTier {
    Low,
    Medium,
    High,
}

impl fmt::Display for IntensityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntensityTier::Low => f.pad("low"),
            IntensityTier::Medium => f.pad("medium"),
            IntensityTier::High => f.pad("high"),
        }
    }
}

/// Category of workout
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutCategory {
    Cardio,
    Strength,
    Flexibility,
    Mixed,
    HighIntensity,
    Yoga,
    Walking,
}

impl WorkoutCategory {
    pub const ALL: [WorkoutCategory; 7] = [
        WorkoutCategory::Cardio,
        WorkoutCategory::Strength,
        WorkoutCategory::Flexibility,
        WorkoutCategory::Mixed,
        WorkoutCategory::HighIntensity,
        WorkoutCategory::Yoga,
        WorkoutCategory::Walking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCategory::Cardio => "cardio",
            WorkoutCategory::Strength => "strength",
            WorkoutCategory::Flexibility => "flexibility",
            WorkoutCategory::Mixed => "mixed",
            WorkoutCategory::HighIntensity => "high_intensity",
            WorkoutCategory::Yoga => "yoga",
            WorkoutCategory::Walking => "walking",
        }
    }

    /// Highest tier this category ever progresses to
    pub fn max_tier(&self) -> IntensityTier {
        match self {
            WorkoutCategory::Flexibility | WorkoutCategory::Yoga | WorkoutCategory::Walking => {
                IntensityTier::Medium
            }
            _ => IntensityTier::High,
        }
    }
}

impl FromStr for WorkoutCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "cardio" => Ok(WorkoutCategory::Cardio),
            "strength" => Ok(WorkoutCategory::Strength),
            "flexibility" => Ok(WorkoutCategory::Flexibility),
            "mixed" => Ok(WorkoutCategory::Mixed),
            "high_intensity" | "hiit" => Ok(WorkoutCategory::HighIntensity),
            "yoga" => Ok(WorkoutCategory::Yoga),
            "walking" => Ok(WorkoutCategory::Walking),
            other => Err(Error::invalid(
                "categories",
                format!("unknown workout category '{}'", other),
            )),
        }
    }
}

impl fmt::Display for WorkoutCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// An exercise in a category pool, tagged with the tiers it suits
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub tiers: Vec<IntensityTier>,
}

impl Exercise {
    pub fn suits(&self, tier: IntensityTier) -> bool {
        self.tiers.contains(&tier)
    }
}

// ============================================================================
// Availability inputs
// ============================================================================

/// A fixed commitment (usually work) on one weekday
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DayCommitment {
    /// A listed day is on unless it says otherwise
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl DayCommitment {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            enabled: true,
            start,
            end,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            start: TimeOfDay::hm(9, 0),
            end: TimeOfDay::hm(17, 0),
        }
    }

    /// The blocked span, when the commitment is active
    pub fn window(&self) -> Option<TimeSlot> {
        self.enabled.then_some(TimeSlot {
            start: self.start,
            end: self.end,
        })
    }
}

impl Default for DayCommitment {
    fn default() -> Self {
        Self::disabled()
    }
}

/// Per-weekday commitments, Monday through Sunday
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct WorkSchedule {
    pub monday: DayCommitment,
    pub tuesday: DayCommitment,
    pub wednesday: DayCommitment,
    pub thursday: DayCommitment,
    pub friday: DayCommitment,
    pub saturday: DayCommitment,
    pub sunday: DayCommitment,
}

impl WorkSchedule {
    /// Same enabled window Monday to Friday, weekend free
    pub fn weekdays(start: TimeOfDay, end: TimeOfDay) -> Self {
        let work = DayCommitment::new(start, end);
        Self {
            monday: work,
            tuesday: work,
            wednesday: work,
            thursday: work,
            friday: work,
            ..Self::default()
        }
    }

    pub fn day(&self, weekday: Weekday) -> &DayCommitment {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }
}

/// A labeled free-time preference window, e.g. "before work"
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FreeTimeBlock {
    pub label: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl FreeTimeBlock {
    pub fn new(label: impl Into<String>, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            label: label.into(),
            enabled: true,
            start,
            end,
        }
    }

    pub fn span(&self) -> TimeSlot {
        TimeSlot {
            start: self.start,
            end: self.end,
        }
    }
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Plan
// ============================================================================

/// One workout placed on one weekday
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScheduledSession {
    pub weekday: Weekday,
    pub slot: TimeSlot,
    pub category: WorkoutCategory,
    pub duration_minutes: u32,
    pub intensity: IntensityTier,
    pub exercises: Vec<Exercise>,
    pub fasting: FastingState,
    pub advisory: String,
    /// Set when no candidate slot met the minimum rest requirement
    pub constraint_relaxed: bool,
    /// Hours since the previous session started; `None` for the first one
    pub rest_hours: Option<f64>,
}

/// A generated week of sessions, Monday through Sunday
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WeeklyPlan {
    pub chronotype: Chronotype,
    pub protocol: FastingProtocol,
    pub eating_window: ClockWindow,
    pub adaptation_week: u32,
    pub min_rest_hours: f64,
    pub sessions: Vec<ScheduledSession>,
}

impl WeeklyPlan {
    pub fn session_for(&self, weekday: Weekday) -> Option<&ScheduledSession> {
        self.sessions.iter().find(|s| s.weekday == weekday)
    }

    /// Sessions placed under a relaxed rest constraint
    pub fn relaxed_sessions(&self) -> impl Iterator<Item = &ScheduledSession> {
        self.sessions.iter().filter(|s| s.constraint_relaxed)
    }

    pub fn fasting_sessions(&self) -> impl Iterator<Item = &ScheduledSession> {
        self.sessions.iter().filter(|s| s.fasting.is_fasting())
    }

    pub fn total_minutes(&self) -> u32 {
        self.sessions.iter().map(|s| s.duration_minutes).sum()
    }
}

/// Everything the planner needs to generate one week
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanConfig {
    pub chronotype: Chronotype,
    pub protocol: FastingProtocol,
    pub eating_window_start: TimeOfDay,
    pub min_rest_hours: f64,
    pub adaptation_week: u32,
    pub categories: Vec<WorkoutCategory>,
    pub work_schedule: WorkSchedule,
    pub free_time: Vec<FreeTimeBlock>,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            chronotype: Chronotype::Normal,
            protocol: FastingProtocol::SIXTEEN_EIGHT,
            eating_window_start: TimeOfDay::hm(12, 0),
            min_rest_hours: 20.0,
            adaptation_week: 1,
            categories: vec![
                WorkoutCategory::Cardio,
                WorkoutCategory::Strength,
                WorkoutCategory::Flexibility,
                WorkoutCategory::Mixed,
                WorkoutCategory::HighIntensity,
            ],
            work_schedule: WorkSchedule::weekdays(TimeOfDay::hm(9, 0), TimeOfDay::hm(17, 0)),
            free_time: vec![
                FreeTimeBlock::new("before work", TimeOfDay::hm(6, 0), TimeOfDay::hm(8, 0)),
                FreeTimeBlock::new("lunch break", TimeOfDay::hm(12, 0), TimeOfDay::hm(13, 0)),
                FreeTimeBlock::new("after work", TimeOfDay::hm(18, 0), TimeOfDay::hm(21, 0)),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_parse_and_display() {
        let protocol: FastingProtocol = "16:8".parse().unwrap();
        assert_eq!(protocol, FastingProtocol::SIXTEEN_EIGHT);
        assert_eq!(protocol.to_string(), "16:8");
        assert!("16-8".parse::<FastingProtocol>().is_err());
        assert!("x:8".parse::<FastingProtocol>().is_err());
    }

    #[test]
    fn test_protocol_validation() {
        assert!(FastingProtocol::new(16, 8).is_ok());
        assert!(matches!(
            FastingProtocol::new(0, 24),
            Err(Error::InvalidInput { ref field, .. }) if field == "protocol"
        ));
        assert!(FastingProtocol::new(24, 0).is_err());
        assert!(FastingProtocol::new(16, 6).is_err());
        assert!(matches!(
            FastingProtocol::new(u32::MAX, 25),
            Err(Error::InvalidInput { ref field, .. }) if field == "protocol"
        ));
        assert!("4294967295:25".parse::<FastingProtocol>().unwrap().validate().is_err());
        for preset in FastingProtocol::PRESETS {
            assert!(preset.validate().is_ok(), "{} should be valid", preset);
        }
    }

    #[test]
    fn test_category_parse_aliases() {
        assert_eq!(
            "HIIT".parse::<WorkoutCategory>().unwrap(),
            WorkoutCategory::HighIntensity
        );
        assert_eq!(
            "high-intensity".parse::<WorkoutCategory>().unwrap(),
            WorkoutCategory::HighIntensity
        );
        assert!("pilates".parse::<WorkoutCategory>().is_err());
        for category in WorkoutCategory::ALL {
            assert_eq!(category.as_str().parse::<WorkoutCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_chronotype_parse() {
        assert_eq!("Late".parse::<Chronotype>().unwrap(), Chronotype::Late);
        assert!("owl".parse::<Chronotype>().is_err());
    }

    #[test]
    fn test_commitment_window_only_when_enabled() {
        let schedule = WorkSchedule::weekdays(TimeOfDay::hm(9, 0), TimeOfDay::hm(17, 0));
        assert!(schedule.day(Weekday::Mon).window().is_some());
        assert!(schedule.day(Weekday::Sat).window().is_none());
    }

    #[test]
    fn test_plan_config_partial_toml() {
        let toml_str = r#"
chronotype = "late"
protocol = "18:6"
eating_window_start = "13:00"
categories = ["yoga", "walking"]

[work_schedule.monday]
enabled = true
start = "08:00"
end = "16:00"
"#;
        let config: PlanConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.chronotype, Chronotype::Late);
        assert_eq!(config.protocol, FastingProtocol::EIGHTEEN_SIX);
        assert_eq!(config.eating_window_start.to_string(), "13:00");
        assert!(config.work_schedule.monday.enabled);
        assert!(!config.work_schedule.tuesday.enabled);
        assert_eq!(config.adaptation_week, 1); // default
        assert_eq!(config.free_time.len(), 3); // default blocks
    }

    #[test]
    fn test_listed_commitment_defaults_to_enabled() {
        let toml_str = r#"
[work_schedule.saturday]
start = "06:00"
end = "20:00"

[work_schedule.sunday]
enabled = false
start = "06:00"
end = "22:00"
"#;
        let config: PlanConfig = toml::from_str(toml_str).unwrap();
        let saturday = config.work_schedule.saturday;
        assert!(saturday.enabled);
        assert_eq!(saturday.window().unwrap().to_string(), "06:00-20:00");
        assert!(!config.work_schedule.sunday.enabled);
        // days not listed stay free
        assert!(!config.work_schedule.monday.enabled);

        let plan = crate::generate_plan(&config).unwrap();
        let session = plan.session_for(Weekday::Sat).unwrap();
        assert_eq!(session.slot.to_string(), "20:00-21:00");
    }
}
