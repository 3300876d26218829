#![forbid(unsafe_code)]

//! Core domain model and scheduling logic for the fastfit planner.
//!
//! This crate provides:
//! - Domain types (chronotypes, fasting protocols, sessions, weekly plans)
//! - Time-of-day arithmetic
//! - Fasting window classification
//! - Slot availability and rest-constraint selection
//! - Exercise catalog and intensity progression
//! - Weekly plan generation

pub mod types;
pub mod error;
pub mod clock;
pub mod chronotype;
pub mod fasting;
pub mod availability;
pub mod rest;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod progression;
pub mod advice;
pub mod scheduler;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use clock::{ClockWindow, TimeOfDay, TimeSlot};
pub use catalog::{build_default_catalog, get_default_catalog, ExerciseCatalog};
pub use config::Config;
pub use fasting::{compute_eating_window, is_fasting, FastingWindowCalculator};
pub use availability::{AvailabilityResolver, SlotSource};
pub use rest::RestConstraintEnforcer;
pub use progression::IntensityProgressionPolicy;
pub use scheduler::{generate_plan, WeeklyScheduler, WEEK};
