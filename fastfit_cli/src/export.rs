//! Plan export to CSV and JSON documents.

use crate::store::SavedPlan;
use fastfit_core::{Error, Result, ScheduledSession, WeeklyPlan};
use serde::Serialize;
use std::path::Path;

/// One CSV row per scheduled session
#[derive(Debug, Serialize)]
struct SessionRow<'a> {
    weekday: String,
    start: String,
    end: String,
    category: &'a str,
    duration_minutes: u32,
    intensity: String,
    fasting: String,
    constraint_relaxed: bool,
    rest_hours: Option<f64>,
    exercises: String,
    advisory: &'a str,
}

impl<'a> From<&'a ScheduledSession> for SessionRow<'a> {
    fn from(session: &'a ScheduledSession) -> Self {
        let exercises: Vec<&str> = session.exercises.iter().map(|e| e.name.as_str()).collect();
        Self {
            weekday: session.weekday.to_string(),
            start: session.slot.start.to_string(),
            end: session.slot.end.to_string(),
            category: session.category.as_str(),
            duration_minutes: session.duration_minutes,
            intensity: session.intensity.to_string(),
            fasting: session.fasting.to_string(),
            constraint_relaxed: session.constraint_relaxed,
            rest_hours: session.rest_hours,
            exercises: exercises.join("; "),
            advisory: &session.advisory,
        }
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Write the plan as CSV, returning the number of sessions written
pub fn write_csv(plan: &WeeklyPlan, path: &Path) -> Result<usize> {
    ensure_parent(path)?;

    let csv_err = |e: csv::Error| Error::Other(format!("CSV export failed: {}", e));
    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;

    for session in &plan.sessions {
        writer.serialize(SessionRow::from(session)).map_err(csv_err)?;
    }
    writer.flush()?;

    tracing::info!("Exported {} sessions to {:?}", plan.sessions.len(), path);
    Ok(plan.sessions.len())
}

/// Write the saved plan, metadata included, as pretty JSON
pub fn write_json(saved: &SavedPlan, path: &Path) -> Result<usize> {
    ensure_parent(path)?;

    let contents = serde_json::to_string_pretty(saved)?;
    std::fs::write(path, contents)?;

    tracing::info!("Exported plan {} to {:?}", saved.id, path);
    Ok(saved.plan.sessions.len())
}
