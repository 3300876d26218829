//! Minimum-rest enforcement between consecutive sessions.

use crate::clock::{TimeOfDay, TimeSlot};
use crate::{Error, Result};
use chrono::Weekday;

/// The day and start time of the most recently scheduled session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreviousSession {
    pub weekday: Weekday,
    pub start: TimeOfDay,
}

/// Outcome of picking a slot for one day
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotChoice {
    pub slot: TimeSlot,
    /// No candidate met the minimum rest, so the first one was taken anyway
    pub constraint_relaxed: bool,
    /// Hours since the previous session started; `None` on the first day
    pub rest_hours: Option<f64>,
}

/// Hours between two session starts, counting forward across days
pub fn elapsed_hours(previous: &PreviousSession, day: Weekday, start: TimeOfDay) -> f64 {
    let day_delta = (day.num_days_from_monday() as i64
        - previous.weekday.num_days_from_monday() as i64)
        .rem_euclid(7);
    let minute_delta = start.minutes() as i64 - previous.start.minutes() as i64;
    (day_delta * 24) as f64 + minute_delta as f64 / 60.0
}

#[derive(Clone, Copy, Debug)]
pub struct RestConstraintEnforcer {
    min_rest_hours: f64,
}

impl RestConstraintEnforcer {
    pub fn new(min_rest_hours: f64) -> Self {
        Self { min_rest_hours }
    }

    pub fn min_rest_hours(&self) -> f64 {
        self.min_rest_hours
    }

    /// Pick the first candidate far enough from `previous`.
    ///
    /// When none qualifies the first candidate is returned with
    /// `constraint_relaxed` set.
    pub fn pick_slot(
        &self,
        candidates: &[TimeSlot],
        day: Weekday,
        previous: Option<&PreviousSession>,
    ) -> Result<SlotChoice> {
        let first = *candidates
            .first()
            .ok_or_else(|| Error::Schedule(format!("no candidate slots for {:?}", day)))?;

        let Some(previous) = previous else {
            return Ok(SlotChoice {
                slot: first,
                constraint_relaxed: false,
                rest_hours: None,
            });
        };

        let rested = candidates
            .iter()
            .map(|slot| (*slot, elapsed_hours(previous, day, slot.start)))
            .find(|(_, hours)| *hours >= self.min_rest_hours);

        match rested {
            Some((slot, hours)) => Ok(SlotChoice {
                slot,
                constraint_relaxed: false,
                rest_hours: Some(hours),
            }),
            None => {
                let hours = elapsed_hours(previous, day, first.start);
                tracing::warn!(
                    "{:?}: no slot gives {}h rest, taking {} with {:.1}h",
                    day,
                    self.min_rest_hours,
                    first,
                    hours
                );
                Ok(SlotChoice {
                    slot: first,
                    constraint_relaxed: true,
                    rest_hours: Some(hours),
                })
            }
        }
    }
}
