//! Time-of-day arithmetic.
//!
//! All schedule math works on minutes since midnight. `TimeOfDay` is the only
//! place that knows about the `HH:MM` text form; everything else compares and
//! adds values.

use crate::{Error, Result};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time within a single day, minute resolution
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Build a time from hour and minute, rejecting out-of-range parts
    pub fn new(hour: u16, minute: u16) -> Result<Self> {
        if hour >= 24 || minute >= 60 {
            return Err(Error::invalid(
                "time of day",
                format!("{}:{:02} is not a valid clock time", hour, minute),
            ));
        }
        Ok(Self(hour * 60 + minute))
    }

    /// Const constructor for static tables. Callers guarantee the range.
    pub(crate) const fn hm(hour: u16, minute: u16) -> Self {
        Self(hour * 60 + minute)
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Add (or subtract) minutes, wrapping across midnight
    pub fn add_minutes(self, minutes: i32) -> Self {
        let total = (self.0 as i32 + minutes).rem_euclid(MINUTES_PER_DAY as i32);
        Self(total as u16)
    }

    /// Add whole hours, wrapping across midnight
    pub fn add_hours(self, hours: u32) -> Self {
        self.add_minutes(((hours % 24) * 60) as i32)
    }

    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour() as u32, self.minute() as u32, 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self((time.hour() * 60 + time.minute()) as u16)
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map(TimeOfDay::from)
            .map_err(|e| Error::invalid("time of day", format!("'{}': {}", s, e)))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// A span of time within one day (`start < end`, never crossing midnight)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TimeSlot {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        if end <= start {
            return Err(Error::invalid(
                "time slot",
                format!("end {} is not after start {}", end, start),
            ));
        }
        Ok(Self { start, end })
    }

    pub(crate) const fn from_hm(start: (u16, u16), end: (u16, u16)) -> Self {
        Self {
            start: TimeOfDay::hm(start.0, start.1),
            end: TimeOfDay::hm(end.0, end.1),
        }
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    /// True when the two spans share any minute
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Entirely before or entirely after `other`; touching edges is allowed
    pub fn is_clear_of(&self, other: &TimeSlot) -> bool {
        self.end <= other.start || self.start >= other.end
    }

    /// Cut the span into consecutive fixed-width slots.
    ///
    /// A trailing remainder shorter than `width_minutes` is dropped.
    pub fn split_into(&self, width_minutes: u16) -> Vec<TimeSlot> {
        if width_minutes == 0 {
            return Vec::new();
        }
        let mut slots = Vec::new();
        let mut cursor = self.start.minutes();
        while cursor + width_minutes <= self.end.minutes() {
            slots.push(TimeSlot {
                start: TimeOfDay(cursor),
                end: TimeOfDay(cursor + width_minutes),
            });
            cursor += width_minutes;
        }
        slots
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A daily window that may wrap past midnight (eating and fasting windows)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl ClockWindow {
    pub fn wraps_midnight(&self) -> bool {
        self.end <= self.start
    }
}

impl fmt::Display for ClockWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
