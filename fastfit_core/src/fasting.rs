//! Eating/fasting window math and session classification.
//!
//! The eating window is half-open: `[eat_start, eat_end)`. A session that starts
//! exactly at `eat_start` is fed; late-evening sessions for the late chronotype
//! that start exactly at `eat_end` are fasted.

use crate::clock::{ClockWindow, TimeOfDay};
use crate::types::{Chronotype, FastingProtocol, FastingState};

/// Evening cutoff after which the late chronotype is judged against `eat_end`
pub const LATE_EVENING_CUTOFF: TimeOfDay = TimeOfDay::hm(18, 0);

/// Eating window for a protocol starting at `start`, wrapping past midnight
pub fn compute_eating_window(protocol: FastingProtocol, start: TimeOfDay) -> ClockWindow {
    ClockWindow {
        start,
        end: start.add_hours(protocol.eating_hours),
    }
}

/// Classifies times of day against one protocol and eating window
#[derive(Clone, Copy, Debug)]
pub struct FastingWindowCalculator {
    protocol: FastingProtocol,
    eating: ClockWindow,
}

impl FastingWindowCalculator {
    pub fn new(protocol: FastingProtocol, eating_start: TimeOfDay) -> Self {
        Self {
            protocol,
            eating: compute_eating_window(protocol, eating_start),
        }
    }

    pub fn protocol(&self) -> FastingProtocol {
        self.protocol
    }

    pub fn eating_window(&self) -> ClockWindow {
        self.eating
    }

    /// Complement of the eating window
    pub fn fasting_window(&self) -> ClockWindow {
        ClockWindow {
            start: self.eating.end,
            end: self.eating.start,
        }
    }

    pub fn is_fasting(&self, time: TimeOfDay, chronotype: Chronotype) -> bool {
        let ClockWindow { start, end } = self.eating;
        match chronotype {
            Chronotype::Early | Chronotype::Normal => time < start,
            Chronotype::Late if time >= LATE_EVENING_CUTOFF => time >= end,
            Chronotype::Late => time < start,
        }
    }

    pub fn classify(&self, time: TimeOfDay, chronotype: Chronotype) -> FastingState {
        if self.is_fasting(time, chronotype) {
            FastingState::Fasting
        } else {
            FastingState::Fed
        }
    }
}

/// One-shot form of [`FastingWindowCalculator::is_fasting`]
pub fn is_fasting(
    time: TimeOfDay,
    protocol: FastingProtocol,
    eating_start: TimeOfDay,
    chronotype: Chronotype,
) -> bool {
    FastingWindowCalculator::new(protocol, eating_start).is_fasting(time, chronotype)
}
