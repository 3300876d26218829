//! Chronotype catalog: ranked default workout windows per rhythm.

use crate::clock::TimeSlot;
use crate::types::Chronotype;

/// Static description of one chronotype
#[derive(Clone, Copy, Debug)]
pub struct ChronotypeProfile {
    pub chronotype: Chronotype,
    pub description: &'static str,
    /// Preferred windows, best first
    pub windows: &'static [TimeSlot],
}

const EARLY_WINDOWS: [TimeSlot; 3] = [
    TimeSlot::from_hm((6, 0), (7, 0)),
    TimeSlot::from_hm((7, 0), (8, 0)),
    TimeSlot::from_hm((16, 0), (17, 0)),
];

const NORMAL_WINDOWS: [TimeSlot; 3] = [
    TimeSlot::from_hm((7, 0), (8, 0)),
    TimeSlot::from_hm((12, 0), (13, 0)),
    TimeSlot::from_hm((18, 0), (19, 0)),
];

const LATE_WINDOWS: [TimeSlot; 3] = [
    TimeSlot::from_hm((10, 0), (11, 0)),
    TimeSlot::from_hm((17, 0), (18, 0)),
    TimeSlot::from_hm((19, 0), (20, 0)),
];

static PROFILES: [ChronotypeProfile; 3] = [
    ChronotypeProfile {
        chronotype: Chronotype::Early,
        description: "Early riser, peak energy in the morning",
        windows: &EARLY_WINDOWS,
    },
    ChronotypeProfile {
        chronotype: Chronotype::Normal,
        description: "Balanced rhythm, flexible through the day",
        windows: &NORMAL_WINDOWS,
    },
    ChronotypeProfile {
        chronotype: Chronotype::Late,
        description: "Night owl, peak energy late in the day",
        windows: &LATE_WINDOWS,
    },
];

/// All chronotype profiles in declaration order
pub fn profiles() -> &'static [ChronotypeProfile] {
    &PROFILES
}

pub fn profile(chronotype: Chronotype) -> &'static ChronotypeProfile {
    match chronotype {
        Chronotype::Early => &PROFILES[0],
        Chronotype::Normal => &PROFILES[1],
        Chronotype::Late => &PROFILES[2],
    }
}

impl Chronotype {
    pub fn description(&self) -> &'static str {
        profile(*self).description
    }

    pub fn preferred_windows(&self) -> &'static [TimeSlot] {
        profile(*self).windows
    }
}
