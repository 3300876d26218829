//! Candidate slot generation for a single weekday.
//!
//! Free days use the chronotype's preferred windows directly. Committed days
//! carve one-hour slots out of each enabled free-time block and keep only the
//! slots that sit entirely before or after the commitment.

use crate::clock::TimeSlot;
use crate::types::{Chronotype, FreeTimeBlock, WorkSchedule};
use chrono::Weekday;

/// Width of a candidate slot carved from a free-time block
pub const SLOT_WIDTH_MINUTES: u16 = 60;

/// Where a day's candidate list came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotSource {
    /// No commitment that day; chronotype windows used as-is
    Unconstrained,
    /// Slots carved from enabled free-time blocks
    FreeTime,
    /// Commitment present but no free-time slot survived; chronotype windows
    /// that clear the commitment are used instead
    Fallback,
    /// Every chronotype window collides with the commitment; used unfiltered
    Overlapping,
}

/// Ordered candidates for one day
#[derive(Clone, Debug)]
pub struct Availability {
    pub slots: Vec<TimeSlot>,
    pub source: SlotSource,
}

pub struct AvailabilityResolver<'a> {
    chronotype: Chronotype,
    schedule: &'a WorkSchedule,
    free_time: &'a [FreeTimeBlock],
}

impl<'a> AvailabilityResolver<'a> {
    pub fn new(
        chronotype: Chronotype,
        schedule: &'a WorkSchedule,
        free_time: &'a [FreeTimeBlock],
    ) -> Self {
        Self {
            chronotype,
            schedule,
            free_time,
        }
    }

    pub fn resolve(&self, day: Weekday) -> Availability {
        let Some(commitment) = self.schedule.day(day).window() else {
            return Availability {
                slots: self.chronotype.preferred_windows().to_vec(),
                source: SlotSource::Unconstrained,
            };
        };

        let slots: Vec<TimeSlot> = self
            .free_time
            .iter()
            .filter(|block| block.enabled)
            .flat_map(|block| block.span().split_into(SLOT_WIDTH_MINUTES))
            .filter(|slot| slot.is_clear_of(&commitment))
            .collect();

        if slots.is_empty() {
            return self.fallback(day, &commitment);
        }

        Availability {
            slots,
            source: SlotSource::FreeTime,
        }
    }

    fn fallback(&self, day: Weekday, commitment: &TimeSlot) -> Availability {
        let windows = self.chronotype.preferred_windows();
        let clear: Vec<TimeSlot> = windows
            .iter()
            .filter(|w| w.is_clear_of(commitment))
            .copied()
            .collect();

        if clear.is_empty() {
            tracing::warn!(
                "{:?}: commitment {} covers every {} window",
                day,
                commitment,
                self.chronotype
            );
            return Availability {
                slots: windows.to_vec(),
                source: SlotSource::Overlapping,
            };
        }

        tracing::debug!(
            "{:?}: no free-time slot clears commitment {}, using {} windows",
            day,
            commitment,
            self.chronotype
        );
        Availability {
            slots: clear,
            source: SlotSource::Fallback,
        }
    }

    /// Candidate slots for `day`, best first
    pub fn available_slots(&self, day: Weekday) -> Vec<TimeSlot> {
        self.resolve(day).slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::TimeOfDay;
    use crate::types::DayCommitment;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn block(label: &str, start: &str, end: &str) -> FreeTimeBlock {
        FreeTimeBlock::new(label, t(start), t(end))
    }

    fn monday_work(start: &str, end: &str) -> WorkSchedule {
        let mut schedule = WorkSchedule::default();
        schedule.monday = DayCommitment::new(t(start), t(end));
        schedule
    }

    #[test]
    fn test_free_day_returns_chronotype_windows() {
        let schedule = WorkSchedule::default();
        let blocks = vec![block("after work", "18:00", "22:00")];
        let resolver = AvailabilityResolver::new(Chronotype::Early, &schedule, &blocks);

        let availability = resolver.resolve(Weekday::Wed);
        assert_eq!(availability.source, SlotSource::Unconstrained);
        assert_eq!(availability.slots, Chronotype::Early.preferred_windows());
    }

    #[test]
    fn test_committed_day_uses_blocks_in_declaration_order() {
        let schedule = monday_work("09:00", "18:00");
        let blocks = vec![
            block("after work", "18:00", "20:00"),
            block("before work", "06:00", "08:00"),
        ];
        let resolver = AvailabilityResolver::new(Chronotype::Normal, &schedule, &blocks);

        let availability = resolver.resolve(Weekday::Mon);
        assert_eq!(availability.source, SlotSource::FreeTime);
        let rendered: Vec<String> = availability.slots.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            rendered,
            vec!["18:00-19:00", "19:00-20:00", "06:00-07:00", "07:00-08:00"]
        );
    }

    #[test]
    fn test_partial_overlap_is_rejected() {
        let schedule = monday_work("09:00", "17:00");
        let blocks = vec![block("late morning", "07:30", "10:30")];
        let resolver = AvailabilityResolver::new(Chronotype::Normal, &schedule, &blocks);

        // 07:30-08:30 fits, 08:30-09:30 straddles the start, 09:30-10:30 is inside
        let slots = resolver.available_slots(Weekday::Mon);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].to_string(), "07:30-08:30");
    }

    #[test]
    fn test_disabled_blocks_are_ignored() {
        let schedule = monday_work("09:00", "17:00");
        let mut lunch = block("lunch", "17:00", "19:00");
        lunch.enabled = false;
        let blocks = vec![lunch, block("before work", "07:00", "08:00")];
        let resolver = AvailabilityResolver::new(Chronotype::Normal, &schedule, &blocks);

        let slots = resolver.available_slots(Weekday::Mon);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].start, t("07:00"));
    }

    #[test]
    fn test_falls_back_when_nothing_survives() {
        let schedule = monday_work("09:00", "17:00");
        let blocks = vec![block("lunch", "12:00", "13:00")];
        let resolver = AvailabilityResolver::new(Chronotype::Late, &schedule, &blocks);

        // 10:00-11:00 sits inside the commitment and is filtered out
        let availability = resolver.resolve(Weekday::Mon);
        assert_eq!(availability.source, SlotSource::Fallback);
        let rendered: Vec<String> = availability.slots.iter().map(|s| s.to_string()).collect();
        assert_eq!(rendered, vec!["17:00-18:00", "19:00-20:00"]);
    }

    #[test]
    fn test_falls_back_when_no_blocks() {
        let schedule = monday_work("09:00", "17:00");
        let resolver = AvailabilityResolver::new(Chronotype::Normal, &schedule, &[]);
        assert_eq!(resolver.resolve(Weekday::Mon).source, SlotSource::Fallback);
    }

    #[test]
    fn test_overlapping_when_commitment_covers_every_window() {
        let schedule = WorkSchedule::weekdays(t("06:00"), t("23:00"));
        let resolver = AvailabilityResolver::new(Chronotype::Normal, &schedule, &[]);
        let availability = resolver.resolve(Weekday::Tue);
        assert_eq!(availability.source, SlotSource::Overlapping);
        assert_eq!(availability.slots, Chronotype::Normal.preferred_windows());
    }

    #[test]
    fn test_never_empty() {
        let schedule = WorkSchedule::weekdays(t("06:00"), t("23:00"));
        let blocks = vec![block("impossible", "10:00", "12:00")];
        for chronotype in Chronotype::ALL {
            let resolver = AvailabilityResolver::new(chronotype, &schedule, &blocks);
            for day in [Weekday::Mon, Weekday::Sat] {
                assert!(!resolver.available_slots(day).is_empty());
            }
        }
    }
}
