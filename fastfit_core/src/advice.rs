//! Advisory notes attached to each scheduled session.

use crate::types::{FastingState, IntensityTier};

const EARLY_ADAPTATION_WEEKS: u32 = 2;

/// Build the advisory text for a session.
///
/// Depends only on the fasting state, tier, adaptation week and whether the
/// day has an active commitment.
pub fn advisory_text(
    fasting: FastingState,
    intensity: IntensityTier,
    adaptation_week: u32,
    commitment_enabled: bool,
) -> String {
    let mut notes: Vec<&str> = Vec::new();

    match fasting {
        FastingState::Fasting => {
            if adaptation_week <= EARLY_ADAPTATION_WEEKS {
                notes.push(
                    "Caution: your body is still adapting to fasting. Keep the effort \
                     conversational and stop if you feel light-headed.",
                );
            }
            if intensity == IntensityTier::High {
                notes.push(
                    "Fasted high-intensity work: have electrolytes ready and break \
                     the fast within an hour afterwards.",
                );
            } else {
                notes.push("Fasted session: drink water or unsweetened tea beforehand.");
            }
        }
        FastingState::Fed => {
            notes.push(
                "Fed session: allow one to two hours after your last meal before starting.",
            );
        }
    }

    if commitment_enabled {
        notes.push("Work day: keep warm-up and cool-down short so the session fits around your commitments.");
    }

    notes.join(" ")
}
