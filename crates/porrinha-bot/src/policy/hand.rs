use crate::bot::Tally;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Which rule picked the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandBranch {
    /// No active opponent has history.
    NoInformation,
    /// Every classified opponent is centrist.
    Centrist,
    /// Every classified opponent is erratic.
    Erratic,
    /// Both kinds are present.
    Mixed,
}

impl HandBranch {
    pub fn select(tally: Tally) -> Self {
        if tally.is_empty() {
            HandBranch::NoInformation
        } else if tally.erratic == 0 {
            HandBranch::Centrist
        } else if tally.gaussian == 0 {
            HandBranch::Erratic
        } else {
            HandBranch::Mixed
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            HandBranch::NoInformation => "no_information",
            HandBranch::Centrist => "centrist",
            HandBranch::Erratic => "erratic",
            HandBranch::Mixed => "mixed",
        }
    }

    /// Human readable line sent to the rationale sink.
    pub const fn rationale(self) -> &'static str {
        match self {
            HandBranch::NoInformation => "no info, pure random move.",
            HandBranch::Centrist => "centrist opponents, committing half my items.",
            HandBranch::Erratic => "erratic opponents, committing an extreme.",
            HandBranch::Mixed => "mixed opponents, pure random move.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandDecision {
    pub hand: u32,
    pub branch: HandBranch,
}

/// Pick a hand in `[0, available]` from the opponent tally.
pub fn choose_hand<R: Rng>(tally: Tally, available: u32, rng: &mut R) -> HandDecision {
    let branch = HandBranch::select(tally);
    let hand = match branch {
        HandBranch::NoInformation | HandBranch::Mixed => rng.gen_range(0..=available),
        HandBranch::Centrist => available / 2,
        HandBranch::Erratic => rng.gen_range(0..=1u32) * available,
    };
    HandDecision { hand, branch }
}
