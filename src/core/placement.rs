//! Episode placement labels.
//!
//! Placements are a closed enumeration, not free-form strings. The five
//! competition labels carry a strict severity ordering used for display
//! and tie-breaking; the terminal markers and the double-save marker sit
//! outside that ordering.

use serde::{Deserialize, Serialize};

/// Outcome label for one contestant in one episode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// Won the episode's challenge (rank 0).
    Win,
    /// Near-top non-winner.
    High,
    /// Middle of the pack.
    Safe,
    /// Just above the bottom two.
    Low,
    /// One of the two lowest-ranked, facing the lipsync.
    Bottom2,
    /// Lost the lipsync and left the competition.
    Eliminated,
    /// Crowned at the finale.
    Winner,
    /// Finalist who was not crowned.
    RunnerUp,
    /// Both bottom contestants were saved without an elimination.
    DoubleShantay,
}

impl Placement {
    /// Severity rank for the competition labels, best first:
    /// WIN(0) > HIGH(1) > SAFE(2) > LOW(3) > BTM2(4).
    ///
    /// Returns `None` for terminal and double-save markers, which have
    /// no position in the weekly ordering.
    #[must_use]
    pub fn severity(self) -> Option<u8> {
        match self {
            Placement::Win => Some(0),
            Placement::High => Some(1),
            Placement::Safe => Some(2),
            Placement::Low => Some(3),
            Placement::Bottom2 => Some(4),
            _ => None,
        }
    }

    /// Whether producers may assign this label from the hub.
    ///
    /// Producer overrides are restricted to the five competition labels;
    /// terminal markers are only written by the elimination resolver.
    #[must_use]
    pub fn is_producer_assignable(self) -> bool {
        self.severity().is_some()
    }

    /// Whether this label ends a contestant's run.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Placement::Eliminated | Placement::Winner | Placement::RunnerUp
        )
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Placement::Win => "WIN",
            Placement::High => "HIGH",
            Placement::Safe => "SAFE",
            Placement::Low => "LOW",
            Placement::Bottom2 => "BTM2",
            Placement::Eliminated => "ELIM",
            Placement::Winner => "WINNER",
            Placement::RunnerUp => "RUNNER-UP",
            Placement::DoubleShantay => "DOUBLE SHANTAY",
        };
        write!(f, "{label}")
    }
}
