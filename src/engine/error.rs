//! Engine error taxonomy.
//!
//! Every error here is a rejected validation gate, not a fault: a
//! command that fails leaves the season state exactly as it was, and the
//! caller may correct its input and retry.

use thiserror::Error;

use crate::core::{ContestantId, Phase, Placement};

/// Errors returned by [`SeasonEngine`](super::SeasonEngine) commands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Command issued in a phase it is not valid for.
    #[error("command not valid in phase {phase}")]
    InvalidPhaseTransition {
        /// Phase the season was in when the command arrived.
        phase: Phase,
    },

    /// A decision referenced an unregistered contestant.
    #[error("no contestant with id {0}")]
    ContestantNotFound(ContestantId),

    /// Producer hub gate: the bottom-two count must be exactly 0 or 2.
    #[error("producer placements must mark exactly 0 or 2 bottom contestants, found {found}")]
    InvalidPlacementConfiguration {
        /// How many active contestants are currently marked BTM2.
        found: usize,
    },

    /// Producers may only assign the five competition labels.
    #[error("placement {0} cannot be assigned from the producer hub")]
    RestrictedPlacement(Placement),

    /// A lipsync verdict named a contestant outside the bottom two.
    #[error("contestant {0} is not facing elimination this episode")]
    NotFacingElimination(ContestantId),

    /// A lipsync verdict must either eliminate someone or double-save.
    #[error("lipsync verdict must name an eliminated contestant or declare a double save")]
    EmptyLipsyncVerdict,

    /// Crowning preconditions were not met.
    #[error("invalid crowning request: {reason}")]
    InvalidCrowningRequest {
        /// What was wrong with the request.
        reason: String,
    },

    /// A performance ticket from a superseded performance window.
    #[error("performance ticket is stale")]
    StalePerformance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EngineError::InvalidPhaseTransition { phase: Phase::Lipsync };
        assert_eq!(err.to_string(), "command not valid in phase LIPSYNC");

        let err = EngineError::InvalidPlacementConfiguration { found: 3 };
        assert!(err.to_string().contains("found 3"));

        let err = EngineError::RestrictedPlacement(Placement::Eliminated);
        assert!(err.to_string().contains("ELIM"));
    }
}
