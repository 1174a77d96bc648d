//! Command rejection and snapshot errors.
//!
//! A rejected command leaves the state exactly as it was. Callers can
//! retry with different input; only `GameOver` is final.

use thiserror::Error;

use super::phase::Phase;
use crate::cards::{ActionKind, PropertyColor};

/// Coarse grouping of command failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The command does not belong to the current phase or seat.
    PhaseViolation,
    /// A card, target or asset does not meet the rule constraints.
    ValidationFailure,
    /// The selected payment is below both the amount and the debtor's worth.
    InsufficientAssets,
    /// The match has ended.
    Terminal,
}

/// Why a command was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("{command} is not allowed during {phase}")]
    PhaseViolation { command: &'static str, phase: Phase },

    #[error("no moves left this turn")]
    NoMovesLeft,

    #[error("no card at hand index {index}")]
    InvalidCard { index: usize },

    #[error("invalid target")]
    InvalidTarget,

    #[error("card cannot be used this way")]
    WrongCardKind,

    #[error("card cannot take color {color}")]
    ColorNotAllowed { color: PropertyColor },

    #[error("{color} is a complete set")]
    CompleteSetProtected { color: PropertyColor },

    #[error("{color} is not a complete set")]
    SetNotComplete { color: PropertyColor },

    #[error("no set can take a {kind}")]
    NoSetForImprovement { kind: ActionKind },

    #[error("no properties of color {color}")]
    NoPropertiesOfColor { color: PropertyColor },

    #[error("{kind} is not in hand")]
    MissingCard { kind: ActionKind },

    #[error("asset selected more than once")]
    DuplicateAsset,

    #[error("{kind} cannot be played on its own")]
    NotTargetable { kind: ActionKind },

    #[error("payment of {offered}M is short of {owed}M (debtor holds {available}M)")]
    InsufficientAssets { owed: u32, offered: u32, available: u32 },

    #[error("the game is over")]
    GameOver,
}

impl GameError {
    /// Which recovery bucket the failure falls in.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            GameError::PhaseViolation { .. } | GameError::NoMovesLeft => {
                ErrorCategory::PhaseViolation
            }
            GameError::InsufficientAssets { .. } => ErrorCategory::InsufficientAssets,
            GameError::GameOver => ErrorCategory::Terminal,
            _ => ErrorCategory::ValidationFailure,
        }
    }
}

/// Failure to encode or decode a state snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot codec: {0}")]
    Codec(#[from] bincode::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        let phase = GameError::PhaseViolation {
            command: "draw",
            phase: Phase::Action,
        };
        assert_eq!(phase.category(), ErrorCategory::PhaseViolation);
        assert_eq!(GameError::NoMovesLeft.category(), ErrorCategory::PhaseViolation);
        assert_eq!(
            GameError::CompleteSetProtected {
                color: PropertyColor::Red
            }
            .category(),
            ErrorCategory::ValidationFailure
        );
        assert_eq!(
            GameError::InsufficientAssets {
                owed: 5,
                offered: 1,
                available: 9
            }
            .category(),
            ErrorCategory::InsufficientAssets
        );
        assert_eq!(GameError::GameOver.category(), ErrorCategory::Terminal);
    }

    #[test]
    fn test_messages() {
        let err = GameError::PhaseViolation {
            command: "draw",
            phase: Phase::Action,
        };
        assert_eq!(err.to_string(), "draw is not allowed during ACTION");
        assert_eq!(
            GameError::InsufficientAssets {
                owed: 5,
                offered: 2,
                available: 8
            }
            .to_string(),
            "payment of 2M is short of 5M (debtor holds 8M)"
        );
    }
}
