//! Turn phases.
//!
//! ```text
//! START -> DRAW (human only) -> ACTION -> [DISCARD] -> next player's START
//!
//! ACTION -> TARGETING -> COUNTER_OPPORTUNITY -> ACTION
//! ACTION -> FORCED_DEAL_SOURCE -> TARGETING -> ...
//! ACTION -> COUNTER_OPPORTUNITY -> PAYMENT -> ACTION
//! ```
//!
//! GAME_OVER is terminal and reachable from any phase that mutates a field.

use serde::{Deserialize, Serialize};

use super::action::Command;

/// Phase of the turn state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Before `start` or between turns.
    #[default]
    Start,
    /// Human must request the turn draw.
    Draw,
    /// Normal play; up to `moves_per_turn` moves.
    Action,
    /// Hand over the limit at end of turn.
    Discard,
    /// A debtor is choosing assets.
    Payment,
    /// A targeted action is waiting for its target.
    Targeting,
    /// Forced Deal is waiting for the actor's offered property.
    ForcedDealSource,
    /// A Just-Say-No war is waiting for the active seat's choice.
    CounterOpportunity,
    /// Terminal.
    GameOver,
}

impl Phase {
    /// Whether a command belongs to this phase.
    ///
    /// Only the phase is checked here; seat, move budget and card rules are
    /// validated by the rules engine.
    #[must_use]
    pub fn accepts(self, command: &Command) -> bool {
        match command {
            Command::Start => self == Phase::Start,
            Command::Draw => self == Phase::Draw,
            Command::Bank { .. }
            | Command::PlaceProperty { .. }
            | Command::PlayAction { .. }
            | Command::PlayRent { .. }
            | Command::SwitchColor { .. }
            | Command::EndTurn => self == Phase::Action,
            Command::SelectForcedDealSource { .. } => self == Phase::ForcedDealSource,
            Command::ResolveTarget(_) => self == Phase::Targeting,
            Command::CancelTargeting => {
                matches!(self, Phase::Targeting | Phase::ForcedDealSource)
            }
            Command::ResolveCounter { .. } => self == Phase::CounterOpportunity,
            Command::ResolvePayment(_) => self == Phase::Payment,
            Command::Discard { .. } => self == Phase::Discard,
        }
    }

    /// Upper-case name used in logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Phase::Start => "START",
            Phase::Draw => "DRAW",
            Phase::Action => "ACTION",
            Phase::Discard => "DISCARD",
            Phase::Payment => "PAYMENT",
            Phase::Targeting => "TARGETING",
            Phase::ForcedDealSource => "FORCED_DEAL_SOURCE",
            Phase::CounterOpportunity => "COUNTER_OPPORTUNITY",
            Phase::GameOver => "GAME_OVER",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
