//! The command surface as data.
//!
//! Every input the engine accepts, from a human or from the policy, is a
//! `Command`. Accepted commands are appended to the state's history as
//! `CommandRecord`s.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::PropertyColor;
use crate::effects::{AssetRef, TargetRef};

/// A single engine input.
///
/// ## Example
///
/// ```
/// use rust_deal::core::Command;
///
/// let bank = Command::Bank { card_index: 0 };
/// assert_eq!(bank.name(), "bank");
/// assert!(bank.costs_move());
/// assert!(!Command::EndTurn.costs_move());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Deal opening hands and begin the first turn.
    Start,
    /// Draw the turn's cards (human seats only).
    Draw,
    /// Bank a money, action or rent card.
    Bank { card_index: usize },
    /// Place a property or wildcard. `None` uses the card's own color.
    PlaceProperty {
        card_index: usize,
        color: Option<PropertyColor>,
    },
    /// Play an action card. `color` picks the set for House/Hotel.
    PlayAction {
        card_index: usize,
        color: Option<PropertyColor>,
    },
    /// Charge rent on a color, optionally stacking Double Rent.
    PlayRent {
        card_index: usize,
        color: PropertyColor,
        double_rent: bool,
    },
    /// Move a wildcard on the field to another of its colors. Free.
    SwitchColor {
        color: PropertyColor,
        index: usize,
        new_color: PropertyColor,
    },
    /// Offer one of the actor's own properties for a Forced Deal.
    SelectForcedDealSource { color: PropertyColor, index: usize },
    /// Pick the opponent's card or set for the pending targeted action.
    ResolveTarget(TargetRef),
    /// Abort targeting. No move is spent and the card stays in hand.
    CancelTargeting,
    /// Play (or decline to play) a Just Say No.
    ResolveCounter { use_card: bool },
    /// Settle the outstanding payment with these assets.
    ResolvePayment(Vec<AssetRef>),
    /// Discard down toward the hand limit.
    Discard { card_index: usize },
    /// End the action phase.
    EndTurn,
}

impl Command {
    /// Short name used in logs and errors.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Draw => "draw",
            Command::Bank { .. } => "bank",
            Command::PlaceProperty { .. } => "place_property",
            Command::PlayAction { .. } => "play_action",
            Command::PlayRent { .. } => "play_rent",
            Command::SwitchColor { .. } => "switch_color",
            Command::SelectForcedDealSource { .. } => "select_forced_deal_source",
            Command::ResolveTarget(_) => "resolve_target",
            Command::CancelTargeting => "cancel_targeting",
            Command::ResolveCounter { .. } => "resolve_counter",
            Command::ResolvePayment(_) => "resolve_payment",
            Command::Discard { .. } => "discard",
            Command::EndTurn => "end_turn",
        }
    }

    /// Whether this command draws on the turn's move budget when it starts.
    ///
    /// Action cards are charged when they finish resolving rather than here,
    /// but still need a move available to be started.
    #[must_use]
    pub fn costs_move(&self) -> bool {
        matches!(
            self,
            Command::Bank { .. }
                | Command::PlaceProperty { .. }
                | Command::PlayAction { .. }
                | Command::PlayRent { .. }
        )
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An accepted command with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// The seat that issued the command.
    pub player: PlayerId,

    /// The command.
    pub command: Command,

    /// Turn number when the command was accepted.
    pub turn: u32,

    /// Global sequence number (for ordering).
    pub sequence: u32,
}

impl CommandRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(player: PlayerId, command: Command, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            command,
            turn,
            sequence,
        }
    }
}
