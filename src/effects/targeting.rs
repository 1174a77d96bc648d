//! Targeted actions: Sly Deal, Deal Breaker and Forced Deal.
//!
//! A targeted action is validated when its target is chosen, then waits on
//! a counter-war. Execution only moves cards between fields; discarding the
//! action card and charging the move is the caller's job, since that happens
//! whether or not the action survives the war.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cards::{ActionKind, CardId, PropertyColor};
use crate::core::{GameError, GameState, PlayerId};
use crate::zones::Field;

/// The three actions that pick a card or set on the opponent's field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetedAction {
    /// Steal one property not in a complete set.
    SlyDeal,
    /// Steal a complete set, improvements included.
    DealBreaker,
    /// Swap one of your non-set properties for one of theirs.
    ForcedDeal,
}

impl TargetedAction {
    /// The targeted action an action card performs, if any.
    #[must_use]
    pub fn from_kind(kind: ActionKind) -> Option<Self> {
        match kind {
            ActionKind::SlyDeal => Some(TargetedAction::SlyDeal),
            ActionKind::DealBreaker => Some(TargetedAction::DealBreaker),
            ActionKind::ForcedDeal => Some(TargetedAction::ForcedDeal),
            _ => None,
        }
    }

    /// The card kind that performs this action.
    #[must_use]
    pub fn kind(self) -> ActionKind {
        match self {
            TargetedAction::SlyDeal => ActionKind::SlyDeal,
            TargetedAction::DealBreaker => ActionKind::DealBreaker,
            TargetedAction::ForcedDeal => ActionKind::ForcedDeal,
        }
    }
}

/// A position on one's own field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldRef {
    pub color: PropertyColor,
    pub index: usize,
}

impl FieldRef {
    #[must_use]
    pub fn new(color: PropertyColor, index: usize) -> Self {
        Self { color, index }
    }
}

/// A position on a seat's field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetRef {
    pub player: PlayerId,
    pub color: PropertyColor,
    pub index: usize,
}

impl TargetRef {
    #[must_use]
    pub fn new(player: PlayerId, color: PropertyColor, index: usize) -> Self {
        Self {
            player,
            color,
            index,
        }
    }
}

/// A targeted action card that has been played but not yet resolved.
///
/// The card stays in its owner's hand until the action finishes or is
/// cancelled by a counter-war; it is found again by id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAction {
    /// The action card.
    pub card: CardId,

    /// What it does.
    pub action: TargetedAction,

    /// Seat that played it.
    pub source: PlayerId,

    /// Forced Deal: the property offered in exchange.
    pub offered: Option<FieldRef>,
}

impl PendingAction {
    #[must_use]
    pub fn new(card: CardId, action: TargetedAction, source: PlayerId) -> Self {
        Self {
            card,
            action,
            source,
            offered: None,
        }
    }

    /// Whether the actor still has to pick the property to offer.
    #[must_use]
    pub fn needs_source(&self) -> bool {
        self.action == TargetedAction::ForcedDeal && self.offered.is_none()
    }
}

/// A single property that may be taken or swapped.
fn check_loose_property(
    field: &Field,
    color: PropertyColor,
    index: usize,
) -> Result<(), GameError> {
    let card = field.get(color, index).ok_or(GameError::InvalidTarget)?;
    if !card.is_property() {
        return Err(GameError::WrongCardKind);
    }
    if field.is_complete(color) {
        return Err(GameError::CompleteSetProtected { color });
    }
    Ok(())
}

/// Check the property a Forced Deal actor offers.
pub fn validate_source(field: &Field, source: FieldRef) -> Result<(), GameError> {
    check_loose_property(field, source.color, source.index)
}

/// Check a target against the pending action's rules.
///
/// - Every target must sit on the other seat's field.
/// - Sly Deal and Forced Deal take a property outside any complete set.
/// - Deal Breaker names any card of a complete set.
/// - Forced Deal's offered property must still be valid.
pub fn validate_target(
    state: &GameState,
    pending: &PendingAction,
    target: TargetRef,
) -> Result<(), GameError> {
    if target.player == pending.source {
        return Err(GameError::InvalidTarget);
    }
    let field = &state
        .try_player(target.player)
        .ok_or(GameError::InvalidTarget)?
        .field;

    match pending.action {
        TargetedAction::SlyDeal => check_loose_property(field, target.color, target.index),
        TargetedAction::DealBreaker => {
            field
                .get(target.color, target.index)
                .ok_or(GameError::InvalidTarget)?;
            if !field.is_complete(target.color) {
                return Err(GameError::SetNotComplete {
                    color: target.color,
                });
            }
            Ok(())
        }
        TargetedAction::ForcedDeal => {
            let offered = pending.offered.ok_or(GameError::InvalidTarget)?;
            validate_source(&state.player(pending.source).field, offered)?;
            check_loose_property(field, target.color, target.index)
        }
    }
}

/// Move the cards. The target must have passed `validate_target`.
pub fn execute(state: &mut GameState, pending: &PendingAction, target: TargetRef) {
    let actor = pending.source;
    let victim = target.player;

    match pending.action {
        TargetedAction::SlyDeal => {
            match state.player_mut(victim).field.remove(target.color, target.index) {
                Some(card) => state.player_mut(actor).field.push(target.color, card),
                None => warn!(?target, "sly deal target vanished"),
            }
        }
        TargetedAction::DealBreaker => {
            let set = state.player_mut(victim).field.take_stack(target.color);
            let field = &mut state.player_mut(actor).field;
            for card in set {
                field.push(target.color, card);
            }
        }
        TargetedAction::ForcedDeal => {
            let Some(offered) = pending.offered else {
                warn!("forced deal executed without an offered property");
                return;
            };
            let mine = state.player(actor).field.get(offered.color, offered.index).is_some();
            let theirs = state.player(victim).field.get(target.color, target.index).is_some();
            if !(mine && theirs) {
                warn!(?offered, ?target, "forced deal cards vanished");
                return;
            }
            let given = state.player_mut(actor).field.remove(offered.color, offered.index);
            let taken = state.player_mut(victim).field.remove(target.color, target.index);
            if let (Some(given), Some(taken)) = (given, taken) {
                state.player_mut(victim).field.push(offered.color, given);
                state.player_mut(actor).field.push(target.color, taken);
            }
        }
    }
}
