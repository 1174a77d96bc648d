//! Greedy heuristic policy.
//!
//! Each move takes the first rule that applies:
//! 1. Bank a money card
//! 2. Place a property or wildcard under its current color
//! 3. Scan the hand in order for the first playable rent or action card
//!
//! It always plays Just Say No when it can, pays from the bank before the
//! field, and discards from the end of the hand.

use smallvec::smallvec;

use super::policy::{Plan, Policy};
use crate::cards::{ActionKind, Card, CardKind, CardType, PropertyColor};
use crate::core::{Command, GameState, Player, PlayerId};
use crate::effects::{AssetRef, PaymentRequest, TargetRef};
use crate::rules::calculate_rent;
use crate::zones::Field;

/// The default AI strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    /// Create the policy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Best-paying color this rent card can charge.
    fn rent_color(player: &Player, card: &Card) -> Option<PropertyColor> {
        card.valid_colors()
            .iter()
            .copied()
            .filter(|&color| player.field.property_count(color) > 0)
            .max_by_key(|&color| (calculate_rent(player, color), std::cmp::Reverse(color.index())))
    }

    /// First property outside a complete set, in catalog order.
    fn loose_property(field: &Field) -> Option<(PropertyColor, usize)> {
        field
            .iter()
            .filter(|(color, _)| !field.is_complete(*color))
            .find_map(|(color, stack)| stack.iter().position(Card::is_property).map(|i| (color, i)))
    }

    fn action_plan(state: &GameState, me: PlayerId, index: usize, card: &Card) -> Option<Plan> {
        let player = state.player(me);
        let them = me.opponent();
        let opponent = &state.player(them).field;

        let play = Command::PlayAction {
            card_index: index,
            color: None,
        };
        let kind = match card.kind {
            CardKind::Rent { .. } => {
                let color = Self::rent_color(player, card)?;
                return Some(smallvec![Command::PlayRent {
                    card_index: index,
                    color,
                    double_rent: player.holds(ActionKind::DoubleRent),
                }]);
            }
            CardKind::Action(kind) => kind,
            _ => return None,
        };

        match kind {
            ActionKind::PassGo | ActionKind::Birthday | ActionKind::DebtCollector => {
                Some(smallvec![play])
            }
            ActionKind::House | ActionKind::Hotel => player
                .field
                .improvement_targets(kind)
                .next()
                .map(|_| smallvec![play]),
            ActionKind::SlyDeal => {
                let (color, i) = Self::loose_property(opponent)?;
                Some(smallvec![play, Command::ResolveTarget(TargetRef::new(them, color, i))])
            }
            ActionKind::DealBreaker => {
                let color = opponent.complete_colors().next()?;
                Some(smallvec![play, Command::ResolveTarget(TargetRef::new(them, color, 0))])
            }
            ActionKind::ForcedDeal => {
                let (mine, my_index) = Self::loose_property(&player.field)?;
                let (theirs, their_index) = Self::loose_property(opponent)?;
                Some(smallvec![
                    play,
                    Command::SelectForcedDealSource {
                        color: mine,
                        index: my_index,
                    },
                    Command::ResolveTarget(TargetRef::new(them, theirs, their_index)),
                ])
            }
            ActionKind::JustSayNo | ActionKind::DoubleRent => None,
        }
    }
}

impl Policy for GreedyPolicy {
    fn next_move(&self, state: &GameState, me: PlayerId) -> Option<Plan> {
        let hand = &state.player(me).hand;

        if let Some(card_index) = hand.iter().position(|c| c.card_type() == CardType::Money) {
            return Some(smallvec![Command::Bank { card_index }]);
        }
        if let Some(card_index) = hand.iter().position(Card::is_property) {
            return Some(smallvec![Command::PlaceProperty {
                card_index,
                color: None,
            }]);
        }
        hand.iter()
            .enumerate()
            .find_map(|(index, card)| Self::action_plan(state, me, index, card))
    }

    fn use_counter(&self, _state: &GameState, _me: PlayerId) -> bool {
        true
    }

    fn select_payment(&self, state: &GameState, request: &PaymentRequest) -> Vec<AssetRef> {
        let debtor = state.player(request.debtor);
        let mut selected = Vec::new();
        let mut sum = 0;

        for (index, card) in debtor.bank.iter().enumerate() {
            if sum >= request.amount {
                return selected;
            }
            selected.push(AssetRef::Bank { index });
            sum += card.value;
        }
        for (color, stack) in debtor.field.iter() {
            for (index, card) in stack.iter().enumerate() {
                if sum >= request.amount {
                    return selected;
                }
                selected.push(AssetRef::Field { color, index });
                sum += card.value;
            }
        }
        selected
    }

    fn select_discard(&self, state: &GameState, me: PlayerId) -> usize {
        state.player(me).hand.len().saturating_sub(1)
    }
}
