//! Debt settlement.
//!
//! A debtor pays by naming cards in their bank or on their field. The named
//! cards must cover the amount owed, unless they are worth less than the
//! amount only because the debtor owns less than the amount. Cards are
//! removed by identity and delivered by type: money, action and rent cards
//! to the creditor's bank, properties and wildcards to the creditor's field.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, CardKind, PropertyColor};
use crate::core::{GameError, GameState, Player, PlayerId, WildcardPayment};

/// An outstanding debt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub amount: u32,
    pub debtor: PlayerId,
    pub creditor: PlayerId,
}

impl PaymentRequest {
    #[must_use]
    pub fn new(amount: u32, debtor: PlayerId, creditor: PlayerId) -> Self {
        Self {
            amount,
            debtor,
            creditor,
        }
    }
}

/// One of the debtor's cards offered as payment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetRef {
    /// Position in the bank.
    Bank { index: usize },
    /// Position within a field color stack.
    Field { color: PropertyColor, index: usize },
}

impl AssetRef {
    fn resolve(self, player: &Player) -> Option<&Card> {
        match self {
            AssetRef::Bank { index } => player.bank.get(index),
            AssetRef::Field { color, index } => player.field.get(color, index),
        }
    }
}

/// Validated selection, ready to transfer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settlement {
    /// Selected card ids.
    pub cards: FxHashSet<CardId>,
    /// Face value of the selection.
    pub total: u32,
}

/// Check a selection against a debt without touching the state.
pub fn settle(
    debtor: &Player,
    request: &PaymentRequest,
    assets: &[AssetRef],
) -> Result<Settlement, GameError> {
    let mut settlement = Settlement::default();
    for asset in assets {
        let card = asset.resolve(debtor).ok_or(GameError::InvalidTarget)?;
        if !settlement.cards.insert(card.id) {
            return Err(GameError::DuplicateAsset);
        }
        settlement.total += card.value;
    }

    let available = debtor.assets_value();
    if settlement.total < request.amount && settlement.total < available {
        return Err(GameError::InsufficientAssets {
            owed: request.amount,
            offered: settlement.total,
            available,
        });
    }
    Ok(settlement)
}

/// Move the settled cards from debtor to creditor.
///
/// Returns the number of cards moved.
pub fn transfer(
    state: &mut GameState,
    request: &PaymentRequest,
    settlement: &Settlement,
    wildcards: WildcardPayment,
) -> usize {
    let debtor = state.player_mut(request.debtor);
    let mut moved: Vec<Card> = Vec::with_capacity(settlement.cards.len());

    let (paid, kept): (Vec<Card>, Vec<Card>) = std::mem::take(&mut debtor.bank)
        .into_iter()
        .partition(|c| settlement.cards.contains(&c.id));
    debtor.bank = kept;
    moved.extend(paid);
    moved.extend(debtor.field.extract(&settlement.cards));

    let count = moved.len();
    let creditor = state.player_mut(request.creditor);
    for mut card in moved {
        if matches!(card.kind, CardKind::Wildcard { .. })
            && wildcards == WildcardPayment::ResetToFirstValid
        {
            card.reset_wildcard();
        }
        match card.field_color() {
            Some(color) => creditor.field.push(color, card),
            None => creditor.add_to_bank(card),
        }
    }
    count
}
