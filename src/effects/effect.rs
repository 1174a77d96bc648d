//! Suspended effects and in-flight sub-protocols.

use serde::{Deserialize, Serialize};

use super::payment::PaymentRequest;
use super::targeting::{PendingAction, TargetRef};
use crate::core::PlayerId;
use crate::stack::CounterWar;

/// An effect waiting on a counter-war.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingEffect {
    /// Demand `amount` from `debtor` for `creditor` (rent, Birthday, Debt Collector).
    Payment {
        amount: u32,
        debtor: PlayerId,
        creditor: PlayerId,
    },
    /// Carry out a targeted action against a chosen target.
    Targeted {
        action: PendingAction,
        target: TargetRef,
    },
}

impl PendingEffect {
    /// Seat the effect is aimed at.
    #[must_use]
    pub fn victim(&self) -> PlayerId {
        match self {
            PendingEffect::Payment { debtor, .. } => *debtor,
            PendingEffect::Targeted { target, .. } => target.player,
        }
    }
}

/// The sub-protocol suspending normal action-phase play.
///
/// Only one can be in flight at a time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interrupt {
    /// A targeted action waiting for its source (Forced Deal) or target.
    Targeting(PendingAction),
    /// A Just-Say-No war.
    Counter(CounterWar),
    /// A debtor choosing assets.
    Payment(PaymentRequest),
}
