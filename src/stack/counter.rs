//! Just-Say-No counter-war.
//!
//! The target of an effect gets the first chance to cancel it. Each
//! cancellation hands the veto to the other seat, who may cancel the
//! cancellation, and so on until the seat holding the veto has no card
//! or declines. The parity of the final count decides the outcome.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::effects::PendingEffect;

/// How a finished counter-war ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CounterOutcome {
    /// Even number of "no"s: the effect applies.
    Proceed,
    /// Odd number of "no"s: the effect is cancelled.
    Cancelled,
}

/// A running counter-war and the effect it guards.
///
/// ```
/// use rust_deal::core::PlayerId;
/// use rust_deal::effects::PendingEffect;
/// use rust_deal::stack::{CounterOutcome, CounterWar};
///
/// let victim = PlayerId::new(1);
/// let effect = PendingEffect::Payment { amount: 5, debtor: victim, creditor: victim.opponent() };
/// let mut war = CounterWar::new(effect);
///
/// assert_eq!(war.active_player(), victim);
/// war.escalate();
/// assert_eq!(war.active_player(), victim.opponent());
/// assert_eq!(war.outcome(), CounterOutcome::Cancelled);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterWar {
    /// Seat about to suffer the effect.
    pub target: PlayerId,

    /// Seat that played the effect.
    pub aggressor: PlayerId,

    /// Just Say No cards played so far.
    pub no_count: u8,

    /// What happens if the war ends with the effect standing.
    pub effect: PendingEffect,
}

impl CounterWar {
    /// Open a war against the effect's victim. The aggressor is always the other seat.
    #[must_use]
    pub fn new(effect: PendingEffect) -> Self {
        let target = effect.victim();
        Self {
            target,
            aggressor: target.opponent(),
            no_count: 0,
            effect,
        }
    }

    /// Seat currently holding the veto.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        if self.no_count % 2 == 0 {
            self.target
        } else {
            self.aggressor
        }
    }

    /// Record a played Just Say No.
    pub fn escalate(&mut self) {
        self.no_count += 1;
    }

    /// Outcome if the war ended now.
    #[must_use]
    pub fn outcome(&self) -> CounterOutcome {
        if self.no_count % 2 == 0 {
            CounterOutcome::Proceed
        } else {
            CounterOutcome::Cancelled
        }
    }
}
