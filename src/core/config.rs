//! Game configuration.
//!
//! `GameConfig` carries the numeric rules of a match (move budget, hand
//! limit, draw sizes, sets needed to win) together with seat assignment and
//! the RNG seed. Card amounts (Birthday, Debt Collector, House, Hotel) live
//! in the card catalog, not here.

use serde::{Deserialize, Serialize};

use super::{PlayerId, PlayerMap};

/// Color a wildcard takes when it changes hands as payment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WildcardPayment {
    /// Reset to the first color in its valid list.
    #[default]
    ResetToFirstValid,
    /// Keep the color the debtor had assigned.
    KeepCurrent,
}

/// Match configuration.
///
/// ## Example
///
/// ```
/// use rust_deal::core::{GameConfig, PlayerId};
///
/// let config = GameConfig::default()
///     .with_seed(7)
///     .with_ai_seat(PlayerId::new(0), true);
///
/// assert_eq!(config.seed, 7);
/// assert!(config.is_ai(PlayerId::new(0)));
/// assert!(config.is_ai(PlayerId::new(1)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the opening shuffle and every reshuffle.
    pub seed: u64,

    /// Moves granted at the start of the action phase.
    pub moves_per_turn: u8,

    /// Maximum hand size at end of turn.
    pub hand_limit: usize,

    /// Cards dealt to each seat by `start`.
    pub opening_hand: usize,

    /// Cards drawn at the start of a turn.
    pub turn_draw: usize,

    /// Cards drawn at the start of a turn with an empty hand.
    pub empty_hand_draw: usize,

    /// Complete sets needed to win.
    pub sets_to_win: usize,

    /// Iteration bound of one AI turn.
    pub ai_max_attempts: usize,

    /// Seats driven by the policy.
    pub ai_seats: PlayerMap<bool>,

    /// Wildcard color on payment transfer.
    pub wildcard_payment: WildcardPayment,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            moves_per_turn: 3,
            hand_limit: 7,
            opening_hand: 5,
            turn_draw: 2,
            empty_hand_draw: 5,
            sets_to_win: 3,
            ai_max_attempts: 10,
            ai_seats: PlayerMap::new(|p| p == PlayerId::new(1)),
            wildcard_payment: WildcardPayment::default(),
        }
    }
}

impl GameConfig {
    /// Whether a seat is driven by the policy.
    #[must_use]
    pub fn is_ai(&self, player: PlayerId) -> bool {
        self.ai_seats[player]
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the per-turn move budget.
    #[must_use]
    pub fn with_moves_per_turn(mut self, moves: u8) -> Self {
        self.moves_per_turn = moves;
        self
    }

    /// Set the end-of-turn hand limit.
    #[must_use]
    pub fn with_hand_limit(mut self, limit: usize) -> Self {
        self.hand_limit = limit;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_opening_hand(mut self, cards: usize) -> Self {
        self.opening_hand = cards;
        self
    }

    /// Set the number of sets needed to win.
    #[must_use]
    pub fn with_sets_to_win(mut self, sets: usize) -> Self {
        self.sets_to_win = sets;
        self
    }

    /// Set the AI iteration bound.
    #[must_use]
    pub fn with_ai_max_attempts(mut self, attempts: usize) -> Self {
        self.ai_max_attempts = attempts;
        self
    }

    /// Mark a seat as AI-driven or human.
    #[must_use]
    pub fn with_ai_seat(mut self, player: PlayerId, ai: bool) -> Self {
        self.ai_seats[player] = ai;
        self
    }

    /// Make both seats human.
    #[must_use]
    pub fn all_human(mut self) -> Self {
        self.ai_seats = PlayerMap::new(|_| false);
        self
    }

    /// Make both seats AI-driven.
    #[must_use]
    pub fn all_ai(mut self) -> Self {
        self.ai_seats = PlayerMap::new(|_| true);
        self
    }

    /// Set how wildcards are recolored on payment.
    #[must_use]
    pub fn with_wildcard_payment(mut self, mode: WildcardPayment) -> Self {
        self.wildcard_payment = mode;
        self
    }
}
