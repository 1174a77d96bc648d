//! Player identification and per-seat data.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. The game is played by exactly two seats,
//! so every player has a single, fixed opponent.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by a fixed array, indexable by `PlayerId`.
//!
//! ## Player
//!
//! A seat's containers: hand, bank and field, plus the per-turn move budget.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::{ActionKind, Card, CardId};
use crate::zones::Field;

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 2;

/// Seat identifier. Seat 0 opens the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    ///
    /// ```
    /// use rust_deal::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).opponent(), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(1).opponent(), PlayerId::new(0));
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self((self.0 + 1) % PLAYER_COUNT as u8)
    }

    /// Iterate over both seats in seat order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_deal::core::{PlayerId, PlayerMap};
///
/// let mut moves: PlayerMap<u8> = PlayerMap::new(|_| 3);
/// moves[PlayerId::new(1)] = 0;
///
/// assert_eq!(moves[PlayerId::new(0)], 3);
/// assert_eq!(moves[PlayerId::new(1)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId(0)), factory(PlayerId(1))],
        }
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Checked lookup for seat ids that arrive from outside the engine.
    #[must_use]
    pub fn try_get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// One seat's cards and move budget.
///
/// Cards enter and leave these containers by value; nothing is ever
/// duplicated, so a card id appears in exactly one container at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Cards in hand. Order is kept for display but carries no rule meaning.
    pub hand: Vec<Card>,

    /// Banked cards, valued only for their face value.
    pub bank: Vec<Card>,

    /// Property stacks by color.
    pub field: Field,

    /// Moves remaining this turn.
    pub moves_left: u8,

    /// Driven by the policy rather than by external commands.
    pub is_ai: bool,
}

impl Player {
    /// Create an empty seat.
    #[must_use]
    pub fn new(is_ai: bool) -> Self {
        Self {
            is_ai,
            ..Self::default()
        }
    }

    /// Add cards to the hand.
    pub fn add_to_hand(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    /// Add a card to the bank.
    pub fn add_to_bank(&mut self, card: Card) {
        self.bank.push(card);
    }

    /// Total face value of the bank.
    #[must_use]
    pub fn bank_total(&self) -> u32 {
        self.bank.iter().map(|c| c.value).sum()
    }

    /// Bank plus every card on the field, improvements included.
    #[must_use]
    pub fn assets_value(&self) -> u32 {
        self.bank_total() + self.field.total_value()
    }

    /// Number of complete sets on the field.
    #[must_use]
    pub fn complete_sets(&self) -> usize {
        self.field.complete_sets()
    }

    /// Hand position of the first card of an action kind.
    #[must_use]
    pub fn find_in_hand(&self, kind: ActionKind) -> Option<usize> {
        self.hand.iter().position(|c| c.action_kind() == Some(kind))
    }

    /// Whether the hand holds a card of this action kind.
    #[must_use]
    pub fn holds(&self, kind: ActionKind) -> bool {
        self.find_in_hand(kind).is_some()
    }

    /// Hand position of a card by identity.
    #[must_use]
    pub fn hand_position(&self, id: CardId) -> Option<usize> {
        self.hand.iter().position(|c| c.id == id)
    }

    /// Remove a card from the hand by position.
    pub fn take_from_hand(&mut self, index: usize) -> Option<Card> {
        (index < self.hand.len()).then(|| self.hand.remove(index))
    }

    /// Remove a card from the hand by identity.
    pub fn take_by_id(&mut self, id: CardId) -> Option<Card> {
        let index = self.hand_position(id)?;
        self.take_from_hand(index)
    }

    /// Spend one move. Saturates at zero.
    pub fn spend_move(&mut self) {
        self.moves_left = self.moves_left.saturating_sub(1);
    }
}
