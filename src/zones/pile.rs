//! The shared draw pile.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::core::GameRng;

/// Face-down draw pile. The last card is the top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawPile {
    cards: Vec<Card>,
}

impl DrawPile {
    /// Wrap an already-ordered pile.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in pile order, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Draw up to `count` cards.
    ///
    /// When the pile runs out, the whole discard pile is shuffled into a
    /// fresh pile before continuing. If both are empty, fewer cards than
    /// requested are returned.
    pub fn draw(&mut self, count: usize, discard: &mut Vec<Card>, rng: &mut GameRng) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            if self.cards.is_empty() {
                if discard.is_empty() {
                    break;
                }
                self.cards = std::mem::take(discard);
                rng.shuffle(&mut self.cards);
                debug!(cards = self.cards.len(), "reshuffled discard pile into deck");
            }
            match self.cards.pop() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }
}
