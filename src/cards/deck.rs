//! Standard deck construction.
//!
//! The deck is built from fixed count tables and then shuffled with the
//! game RNG. Ids are assigned sequentially from 1 in table order, so two
//! builds hold the same multiset of cards (and the same ids for the same
//! cards) in different orders.

use super::color::PropertyColor;
use super::definition::{ActionKind, Card, CardId};
use crate::core::GameRng;

use PropertyColor::*;

/// Money denominations and how many of each.
const MONEY: &[(u32, usize)] = &[(1, 6), (2, 5), (3, 3), (4, 3), (5, 2), (10, 1)];

/// Properties per color: (color, face value, names).
const PROPERTIES: &[(PropertyColor, u32, &[&str])] = &[
    (Brown, 1, &["Old Kent Road", "Whitechapel Road"]),
    (DarkBlue, 4, &["Park Lane", "Mayfair"]),
    (Green, 4, &["Regent Street", "Oxford Street", "Bond Street"]),
    (Yellow, 3, &["Leicester Square", "Coventry Street", "Piccadilly"]),
    (Red, 3, &["Strand", "Fleet Street", "Trafalgar Square"]),
    (Orange, 2, &["Bow Street", "Marlborough Street", "Vine Street"]),
    (Pink, 2, &["Pall Mall", "Whitehall", "Northumberland Avenue"]),
    (LightBlue, 1, &["The Angel Islington", "Euston Road", "Pentonville Road"]),
    (
        Railroad,
        2,
        &[
            "Kings Cross Station",
            "Marylebone Station",
            "Fenchurch St Station",
            "Liverpool St Station",
        ],
    ),
    (Utility, 2, &["Electric Company", "Water Works"]),
];

/// Two-color wildcards: (face value, colors, count).
const DUAL_WILDCARDS: &[(u32, [PropertyColor; 2], usize)] = &[
    (1, [Brown, LightBlue], 1),
    (2, [Pink, Orange], 2),
    (4, [Green, Railroad], 1),
    (4, [DarkBlue, Green], 1),
    (2, [Utility, Railroad], 1),
    (3, [Yellow, Red], 2),
];

/// Multi-color wildcards carry no bank value.
const RAINBOW_WILDCARDS: usize = 2;

/// Action cards: (kind, face value, count).
const ACTIONS: &[(ActionKind, u32, usize)] = &[
    (ActionKind::DealBreaker, 5, 2),
    (ActionKind::JustSayNo, 4, 3),
    (ActionKind::SlyDeal, 3, 3),
    (ActionKind::ForcedDeal, 3, 3),
    (ActionKind::DebtCollector, 3, 3),
    (ActionKind::Birthday, 2, 3),
    (ActionKind::PassGo, 1, 10),
    (ActionKind::House, 3, 3),
    (ActionKind::Hotel, 4, 2),
    (ActionKind::DoubleRent, 1, 2),
];

/// Any-color rent cards.
const RAINBOW_RENTS: usize = 2;
const RAINBOW_RENT_VALUE: u32 = 3;

/// Two-color rent cards: (colors, count), each worth 1M.
const DUAL_RENTS: &[([PropertyColor; 2], usize)] = &[
    ([Brown, LightBlue], 2),
    ([Pink, Orange], 2),
    ([Green, DarkBlue], 2),
    ([Yellow, Red], 2),
    ([Utility, Railroad], 2),
];

/// Size of the deck produced by the tables above.
pub const STANDARD_DECK_SIZE: usize = 104;

/// Builds the standard deck.
///
/// ## Example
///
/// ```
/// use rust_deal::cards::{DeckBuilder, STANDARD_DECK_SIZE};
/// use rust_deal::core::GameRng;
///
/// let mut rng = GameRng::new(7);
/// let deck = DeckBuilder::new().build(&mut rng);
/// assert_eq!(deck.len(), STANDARD_DECK_SIZE);
/// ```
#[derive(Debug, Default)]
pub struct DeckBuilder {
    cards: Vec<Card>,
    next_id: u32,
}

impl DeckBuilder {
    /// Create an empty builder. Ids start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(STANDARD_DECK_SIZE),
            next_id: 1,
        }
    }

    fn alloc(&mut self) -> CardId {
        let id = CardId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// The standard cards in table order, unshuffled.
    #[must_use]
    pub fn unshuffled(mut self) -> Vec<Card> {
        for &(value, count) in MONEY {
            for _ in 0..count {
                let id = self.alloc();
                self.cards.push(Card::money(id, value));
            }
        }

        for &(color, value, names) in PROPERTIES {
            for &name in names {
                let id = self.alloc();
                self.cards.push(Card::property(id, name, value, color));
            }
        }

        for _ in 0..RAINBOW_WILDCARDS {
            let id = self.alloc();
            self.cards
                .push(Card::wildcard(id, "Property Wild Card", 0, &PropertyColor::ALL));
        }
        for &(value, colors, count) in DUAL_WILDCARDS {
            for _ in 0..count {
                let id = self.alloc();
                let name = format!("{}/{} Wild Card", colors[0], colors[1]);
                self.cards.push(Card::wildcard(id, name, value, &colors));
            }
        }

        for &(kind, value, count) in ACTIONS {
            for _ in 0..count {
                let id = self.alloc();
                self.cards.push(Card::action(id, kind.name(), value, kind));
            }
        }

        for _ in 0..RAINBOW_RENTS {
            let id = self.alloc();
            self.cards
                .push(Card::rent(id, "Wild Rent", RAINBOW_RENT_VALUE, &PropertyColor::ALL));
        }
        for &(colors, count) in DUAL_RENTS {
            for _ in 0..count {
                let id = self.alloc();
                let name = format!("{}/{} Rent", colors[0], colors[1]);
                self.cards.push(Card::rent(id, name, 1, &colors));
            }
        }

        self.cards
    }

    /// The standard deck, shuffled. The last card is the top of the deck.
    #[must_use]
    pub fn build(self, rng: &mut GameRng) -> Vec<Card> {
        let mut cards = self.unshuffled();
        rng.shuffle(&mut cards);
        cards
    }
}
