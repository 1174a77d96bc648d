//! Card data: identity, face value and a closed set of card kinds.
//!
//! Every behavior the engine attaches to a card is selected by matching on
//! `CardKind` / `ActionKind`, so adding a kind is a compile error at every
//! site that has to handle it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::PropertyColor;

/// Unique card identity, stable for the whole match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Colors a wildcard or rent card may use. Most cards list two.
pub type ColorSet = SmallVec<[PropertyColor; 2]>;

/// Coarse type tag, as shown to players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Property,
    Money,
    Action,
    Wildcard,
    Rent,
}

/// What an action card does when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    PassGo,
    Birthday,
    DebtCollector,
    SlyDeal,
    DealBreaker,
    ForcedDeal,
    House,
    Hotel,
    JustSayNo,
    DoubleRent,
}

impl ActionKind {
    /// Cards drawn by Pass Go.
    pub const PASS_GO_DRAW: usize = 2;

    /// Amount demanded from the opponent, for money-demand actions.
    #[must_use]
    pub const fn demand_amount(self) -> Option<u32> {
        match self {
            ActionKind::Birthday => Some(2),
            ActionKind::DebtCollector => Some(5),
            _ => None,
        }
    }

    /// Flat rent bonus, for improvements.
    #[must_use]
    pub const fn improvement_bonus(self) -> Option<u32> {
        match self {
            ActionKind::House => Some(3),
            ActionKind::Hotel => Some(4),
            _ => None,
        }
    }

    /// Cards that only work as a response or a modifier, never on their own.
    #[must_use]
    pub const fn is_reactive(self) -> bool {
        matches!(self, ActionKind::JustSayNo | ActionKind::DoubleRent)
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActionKind::PassGo => "Pass Go",
            ActionKind::Birthday => "It's My Birthday",
            ActionKind::DebtCollector => "Debt Collector",
            ActionKind::SlyDeal => "Sly Deal",
            ActionKind::DealBreaker => "Deal Breaker",
            ActionKind::ForcedDeal => "Forced Deal",
            ActionKind::House => "House",
            ActionKind::Hotel => "Hotel",
            ActionKind::JustSayNo => "Just Say No",
            ActionKind::DoubleRent => "Double The Rent",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind-specific card data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    Money,
    Property {
        color: PropertyColor,
    },
    Wildcard {
        /// Color the card currently counts as.
        current: PropertyColor,
        /// Colors it may take. Never empty; the first entry is the default.
        valid: ColorSet,
    },
    Action(ActionKind),
    Rent {
        valid: ColorSet,
    },
}

/// A single physical card.
///
/// ## Example
///
/// ```
/// use rust_deal::cards::{Card, CardId, CardType, PropertyColor};
///
/// let colors = [PropertyColor::Red, PropertyColor::Yellow];
/// let wild = Card::wildcard(CardId::new(7), "Wild", 3, &colors);
/// assert_eq!(wild.card_type(), CardType::Wildcard);
/// assert_eq!(wild.field_color(), Some(PropertyColor::Red));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    /// Face value in millions, used when banking or paying.
    pub value: u32,
    pub kind: CardKind,
}

impl Card {
    /// A money card. Its name is its denomination.
    #[must_use]
    pub fn money(id: CardId, value: u32) -> Self {
        Self {
            id,
            name: format!("{value}M"),
            value,
            kind: CardKind::Money,
        }
    }

    /// A single-color property.
    #[must_use]
    pub fn property(id: CardId, name: impl Into<String>, value: u32, color: PropertyColor) -> Self {
        Self {
            id,
            name: name.into(),
            value,
            kind: CardKind::Property { color },
        }
    }

    /// A wildcard property, initially counting as the first valid color.
    ///
    /// Panics if `valid` is empty.
    #[must_use]
    pub fn wildcard(
        id: CardId,
        name: impl Into<String>,
        value: u32,
        valid: &[PropertyColor],
    ) -> Self {
        assert!(!valid.is_empty(), "Wildcard needs at least one color");
        Self {
            id,
            name: name.into(),
            value,
            kind: CardKind::Wildcard {
                current: valid[0],
                valid: ColorSet::from_slice(valid),
            },
        }
    }

    /// An action card.
    #[must_use]
    pub fn action(id: CardId, name: impl Into<String>, value: u32, kind: ActionKind) -> Self {
        Self {
            id,
            name: name.into(),
            value,
            kind: CardKind::Action(kind),
        }
    }

    /// A rent card chargeable against the listed colors.
    #[must_use]
    pub fn rent(id: CardId, name: impl Into<String>, value: u32, valid: &[PropertyColor]) -> Self {
        Self {
            id,
            name: name.into(),
            value,
            kind: CardKind::Rent {
                valid: ColorSet::from_slice(valid),
            },
        }
    }

    /// Coarse type tag.
    #[must_use]
    pub fn card_type(&self) -> CardType {
        match self.kind {
            CardKind::Money => CardType::Money,
            CardKind::Property { .. } => CardType::Property,
            CardKind::Wildcard { .. } => CardType::Wildcard,
            CardKind::Action(_) => CardType::Action,
            CardKind::Rent { .. } => CardType::Rent,
        }
    }

    /// Action kind, for action cards.
    #[must_use]
    pub fn action_kind(&self) -> Option<ActionKind> {
        match self.kind {
            CardKind::Action(kind) => Some(kind),
            _ => None,
        }
    }

    /// Property or wildcard: counts toward a set.
    #[must_use]
    pub fn is_property(&self) -> bool {
        matches!(self.kind, CardKind::Property { .. } | CardKind::Wildcard { .. })
    }

    /// Money, action and rent cards may be banked; properties may not.
    #[must_use]
    pub fn is_bankable(&self) -> bool {
        !self.is_property()
    }

    /// The color this card occupies on a field, for properties.
    #[must_use]
    pub fn field_color(&self) -> Option<PropertyColor> {
        match self.kind {
            CardKind::Property { color } => Some(color),
            CardKind::Wildcard { current, .. } => Some(current),
            _ => None,
        }
    }

    /// Colors this card may be played as or charged against.
    ///
    /// A property lists its own color; money and action cards list none.
    #[must_use]
    pub fn valid_colors(&self) -> &[PropertyColor] {
        match &self.kind {
            CardKind::Property { color } => std::slice::from_ref(color),
            CardKind::Wildcard { valid, .. } | CardKind::Rent { valid } => valid,
            CardKind::Money | CardKind::Action(_) => &[],
        }
    }

    /// Whether the card may be placed under / charged against `color`.
    #[must_use]
    pub fn allows(&self, color: PropertyColor) -> bool {
        self.valid_colors().contains(&color)
    }

    /// Point a wildcard at another of its valid colors.
    ///
    /// Returns false (and changes nothing) for non-wildcards or colors the
    /// card does not list.
    pub fn set_wildcard_color(&mut self, color: PropertyColor) -> bool {
        match &mut self.kind {
            CardKind::Wildcard { current, valid } if valid.contains(&color) => {
                *current = color;
                true
            }
            _ => false,
        }
    }

    /// Return a wildcard to its first valid color. No-op for other cards.
    pub fn reset_wildcard(&mut self) {
        if let CardKind::Wildcard { current, valid } = &mut self.kind {
            *current = valid[0];
        }
    }
}
