//! Rent calculation.

use serde::{Deserialize, Serialize};

use crate::cards::{ActionKind, PropertyColor};
use crate::core::Player;

/// Breakdown of a rent charge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentQuote {
    pub color: PropertyColor,
    /// From the color's rent table.
    pub base: u32,
    /// House bonus, if one stands on the set.
    pub house: u32,
    /// Hotel bonus, if one stands on the set.
    pub hotel: u32,
    /// Double Rent stacked on the charge.
    pub doubled: bool,
}

impl RentQuote {
    /// Stack a Double Rent.
    #[must_use]
    pub fn doubled(mut self) -> Self {
        self.doubled = true;
        self
    }

    /// Amount owed.
    #[must_use]
    pub fn total(&self) -> u32 {
        let single = self.base + self.house + self.hotel;
        if self.doubled {
            single * 2
        } else {
            single
        }
    }
}

/// Rent a player could charge on one color.
#[must_use]
pub fn quote_rent(player: &Player, color: PropertyColor) -> RentQuote {
    let field = &player.field;
    let bonus = |kind: ActionKind| {
        if field.has_improvement(color, kind) {
            kind.improvement_bonus().unwrap_or(0)
        } else {
            0
        }
    };
    RentQuote {
        color,
        base: color.base_rent(field.property_count(color)),
        house: bonus(ActionKind::House),
        hotel: bonus(ActionKind::Hotel),
        doubled: false,
    }
}

/// Rent a player could charge on one color, before doubling.
#[must_use]
pub fn calculate_rent(player: &Player, color: PropertyColor) -> u32 {
    quote_rent(player, color).total()
}
