//! Property colors and their static catalog.
//!
//! Each color fixes how many cards make a complete set and the rent
//! charged for 1..=required owned cards. The catalog is never mutated.

use serde::{Deserialize, Serialize};

/// One of the ten property colors.
///
/// Declaration order is the catalog order used whenever the engine has to
/// pick "the first" color (improvement placement, greedy payment, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PropertyColor {
    Brown,
    DarkBlue,
    Green,
    Yellow,
    Red,
    Orange,
    Pink,
    LightBlue,
    Railroad,
    Utility,
}

impl PropertyColor {
    /// Number of colors.
    pub const COUNT: usize = 10;

    /// Every color in catalog order.
    pub const ALL: [PropertyColor; Self::COUNT] = [
        PropertyColor::Brown,
        PropertyColor::DarkBlue,
        PropertyColor::Green,
        PropertyColor::Yellow,
        PropertyColor::Red,
        PropertyColor::Orange,
        PropertyColor::Pink,
        PropertyColor::LightBlue,
        PropertyColor::Railroad,
        PropertyColor::Utility,
    ];

    /// Position in `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Cards needed for a complete set.
    #[must_use]
    pub const fn required(self) -> usize {
        match self {
            PropertyColor::Brown | PropertyColor::DarkBlue | PropertyColor::Utility => 2,
            PropertyColor::Railroad => 4,
            _ => 3,
        }
    }

    /// Rent table, indexed by owned count - 1.
    #[must_use]
    pub const fn rent_table(self) -> &'static [u32] {
        match self {
            PropertyColor::Brown => &[1, 2],
            PropertyColor::DarkBlue => &[3, 8],
            PropertyColor::Green => &[2, 4, 7],
            PropertyColor::Yellow => &[2, 4, 6],
            PropertyColor::Red => &[2, 3, 6],
            PropertyColor::Orange => &[1, 3, 5],
            PropertyColor::Pink => &[1, 2, 4],
            PropertyColor::LightBlue => &[1, 2, 3],
            PropertyColor::Railroad => &[1, 2, 3, 4],
            PropertyColor::Utility => &[1, 2],
        }
    }

    /// Base rent for `owned` cards of this color. Zero when none are owned;
    /// counts past the end of the table use the last entry.
    #[must_use]
    pub fn base_rent(self, owned: usize) -> u32 {
        let table = self.rent_table();
        match owned.min(table.len()) {
            0 => 0,
            n => table[n - 1],
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PropertyColor::Brown => "Brown",
            PropertyColor::DarkBlue => "Dark Blue",
            PropertyColor::Green => "Green",
            PropertyColor::Yellow => "Yellow",
            PropertyColor::Red => "Red",
            PropertyColor::Orange => "Orange",
            PropertyColor::Pink => "Pink",
            PropertyColor::LightBlue => "Light Blue",
            PropertyColor::Railroad => "Railroad",
            PropertyColor::Utility => "Utility",
        }
    }
}

impl std::fmt::Display for PropertyColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
