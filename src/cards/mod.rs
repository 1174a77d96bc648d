//! Card system: colors, card definitions and the standard deck.
//!
//! ## Key Types
//!
//! - `PropertyColor`: The ten colors with their set sizes and rent tables
//! - `Card`: A physical card (`CardId`, name, face value, `CardKind`)
//! - `ActionKind`: What an action card does
//! - `DeckBuilder`: Builds and shuffles the standard deck

pub mod color;
pub mod deck;
pub mod definition;

pub use color::PropertyColor;
pub use deck::{DeckBuilder, STANDARD_DECK_SIZE};
pub use definition::{ActionKind, Card, CardId, CardKind, CardType, ColorSet};
