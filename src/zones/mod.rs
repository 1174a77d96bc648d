//! Card containers.
//!
//! ## Key Types
//!
//! - `Field`: A player's property stacks by color
//! - `DrawPile`: The shared deck, refilled from the discard pile when empty
//!
//! Hands, banks and the discard pile are plain `Vec<Card>`s owned by
//! `Player` and `GameState`.

pub mod field;
pub mod pile;

pub use field::Field;
pub use pile::DrawPile;
