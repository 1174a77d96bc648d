//! Rules engine trait and shared rule calculations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal commands for each game state
//! - How commands modify state
//! - Win conditions

pub mod engine;
pub mod rent;

pub use engine::{find_winner, GameResult, RulesEngine};
pub use rent::{calculate_rent, quote_rent, RentQuote};
