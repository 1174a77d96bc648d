//! Two-player property trading.
//!
//! Players bank money, collect property sets by color and play action cards
//! against each other. The first player holding three complete sets wins.
//!
//! - `DealRules`: The phase machine, as a `RulesEngine`
//! - `DealGame`: The command surface, with AI scheduling and notifications
//! - `TaskQueue`: The single pending AI task
//! - `StateListener`: Observer called after every accepted command

mod game;
mod listener;
mod rules;
mod tasks;

pub use game::{DealGame, DealGameBuilder};
pub use listener::StateListener;
pub use rules::DealRules;
pub use tasks::{AiTask, TaskQueue};
