//! AI strategies.
//!
//! - `Policy`: The pluggable strategy trait
//! - `GreedyPolicy`: Bank, then place, then the first applicable action

mod greedy;
mod policy;

pub use greedy::GreedyPolicy;
pub use policy::{Plan, Policy};
