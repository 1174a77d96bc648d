//! Game implementations built on the engine.

pub mod deal;
