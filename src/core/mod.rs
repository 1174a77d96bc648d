//! Core engine types: players, state, commands, phases, errors, RNG, configuration.

pub mod action;
pub mod config;
pub mod error;
pub mod phase;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Command, CommandRecord};
pub use config::{GameConfig, WildcardPayment};
pub use error::{ErrorCategory, GameError, SnapshotError};
pub use phase::Phase;
pub use player::{Player, PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
pub use state::GameState;
