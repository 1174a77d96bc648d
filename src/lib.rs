//! # rust-deal
//!
//! A two-player property-trading card game engine with a pluggable AI
//! opponent.
//!
//! ## Design Principles
//!
//! 1. **Commands In, State Out**: Every move is a `Command`. The engine
//!    validates it against the current `Phase` and leaves state untouched
//!    when it is rejected.
//!
//! 2. **Explicit Interrupts**: Payment demands, targeted actions and the
//!    Just Say No exchange are suspended as data (`Interrupt`) in the state,
//!    never as callbacks, so any state can be saved and resumed.
//!
//! 3. **Deterministic**: All shuffling goes through a seeded `GameRng`;
//!    the same seed and commands produce the same game.
//!
//! ## Architecture
//!
//! - **Persistent History**: The command log is an `im::Vector`, so cloning
//!   a state (for `is_legal` checks or AI lookahead) stays cheap.
//!
//! - **Deferred AI**: AI seats act through a single-slot task queue drained
//!   by the caller, never inside the command that handed them the turn.
//!
//! ## Modules
//!
//! - `core`: Players, state, commands, phases, errors, RNG, configuration
//! - `cards`: Colors, card definitions and the standard deck
//! - `zones`: Property fields and the draw pile
//! - `rules`: RulesEngine trait, win check and rent
//! - `effects`: Targeted actions and payment
//! - `stack`: The Just Say No counter-war
//! - `ai`: Policy trait and the greedy strategy
//! - `games`: The playable game with its command surface

pub mod ai;
pub mod cards;
pub mod core;
pub mod effects;
pub mod games;
pub mod rules;
pub mod stack;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Command, CommandRecord, ErrorCategory, GameConfig, GameError, GameRng, GameRngState,
    GameState, Phase, Player, PlayerId, PlayerMap, SnapshotError, WildcardPayment,
};

pub use crate::cards::{ActionKind, Card, CardId, CardKind, CardType, DeckBuilder, PropertyColor};

pub use crate::zones::{DrawPile, Field};

pub use crate::rules::{calculate_rent, GameResult, RentQuote, RulesEngine};

pub use crate::effects::{
    AssetRef, FieldRef, Interrupt, PaymentRequest, PendingAction, PendingEffect, TargetRef,
    TargetedAction,
};

pub use crate::stack::{CounterOutcome, CounterWar};

pub use crate::ai::{GreedyPolicy, Plan, Policy};

pub use crate::games::deal::{
    AiTask, DealGame, DealGameBuilder, DealRules, StateListener, TaskQueue,
};
