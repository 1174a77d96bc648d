//! Response resolution.
//!
//! Payment demands and targeted actions do not take effect immediately:
//! they open a `CounterWar` in which the two seats alternately may play
//! Just Say No. The war is suspended in `GameState` while a seat decides
//! and resumed by `ResolveCounter`.

mod counter;

pub use counter::{CounterOutcome, CounterWar};
