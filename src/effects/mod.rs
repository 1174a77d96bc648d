//! Effects that cross from one seat to the other.
//!
//! - `PendingEffect`: An effect waiting on a counter-war
//! - `Interrupt`: The sub-protocol currently suspending play
//! - `targeting`: Sly Deal, Deal Breaker and Forced Deal validation and execution
//! - `payment`: Debt validation and identity-based transfer

mod effect;
pub mod payment;
pub mod targeting;

pub use effect::{Interrupt, PendingEffect};
pub use payment::{AssetRef, PaymentRequest, Settlement};
pub use targeting::{FieldRef, PendingAction, TargetRef, TargetedAction};
