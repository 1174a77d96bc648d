//! Strategy seam for AI-driven seats.
//!
//! A policy only reads state and proposes commands; the game applies them
//! through the same rules engine as human input.

use smallvec::SmallVec;

use crate::core::{Command, GameState, PlayerId};
use crate::effects::{AssetRef, PaymentRequest};

/// One move, as the commands that carry it out.
///
/// Most moves are a single command. Targeted actions chain the play with
/// the source and target choices.
pub type Plan = SmallVec<[Command; 3]>;

/// Decision policy for an AI seat.
pub trait Policy: Send + Sync {
    /// Next move during the seat's action phase, or `None` to end the turn.
    fn next_move(&self, state: &GameState, me: PlayerId) -> Option<Plan>;

    /// Whether to play a Just Say No when holding the veto.
    fn use_counter(&self, state: &GameState, me: PlayerId) -> bool;

    /// Assets to hand over for a debt.
    fn select_payment(&self, state: &GameState, request: &PaymentRequest) -> Vec<AssetRef>;

    /// Hand index to discard while over the hand limit.
    fn select_discard(&self, state: &GameState, me: PlayerId) -> usize;
}
