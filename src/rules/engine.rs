//! Rules engine trait.
//!
//! A rules engine decides which commands are legal and how they change the
//! state. `apply` must either succeed or leave the state untouched.

use crate::core::{Command, GameConfig, GameError, GameState, PlayerId};

/// Result of a finished (or abandoned) match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Stopped before anyone won.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// Seat holding enough complete sets to win, checking `first` before its opponent.
#[must_use]
pub fn find_winner(state: &GameState, first: PlayerId, sets_to_win: usize) -> Option<PlayerId> {
    [first, first.opponent()]
        .into_iter()
        .find(|&p| state.player(p).complete_sets() >= sets_to_win)
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply`: Validate fully before mutating; an `Err` must leave `state` as it was
/// - `legal_commands`: Commands for the seat holding the active role
/// - `is_terminal`: Return `None` while the match continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Enumerate legal commands for the seat expected to act.
    ///
    /// Returns empty once the match is over.
    fn legal_commands(&self, state: &GameState) -> Vec<Command>;

    /// Apply a command to the game state.
    fn apply(&self, state: &mut GameState, command: &Command) -> Result<(), GameError>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Whether `command` would be accepted, without touching `state`.
    fn is_legal(&self, state: &GameState, command: &Command) -> bool {
        let mut scratch = state.clone();
        self.apply(&mut scratch, command).is_ok()
    }
}
