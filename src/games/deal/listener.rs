//! State-change notification.

use crate::core::GameState;

/// Called after every accepted command, with the state as it now stands.
///
/// Listeners re-derive whatever they show from the full state; no diff is
/// provided. Closures taking `&GameState` implement this trait.
pub trait StateListener {
    fn on_state_changed(&mut self, state: &GameState);
}

impl<F> StateListener for F
where
    F: FnMut(&GameState),
{
    fn on_state_changed(&mut self, state: &GameState) {
        self(state);
    }
}
