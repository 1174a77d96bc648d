//! Deferred AI work.
//!
//! When a command leaves an AI seat holding the active role, the game
//! schedules one task instead of acting inline. At most one task is pending
//! at a time; the consumer re-checks the phase before acting, since the
//! state may have moved on since scheduling.

use std::collections::VecDeque;

use crate::core::Phase;

/// What an AI seat has been asked to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AiTask {
    /// Play out the action phase and end the turn.
    Turn,
    /// Decide on a Just Say No.
    Counter,
    /// Settle a debt.
    Payment,
    /// Discard down to the hand limit.
    Discard,
}

impl AiTask {
    /// Task for the AI holding the active role in `phase`, if any.
    #[must_use]
    pub fn for_phase(phase: Phase) -> Option<Self> {
        match phase {
            Phase::Action => Some(AiTask::Turn),
            Phase::CounterOpportunity => Some(AiTask::Counter),
            Phase::Payment => Some(AiTask::Payment),
            Phase::Discard => Some(AiTask::Discard),
            _ => None,
        }
    }

    /// Phase the task expects to find when it runs.
    #[must_use]
    pub fn phase(self) -> Phase {
        match self {
            AiTask::Turn => Phase::Action,
            AiTask::Counter => Phase::CounterOpportunity,
            AiTask::Payment => Phase::Payment,
            AiTask::Discard => Phase::Discard,
        }
    }
}

/// Single-consumer queue holding at most one pending task.
#[derive(Clone, Debug, Default)]
pub struct TaskQueue {
    pending: VecDeque<AiTask>,
}

impl TaskQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a task. Returns `false` if one is already pending.
    pub fn schedule(&mut self, task: AiTask) -> bool {
        if !self.pending.is_empty() {
            return false;
        }
        self.pending.push_back(task);
        true
    }

    /// Take the pending task.
    pub fn pop(&mut self) -> Option<AiTask> {
        self.pending.pop_front()
    }

    /// The pending task, if any.
    #[must_use]
    pub fn peek(&self) -> Option<AiTask> {
        self.pending.front().copied()
    }

    /// Whether nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop any pending task.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
