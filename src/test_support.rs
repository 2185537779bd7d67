//! Miniature decision processes shared by the unit tests.

use crate::process::{DecisionProcess, Observability, Support};

/// Three-state chain with an absorbing goal: action 0 stays put, action 1
/// advances, and entering the final state pays 5.0. Discount 0.5, so the
/// fixed point is `[2.5, 5.0, 0.0]`.
pub(crate) struct RewardChain;

impl DecisionProcess for RewardChain {
    type State = usize;
    type Action = u8;

    fn discount(&self) -> f64 {
        0.5
    }

    fn states(&self) -> Vec<usize> {
        vec![0, 1, 2]
    }

    fn actions(&self) -> Vec<u8> {
        vec![0, 1]
    }

    fn state_index(&self, state: &usize) -> usize {
        *state
    }

    fn action_index(&self, action: &u8) -> usize {
        *action as usize
    }

    fn transition(&self, state: &usize, action: &u8) -> Support<'_, usize> {
        let next = match action {
            0 => *state,
            _ => (*state + 1).min(2),
        };
        Box::new(std::iter::once((next, 1.0)))
    }

    fn reward(&self, state: &usize, _action: &u8, next: &usize) -> f64 {
        if *next == 2 && *state != 2 {
            5.0
        } else {
            0.0
        }
    }

    fn is_terminal(&self, state: &usize) -> bool {
        *state == 2
    }
}

/// Wrapper that declares its inner chain partially observable, for rejection
/// tests.
pub(crate) struct BeliefChain(pub RewardChain);

impl DecisionProcess for BeliefChain {
    type State = usize;
    type Action = u8;

    fn discount(&self) -> f64 {
        self.0.discount()
    }

    fn states(&self) -> Vec<usize> {
        self.0.states()
    }

    fn actions(&self) -> Vec<u8> {
        self.0.actions()
    }

    fn state_index(&self, state: &usize) -> usize {
        self.0.state_index(state)
    }

    fn action_index(&self, action: &u8) -> usize {
        self.0.action_index(action)
    }

    fn transition(&self, state: &usize, action: &u8) -> Support<'_, usize> {
        self.0.transition(state, action)
    }

    fn reward(&self, state: &usize, action: &u8, next: &usize) -> f64 {
        self.0.reward(state, action, next)
    }

    fn is_terminal(&self, state: &usize) -> bool {
        self.0.is_terminal(state)
    }

    fn observability(&self) -> Observability {
        Observability::PartiallyObservable
    }
}

/// Single self-looping state whose two actions back up identical values, for
/// tie-breaking tests.
pub(crate) struct TieLoop;

impl DecisionProcess for TieLoop {
    type State = usize;
    type Action = u8;

    fn discount(&self) -> f64 {
        0.5
    }

    fn states(&self) -> Vec<usize> {
        vec![0]
    }

    fn actions(&self) -> Vec<u8> {
        vec![0, 1]
    }

    fn state_index(&self, _state: &usize) -> usize {
        0
    }

    fn action_index(&self, action: &u8) -> usize {
        *action as usize
    }

    fn transition(&self, _state: &usize, _action: &u8) -> Support<'_, usize> {
        Box::new(std::iter::once((0, 1.0)))
    }

    fn reward(&self, _state: &usize, _action: &u8, _next: &usize) -> f64 {
        1.0
    }

    fn is_terminal(&self, _state: &usize) -> bool {
        false
    }
}
