//! The decision-process capability contract consumed by the solvers.

use std::hash::Hash;

/// Whether the controller can see the true state of the process.
///
/// Value iteration is only defined for fully-observable processes; models
/// wrapping a hidden state behind beliefs or observations must report
/// [`Observability::PartiallyObservable`] so the solvers can reject them
/// before any iteration happens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observability {
    /// The controller observes the true state directly (an MDP).
    FullyObservable,
    /// The controller only observes signals correlated with the state (a POMDP).
    PartiallyObservable,
}

/// Lazy weighted iterator over a transition's support.
///
/// Yields `(next_state, probability)` pairs. The support need not name every
/// state in the process; states it omits are taken to have probability zero.
pub type Support<'a, S> = Box<dyn Iterator<Item = (S, f64)> + 'a>;

/// Capability contract for a finite, enumerable sequential decision process.
///
/// The enumeration orders returned by [`states`](DecisionProcess::states) and
/// [`actions`](DecisionProcess::actions) must be stable across calls: the
/// solvers rely on them for reproducible tie-breaking and deterministic
/// residual trajectories. [`state_index`](DecisionProcess::state_index) and
/// [`action_index`](DecisionProcess::action_index) must be the bijective
/// inverses of those enumerations.
pub trait DecisionProcess {
    /// Domain state type.
    type State: Clone + Eq + Hash;
    /// Domain action type.
    type Action: Clone + Eq + Hash;

    /// Discount factor in `[0, 1]`. Convergence within tolerance is only
    /// guaranteed when this is strictly below one.
    fn discount(&self) -> f64;

    /// All states in their canonical enumeration order.
    fn states(&self) -> Vec<Self::State>;

    /// All actions in their canonical enumeration order.
    fn actions(&self) -> Vec<Self::Action>;

    /// Actions applicable in `state`, in enumeration order.
    ///
    /// The default assumes every action applies everywhere; override it for
    /// processes with state-dependent action sets.
    fn actions_from(&self, state: &Self::State) -> Vec<Self::Action> {
        let _ = state;
        self.actions()
    }

    /// Position of `state` in the canonical state enumeration.
    fn state_index(&self, state: &Self::State) -> usize;

    /// Position of `action` in the canonical action enumeration.
    fn action_index(&self, action: &Self::Action) -> usize;

    /// Distribution over successor states after taking `action` in `state`.
    fn transition(&self, state: &Self::State, action: &Self::Action) -> Support<'_, Self::State>;

    /// Immediate reward for the transition `state --action--> next`.
    fn reward(&self, state: &Self::State, action: &Self::Action, next: &Self::State) -> f64;

    /// Whether `state` is terminal. Terminal states accrue no further reward
    /// and keep a fixed utility of zero.
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Runtime observability probe; defaults to fully observable.
    ///
    /// Belief-state wrappers must override this, which makes the solvers fail
    /// with [`MdpError::UnsupportedModel`](crate::MdpError::UnsupportedModel)
    /// instead of silently producing a meaningless policy.
    fn observability(&self) -> Observability {
        Observability::FullyObservable
    }
}
