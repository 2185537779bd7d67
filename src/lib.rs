//! Fast value-iteration planning for finite Markov decision processes.
//!
//! This crate computes stationary control policies for fully-observable
//! sequential decision problems by iterating the Bellman optimality equation
//! to a fixed point. It offers tools to
//!
//! - describe a decision process through a capability contract (`process`
//!   module),
//! - configure and run the in-place Gauss–Seidel solver (`options` and
//!   `solving` modules),
//! - run the double-buffered Jacobi variant when sweeps should parallelize
//!   (`batch` module),
//! - inspect the frozen utility/policy/Q artifact (`policy` module), and
//! - spot-check a policy by seeded simulation (`rollout` module).
//!
//! The model is supplied by you: anything implementing [`DecisionProcess`]
//! with a stable state/action enumeration can be solved. Partially-observable
//! processes are rejected with a descriptive error rather than planned over
//! incorrectly.
//!
//! # Quick start
//!
//! ```
//! use mdprs::{solve, DecisionProcess, Support, ValueIterationOptions};
//!
//! // A machine that earns while running but earns little once it overheats.
//! #[derive(Clone, Debug, PartialEq, Eq, Hash)]
//! enum State {
//!     Cool,
//!     Hot,
//! }
//!
//! #[derive(Clone, Debug, PartialEq, Eq, Hash)]
//! enum Action {
//!     Run,
//!     Rest,
//! }
//!
//! struct Machine;
//!
//! impl DecisionProcess for Machine {
//!     type State = State;
//!     type Action = Action;
//!
//!     fn discount(&self) -> f64 {
//!         0.9
//!     }
//!
//!     fn states(&self) -> Vec<State> {
//!         vec![State::Cool, State::Hot]
//!     }
//!
//!     fn actions(&self) -> Vec<Action> {
//!         vec![Action::Run, Action::Rest]
//!     }
//!
//!     fn state_index(&self, state: &State) -> usize {
//!         match state {
//!             State::Cool => 0,
//!             State::Hot => 1,
//!         }
//!     }
//!
//!     fn action_index(&self, action: &Action) -> usize {
//!         match action {
//!             Action::Run => 0,
//!             Action::Rest => 1,
//!         }
//!     }
//!
//!     fn transition(&self, state: &State, action: &Action) -> Support<'_, State> {
//!         match (state, action) {
//!             (State::Cool, Action::Run) => {
//!                 Box::new([(State::Cool, 0.7), (State::Hot, 0.3)].into_iter())
//!             }
//!             (State::Hot, Action::Run) => Box::new(std::iter::once((State::Hot, 1.0))),
//!             (_, Action::Rest) => Box::new(std::iter::once((State::Cool, 1.0))),
//!         }
//!     }
//!
//!     fn reward(&self, state: &State, action: &Action, _next: &State) -> f64 {
//!         match (state, action) {
//!             (State::Cool, Action::Run) => 1.0,
//!             (State::Hot, Action::Run) => 0.2,
//!             _ => 0.0,
//!         }
//!     }
//!
//!     fn is_terminal(&self, _state: &State) -> bool {
//!         false
//!     }
//! }
//!
//! let policy = solve(&Machine, &ValueIterationOptions::default()).expect("observable model");
//!
//! assert_eq!(policy.best_action(&State::Cool), Some(&Action::Run));
//! assert_eq!(policy.best_action(&State::Hot), Some(&Action::Rest));
//! assert!(policy.value(&State::Cool).unwrap() > policy.value(&State::Hot).unwrap());
//! ```
//!
//! Convergence to the unique fixed point is a property of the discounted
//! Bellman operator, not of this implementation: it holds whenever the
//! discount factor is strictly below one. With discount one and no absorbing
//! structure, the solver runs to its iteration cap and returns its best
//! estimate, recording the final residual in the artifact's summary.

pub mod batch;
pub mod error;
pub mod options;
pub mod policy;
pub mod process;
pub mod rollout;
pub mod solving;

#[cfg(test)]
mod test_support;

pub use batch::solve_batch;
pub use error::{MdpError, Result};
pub use options::ValueIterationOptions;
pub use policy::ValuePolicy;
pub use process::{DecisionProcess, Observability, Support};
pub use rollout::{RolloutOptions, RolloutSummary};
pub use solving::{solve, SolveSummary};
