//! Frozen policy artifacts produced by the solvers.

use std::collections::HashMap;
use std::hash::Hash;

use nalgebra::{DMatrix, DVector};

use crate::error::{MdpError, Result};
use crate::process::DecisionProcess;
use crate::solving::SolveSummary;

/// Immutable bundle of a solve's outputs: the converged utility vector, the
/// greedy policy vector, and (when retained) the state-action Q-matrix.
///
/// The artifact snapshots the model's state and action enumerations at
/// construction, so lookups by domain object keep working after the model is
/// gone; the solver retains no reference to any buffer it returns.
#[derive(Clone, Debug)]
pub struct ValuePolicy<S, A> {
    utility: DVector<f64>,
    policy: Vec<usize>,
    q_values: Option<DMatrix<f64>>,
    actions: Vec<A>,
    state_indices: HashMap<S, usize>,
    action_indices: HashMap<A, usize>,
    summary: SolveSummary,
}

impl<S, A> ValuePolicy<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
{
    /// Freezes the engine's working buffers into an artifact, snapshotting
    /// the model's index maps.
    pub(crate) fn freeze<M>(
        model: &M,
        utility: DVector<f64>,
        policy: Vec<usize>,
        q_values: Option<DMatrix<f64>>,
        summary: SolveSummary,
    ) -> Self
    where
        M: DecisionProcess<State = S, Action = A>,
    {
        let actions = model.actions();
        let state_indices = model
            .states()
            .into_iter()
            .enumerate()
            .map(|(index, state)| (state, index))
            .collect();
        let action_indices = actions
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, action)| (action, index))
            .collect();

        Self {
            utility,
            policy,
            q_values,
            actions,
            state_indices,
            action_indices,
            summary,
        }
    }

    /// Reconstitutes an artifact from an externally computed Q-matrix.
    ///
    /// Utilities become the row-wise maxima and the policy the row-wise
    /// argmax under the same first-seen-wins tie rule the solver applies.
    /// Rows are interpreted over the full action enumeration; terminal states
    /// are pinned to utility zero and the sentinel action index zero. The
    /// summary reports zero sweeps.
    ///
    /// # Errors
    ///
    /// [`MdpError::DimensionMismatch`] if the matrix shape differs from
    /// (state count × action count).
    pub fn from_q_matrix<M>(model: &M, q_values: DMatrix<f64>) -> Result<Self>
    where
        M: DecisionProcess<State = S, Action = A>,
    {
        let states = model.states();
        let num_actions = model.actions().len();
        if q_values.nrows() != states.len() {
            return Err(MdpError::dimension_mismatch(
                "Q-matrix rows",
                states.len(),
                q_values.nrows(),
            ));
        }
        if q_values.ncols() != num_actions {
            return Err(MdpError::dimension_mismatch(
                "Q-matrix columns",
                num_actions,
                q_values.ncols(),
            ));
        }

        let mut utility = DVector::zeros(states.len());
        let mut policy = vec![0usize; states.len()];
        for (state_index, state) in states.iter().enumerate() {
            if model.is_terminal(state) {
                continue;
            }
            let mut best = f64::NEG_INFINITY;
            for action_index in 0..num_actions {
                let q = q_values[(state_index, action_index)];
                if q > best {
                    best = q;
                    policy[state_index] = action_index;
                }
            }
            utility[state_index] = best;
        }

        Ok(Self::freeze(
            model,
            utility,
            policy,
            Some(q_values),
            SolveSummary {
                iterations: 0,
                residual: 0.0,
            },
        ))
    }

    /// Greedy action for `state`, or `None` for states the model never
    /// enumerated.
    pub fn best_action(&self, state: &S) -> Option<&A> {
        let state_index = *self.state_indices.get(state)?;
        self.actions.get(self.policy[state_index])
    }

    /// Converged utility of `state`.
    pub fn value(&self, state: &S) -> Option<f64> {
        self.state_indices
            .get(state)
            .map(|&state_index| self.utility[state_index])
    }

    /// One-step backup value of `(state, action)`; `None` when the Q-matrix
    /// was not retained or either key is unknown.
    pub fn q_value(&self, state: &S, action: &A) -> Option<f64> {
        let q_values = self.q_values.as_ref()?;
        let state_index = *self.state_indices.get(state)?;
        let action_index = *self.action_indices.get(action)?;
        Some(q_values[(state_index, action_index)])
    }

    /// The converged utility vector, one entry per state in canonical order.
    pub fn utility_vector(&self) -> &DVector<f64> {
        &self.utility
    }

    /// The greedy policy as action indices, one entry per state.
    pub fn policy_vector(&self) -> &[usize] {
        &self.policy
    }

    /// The retained Q-matrix, shape (states × actions), if any.
    pub fn q_matrix(&self) -> Option<&DMatrix<f64>> {
        self.q_values.as_ref()
    }

    /// Convergence diagnostics for this artifact.
    pub fn summary(&self) -> &SolveSummary {
        &self.summary
    }

    /// Number of states in the originating model.
    pub fn num_states(&self) -> usize {
        self.utility.len()
    }

    /// Number of actions in the originating model's enumeration.
    pub fn num_actions(&self) -> usize {
        self.actions.len()
    }
}
