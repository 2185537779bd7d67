//! The in-place Gauss–Seidel value-iteration engine.

use std::time::Instant;

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::error::{MdpError, Result};
use crate::options::ValueIterationOptions;
use crate::policy::ValuePolicy;
use crate::process::{DecisionProcess, Observability};

/// Convergence diagnostics frozen into a [`ValuePolicy`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SolveSummary {
    /// Number of sweeps performed before termination.
    pub iterations: usize,
    /// Bellman residual observed in the final sweep.
    pub residual: f64,
}

/// Computes an optimal policy for `model` by value iteration.
///
/// Each sweep walks the states in their canonical enumeration order and
/// replaces every non-terminal state's utility with the best one-step Bellman
/// backup over its applicable actions. Updates land in place, so later states
/// within a sweep read utilities the same sweep already refreshed
/// (Gauss–Seidel). The sweep loop stops once the residual, the largest
/// absolute per-state utility change, drops below
/// `options.residual_tolerance`, or after `options.max_iterations` sweeps.
/// Hitting the iteration cap is not an error: the returned artifact is the
/// best estimate reached, and its [`SolveSummary`] records the final residual
/// for callers that need to assert convergence quality.
///
/// Ties between actions resolve to the action seen earliest in the model's
/// enumeration order. Terminal states keep utility zero and a sentinel policy
/// entry of zero.
///
/// # Errors
///
/// - [`MdpError::UnsupportedModel`] if the model reports partial
///   observability.
/// - [`MdpError::DimensionMismatch`] if `options.initial_utility` is present
///   with a length other than the state count.
pub fn solve<M>(
    model: &M,
    options: &ValueIterationOptions,
) -> Result<ValuePolicy<M::State, M::Action>>
where
    M: DecisionProcess,
{
    let states = model.states();
    let num_states = states.len();
    let num_actions = model.actions().len();
    let discount = model.discount();

    let mut utility = initial_utility(model, options, num_states)?;
    let mut policy = vec![0usize; num_states];
    let mut q_values = options
        .include_q_values
        .then(|| DMatrix::zeros(num_states, num_actions));

    let start = Instant::now();
    let mut iterations = 0;
    let mut residual = f64::INFINITY;

    for iteration in 1..=options.max_iterations {
        let sweep_start = Instant::now();
        residual = 0.0;

        for (state_index, state) in states.iter().enumerate() {
            if model.is_terminal(state) {
                utility[state_index] = 0.0;
                policy[state_index] = 0;
                continue;
            }

            let old = utility[state_index];
            let mut best = f64::NEG_INFINITY;
            for action in model.actions_from(state) {
                let q = backup(model, state, &action, &utility, discount);
                let action_index = model.action_index(&action);
                if let Some(matrix) = q_values.as_mut() {
                    matrix[(state_index, action_index)] = q;
                }
                // Strict comparison: the first action to reach the maximum wins.
                if q > best {
                    best = q;
                    policy[state_index] = action_index;
                }
            }
            utility[state_index] = best;
            residual = residual.max((best - old).abs());
        }

        iterations = iteration;
        if options.verbose {
            log::info!(
                "iteration {iteration}: residual {residual:.6e}, sweep {:.1} ms, total {:.1} ms",
                sweep_start.elapsed().as_secs_f64() * 1e3,
                start.elapsed().as_secs_f64() * 1e3,
            );
        }
        if residual < options.residual_tolerance {
            break;
        }
    }

    Ok(ValuePolicy::freeze(
        model,
        utility,
        policy,
        q_values,
        SolveSummary {
            iterations,
            residual,
        },
    ))
}

/// One-step Bellman backup `Q(s, a) = Σ_{s'} P(s'|s,a) · (R(s,a,s') + γ·U(s'))`.
///
/// Support entries with probability zero are skipped entirely, so rewards and
/// utilities of unreachable successors are never evaluated.
pub(crate) fn backup<M>(
    model: &M,
    state: &M::State,
    action: &M::Action,
    utility: &DVector<f64>,
    discount: f64,
) -> f64
where
    M: DecisionProcess,
{
    let mut q = 0.0;
    for (next, probability) in model.transition(state, action) {
        if probability == 0.0 {
            continue;
        }
        let next_utility = utility[model.state_index(&next)];
        q += probability * (model.reward(state, action, &next) + discount * next_utility);
    }
    q
}

/// Validates the model and warm start, returning the utility buffer to
/// iterate from. Shared by the Gauss–Seidel and Jacobi entry points.
pub(crate) fn initial_utility<M>(
    model: &M,
    options: &ValueIterationOptions,
    num_states: usize,
) -> Result<DVector<f64>>
where
    M: DecisionProcess,
{
    if model.observability() == Observability::PartiallyObservable {
        return Err(MdpError::UnsupportedModel);
    }
    match &options.initial_utility {
        Some(vector) if vector.len() != num_states => Err(MdpError::dimension_mismatch(
            "initial utility length",
            num_states,
            vector.len(),
        )),
        Some(vector) => Ok(vector.clone()),
        None => Ok(DVector::zeros(num_states)),
    }
}
