//! Double-buffered Jacobi variant of the value-iteration sweep.
//!
//! [`solve`](crate::solving::solve) is deliberately Gauss–Seidel: within one
//! sweep, later states read utilities the same sweep already refreshed, which
//! usually cuts the sweep count but forces a sequential walk. This variant
//! reads only the previous sweep's utilities and writes a fresh buffer, so
//! states become independent and the sweep fans out across threads with
//! `rayon`. Both variants reach the same fixed point on contracting models,
//! but their numeric trajectories and iteration counts differ; they are not
//! interchangeable where exact trajectories matter.

use std::time::Instant;

use nalgebra::{DMatrix, DVector};
use rayon::prelude::*;

use crate::error::Result;
use crate::options::ValueIterationOptions;
use crate::policy::ValuePolicy;
use crate::process::DecisionProcess;
use crate::solving::{backup, initial_utility, SolveSummary};

/// Per-state result of one Jacobi backup.
struct StateBackup {
    value: f64,
    action: usize,
    q_row: Vec<f64>,
}

/// Computes an optimal policy for `model` by double-buffered value iteration.
///
/// Validation, termination, and outputs match
/// [`solve`](crate::solving::solve); only the update schedule differs (see
/// the module docs).
pub fn solve_batch<M>(
    model: &M,
    options: &ValueIterationOptions,
) -> Result<ValuePolicy<M::State, M::Action>>
where
    M: DecisionProcess + Sync,
    M::State: Sync,
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
        let previous = utility.clone();

        let backups: Vec<StateBackup> = states
            .par_iter()
            .map(|state| {
                backup_state(
                    model,
                    state,
                    &previous,
                    discount,
                    num_actions,
                    options.include_q_values,
                )
            })
            .collect();

        residual = 0.0;
        for (state_index, state_backup) in backups.iter().enumerate() {
            utility[state_index] = state_backup.value;
            policy[state_index] = state_backup.action;
            if let Some(matrix) = q_values.as_mut() {
                for (action_index, q) in state_backup.q_row.iter().enumerate() {
                    matrix[(state_index, action_index)] = *q;
                }
            }
            residual = residual.max((state_backup.value - previous[state_index]).abs());
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

fn backup_state<M>(
    model: &M,
    state: &M::State,
    previous: &DVector<f64>,
    discount: f64,
    num_actions: usize,
    include_q: bool,
) -> StateBackup
where
    M: DecisionProcess,
{
    let empty_row = || if include_q { vec![0.0; num_actions] } else { Vec::new() };

    if model.is_terminal(state) {
        return StateBackup {
            value: 0.0,
            action: 0,
            q_row: empty_row(),
        };
    }

    let mut q_row = empty_row();
    let mut best = f64::NEG_INFINITY;
    let mut best_action = 0usize;
    for action in model.actions_from(state) {
        let q = backup(model, state, &action, previous, discount);
        let action_index = model.action_index(&action);
        if include_q {
            q_row[action_index] = q;
        }
        if q > best {
            best = q;
            best_action = action_index;
        }
    }

    StateBackup {
        value: best,
        action: best_action,
        q_row,
    }
}
