//! Solver configuration with eager validation of the optional warm start.

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

/// Configuration for a value-iteration solve.
///
/// All fields have defaults; a `ValueIterationOptions::default()` run sweeps
/// at most 100 times, stops once the Bellman residual drops below `1e-3`, and
/// retains the full Q-matrix in the returned artifact.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValueIterationOptions {
    /// Maximum number of sweeps over the state space.
    pub max_iterations: usize,
    /// Convergence threshold on the Bellman residual (the largest absolute
    /// per-state utility change within one sweep).
    pub residual_tolerance: f64,
    /// Whether the state-action Q-matrix is retained in the output.
    pub include_q_values: bool,
    /// Optional warm-start utility vector; its length must equal the state
    /// count or the solve fails before iterating.
    pub initial_utility: Option<DVector<f64>>,
    /// Whether per-iteration diagnostics are logged. Never affects results.
    pub verbose: bool,
}

impl Default for ValueIterationOptions {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            residual_tolerance: 1e-3,
            include_q_values: true,
            initial_utility: None,
            verbose: false,
        }
    }
}

impl ValueIterationOptions {
    /// Set the maximum number of sweeps that should be attempted.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }

    /// Set the convergence tolerance for the Bellman residual.
    pub fn with_residual_tolerance(mut self, tolerance: f64) -> Self {
        self.residual_tolerance = tolerance;
        self
    }

    /// Enable or disable retention of the Q-matrix in the artifact.
    pub fn with_q_values(mut self, include: bool) -> Self {
        self.include_q_values = include;
        self
    }

    /// Supply a warm-start utility vector instead of starting from zeros.
    pub fn with_initial_utility(mut self, utility: DVector<f64>) -> Self {
        self.initial_utility = Some(utility);
        self
    }

    /// Enable or disable per-iteration diagnostic logging.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
