//! Monte Carlo spot-checks of frozen policies by sampled trajectories.
//!
//! Planning already produces the expected discounted return for every state;
//! rolling a policy out against the model is an independent check of that
//! number, and the only one available when a model's transition support is
//! easier to sample than to sum. Sampling is seeded, so evaluations are
//! reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::policy::ValuePolicy;
use crate::process::DecisionProcess;

/// Configuration for trajectory sampling.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RolloutOptions {
    /// Number of independent episodes to average over.
    pub episodes: usize,
    /// Maximum number of steps per episode.
    pub horizon: usize,
    /// Seed for the trajectory RNG; a fixed seed reproduces the summary
    /// exactly.
    pub seed: u64,
}

impl Default for RolloutOptions {
    fn default() -> Self {
        Self {
            episodes: 100,
            horizon: 100,
            seed: 0,
        }
    }
}

impl RolloutOptions {
    /// Set the number of episodes to average over.
    pub fn with_episodes(mut self, episodes: usize) -> Self {
        self.episodes = episodes.max(1);
        self
    }

    /// Set the per-episode step cap.
    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Aggregate discounted returns observed while evaluating a policy.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RolloutSummary {
    /// Mean discounted return across episodes.
    pub mean_return: f64,
    /// Number of episodes simulated.
    pub episodes: usize,
}

/// Estimates the discounted return of following `policy` from `start`.
///
/// Each episode greedily follows [`ValuePolicy::best_action`], samples a
/// successor from the transition support, and accumulates discounted reward
/// until a terminal state or the horizon. Episodes also stop early at states
/// the policy cannot act in (unknown to the artifact, or an empty action
/// enumeration).
pub fn evaluate<M>(
    model: &M,
    policy: &ValuePolicy<M::State, M::Action>,
    start: &M::State,
    options: &RolloutOptions,
) -> RolloutSummary
where
    M: DecisionProcess,
{
    let mut rng = SmallRng::seed_from_u64(options.seed);
    let discount = model.discount();
    let mut total = 0.0;

    for _ in 0..options.episodes {
        let mut state = start.clone();
        let mut weight = 1.0;
        let mut episode_return = 0.0;

        for _ in 0..options.horizon {
            if model.is_terminal(&state) {
                break;
            }
            let action = match policy.best_action(&state) {
                Some(action) => action.clone(),
                None => break,
            };
            let next = sample_successor(model, &state, &action, &mut rng);
            episode_return += weight * model.reward(&state, &action, &next);
            weight *= discount;
            state = next;
        }
        total += episode_return;
    }

    RolloutSummary {
        mean_return: total / options.episodes as f64,
        episodes: options.episodes,
    }
}

/// Draws one successor from the transition support by inverse transform over
/// the yielded probabilities. Numeric slack in a support that sums slightly
/// below one falls through to the last yielded state.
fn sample_successor<M>(
    model: &M,
    state: &M::State,
    action: &M::Action,
    rng: &mut SmallRng,
) -> M::State
where
    M: DecisionProcess,
{
    let mut draw: f64 = rng.gen();
    let mut last = None;
    for (next, probability) in model.transition(state, action) {
        if probability <= 0.0 {
            continue;
        }
        if draw < probability {
            return next;
        }
        draw -= probability;
        last = Some(next);
    }
    last.unwrap_or_else(|| state.clone())
}
