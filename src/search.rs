use rand::Rng;

use crate::{objective::sum_squared_error, Dataset, Network, Result};

/// The current point of a search and its cached objective value.
///
/// The cached value always equals the objective of `weights`; transitions
/// update both together.
#[derive(Debug, Clone)]
pub struct SearchState {
    weights: Vec<f32>,
    objective: f32,
}

impl SearchState {
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    pub fn objective(&self) -> f32 {
        self.objective
    }
}

/// Greedy, memoryless randomized hill climbing over a network's weights.
///
/// Each step perturbs a single uniformly chosen coordinate of the current
/// weight vector, replacing it with a fresh draw from the perturbation
/// bounds, and accepts the candidate only on a strictly lower objective.
/// There is no acceptance of worse states and no early termination; escaping
/// local minima is left to the outer restart driver.
pub struct HillClimbing<R: Rng> {
    rng: R,
    low: f32,
    high: f32,
}

impl<R: Rng> HillClimbing<R> {
    /// Creates a search drawing replacement coordinates uniformly from
    /// [-1, 1).
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            low: -1.0,
            high: 1.0,
        }
    }

    /// Overrides the bounds replacement coordinates are drawn from.
    pub fn with_bounds(mut self, low: f32, high: f32) -> Self {
        self.low = low;
        self.high = high;
        self
    }

    /// Attempts one transition, returning whether the candidate was accepted.
    ///
    /// On return the network holds `state`'s weights either way.
    ///
    /// # Errors
    /// Propagates `NumericAnomaly` from the objective; a non-finite candidate
    /// score aborts the step before any comparison happens.
    pub fn step(
        &mut self,
        network: &mut Network,
        data: &Dataset,
        state: &mut SearchState,
    ) -> Result<bool> {
        let coord = self.rng.random_range(0..state.weights.len());
        let replacement = self.rng.random_range(self.low..self.high);

        let previous = state.weights[coord];
        state.weights[coord] = replacement;
        network.set_weights(&state.weights)?;
        let objective = sum_squared_error(network, data)?;

        if objective < state.objective {
            state.objective = objective;
            return Ok(true);
        }

        state.weights[coord] = previous;
        network.set_weights(&state.weights)?;
        Ok(false)
    }

    /// Runs exactly `iterations` steps from the network's current weights.
    ///
    /// The network ends up holding the best weights found, which the
    /// returned state mirrors.
    ///
    /// # Errors
    /// Propagates the first error of any step.
    pub fn search(
        &mut self,
        network: &mut Network,
        data: &Dataset,
        iterations: usize,
    ) -> Result<SearchState> {
        let mut state = SearchState {
            weights: network.weights().to_vec(),
            objective: sum_squared_error(network, data)?,
        };

        for _ in 0..iterations {
            self.step(network, data, &mut state)?;
        }

        Ok(state)
    }
}
