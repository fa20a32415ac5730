use std::{
    num::NonZeroUsize,
    time::{Duration, Instant},
};

use rand::{rngs::StdRng, SeedableRng};
use rayon::prelude::*;

use crate::{
    evaluator::count_correct, search::HillClimbing, Dataset, Network, Result, TrainError,
};

/// Accuracy counts of one completed restart. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerformanceRecord {
    /// Index of the restart that produced this record.
    pub restart: usize,
    /// Correctly classified training instances.
    pub training_correct: usize,
    /// Correctly classified testing instances.
    pub testing_correct: usize,
}

/// Result of a whole restart batch.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// The winning record by testing accuracy.
    pub best: PerformanceRecord,
    /// All records, in restart-index order.
    pub records: Vec<PerformanceRecord>,
    /// Wall-clock duration of the batch.
    pub elapsed: Duration,
}

/// Fans out N independent hill-climbing runs and picks the winner.
///
/// Each restart owns a fresh network, weight vector, and random stream
/// seeded from `seed + index`; the datasets are the only shared state and
/// are read-only. Restarts run in parallel over the rayon pool, and any
/// failing restart aborts the whole batch.
#[derive(Debug, Clone, Copy)]
pub struct RestartDriver {
    restarts: NonZeroUsize,
    iterations: NonZeroUsize,
    hidden_nodes: NonZeroUsize,
    seed: u64,
}

impl RestartDriver {
    pub fn new(
        restarts: NonZeroUsize,
        iterations: NonZeroUsize,
        hidden_nodes: NonZeroUsize,
        seed: u64,
    ) -> Self {
        Self {
            restarts,
            iterations,
            hidden_nodes,
            seed,
        }
    }

    /// Runs the full batch and selects the best restart.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the testing set's feature width
    /// differs from the training set's, and propagates the first error of
    /// any restart.
    pub fn run(&self, training: &Dataset, testing: &Dataset) -> Result<BatchOutcome> {
        if testing.attributes() != training.attributes() {
            return Err(TrainError::DimensionMismatch {
                what: "testing attributes",
                got: testing.attributes(),
                expected: training.attributes(),
            });
        }

        log::info!(
            "running {} restart(s), {} iteration(s) each, {} hidden node(s)",
            self.restarts,
            self.iterations,
            self.hidden_nodes
        );

        let started = Instant::now();
        let records: Vec<PerformanceRecord> = (0..self.restarts.get())
            .into_par_iter()
            .map(|index| self.run_restart(index, training, testing))
            .collect::<Result<_>>()?;
        let elapsed = started.elapsed();

        let best = select_best(&records).ok_or_else(|| {
            TrainError::InvalidConfig("restart batch produced no records".into())
        })?;

        Ok(BatchOutcome {
            best,
            records,
            elapsed,
        })
    }

    /// One isolated training-and-evaluation run.
    fn run_restart(
        &self,
        index: usize,
        training: &Dataset,
        testing: &Dataset,
    ) -> Result<PerformanceRecord> {
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(index as u64));
        let sizes = [training.attributes(), self.hidden_nodes.get(), 1];

        let mut network = Network::classifier(&sizes, &mut rng)?;
        let state = HillClimbing::new(rng).search(&mut network, training, self.iterations.get())?;

        let training_correct = count_correct(&mut network, training)?;
        let testing_correct = count_correct(&mut network, testing)?;

        log::info!(
            "restart {index}: objective {:.4}, training correct {training_correct}/{}, testing correct {testing_correct}/{}",
            state.objective(),
            training.len(),
            testing.len()
        );

        Ok(PerformanceRecord {
            restart: index,
            training_correct,
            testing_correct,
        })
    }
}

/// Picks the record with the highest testing count.
///
/// Ties break toward the lowest restart index, so the selection is
/// deterministic and independent of task completion order.
fn select_best(records: &[PerformanceRecord]) -> Option<PerformanceRecord> {
    records
        .iter()
        .copied()
        .reduce(|best, record| {
            if record.testing_correct > best.testing_correct {
                record
            } else {
                best
            }
        })
}
