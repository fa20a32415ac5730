mod config;
mod dataset;
mod driver;
mod error;
mod evaluator;
mod network;
mod objective;
mod search;

pub use config::{Config, DEFAULT_HIDDEN_NODES, DEFAULT_ITERATIONS, DEFAULT_RESTARTS};
pub use dataset::{Dataset, Instance};
pub use driver::{BatchOutcome, PerformanceRecord, RestartDriver};
pub use error::{Result, TrainError};
pub use evaluator::count_correct;
pub use network::{weight_count, Network};
pub use objective::sum_squared_error;
pub use search::{HillClimbing, SearchState};
