use std::{env, process};

use anyhow::Context;
use nn_hillclimb::{Config, Dataset, RestartDriver, TrainError};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = match Config::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(TrainError::InvalidConfig(msg)) => {
            eprintln!(
                "Usage: nn-hillclimb <training-file> <testing-file> \
                 [hidden-nodes] [iterations] [restarts] [seed]"
            );
            anyhow::bail!("invalid config: {msg}");
        }
        Err(e) => return Err(e.into()),
    };

    let training = Dataset::from_file(&config.training_path)
        .with_context(|| format!("loading {}", config.training_path.display()))?;
    let testing = Dataset::from_file(&config.testing_path)
        .with_context(|| format!("loading {}", config.testing_path.display()))?;

    let driver = RestartDriver::new(
        config.restarts,
        config.iterations,
        config.hidden_nodes,
        config.seed,
    );
    let outcome = driver.run(&training, &testing)?;

    println!(
        "Best training: {}/{}",
        outcome.best.training_correct,
        training.len()
    );
    println!(
        "Best testing: {}/{}",
        outcome.best.testing_correct,
        testing.len()
    );
    println!("Time: {:.2} seconds", outcome.elapsed.as_secs_f64());

    Ok(())
}
