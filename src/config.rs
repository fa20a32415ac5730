use std::{num::NonZeroUsize, path::PathBuf};

use crate::{Result, TrainError};

/// Recognized options for one training batch.
#[derive(Debug, Clone)]
pub struct Config {
    pub training_path: PathBuf,
    pub testing_path: PathBuf,
    pub hidden_nodes: NonZeroUsize,
    pub iterations: NonZeroUsize,
    pub restarts: NonZeroUsize,
    /// Base seed; restart `i` draws from the stream seeded with `seed + i`.
    pub seed: u64,
}

pub const DEFAULT_HIDDEN_NODES: usize = 15;
pub const DEFAULT_ITERATIONS: usize = 3000;
pub const DEFAULT_RESTARTS: usize = 10;

impl Config {
    /// Parses positional arguments:
    /// `<training-file> <testing-file> [hidden-nodes] [iterations] [restarts] [seed]`.
    ///
    /// # Errors
    /// Returns `InvalidConfig` on missing paths, unparsable numbers, or
    /// counts below 1.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();

        let training_path = args
            .next()
            .ok_or_else(|| TrainError::InvalidConfig("missing training file".into()))?;
        let testing_path = args
            .next()
            .ok_or_else(|| TrainError::InvalidConfig("missing testing file".into()))?;

        let hidden_nodes = parse_count(args.next(), "hidden-nodes", DEFAULT_HIDDEN_NODES)?;
        let iterations = parse_count(args.next(), "iterations", DEFAULT_ITERATIONS)?;
        let restarts = parse_count(args.next(), "restarts", DEFAULT_RESTARTS)?;

        let seed = match args.next() {
            Some(arg) => arg.parse::<u64>().map_err(|e| {
                TrainError::InvalidConfig(format!("bad seed {arg:?}: {e}"))
            })?,
            None => 0,
        };

        if let Some(extra) = args.next() {
            return Err(TrainError::InvalidConfig(format!(
                "unexpected argument {extra:?}"
            )));
        }

        Ok(Self {
            training_path: PathBuf::from(training_path),
            testing_path: PathBuf::from(testing_path),
            hidden_nodes,
            iterations,
            restarts,
            seed,
        })
    }
}

fn parse_count(arg: Option<String>, name: &str, default: usize) -> Result<NonZeroUsize> {
    let value = match arg {
        Some(arg) => arg.parse::<usize>().map_err(|e| {
            TrainError::InvalidConfig(format!("bad {name} {arg:?}: {e}"))
        })?,
        None => default,
    };

    NonZeroUsize::new(value)
        .ok_or_else(|| TrainError::InvalidConfig(format!("{name} must be at least 1")))
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_match_the_reference_run() {
        let config = Config::from_args(args(&["train.csv", "test.csv"])).unwrap();

        assert_eq!(config.hidden_nodes.get(), DEFAULT_HIDDEN_NODES);
        assert_eq!(config.iterations.get(), DEFAULT_ITERATIONS);
        assert_eq!(config.restarts.get(), DEFAULT_RESTARTS);
        assert_eq!(config.seed, 0);
    }

    #[test]
    fn parses_all_positional_overrides() {
        let config =
            Config::from_args(args(&["a.csv", "b.csv", "4", "100", "3", "99"])).unwrap();

        assert_eq!(config.training_path, PathBuf::from("a.csv"));
        assert_eq!(config.testing_path, PathBuf::from("b.csv"));
        assert_eq!(config.hidden_nodes.get(), 4);
        assert_eq!(config.iterations.get(), 100);
        assert_eq!(config.restarts.get(), 3);
        assert_eq!(config.seed, 99);
    }

    #[test]
    fn rejects_missing_paths() {
        assert!(matches!(
            Config::from_args(args(&["only.csv"])),
            Err(TrainError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_zero_counts() {
        assert!(matches!(
            Config::from_args(args(&["a.csv", "b.csv", "0"])),
            Err(TrainError::InvalidConfig(_))
        ));
        assert!(matches!(
            Config::from_args(args(&["a.csv", "b.csv", "4", "100", "0"])),
            Err(TrainError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_trailing_arguments() {
        assert!(matches!(
            Config::from_args(args(&["a.csv", "b.csv", "4", "100", "3", "99", "zzz"])),
            Err(TrainError::InvalidConfig(_))
        ));
    }
}
