use std::ops::RangeInclusive;

use clap::{Args, Parser, Subcommand};

use crate::util::generate_random_data;

/// Input used by the array drivers when no values are given.
pub const DEMO_ARRAY: [i32; 10] = [6, 2, 1, 45, 23, 19, 63, 5, 43, 50];

/// Number of elements generated for a random heap when no capacity is given.
pub const DEFAULT_RANDOM_CAPACITY: usize = 10;

/// Range random input is drawn from.
pub const RANDOM_RANGE: RangeInclusive<i32> = 0..=99;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log filter directive, e.g. `debug` or `sort_toolbox=trace`. Falls back to RUST_LOG
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build a min-heap, print it, remove its root and print it again
    Heap(HeapConfig),
    /// Sort an array with quicksort
    Quick(ArrayConfig),
    /// Sort an array with selection sort
    Selection(ArrayConfig),
}

#[derive(Args, Debug, Clone)]
pub struct HeapConfig {
    /// Heap capacity. Prompted for on stdin when omitted
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Fill the heap with random values instead of reading them from stdin
    #[arg(long)]
    pub random: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ArrayConfig {
    /// Values to sort. Defaults to a fixed demo array
    #[arg(allow_negative_numbers = true, conflicts_with = "random")]
    pub values: Vec<i32>,

    /// Sort N random values instead
    #[arg(long, value_name = "N")]
    pub random: Option<usize>,
}

impl HeapConfig {
    /// Random heap contents, or `None` if values are to be read interactively.
    pub fn random_values(&self) -> Option<Vec<i32>> {
        self.random.then(|| {
            generate_random_data(
                self.capacity.unwrap_or(DEFAULT_RANDOM_CAPACITY),
                RANDOM_RANGE,
            )
        })
    }
}

impl ArrayConfig {
    pub fn input(&self) -> Vec<i32> {
        match self.random {
            Some(amount) => generate_random_data(amount, RANDOM_RANGE),
            None if self.values.is_empty() => DEMO_ARRAY.to_vec(),
            None => self.values.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands, DEMO_ARRAY, DEFAULT_RANDOM_CAPACITY};
    use clap::{CommandFactory, Parser};

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_array_input() {
        let cli = Cli::try_parse_from(["sort_toolbox", "quick", "3", "-1", "2"]).unwrap();
        match cli.command {
            Commands::Quick(config) => assert_eq!(vec![3, -1, 2], config.input()),
            other => panic!("unexpected command {:?}", other),
        }

        let cli = Cli::try_parse_from(["sort_toolbox", "selection"]).unwrap();
        match cli.command {
            Commands::Selection(config) => assert_eq!(DEMO_ARRAY.to_vec(), config.input()),
            other => panic!("unexpected command {:?}", other),
        }

        let cli = Cli::try_parse_from(["sort_toolbox", "quick", "--random", "25"]).unwrap();
        match cli.command {
            Commands::Quick(config) => assert_eq!(25, config.input().len()),
            other => panic!("unexpected command {:?}", other),
        }

        assert!(Cli::try_parse_from(["sort_toolbox", "quick", "1", "--random", "3"]).is_err());
    }

    #[test]
    fn test_heap_config() {
        let args = ["sort_toolbox", "--log-level", "debug", "heap", "--capacity", "4"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(Some("debug"), cli.log_level.as_deref());
        match cli.command {
            Commands::Heap(config) => {
                assert_eq!(Some(4), config.capacity);
                assert_eq!(None, config.random_values());
            }
            other => panic!("unexpected command {:?}", other),
        }

        let cli = Cli::try_parse_from(["sort_toolbox", "heap", "--random"]).unwrap();
        match cli.command {
            Commands::Heap(config) => assert_eq!(
                Some(DEFAULT_RANDOM_CAPACITY),
                config.random_values().map(|values| values.len())
            ),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
