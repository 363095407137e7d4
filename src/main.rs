use std::io;

use clap::Parser;

use sort_toolbox::config::{Cli, Commands};
use sort_toolbox::driver::{self, DriverError};
use sort_toolbox::logging::init_tracing;

fn main() -> Result<(), DriverError> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;

    let mut output = io::stdout().lock();
    match cli.command {
        Commands::Heap(config) => match config.random_values() {
            Some(values) => driver::run_heap_with_values(&mut output, &values),
            None => driver::run_heap(io::stdin().lock(), &mut output, config.capacity),
        },
        Commands::Quick(config) => driver::run_quick_sort(&mut output, config.input()),
        Commands::Selection(config) => driver::run_selection_sort(&mut output, config.input()),
    }
}
