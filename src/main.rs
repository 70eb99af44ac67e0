mod amounts;
mod cli;
mod errors;
mod projection;
mod schedule;
mod vault;
mod view;

use tracing_subscriber::EnvFilter;

use crate::cli::occurrences_operation;

fn main() {
    // Logs go to stderr, stdout is the screen
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    occurrences_operation()
}
