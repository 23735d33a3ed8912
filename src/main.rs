/*!
 * Quick-Fit Allocator - Interactive Entry Point
 *
 * Prompts for segment sizes and processes on stdin, allocates them and
 * prints the memory layout on stdout.
 */

use quickfit::cli::Session;
use quickfit::{init_tracing, AllocatorConfig, QuickFitError};
use std::io;
use tracing::info;

fn main() -> miette::Result<()> {
    init_tracing();

    let config = AllocatorConfig::from_env().map_err(QuickFitError::from)?;
    info!(common_sizes = ?config.common_sizes, policy = %config.policy, "Configuration loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = Session::new(stdin.lock(), stdout.lock(), config)
        .run()
        .map_err(QuickFitError::from)?;

    info!(
        processes = summary.processes.len(),
        allocated = summary.allocations.iter().filter(|o| o.is_success()).count(),
        "Session complete"
    );
    Ok(())
}
