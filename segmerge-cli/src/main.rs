// segmerge-cli/src/main.rs
//
// Entry point for the segmerge binary.
//
// Exit codes:
// - 0: the run completed, even if some chapters failed to merge
// - 1: invalid options, ffmpeg unavailable, or no chapter folders found

use clap::Parser;
use segmerge_cli::{Cli, logging, run_merge};
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run_merge(&cli) {
        Ok(summary) => {
            log::debug!(
                "Exiting: {} merged, {} failed",
                summary.successful(),
                summary.failed()
            );
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
