//! Implementation of the merge run.
//!
//! Checks for ffmpeg, discovers chapter folders and merges them one by one
//! through segmerge-core, then prints the summary. Only environment problems
//! (invalid options, missing ffmpeg, no chapter folders) are returned as
//! errors; failed chapters are part of the returned summary.

use crate::cli::Cli;
use crate::error::{CliErrorContext, CliResult};

use segmerge_core::config::{CoreConfig, CoreConfigBuilder, FFMPEG_BINARY};
use segmerge_core::reporting::ChapterOutcome;
use segmerge_core::{
    CoreError, RunSummary, SidecarSpawner, check_dependency, find_chapter_folders, format_bytes,
    format_duration, merge_chapters, terminal,
};

use log::debug;

const INSTALL_HINT: &str = "macOS: brew install ffmpeg | Linux: sudo apt-get install ffmpeg";

/// Creates and validates the CoreConfig from CLI arguments.
pub fn create_core_config(args: &Cli) -> CliResult<CoreConfig> {
    let config = CoreConfigBuilder::new()
        .input_dir(args.input_dir.clone())
        .output_dir(args.output_dir.clone())
        .extension(&args.extension)
        .verbose(args.verbose)
        .build();

    config.validate()?;
    Ok(config)
}

fn ensure_ffmpeg() -> CliResult<()> {
    match check_dependency(FFMPEG_BINARY) {
        Ok(()) => {
            terminal::print_success("FFmpeg is installed and ready");
            Ok(())
        }
        Err(e) => {
            terminal::print_error(
                "FFmpeg is not installed or not in PATH",
                &e.to_string(),
                Some(INSTALL_HINT),
            );
            Err(e).cli_context("FFmpeg is required")
        }
    }
}

fn display_summary(config: &CoreConfig, summary: &RunSummary) -> CliResult<()> {
    terminal::print_section("Merge complete - summary");
    terminal::print_status("Chapters", &summary.total().to_string(), true);
    terminal::print_status("Successful", &summary.successful().to_string(), false);
    if summary.failed() > 0 {
        terminal::print_status("Failed", &summary.failed().to_string(), false);
        for report in summary.failures() {
            if let ChapterOutcome::Failed { reason } = &report.outcome {
                terminal::print_sub_item(&format!("{}: {reason}", report.chapter));
            }
        }
    }

    terminal::print_status("Total size", &format_bytes(summary.total_output_bytes()), false);
    terminal::print_status(
        "Total time",
        &format_duration(summary.elapsed.as_secs_f64()),
        false,
    );

    let output_dir = std::path::absolute(&config.output_dir).cli_with_context(|| {
        format!("Failed to resolve output directory '{}'", config.output_dir.display())
    })?;
    terminal::print_status("Saved to", &output_dir.display().to_string(), true);
    Ok(())
}

/// Runs the whole merge: dependency check, discovery, per-chapter merges, summary.
pub fn run_merge(args: &Cli) -> CliResult<RunSummary> {
    let config = create_core_config(args)?;

    terminal::print_section("Segmerge: chapter video merger");
    debug!("Run started: {}", crate::logging::get_timestamp());
    debug!("Configuration: {config:?}");

    ensure_ffmpeg()?;

    terminal::print_processing(&format!(
        "Scanning for chapter folders in: {}",
        config.input_dir.display()
    ));
    let chapters = find_chapter_folders(&config.input_dir).cli_with_context(|| {
        format!("Failed to scan '{}'", config.input_dir.display())
    })?;

    if chapters.is_empty() {
        terminal::print_error(
            "No chapter folders found",
            &format!(
                "'{}' is missing or has no <number>_<name> folders",
                config.input_dir.display()
            ),
            None,
        );
        return Err(CoreError::OperationFailed(format!(
            "No chapter folders found in '{}'",
            config.input_dir.display()
        )));
    }
    terminal::print_success(&format!("Found {} chapter folder(s)", chapters.len()));

    let summary = merge_chapters(&SidecarSpawner, &config, &chapters);
    display_summary(&config, &summary)?;

    debug!("Run finished: {}", crate::logging::get_timestamp());
    Ok(summary)
}
