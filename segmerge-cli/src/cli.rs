// segmerge-cli/src/cli.rs
//
// Defines the command-line argument structure using clap. Every flag is
// optional: a bare `segmerge` scans ./CSE6250_Lectures and writes into
// ./merged_output.

use clap::Parser;
use segmerge_core::config::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_SEGMENT_EXTENSION};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Segmerge: merge numbered lecture segments into one video per chapter",
    long_about = "Scans a lectures directory for numbered chapter folders and concatenates \
                  each folder's numbered segments losslessly with ffmpeg (stream copy)."
)]
pub struct Cli {
    /// Directory containing the numbered chapter folders
    #[arg(
        short = 'i',
        long = "input",
        value_name = "LECTURES_DIR",
        env = "SEGMERGE_INPUT_DIR",
        default_value = DEFAULT_INPUT_DIR
    )]
    pub input_dir: PathBuf,

    /// Directory where merged chapter files will be saved
    #[arg(
        short = 'o',
        long = "output",
        value_name = "OUTPUT_DIR",
        env = "SEGMERGE_OUTPUT_DIR",
        default_value = DEFAULT_OUTPUT_DIR
    )]
    pub output_dir: PathBuf,

    /// Extension of the segment files to merge
    #[arg(
        long,
        value_name = "EXT",
        env = "SEGMERGE_EXTENSION",
        default_value = DEFAULT_SEGMENT_EXTENSION
    )]
    pub extension: String,

    /// Show ffmpeg output and debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
