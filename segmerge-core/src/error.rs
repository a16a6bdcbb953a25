// ============================================================================
// segmerge-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error types for the segmerge-core library
//
// Environment errors (missing ffmpeg, unreadable root) are returned to the
// caller and abort the run. Per-chapter errors are returned from
// `merge_chapter` and folded into a failed chapter report by the run loop.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors produced by the segmerge core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Required dependency '{0}' not found on PATH")]
    DependencyNotFound(String),

    #[error("Failed to start '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Failed waiting for '{0}': {1}")]
    CommandWait(String, #[source] io::Error),

    #[error("'{command}' exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("No .{extension} files found in {chapter}")]
    NoSegmentsFound { chapter: String, extension: String },

    #[error("Output file was not created: {}", .0.display())]
    OutputMissing(PathBuf),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    OperationFailed(String),
}

/// Result type for segmerge-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

pub fn command_start_error(command: &str, err: io::Error) -> CoreError {
    CoreError::CommandStart(command.to_string(), err)
}

pub fn command_wait_error(command: &str, err: io::Error) -> CoreError {
    CoreError::CommandWait(command.to_string(), err)
}

pub fn command_failed_error(command: &str, status: ExitStatus, stderr: impl Into<String>) -> CoreError {
    CoreError::CommandFailed {
        command: command.to_string(),
        status,
        stderr: stderr.into(),
    }
}
