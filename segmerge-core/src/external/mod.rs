// ============================================================================
// segmerge-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the ffmpeg executable
//
// KEY COMPONENTS:
// - Dependency check for the ffmpeg binary
// - Concat command construction (ffmpeg)
// - Process spawning traits and the ffmpeg-sidecar implementation
//   (ffmpeg_executor)
// - Mock spawner for tests (mocks)

use crate::error::{CoreError, CoreResult, command_failed_error};

use std::io;
use std::process::{Command, Stdio};

/// Builds the ffmpeg concat/stream-copy command line
pub mod ffmpeg;

/// Contains traits and implementations for executing ffmpeg commands
pub mod ffmpeg_executor;

#[cfg(all(unix, test))]
pub mod mocks;

pub use ffmpeg::build_concat_command;
pub use ffmpeg_executor::{FfmpegProcess, FfmpegSpawner, SidecarProcess, SidecarSpawner};

/// Checks that an external command is installed and runs.
///
/// Runs `<cmd_name> -version` with output discarded.
///
/// # Errors
///
/// * `CoreError::DependencyNotFound` - the command is not on PATH
/// * `CoreError::CommandStart` - the command exists but could not be started
/// * `CoreError::CommandFailed` - the version query exited unsuccessfully
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(status) if status.success() => {
            log::debug!("Found dependency: {cmd_name}");
            Ok(())
        }
        Ok(status) => {
            log::warn!("Dependency '{cmd_name}' is present but '-version' failed: {status}");
            Err(command_failed_error(cmd_name, status, "version check failed"))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("Dependency '{cmd_name}' not found.");
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{cmd_name}': {e}");
            Err(CoreError::CommandStart(cmd_name.to_string(), e))
        }
    }
}
