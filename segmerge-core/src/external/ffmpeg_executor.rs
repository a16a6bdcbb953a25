// ============================================================================
// segmerge-core/src/external/ffmpeg_executor.rs
// ============================================================================
//
// FFMPEG EXECUTOR: FFmpeg Process Management and Abstraction
//
// KEY COMPONENTS:
// - FfmpegProcess: Trait representing an active FFmpeg process
// - FfmpegSpawner: Trait for creating new FFmpeg processes
// - SidecarSpawner: Concrete implementation using ffmpeg-sidecar
// - run_to_completion: Drains events and waits, collecting error output

use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error, command_wait_error};
use ffmpeg_sidecar::child::FfmpegChild;
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use std::process::ExitStatus;

/// Trait representing an active ffmpeg process instance.
pub trait FfmpegProcess {
    /// Processes events from the running command using a provided handler closure.
    fn handle_events<F>(&mut self, handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>;

    /// Waits for the command to complete and returns its exit status.
    fn wait(&mut self) -> CoreResult<ExitStatus>;
}

/// Trait representing something that can spawn an FfmpegProcess.
pub trait FfmpegSpawner {
    type Process: FfmpegProcess;
    /// Spawns the ffmpeg command, consuming the command object.
    fn spawn(&self, cmd: FfmpegCommand) -> CoreResult<Self::Process>;
}

/// Wrapper around `ffmpeg_sidecar::child::FfmpegChild` implementing `FfmpegProcess`.
pub struct SidecarProcess(FfmpegChild);

impl FfmpegProcess for SidecarProcess {
    fn handle_events<F>(&mut self, mut handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        let iterator = self.0.iter().map_err(|e| {
            log::error!("Failed to get ffmpeg event iterator: {e}");
            CoreError::OperationFailed(format!("Failed to read ffmpeg output: {e}"))
        })?;
        for event in iterator {
            handler(event)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        self.0
            .wait()
            .map_err(|e| command_wait_error("ffmpeg (sidecar)", e))
    }
}

/// Concrete implementation of `FfmpegSpawner` using `ffmpeg-sidecar`.
#[derive(Debug, Clone, Default)]
pub struct SidecarSpawner;

impl FfmpegSpawner for SidecarSpawner {
    type Process = SidecarProcess;

    fn spawn(&self, mut cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        cmd.spawn()
            .map(SidecarProcess)
            .map_err(|e| command_start_error("ffmpeg (sidecar)", e))
    }
}

/// Spawns `cmd`, drains its events and waits for it to exit.
///
/// ffmpeg's log lines are forwarded to the `log` facade (info when
/// `echo_output` is set, debug otherwise). A non-zero exit becomes
/// `CoreError::CommandFailed` carrying the error lines ffmpeg printed.
pub fn run_to_completion<S: FfmpegSpawner>(
    spawner: &S,
    cmd: FfmpegCommand,
    echo_output: bool,
) -> CoreResult<()> {
    log::debug!("Running ffmpeg command: {cmd:?}");

    let mut process = spawner.spawn(cmd)?;
    let mut error_lines: Vec<String> = Vec::new();

    process.handle_events(|event| {
        match event {
            FfmpegEvent::Error(line) | FfmpegEvent::Log(LogLevel::Error | LogLevel::Fatal, line) => {
                log::debug!("ffmpeg: {line}");
                error_lines.push(line);
            }
            FfmpegEvent::Log(_, line) => {
                if echo_output {
                    log::info!("{line}");
                } else {
                    log::debug!("ffmpeg: {line}");
                }
            }
            _ => {}
        }
        Ok(())
    })?;

    let status = process.wait()?;
    if status.success() {
        Ok(())
    } else {
        log::debug!("ffmpeg exited with {status}");
        Err(command_failed_error("ffmpeg", status, error_lines.join("\n")))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_unreadable_output_is_an_operation_failure() -> Result<(), Box<dyn std::error::Error>> {
        let mut cmd = FfmpegCommand::new_with_path("true");
        let mut child = cmd.spawn()?;
        drop(child.take_stderr());

        let mut process = SidecarProcess(child);
        let result = process.handle_events(|_| Ok(()));
        let _ = process.wait();

        match result {
            Err(CoreError::OperationFailed(msg)) => {
                assert!(msg.starts_with("Failed to read ffmpeg output"));
                assert!(!msg.contains("exit status"));
            }
            other => panic!("expected OperationFailed, got {other:?}"),
        }
        Ok(())
    }
}
