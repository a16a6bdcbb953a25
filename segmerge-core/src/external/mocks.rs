// segmerge-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

use super::{FfmpegProcess, FfmpegSpawner};
use crate::error::{CoreError, CoreResult};
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::FfmpegEvent;
use std::cell::RefCell;
use std::os::unix::process::ExitStatusExt;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::rc::Rc;

/// Mock implementation of FfmpegProcess.
#[derive(Clone)]
pub struct MockFfmpegProcess {
    /// Events to emit when handle_events is called.
    pub events_to_emit: Vec<FfmpegEvent>,
    /// Exit status to return when wait is called.
    pub exit_status: ExitStatus,
}

impl FfmpegProcess for MockFfmpegProcess {
    fn handle_events<F>(&mut self, mut handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        for event in self.events_to_emit.clone() {
            handler(event)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        Ok(self.exit_status)
    }
}

/// An expected ffmpeg invocation and its mock result.
pub struct MockFfmpegExpectation {
    pub result: CoreResult<MockFfmpegProcess>,
    pub create_dummy_output: bool,
}

/// What the mock observed for one spawn call.
#[derive(Debug, Clone)]
pub struct ReceivedCall {
    pub args: Vec<String>,
    /// Path given after `-i`
    pub manifest_path: Option<PathBuf>,
    /// Contents of that file at spawn time
    pub manifest_contents: Option<String>,
}

/// Mock FfmpegSpawner answering spawn calls from a queue of expectations.
///
/// Calls beyond the queued expectations fail with `CoreError::OperationFailed`.
#[derive(Clone, Default)]
pub struct MockFfmpegSpawner {
    expectations: Rc<RefCell<Vec<MockFfmpegExpectation>>>,
    received_calls: Rc<RefCell<Vec<ReceivedCall>>>,
}

impl MockFfmpegSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_expectation(&self, result: CoreResult<MockFfmpegProcess>, create_dummy_output: bool) {
        self.expectations.borrow_mut().push(MockFfmpegExpectation {
            result,
            create_dummy_output,
        });
    }

    /// Exit 0; optionally writes a small file at the output path.
    pub fn add_success_expectation(&self, events: Vec<FfmpegEvent>, create_dummy_output: bool) {
        let process = MockFfmpegProcess {
            events_to_emit: events,
            exit_status: ExitStatus::from_raw(0),
        };
        self.add_expectation(Ok(process), create_dummy_output);
    }

    pub fn add_spawn_error_expectation(&self, error: CoreError) {
        self.add_expectation(Err(error), false);
    }

    pub fn add_exit_error_expectation(&self, events: Vec<FfmpegEvent>, exit_code: i32) {
        let process = MockFfmpegProcess {
            events_to_emit: events,
            exit_status: ExitStatus::from_raw(exit_code << 8),
        };
        self.add_expectation(Ok(process), false);
    }

    pub fn get_received_calls(&self) -> Vec<ReceivedCall> {
        self.received_calls.borrow().clone()
    }
}

impl FfmpegSpawner for MockFfmpegSpawner {
    type Process = MockFfmpegProcess;

    fn spawn(&self, cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        let args: Vec<String> = cmd
            .get_args()
            .map(|s| s.to_string_lossy().into_owned())
            .collect();

        let manifest_path = args
            .iter()
            .position(|a| a == "-i")
            .and_then(|i| args.get(i + 1))
            .map(PathBuf::from);
        let manifest_contents = manifest_path
            .as_ref()
            .and_then(|p| std::fs::read_to_string(p).ok());

        self.received_calls.borrow_mut().push(ReceivedCall {
            args: args.clone(),
            manifest_path,
            manifest_contents,
        });

        if self.expectations.borrow().is_empty() {
            return Err(CoreError::OperationFailed(format!(
                "MockFfmpegSpawner: unexpected call with args {args:?}"
            )));
        }
        let expectation = self.expectations.borrow_mut().remove(0);

        if expectation.create_dummy_output {
            if let Some(output) = args.last() {
                log::debug!("MockFfmpegSpawner: creating dummy output {output}");
                std::fs::write(output, b"merged video bytes")?;
            }
        }

        expectation.result
    }
}
