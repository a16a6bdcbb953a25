//! Configuration structures and constants for the segmerge-core library.
//!
//! `CoreConfig` carries the directories and segment extension used by a
//! merge run. Defaults reproduce the fixed layout the tool was written for:
//! chapter folders under `CSE6250_Lectures`, merged files in `merged_output`.

mod builder;

use std::path::PathBuf;

use crate::error::{CoreError, CoreResult};

pub use builder::CoreConfigBuilder;

// Default constants

/// Root directory scanned for chapter folders, relative to the working directory.
pub const DEFAULT_INPUT_DIR: &str = "CSE6250_Lectures";

/// Directory that receives one merged file per chapter.
pub const DEFAULT_OUTPUT_DIR: &str = "merged_output";

/// Extension of the segment files inside a chapter folder (no leading dot).
pub const DEFAULT_SEGMENT_EXTENSION: &str = "mp4";

/// File name prefix of the transient concat list handed to ffmpeg.
pub const MANIFEST_PREFIX: &str = "temp_concat_list";

/// Appended to the chapter name to form the merged file stem.
pub const MERGED_SUFFIX: &str = "_merged";

/// Name of the ffmpeg executable looked up on PATH.
pub const FFMPEG_BINARY: &str = "ffmpeg";

/// Main configuration structure for the segmerge-core library.
///
/// # Examples
///
/// ```rust
/// use segmerge_core::config::CoreConfigBuilder;
/// use std::path::PathBuf;
///
/// let config = CoreConfigBuilder::new()
///     .input_dir(PathBuf::from("lectures"))
///     .output_dir(PathBuf::from("merged"))
///     .extension(".MP4")
///     .verbose(true)
///     .build();
///
/// assert_eq!(config.extension, "MP4");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Root directory containing the numbered chapter folders
    pub input_dir: PathBuf,

    /// Directory where merged chapter files are written
    pub output_dir: PathBuf,

    /// Directory for the transient concat manifests (defaults to the working directory)
    pub temp_dir: Option<PathBuf>,

    /// Segment file extension without the leading dot, matched case-insensitively
    pub extension: String,

    /// Echo ffmpeg's output at info level instead of debug
    pub verbose: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            temp_dir: None,
            extension: DEFAULT_SEGMENT_EXTENSION.to_string(),
            verbose: false,
        }
    }
}

impl CoreConfig {
    /// Creates a configuration for the given directories with default options.
    pub fn new(input_dir: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            input_dir,
            output_dir,
            ..Self::default()
        }
    }

    /// Directory in which concat manifests are created.
    pub fn manifest_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Checks that the configuration can produce valid file names.
    pub fn validate(&self) -> CoreResult<()> {
        if self.extension.is_empty() {
            return Err(CoreError::Config("segment extension must not be empty".to_string()));
        }
        if self.extension.starts_with('.') {
            return Err(CoreError::Config(format!(
                "segment extension '{}' must not start with a dot",
                self.extension
            )));
        }
        if self.extension.contains(['/', '\\']) {
            return Err(CoreError::Config(format!(
                "segment extension '{}' must not contain path separators",
                self.extension
            )));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(CoreError::Config("output directory must not be empty".to_string()));
        }
        Ok(())
    }
}
