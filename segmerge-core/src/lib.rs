//! Core library for merging per-chapter video segments with ffmpeg.
//!
//! A lectures root holds numbered chapter folders (`0_Intro`, `2_Early`,
//! `10_Mid`, ...), each containing numbered segments (`1 - Welcome.mp4`,
//! `2 - Setup.mp4`, ...). This crate finds the chapters, orders their
//! segments by numeric prefix and has ffmpeg's concat demuxer join each
//! chapter with stream copy into `<output_dir>/<chapter>_merged.<ext>`.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use segmerge_core::{CoreConfig, SidecarSpawner, check_dependency, find_chapter_folders, merge_chapters};
//! use std::path::PathBuf;
//!
//! let config = CoreConfig::new(PathBuf::from("CSE6250_Lectures"), PathBuf::from("merged_output"));
//! config.validate().unwrap();
//! check_dependency("ffmpeg").unwrap();
//!
//! let chapters = find_chapter_folders(&config.input_dir).unwrap();
//! let summary = merge_chapters(&SidecarSpawner, &config, &chapters);
//! println!("{} of {} chapters merged", summary.successful(), summary.total());
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod manifest;
pub mod ordering;
pub mod processing;
pub mod reporting;
pub mod temp_files;
pub mod terminal;
pub mod utils;

// Re-exports for public API
pub use config::{CoreConfig, CoreConfigBuilder};
pub use discovery::{ChapterFolder, find_chapter_folders, find_segments};
pub use error::{CoreError, CoreResult};
pub use external::{FfmpegProcess, FfmpegSpawner, SidecarSpawner, check_dependency};
pub use manifest::{escape_concat_path, render_manifest, write_manifest};
pub use ordering::{OrderKey, order_key};
pub use processing::{MergedChapter, merge_chapter, merge_chapters, merge_segments};
pub use reporting::{ChapterOutcome, ChapterReport, RunSummary};
pub use utils::{format_bytes, format_duration};
