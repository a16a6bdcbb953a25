//! Sequential processing of all chapter folders.

mod merge;

pub use merge::{MergedChapter, merge_chapter, merge_segments};

use crate::config::CoreConfig;
use crate::discovery::ChapterFolder;
use crate::external::FfmpegSpawner;
use crate::reporting::RunSummary;

use log::debug;
use std::time::Instant;

/// Merges every chapter in order, one ffmpeg process at a time.
///
/// A failing chapter is recorded in the summary and the loop moves on.
pub fn merge_chapters<S: FfmpegSpawner>(
    spawner: &S,
    config: &CoreConfig,
    chapters: &[ChapterFolder],
) -> RunSummary {
    let start = Instant::now();
    let mut summary = RunSummary::default();

    for chapter in chapters {
        let report = merge_chapter(spawner, config, chapter);
        debug!(
            "Chapter {} finished: {}",
            report.chapter,
            if report.is_success() { "merged" } else { "failed" }
        );
        summary.reports.push(report);
    }

    summary.elapsed = start.elapsed();
    summary
}
