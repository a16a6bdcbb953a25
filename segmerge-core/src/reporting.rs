//! Per-chapter outcomes and the aggregate run summary.

use std::path::PathBuf;
use std::time::Duration;

/// Result of merging one chapter folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChapterOutcome {
    /// ffmpeg exited cleanly and the output file exists.
    Merged {
        output_path: PathBuf,
        output_size: u64,
        elapsed: Duration,
    },
    /// Any per-chapter error; the run continued with the next chapter.
    Failed { reason: String },
}

/// Outcome of one chapter together with its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterReport {
    pub chapter: String,
    pub segment_count: usize,
    pub outcome: ChapterOutcome,
}

impl ChapterReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ChapterOutcome::Merged { .. })
    }
}

/// All chapter reports of a run, in processing order.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub reports: Vec<ChapterReport>,
    pub elapsed: Duration,
}

impl RunSummary {
    #[must_use]
    pub fn total(&self) -> usize {
        self.reports.len()
    }

    #[must_use]
    pub fn successful(&self) -> usize {
        self.reports.iter().filter(|r| r.is_success()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.total() - self.successful()
    }

    /// Reports of the chapters that failed.
    pub fn failures(&self) -> impl Iterator<Item = &ChapterReport> {
        self.reports.iter().filter(|r| !r.is_success())
    }

    /// Sum of the merged output sizes.
    #[must_use]
    pub fn total_output_bytes(&self) -> u64 {
        self.reports
            .iter()
            .map(|r| match r.outcome {
                ChapterOutcome::Merged { output_size, .. } => output_size,
                ChapterOutcome::Failed { .. } => 0,
            })
            .sum()
    }
}
