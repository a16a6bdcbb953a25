//! Merging one chapter: manifest, ffmpeg concat, output validation.

use crate::config::CoreConfig;
use crate::discovery::{ChapterFolder, find_segments};
use crate::error::{CoreError, CoreResult};
use crate::external::{FfmpegSpawner, build_concat_command, ffmpeg_executor::run_to_completion};
use crate::manifest;
use crate::reporting::{ChapterOutcome, ChapterReport};
use crate::terminal;
use crate::utils::{format_bytes, get_filename_safe, merged_output_path};

use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// A successfully merged chapter file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedChapter {
    pub output_path: PathBuf,
    pub output_size: u64,
    pub elapsed: Duration,
}

/// Concatenates `segments` (already ordered) into `<output_dir>/<chapter>_merged.<ext>`.
///
/// The manifest is removed before returning, whatever the outcome. The merge
/// only counts as successful when ffmpeg exits cleanly and the output file
/// exists afterwards.
///
/// # Errors
///
/// * `CoreError::NoSegmentsFound` - `segments` is empty; ffmpeg is not run
/// * `CoreError::CommandStart` / `CoreError::CommandFailed` - ffmpeg failed
/// * `CoreError::OutputMissing` - ffmpeg succeeded but wrote nothing
pub fn merge_segments<S: FfmpegSpawner>(
    spawner: &S,
    config: &CoreConfig,
    chapter: &str,
    segments: &[PathBuf],
) -> CoreResult<MergedChapter> {
    if segments.is_empty() {
        return Err(CoreError::NoSegmentsFound {
            chapter: chapter.to_string(),
            extension: config.extension.clone(),
        });
    }

    let start = Instant::now();
    std::fs::create_dir_all(&config.output_dir)?;
    let output_path = merged_output_path(&config.output_dir, chapter, &config.extension);

    let manifest = manifest::write_manifest(&config.manifest_dir(), segments)?;
    let cmd = build_concat_command(manifest.path(), &output_path);

    if !config.verbose {
        terminal::start_spinner(&format!("Merging {} segment(s)", segments.len()));
    }
    let run_result = run_to_completion(spawner, cmd, config.verbose);
    terminal::clear_spinner();

    let manifest_path = manifest.path().to_path_buf();
    if let Err(e) = manifest.close() {
        warn!("Failed to remove concat manifest {}: {e}", manifest_path.display());
    }
    run_result?;

    let output_size = output_file_size(&output_path)?;
    Ok(MergedChapter {
        output_path,
        output_size,
        elapsed: start.elapsed(),
    })
}

fn output_file_size(path: &Path) -> CoreResult<u64> {
    match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => Ok(metadata.len()),
        _ => Err(CoreError::OutputMissing(path.to_path_buf())),
    }
}

/// Discovers, merges and reports one chapter folder.
///
/// Never fails: every error becomes a `ChapterOutcome::Failed`.
pub fn merge_chapter<S: FfmpegSpawner>(
    spawner: &S,
    config: &CoreConfig,
    chapter: &ChapterFolder,
) -> ChapterReport {
    terminal::print_section(&format!("Processing: {}", chapter.name));

    let segments = match find_segments(&chapter.path, &config.extension) {
        Ok(segments) => segments,
        Err(e) => {
            terminal::print_error("Could not read chapter folder", &e.to_string(), None);
            return failed_report(chapter, 0, &e);
        }
    };

    if segments.is_empty() {
        let e = CoreError::NoSegmentsFound {
            chapter: chapter.name.clone(),
            extension: config.extension.clone(),
        };
        terminal::print_warning(&e.to_string());
        return failed_report(chapter, 0, &e);
    }

    terminal::print_processing(&format!("Found {} video file(s)", segments.len()));
    for (i, segment) in segments.iter().enumerate() {
        let name = get_filename_safe(segment).unwrap_or_else(|_| segment.display().to_string());
        terminal::print_sub_item(&format!("{}. {name}", i + 1));
    }

    let output_path = merged_output_path(&config.output_dir, &chapter.name, &config.extension);
    terminal::print_processing("Merging videos");
    terminal::print_status("Output", &output_path.display().to_string(), false);

    match merge_segments(spawner, config, &chapter.name, &segments) {
        Ok(merged) => {
            terminal::print_success(&format!(
                "Successfully merged! Output size: {}",
                format_bytes(merged.output_size)
            ));
            debug!("Merged {} in {:?}", chapter.name, merged.elapsed);
            ChapterReport {
                chapter: chapter.name.clone(),
                segment_count: segments.len(),
                outcome: ChapterOutcome::Merged {
                    output_path: merged.output_path,
                    output_size: merged.output_size,
                    elapsed: merged.elapsed,
                },
            }
        }
        Err(e) => {
            let title = match e {
                CoreError::OutputMissing(_) => "Output file was not created",
                _ => "FFmpeg error occurred",
            };
            terminal::print_error(title, &e.to_string(), None);
            failed_report(chapter, segments.len(), &e)
        }
    }
}

fn failed_report(chapter: &ChapterFolder, segment_count: usize, error: &CoreError) -> ChapterReport {
    ChapterReport {
        chapter: chapter.name.clone(),
        segment_count,
        outcome: ChapterOutcome::Failed {
            reason: error.to_string(),
        },
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::config::CoreConfigBuilder;
    use crate::external::mocks::MockFfmpegSpawner;
    use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
    use std::fs::{self, File};
    use tempfile::{TempDir, tempdir};

    struct Fixture {
        _root: TempDir,
        chapter: ChapterFolder,
        config: CoreConfig,
    }

    impl Fixture {
        fn new(segment_names: &[&str]) -> Self {
            let root = tempdir().unwrap();
            let chapter_path = root.path().join("lectures").join("3_Graphs");
            fs::create_dir_all(&chapter_path).unwrap();
            for name in segment_names {
                File::create(chapter_path.join(name)).unwrap();
            }

            let config = CoreConfigBuilder::new()
                .input_dir(root.path().join("lectures"))
                .output_dir(root.path().join("merged_output"))
                .temp_dir(root.path().join("work"))
                .build();

            Self {
                chapter: ChapterFolder {
                    path: chapter_path,
                    name: "3_Graphs".to_string(),
                    order: 3,
                },
                _root: root,
                config,
            }
        }

        fn leftover_manifests(&self) -> usize {
            match fs::read_dir(self.config.manifest_dir()) {
                Ok(entries) => entries.count(),
                Err(_) => 0,
            }
        }
    }

    #[test]
    fn test_merge_success_reports_output_size() {
        let fixture = Fixture::new(&["10 - B.mp4", "2 - A.mp4", "Intro.mp4"]);
        let spawner = MockFfmpegSpawner::new();
        spawner.add_success_expectation(vec![], true);

        let report = merge_chapter(&spawner, &fixture.config, &fixture.chapter);

        assert!(report.is_success(), "unexpected outcome: {:?}", report.outcome);
        assert_eq!(report.segment_count, 3);
        match &report.outcome {
            ChapterOutcome::Merged { output_path, output_size, .. } => {
                assert_eq!(
                    output_path,
                    &fixture.config.output_dir.join("3_Graphs_merged.mp4")
                );
                assert_eq!(*output_size, b"merged video bytes".len() as u64);
            }
            other => panic!("expected merge, got {other:?}"),
        }
        assert_eq!(fixture.leftover_manifests(), 0);
    }

    #[test]
    fn test_manifest_lists_segments_in_numeric_order() {
        let fixture = Fixture::new(&["10 - B.mp4", "2 - A.mp4", "Intro.mp4", "notes.txt"]);
        let spawner = MockFfmpegSpawner::new();
        spawner.add_success_expectation(vec![], true);

        merge_chapter(&spawner, &fixture.config, &fixture.chapter);

        let calls = spawner.get_received_calls();
        assert_eq!(calls.len(), 1);
        let contents = calls[0].manifest_contents.clone().expect("manifest readable at spawn");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("file '/") && lines[0].ends_with("/2 - A.mp4'"));
        assert!(lines[1].ends_with("/10 - B.mp4'"));
        assert!(lines[2].ends_with("/Intro.mp4'"));

        let manifest_path = calls[0].manifest_path.clone().unwrap();
        assert!(manifest_path.starts_with(fixture.config.manifest_dir()));
        assert!(!manifest_path.exists());
    }

    #[test]
    fn test_empty_chapter_fails_without_running_ffmpeg() {
        let fixture = Fixture::new(&["readme.txt"]);
        let spawner = MockFfmpegSpawner::new();

        let report = merge_chapter(&spawner, &fixture.config, &fixture.chapter);

        assert!(!report.is_success());
        assert_eq!(report.segment_count, 0);
        assert!(spawner.get_received_calls().is_empty());
        assert!(!fixture.config.output_dir.exists());
    }

    #[test]
    fn test_merge_segments_rejects_empty_input() {
        let fixture = Fixture::new(&[]);
        let spawner = MockFfmpegSpawner::new();

        let result = merge_segments(&spawner, &fixture.config, "3_Graphs", &[]);

        assert!(matches!(result, Err(CoreError::NoSegmentsFound { .. })));
        assert!(spawner.get_received_calls().is_empty());
    }

    #[test]
    fn test_ffmpeg_failure_still_removes_manifest() {
        let fixture = Fixture::new(&["1 - A.mp4", "2 - B.mp4"]);
        let spawner = MockFfmpegSpawner::new();
        spawner.add_exit_error_expectation(
            vec![
                FfmpegEvent::Log(LogLevel::Info, "Input #0, concat".to_string()),
                FfmpegEvent::Log(LogLevel::Error, "Invalid data found when processing input".to_string()),
            ],
            1,
        );

        let segments = find_segments(&fixture.chapter.path, "mp4").unwrap();
        let result = merge_segments(&spawner, &fixture.config, "3_Graphs", &segments);

        match result {
            Err(CoreError::CommandFailed { stderr, status, .. }) => {
                assert!(!status.success());
                assert_eq!(stderr, "Invalid data found when processing input");
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        }

        let calls = spawner.get_received_calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].manifest_contents.is_some());
        assert!(!calls[0].manifest_path.as_ref().unwrap().exists());
        assert_eq!(fixture.leftover_manifests(), 0);
    }

    #[test]
    fn test_spawn_failure_still_removes_manifest() {
        let fixture = Fixture::new(&["1 - A.mp4"]);
        let spawner = MockFfmpegSpawner::new();
        spawner.add_spawn_error_expectation(CoreError::OperationFailed("boom".to_string()));

        let report = merge_chapter(&spawner, &fixture.config, &fixture.chapter);

        assert!(!report.is_success());
        assert_eq!(report.segment_count, 1);
        assert_eq!(fixture.leftover_manifests(), 0);
    }

    #[test]
    fn test_clean_exit_without_output_is_failure() {
        let fixture = Fixture::new(&["1 - A.mp4"]);
        let spawner = MockFfmpegSpawner::new();
        spawner.add_success_expectation(vec![], false);

        let segments = find_segments(&fixture.chapter.path, "mp4").unwrap();
        let result = merge_segments(&spawner, &fixture.config, "3_Graphs", &segments);

        assert!(matches!(result, Err(CoreError::OutputMissing(_))));
        assert_eq!(fixture.leftover_manifests(), 0);
    }

    #[test]
    fn test_existing_output_is_overwritten() {
        let fixture = Fixture::new(&["1 - A.mp4"]);
        fs::create_dir_all(&fixture.config.output_dir).unwrap();
        let output = fixture.config.output_dir.join("3_Graphs_merged.mp4");
        fs::write(&output, b"stale").unwrap();

        let spawner = MockFfmpegSpawner::new();
        spawner.add_success_expectation(vec![], true);

        let report = merge_chapter(&spawner, &fixture.config, &fixture.chapter);

        assert!(report.is_success());
        assert!(spawner.get_received_calls()[0].args.contains(&"-y".to_string()));
        assert_eq!(fs::read(&output).unwrap(), b"merged video bytes");
    }
}
