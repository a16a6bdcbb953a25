// segmerge-core/tests/discovery_tests.rs

use segmerge_core::discovery::{find_chapter_folders, find_segments};
use std::fs::{self, File};
use std::path::PathBuf;
use tempfile::tempdir;

fn names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_chapter_folders_sorted_numerically() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path();

    fs::create_dir(root.join("0_Intro"))?;
    fs::create_dir(root.join("10_Mid"))?;
    fs::create_dir(root.join("2_Early"))?;

    let chapters = find_chapter_folders(root)?;
    let orders: Vec<u64> = chapters.iter().map(|c| c.order).collect();
    let names: Vec<&str> = chapters.iter().map(|c| c.name.as_str()).collect();

    assert_eq!(orders, vec![0, 2, 10]);
    assert_eq!(names, vec!["0_Intro", "2_Early", "10_Mid"]);
    assert_eq!(chapters[0].path, root.join("0_Intro"));

    dir.close()?;
    Ok(())
}

#[test]
fn test_non_chapter_entries_are_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path();

    fs::create_dir(root.join("1_Basics"))?;
    fs::create_dir(root.join("Extras"))?; // no numeric prefix
    fs::create_dir(root.join("3-Dashed"))?; // wrong separator
    File::create(root.join("4_file_not_dir"))?; // not a directory
    fs::create_dir_all(root.join("1_Basics").join("5_Nested"))?; // not top level

    let chapters = find_chapter_folders(root)?;
    let names: Vec<&str> = chapters.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["1_Basics"]);

    dir.close()?;
    Ok(())
}

#[test]
fn test_missing_root_yields_empty_list() {
    let missing = PathBuf::from("surely_this_does_not_exist_42_lectures");
    let chapters = find_chapter_folders(&missing).expect("missing root is not an error");
    assert!(chapters.is_empty());
}

#[test]
fn test_empty_root_yields_empty_list() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    assert!(find_chapter_folders(dir.path())?.is_empty());
    Ok(())
}

#[test]
fn test_segments_sorted_with_unnumbered_last() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let chapter = dir.path();

    File::create(chapter.join("10 - A.mp4"))?;
    File::create(chapter.join("2 - B.mp4"))?;
    File::create(chapter.join("Intro.mp4"))?;
    File::create(chapter.join("0 - Introduction.mp4"))?;
    File::create(chapter.join("1 - slides.pdf"))?;

    let segments = find_segments(chapter, "mp4")?;
    assert_eq!(
        names(&segments),
        vec!["0 - Introduction.mp4", "2 - B.mp4", "10 - A.mp4", "Intro.mp4"]
    );

    dir.close()?;
    Ok(())
}

#[test]
fn test_segment_extension_match_ignores_case() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let chapter = dir.path();

    File::create(chapter.join("2 - upper.MP4"))?;
    File::create(chapter.join("1 - lower.mp4"))?;
    File::create(chapter.join("3 - other.mkv"))?;

    assert_eq!(
        names(&find_segments(chapter, "mp4")?),
        vec!["1 - lower.mp4", "2 - upper.MP4"]
    );
    assert_eq!(names(&find_segments(chapter, "mkv")?), vec!["3 - other.mkv"]);

    dir.close()?;
    Ok(())
}

#[test]
fn test_folder_without_segments_yields_empty_list() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join("notes.txt"))?;
    assert!(find_segments(dir.path(), "mp4")?.is_empty());
    Ok(())
}
