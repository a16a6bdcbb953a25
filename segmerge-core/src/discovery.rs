//! Discovery of chapter folders and their segment files.
//!
//! Only the top level of each directory is searched. Chapter folders must be
//! named `<digits>_...`; segments are the files inside a chapter folder with
//! the configured extension (case-insensitive). Both listings are returned in
//! ascending numeric-prefix order.

use crate::error::CoreResult;
use crate::ordering::{OrderKey, has_chapter_prefix, order_key};

use log::{debug, warn};
use std::path::{Path, PathBuf};

/// A numbered chapter directory under the lectures root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterFolder {
    /// Full path of the directory
    pub path: PathBuf,
    /// Directory name, used as the chapter identifier in output names
    pub name: String,
    /// Numeric prefix of the directory name
    pub order: u64,
}

/// Finds the chapter folders directly below `root`, ordered by numeric prefix.
///
/// A missing root is not an error: it is logged and an empty list is
/// returned so the caller can report it. Directory entries that cannot be
/// read are skipped. Names that are not valid UTF-8 are kept under their
/// lossy conversion.
///
/// # Examples
///
/// ```rust,no_run
/// use segmerge_core::find_chapter_folders;
/// use std::path::Path;
///
/// for chapter in find_chapter_folders(Path::new("CSE6250_Lectures")).unwrap() {
///     println!("{} -> {}", chapter.order, chapter.path.display());
/// }
/// ```
pub fn find_chapter_folders(root: &Path) -> CoreResult<Vec<ChapterFolder>> {
    if !root.exists() {
        warn!("Directory not found: {}", root.display());
        return Ok(Vec::new());
    }

    let mut chapters: Vec<ChapterFolder> = std::fs::read_dir(root)?
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if !path.is_dir() {
                return None;
            }

            let file_name = entry.file_name();
            let name = match file_name.to_str() {
                Some(name) => name.to_string(),
                None => {
                    let lossy = file_name.to_string_lossy().into_owned();
                    warn!("Directory name is not valid UTF-8, using '{lossy}': {}", path.display());
                    lossy
                }
            };
            if !has_chapter_prefix(&name) {
                debug!("Skipping non-chapter directory: {name}");
                return None;
            }

            let order = order_key(&name).index()?;
            Some(ChapterFolder { path, name, order })
        })
        .collect();

    chapters.sort_by_key(|chapter| chapter.order);
    debug!("Found {} chapter folder(s) in {}", chapters.len(), root.display());
    Ok(chapters)
}

/// Finds the segment files of a chapter folder, ordered by numeric prefix.
///
/// Files without a numeric prefix come after every numbered file; files
/// with equal keys keep their directory listing order.
pub fn find_segments(folder: &Path, extension: &str) -> CoreResult<Vec<PathBuf>> {
    let mut segments: Vec<PathBuf> = std::fs::read_dir(folder)?
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            has_extension(&path, extension).then_some(path)
        })
        .collect();

    segments.sort_by_key(|path| {
        path.file_name()
            .map(|name| order_key(&name.to_string_lossy()))
            .unwrap_or(OrderKey::Unordered)
    });
    Ok(segments)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}
