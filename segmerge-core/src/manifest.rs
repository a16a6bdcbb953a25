//! Concat manifests for ffmpeg's concat demuxer.
//!
//! A manifest is a list file with one `file '<path>'` line per segment. Paths
//! are absolute and single-quoted; an embedded `'` is written as `'\''`
//! (close quote, escaped quote, reopen quote), which is the only escaping
//! the concat list syntax needs inside single quotes.

use crate::config::MANIFEST_PREFIX;
use crate::error::CoreResult;
use crate::temp_files;

use std::fmt::Write as _;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Quotes a path for a concat list `file` directive.
#[must_use]
pub fn escape_concat_path(path: &str) -> String {
    format!("'{}'", path.replace('\'', r"'\''"))
}

/// Renders the manifest text for `segments`, one line per segment in input order.
///
/// Relative paths are resolved against the current working directory.
pub fn render_manifest(segments: &[PathBuf]) -> CoreResult<String> {
    let mut manifest = String::new();
    for segment in segments {
        let absolute = std::path::absolute(segment)?;
        let _ = writeln!(
            manifest,
            "file {}",
            escape_concat_path(&absolute.to_string_lossy())
        );
    }
    Ok(manifest)
}

/// Writes a manifest for `segments` into a new temporary file in `dir`.
///
/// The returned handle deletes the file when dropped.
pub fn write_manifest(dir: &Path, segments: &[PathBuf]) -> CoreResult<NamedTempFile> {
    let contents = render_manifest(segments)?;
    let mut file = temp_files::create_temp_file(dir, MANIFEST_PREFIX, "txt")?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;

    log::debug!(
        "Wrote concat manifest with {} entries to {}",
        segments.len(),
        file.path().display()
    );
    Ok(file)
}
