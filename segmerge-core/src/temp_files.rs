//! Temporary file management utilities.
//!
//! Transient files are owned by `tempfile::NamedTempFile`, which removes
//! them from disk when dropped, so cleanup also happens on error paths.

use crate::error::CoreResult;
use std::path::Path;
use tempfile::{Builder as TempFileBuilder, NamedTempFile};

/// Creates a temporary file with prefix and extension in `dir`. Auto-deleted when dropped.
pub fn create_temp_file(dir: &Path, prefix: &str, extension: &str) -> CoreResult<NamedTempFile> {
    std::fs::create_dir_all(dir)?;
    let temp_file = TempFileBuilder::new()
        .prefix(&format!("{prefix}_"))
        .suffix(&format!(".{extension}"))
        .tempfile_in(dir)?;

    Ok(temp_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_temp_file_is_removed_on_drop() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let temp = create_temp_file(dir.path(), "temp_concat_list", "txt")?;
        let path = temp.path().to_path_buf();

        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("temp_concat_list_"));
        assert!(name.ends_with(".txt"));
        assert!(path.exists());

        drop(temp);
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_creates_missing_directory() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let nested = dir.path().join("a").join("b");
        let temp = create_temp_file(&nested, "list", "txt")?;
        assert!(temp.path().starts_with(&nested));
        Ok(())
    }
}
