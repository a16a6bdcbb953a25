// ============================================================================
// segmerge-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// Every field has a default, so `CoreConfigBuilder::new().build()` yields the
// fixed lectures/merged_output layout.

use std::path::PathBuf;

use super::CoreConfig;

/// Builder for creating CoreConfig instances.
#[derive(Debug, Clone)]
pub struct CoreConfigBuilder {
    config: CoreConfig,
}

impl Default for CoreConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreConfigBuilder {
    /// Creates a new CoreConfigBuilder with default values.
    pub fn new() -> Self {
        Self {
            config: CoreConfig::default(),
        }
    }

    /// Sets the root directory scanned for chapter folders.
    pub fn input_dir(mut self, input_dir: PathBuf) -> Self {
        self.config.input_dir = input_dir;
        self
    }

    /// Sets the directory merged files are written to.
    pub fn output_dir(mut self, output_dir: PathBuf) -> Self {
        self.config.output_dir = output_dir;
        self
    }

    /// Sets the directory for transient concat manifests.
    pub fn temp_dir(mut self, temp_dir: PathBuf) -> Self {
        self.config.temp_dir = Some(temp_dir);
        self
    }

    /// Sets the segment extension. A leading dot is stripped.
    pub fn extension(mut self, extension: &str) -> Self {
        self.config.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Sets whether ffmpeg output is shown.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    /// Builds the CoreConfig. Call `CoreConfig::validate` before use.
    pub fn build(self) -> CoreConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = CoreConfigBuilder::new().build();
        assert_eq!(config.input_dir, PathBuf::from(super::super::DEFAULT_INPUT_DIR));
        assert_eq!(config.output_dir, PathBuf::from(super::super::DEFAULT_OUTPUT_DIR));
        assert!(config.temp_dir.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let config = CoreConfigBuilder::new()
            .input_dir(PathBuf::from("in"))
            .output_dir(PathBuf::from("out"))
            .temp_dir(PathBuf::from("tmp"))
            .extension("..mkv")
            .verbose(true)
            .build();

        assert_eq!(config.input_dir, PathBuf::from("in"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.temp_dir, Some(PathBuf::from("tmp")));
        assert_eq!(config.extension, "mkv");
        assert!(config.verbose);
    }
}
