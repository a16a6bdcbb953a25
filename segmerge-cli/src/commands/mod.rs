//! Command implementations for the CLI.

/// Chapter discovery and merging, the tool's only command.
pub mod merge;
