// ============================================================================
// segmerge-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger initialization for the CLI
//
// Console output from segmerge-core::terminal is emitted at info level, so
// info records are written bare to stdout. Other levels carry a prefix.
//
// USAGE:
// - default: info
// - --verbose: debug (also echoes ffmpeg's own output)
// - RUST_LOG overrides both, e.g. RUST_LOG=segmerge_core=trace

use log::{Level, LevelFilter};
use std::io::Write;

/// Log level used for the given verbosity flag.
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs the global logger. Safe to call more than once; later calls are ignored.
pub fn init_logging(verbose: bool) {
    let result = env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "[{level}] {}", record.args()),
        })
        .try_init();

    if result.is_ok() {
        log::debug!("Logger initialized with level: {}", level_for(verbose));
    }
}

/// Returns the current local timestamp formatted as "YYYY-MM-DD HH:MM:SS".
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
