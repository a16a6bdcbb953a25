//! Terminal UI components and styling for segmerge.
//!
//! Output goes through `log::info!` so it lands wherever the CLI's logger
//! writes. Colors are dropped when `NO_COLOR` is set.

use console::style;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::info;
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::sync::{LazyLock, Mutex};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// Represents the visual hierarchy levels in the CLI output
#[derive(Debug, Clone, Copy)]
pub enum OutputLevel {
    /// Level 1: Main sections (===== SECTION =====)
    Section,
    /// Level 2: Subsections and major operations (» Operation)
    Subsection,
    /// Level 3: List items under an operation
    Progress,
    /// Level 4: Key-value status information
    Status,
}

impl OutputLevel {
    fn indent(&self) -> &'static str {
        match self {
            OutputLevel::Section => "",
            OutputLevel::Subsection => "  ",
            OutputLevel::Progress => "    ",
            OutputLevel::Status => "      ",
        }
    }
}

struct TerminalState {
    spinner: Option<ProgressBar>,
}

static TERMINAL_STATE: LazyLock<Mutex<TerminalState>> =
    LazyLock::new(|| Mutex::new(TerminalState { spinner: None }));

/// Check if color should be used (respects NO_COLOR environment variable)
fn should_use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print a section header for major workflow phases
pub fn print_section(title: &str) {
    info!("");
    if should_use_color() {
        info!("===== {} =====", title.to_uppercase().cyan());
    } else {
        info!("===== {} =====", title.to_uppercase());
    }
    info!("");
}

/// Print an item at the specified hierarchy level
pub fn print_item(level: OutputLevel, symbol: Option<&str>, text: &str, bold: bool) {
    let indent = level.indent();
    let prefix = symbol.map(|sym| format!("{sym} ")).unwrap_or_default();

    if should_use_color() && bold {
        info!("{indent}{prefix}{}", style(text).bold());
    } else {
        info!("{indent}{prefix}{text}");
    }
}

/// Print a subsection or processing step
pub fn print_processing(message: &str) {
    info!("");
    print_item(OutputLevel::Subsection, Some("»"), message, true);
}

/// Print a sub-item under a processing step
pub fn print_sub_item(message: &str) {
    print_item(OutputLevel::Progress, None, message, false);
}

/// Print a success message
pub fn print_success(message: &str) {
    if should_use_color() {
        info!("  ✓ {}", message.green());
    } else {
        info!("  ✓ {message}");
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    if should_use_color() {
        info!("  ⚠ {}", message.yellow());
    } else {
        info!("  ⚠ {message}");
    }
}

const STATUS_LABEL_WIDTH: usize = 15;

/// Spaces between a status label's colon and its value; at least one.
fn status_padding(label: &str) -> usize {
    STATUS_LABEL_WIDTH.saturating_sub(label.width()).max(1)
}

/// Print a status line (key-value pair)
pub fn print_status(label: &str, value: &str, highlight: bool) {
    let padding = status_padding(label);
    let indent = OutputLevel::Status.indent();

    if should_use_color() {
        let colored_value = match () {
            () if label.contains("Failed") && value != "0" => value.red().bold().to_string(),
            () if label.contains("Successful") && value != "0" => value.green().to_string(),
            () if highlight => value.bold().to_string(),
            () => value.to_string(),
        };
        info!("{indent}{label}:{} {colored_value}", " ".repeat(padding));
    } else {
        info!("{indent}{label}:{} {value}", " ".repeat(padding));
    }
}

/// Print an error message
pub fn print_error(title: &str, message: &str, suggestion: Option<&str>) {
    if should_use_color() {
        info!("  ✗ {}", title.red().bold());
    } else {
        info!("  ✗ {title}");
    }

    info!("");
    info!("  Message:  {message}");

    if let Some(suggestion_text) = suggestion {
        info!("");
        info!("  Suggestion: {suggestion_text}");
    }

    info!("");
}

/// Starts a spinner on stderr while a merge runs. Hidden when stderr is not a terminal.
pub fn start_spinner(message: &str) {
    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("  {spinner} {msg} ({elapsed})") {
        spinner.set_style(spinner_style);
    }
    spinner.set_message(message.to_string());

    if std::io::stderr().is_terminal() {
        spinner.enable_steady_tick(Duration::from_millis(100));
    } else {
        spinner.set_draw_target(ProgressDrawTarget::hidden());
    }

    if let Ok(mut state) = TERMINAL_STATE.lock() {
        if let Some(previous) = state.spinner.replace(spinner) {
            previous.finish_and_clear();
        }
    }
}

/// Clears the current spinner, if any.
pub fn clear_spinner() {
    if let Ok(mut state) = TERMINAL_STATE.lock() {
        if let Some(spinner) = state.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}
