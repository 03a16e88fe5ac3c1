//! Progress spinner utilities

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Create a spinner with the given message
///
/// Returns `None` if quiet mode is enabled.
pub fn create_spinner(message: &str, quiet: bool) -> Option<ProgressBar> {
    if quiet {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(TICKS)
        .template("{spinner:.blue} {msg}")
    {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}

/// Create a bar counting finished units of work
///
/// Returns `None` if quiet mode is enabled.
pub fn create_progress_bar(total: u64, message: &str, quiet: bool) -> Option<ProgressBar> {
    if quiet {
        return None;
    }
    let bar = ProgressBar::new(total);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.blue} {msg} [{bar:30.cyan/blue}] {pos}/{len}")
    {
        bar.set_style(style.tick_strings(TICKS));
    }
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    Some(bar)
}

/// Finish spinner with a message
pub fn finish_spinner(spinner: Option<ProgressBar>, message: &str) {
    if let Some(s) = spinner {
        s.finish_with_message(message.to_string());
    }
}

/// Print an error line without tearing an active spinner
pub fn report_error(spinner: &Option<ProgressBar>, message: &str) {
    if let Some(s) = spinner {
        s.suspend(|| eprintln!("{}", message));
    } else {
        eprintln!("{}", message);
    }
}
