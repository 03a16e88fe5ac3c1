//! UI utilities for terminal output
//!
//! Progress spinners and bars shown on stderr while commands run.

mod spinner;

pub use spinner::{create_progress_bar, create_spinner, finish_spinner, report_error};
