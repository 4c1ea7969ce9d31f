//! User interface module - console output for the CLI.

pub mod formatter;

pub use formatter::{
    display_error, display_report, display_status, display_success, display_warning,
    format_version_change, summary_line,
};
