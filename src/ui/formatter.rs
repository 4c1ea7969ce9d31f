//! Formatting functions for UI output.
//!
//! Everything the user reads goes through here; diagnostic logging goes
//! through `tracing` instead.

use console::style;

use crate::cli::orchestration::{BumpArgs, BumpReport, GradleStatus};
use crate::domain::VersionRecord;
use crate::warning::BumpWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a non-fatal warning.
pub fn display_warning(warning: &BumpWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Render the pubspec change as `from -> to` lines.
pub fn format_version_change(from: &str, to: &str) -> String {
    format!("  From: {}\n  To:   {}", style(from).red(), style(to).green())
}

/// Closing line of a successful run.
pub fn summary_line(version: &VersionRecord, dry_run: bool) -> String {
    if dry_run {
        format!(
            "{} Your app version would be: {} (dry run, nothing written)",
            style("→").yellow(),
            style(version).bold()
        )
    } else {
        format!(
            "{} Your app version is now: {}",
            style("✓").green(),
            style(version).bold()
        )
    }
}

/// Display everything a finished run has to say.
///
/// # Arguments
/// * `report` - Outcome of the workflow
/// * `args` - The arguments the workflow ran with, for paths and marker
pub fn display_report(report: &BumpReport, args: &BumpArgs) {
    let pubspec = args.paths.pubspec.display();
    let gradle = args.paths.gradle.display();
    let bump = &report.bump;

    if args.dry_run {
        display_status(&format!("Dry run: {} would change", pubspec));
    } else {
        display_success(&format!(
            "Updated {} version (line {})",
            pubspec, bump.line_number
        ));
    }
    println!(
        "{}",
        format_version_change(&bump.previous.to_string(), &bump.current.to_string())
    );

    match &report.gradle {
        GradleStatus::Updated {
            version_code_line,
            version_name_line,
        } => {
            let verb = if args.dry_run { "Would update" } else { "Updated" };
            display_success(&format!(
                "{} {} versionCode to {} (line {}) and versionName to {} (line {})",
                verb,
                gradle,
                bump.current.build_number,
                version_code_line,
                bump.current.version_name,
                version_name_line
            ));
        }
        GradleStatus::Delegated | GradleStatus::Skipped | GradleStatus::Failed(_) => {}
    }

    if let Some(warning) = report.warning(args) {
        display_warning(&warning);
    }

    if report.is_complete() {
        println!("\n{}\n", summary_line(&bump.current, args.dry_run));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_version_change_contains_both_versions() {
        console::set_colors_enabled(false);
        let out = format_version_change("1.2.3+4", "1.2.3+5");
        assert_eq!(out, "  From: 1.2.3+4\n  To:   1.2.3+5");
    }

    #[test]
    fn test_summary_line_dry_run() {
        console::set_colors_enabled(false);
        let version = VersionRecord::new("2.0.0", 10);
        assert_eq!(
            summary_line(&version, false),
            "✓ Your app version is now: 2.0.0+10"
        );
        let dry = summary_line(&version, true);
        assert!(dry.contains("would be: 2.0.0+10"));
        assert!(!dry.contains("is now"));
    }

    #[test]
    fn test_display_functions_do_not_panic() {
        display_error("test error");
        display_success("test success");
        display_status("test status");
        display_warning(&BumpWarning::GradleSkipped);
    }
}
