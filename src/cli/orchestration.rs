//! Main bump workflow orchestration
//!
//! Runs the pubspec editor and then, if that succeeded, the Gradle editor.
//! Kept free of clap and console output so it can be driven from tests.

use std::path::PathBuf;

use tracing::{info_span, warn};

use crate::config::Config;
use crate::error::{BumpError, Result};
use crate::gradle::{self, GradleOutcome};
use crate::pubspec::{self, BuildBump};
use crate::warning::BumpWarning;

/// Process exit code when the pubspec could not be bumped
pub const EXIT_PUBSPEC_FAILED: i32 = 1;
/// Process exit code when the pubspec was bumped but Gradle was not updated
pub const EXIT_GRADLE_FAILED: i32 = 2;
/// Process exit code when configuration could not be loaded
pub const EXIT_CONFIG_FAILED: i32 = 3;

/// Paths of the two files a run touches
#[derive(Debug, Clone, PartialEq)]
pub struct BumpPaths {
    pub pubspec: PathBuf,
    pub gradle: PathBuf,
}

/// Arguments for the bump workflow
///
/// Mirrors the CLI Args after merging with the loaded [`Config`].
#[derive(Debug, Clone, PartialEq)]
pub struct BumpArgs {
    pub paths: BumpPaths,

    /// Token marking Gradle properties delegated to tooling defaults
    pub delegation_marker: String,

    /// Only bump the pubspec
    pub skip_gradle: bool,

    /// Compute the new version without writing any file
    pub dry_run: bool,
}

impl BumpArgs {
    /// Arguments taken entirely from configuration
    pub fn from_config(config: &Config) -> Self {
        BumpArgs {
            paths: BumpPaths {
                pubspec: config.paths.pubspec.clone(),
                gradle: config.paths.gradle.clone(),
            },
            delegation_marker: config.gradle.delegation_marker.clone(),
            skip_gradle: !config.gradle.enabled,
            dry_run: false,
        }
    }

    /// Check values that may come from the command line
    pub fn validate(&self) -> Result<()> {
        gradle::validate_marker(&self.delegation_marker)
    }
}

/// What happened to the Gradle file
#[derive(Debug)]
pub enum GradleStatus {
    Updated {
        version_code_line: usize,
        version_name_line: usize,
    },
    Delegated,
    Skipped,
    Failed(BumpError),
}

/// Result of a bump workflow whose pubspec step succeeded
#[derive(Debug)]
pub struct BumpReport {
    pub bump: BuildBump,
    pub gradle: GradleStatus,
}

impl BumpReport {
    /// True when both files are consistent with the new version
    pub fn is_complete(&self) -> bool {
        !matches!(self.gradle, GradleStatus::Failed(_))
    }

    /// Process exit code for this report
    pub fn exit_code(&self) -> i32 {
        if self.is_complete() {
            0
        } else {
            EXIT_GRADLE_FAILED
        }
    }

    /// The warning to show the user, if any
    pub fn warning(&self, args: &BumpArgs) -> Option<BumpWarning> {
        match &self.gradle {
            GradleStatus::Updated { .. } => None,
            GradleStatus::Delegated => Some(BumpWarning::GradleDelegated {
                path: args.paths.gradle.clone(),
                marker: args.delegation_marker.clone(),
                version: self.bump.current.clone(),
            }),
            GradleStatus::Skipped => Some(BumpWarning::GradleSkipped),
            GradleStatus::Failed(err) => Some(BumpWarning::GradleNotUpdated {
                path: args.paths.gradle.clone(),
                reason: err.to_string(),
            }),
        }
    }
}

/// Main bump workflow
///
/// 1. Bump the build number in the pubspec (errors propagate, nothing written)
/// 2. Propagate the new version to Gradle (errors are captured in the report)
pub fn run_bump(args: &BumpArgs) -> Result<BumpReport> {
    let span = info_span!("bump", dry_run = args.dry_run);
    let _enter = span.enter();

    let bump = pubspec::bump_pubspec(&args.paths.pubspec, args.dry_run)?;

    let gradle = if args.skip_gradle {
        GradleStatus::Skipped
    } else {
        match gradle::sync_gradle(
            &args.paths.gradle,
            &bump.current,
            &args.delegation_marker,
            args.dry_run,
        ) {
            Ok(GradleOutcome::Updated {
                version_code_line,
                version_name_line,
            }) => GradleStatus::Updated {
                version_code_line,
                version_name_line,
            },
            Ok(GradleOutcome::DelegatedToDefaults) => GradleStatus::Delegated,
            Err(err) => {
                warn!(error = %err, "gradle update failed");
                GradleStatus::Failed(err)
            }
        }
    };

    Ok(BumpReport { bump, gradle })
}
