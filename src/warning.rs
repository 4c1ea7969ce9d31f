use std::fmt;
use std::path::PathBuf;

use crate::domain::VersionRecord;

/// Non-fatal conditions reported after the pubspec has been bumped.
#[derive(Debug, Clone, PartialEq)]
pub enum BumpWarning {
    /// Gradle reads its version from tooling defaults, which this run cannot verify
    GradleDelegated {
        path: PathBuf,
        marker: String,
        version: VersionRecord,
    },
    /// Gradle propagation was turned off
    GradleSkipped,
    /// Gradle update failed after the pubspec was already written
    GradleNotUpdated { path: PathBuf, reason: String },
}

impl fmt::Display for BumpWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpWarning::GradleDelegated {
                path,
                marker,
                version,
            } => write!(
                f,
                "Version properties in {} are delegated to '{}' defaults. \
                 Make sure your pubspec.yaml version ({}) is correct.",
                path.display(),
                marker,
                version
            ),
            BumpWarning::GradleSkipped => write!(f, "Gradle update skipped"),
            BumpWarning::GradleNotUpdated { path, reason } => write!(
                f,
                "Version update in {} failed: {}. You may need to update it manually.",
                path.display(),
                reason
            ),
        }
    }
}
