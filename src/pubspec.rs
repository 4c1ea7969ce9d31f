//! Build number bumping for `pubspec.yaml`.
//!
//! Only the first `version: X.Y.Z+N` line is touched. Every other byte of the
//! file, including line terminators and trailing comments, is written back
//! unchanged.

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::{debug, info};

use crate::domain::{join_with_replacements, split_lines, VersionRecord};
use crate::error::{BumpError, Result};

/// Matches `version: 1.2.3+4`, capturing prefix, semver, build and suffix.
pub const VERSION_LINE_PATTERN: &str = r"^(\s*version:\s*)([0-9]+\.[0-9]+\.[0-9]+)\+([0-9]+)(.*)$";

/// Outcome of a successful build number bump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildBump {
    pub previous: VersionRecord,
    pub current: VersionRecord,
    /// 1-based line number of the rewritten line
    pub line_number: usize,
}

/// Increment the build number in `content`.
///
/// Returns the rewritten text and the bump details, or `None` when no line
/// matches the version pattern.
pub fn bump_build(content: &str) -> Result<Option<(String, BuildBump)>> {
    let re = Regex::new(VERSION_LINE_PATTERN)?;
    let lines = split_lines(content);

    for (index, line) in lines.iter().enumerate() {
        let Some(caps) = re.captures(line.body) else {
            continue;
        };

        let prefix = &caps[1];
        let previous = VersionRecord::from_parts(&caps[2], &caps[3])?;
        let suffix = &caps[4];
        let current = previous.next_build()?;

        let new_body = format!(
            "{}{}+{}{}",
            prefix, current.version_name, current.build_number, suffix
        );
        debug!(line = index + 1, from = line.body, to = %new_body, "rewriting version line");

        let rewritten = join_with_replacements(&lines, &[(index, new_body)]);
        return Ok(Some((
            rewritten,
            BuildBump {
                previous,
                current,
                line_number: index + 1,
            },
        )));
    }

    Ok(None)
}

/// Bump the build number of the pubspec at `path`.
///
/// The file is read fully, transformed in memory and written back only when
/// a version line was found and `dry_run` is false.
pub fn bump_pubspec(path: &Path, dry_run: bool) -> Result<BuildBump> {
    let content = fs::read_to_string(path)?;

    let (rewritten, bump) =
        bump_build(&content)?.ok_or_else(|| BumpError::pattern_not_found(path))?;

    if dry_run {
        info!(path = %path.display(), version = %bump.current, "dry run, pubspec left untouched");
    } else {
        fs::write(path, rewritten)?;
        info!(path = %path.display(), version = %bump.current, "pubspec updated");
    }

    Ok(bump)
}
