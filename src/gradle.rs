//! Propagation of a bumped version into `android/app/build.gradle`.

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::{debug, info, warn};

use crate::domain::{join_with_replacements, split_lines, VersionRecord};
use crate::error::{BumpError, Result};

pub const VERSION_CODE_PATTERN: &str = r"^(\s*versionCode\s+)([0-9]+)(.*)$";
pub const VERSION_NAME_PATTERN: &str = r#"^(\s*versionName\s+["'])(.+)(["'].*)$"#;

/// Marker token Flutter's Gradle templates use for delegated version values
pub const DEFAULT_DELEGATION_MARKER: &str = "flutter";

/// Result of scanning a Gradle file for version properties
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradleEdit {
    /// Both properties found; `content` holds the rewritten file
    Rewritten {
        content: String,
        version_code_line: usize,
        version_name_line: usize,
    },
    /// Neither property is literal, but a delegation marker line exists
    DelegatedToDefaults,
    /// Only one property was found
    Partial { found: &'static str },
    NotFound,
}

/// Successful outcome of [`sync_gradle`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradleOutcome {
    Updated {
        version_code_line: usize,
        version_name_line: usize,
    },
    DelegatedToDefaults,
}

/// Reject a marker that would make every `versionCode`/`versionName` line
/// look delegated.
pub fn validate_marker(marker: &str) -> Result<()> {
    if marker.trim().is_empty() {
        return Err(BumpError::config("delegation marker must not be empty"));
    }
    Ok(())
}

/// Build the regex that recognises a property delegated to `marker`.
fn delegation_pattern(marker: &str) -> Result<Regex> {
    let pattern = format!(
        r"^\s*(versionCode|versionName)\s+{}",
        regex::escape(marker)
    );
    Ok(Regex::new(&pattern)?)
}

/// Rewrite `versionCode` and `versionName` in `content` from `record`.
///
/// Each property is replaced at its first occurrence only. Nothing is
/// rewritten unless both are present.
pub fn sync_versions(content: &str, record: &VersionRecord, marker: &str) -> Result<GradleEdit> {
    let code_re = Regex::new(VERSION_CODE_PATTERN)?;
    let name_re = Regex::new(VERSION_NAME_PATTERN)?;
    let lines = split_lines(content);

    let mut code_line: Option<(usize, String)> = None;
    let mut name_line: Option<(usize, String)> = None;

    for (index, line) in lines.iter().enumerate() {
        if code_line.is_none() {
            if let Some(caps) = code_re.captures(line.body) {
                let body = format!("{}{}{}", &caps[1], record.build_number, &caps[3]);
                debug!(line = index + 1, from = line.body, to = %body, "rewriting versionCode");
                code_line = Some((index, body));
                continue;
            }
        }

        if name_line.is_none() {
            if let Some(caps) = name_re.captures(line.body) {
                let body = format!("{}{}{}", &caps[1], record.version_name, &caps[3]);
                debug!(line = index + 1, from = line.body, to = %body, "rewriting versionName");
                name_line = Some((index, body));
            }
        }
    }

    let edit = match (code_line, name_line) {
        (Some(code), Some(name)) => {
            let (code_index, name_index) = (code.0, name.0);
            GradleEdit::Rewritten {
                content: join_with_replacements(&lines, &[code, name]),
                version_code_line: code_index + 1,
                version_name_line: name_index + 1,
            }
        }
        (Some(_), None) => GradleEdit::Partial {
            found: "versionCode",
        },
        (None, Some(_)) => GradleEdit::Partial {
            found: "versionName",
        },
        (None, None) if marker.trim().is_empty() => GradleEdit::NotFound,
        (None, None) => {
            let marker_re = delegation_pattern(marker)?;
            if lines.iter().any(|line| marker_re.is_match(line.body)) {
                GradleEdit::DelegatedToDefaults
            } else {
                GradleEdit::NotFound
            }
        }
    };

    Ok(edit)
}

/// Update the Gradle file at `path` with `record`.
///
/// Writes only when both properties were rewritten and `dry_run` is false.
pub fn sync_gradle(
    path: &Path,
    record: &VersionRecord,
    marker: &str,
    dry_run: bool,
) -> Result<GradleOutcome> {
    if !path.exists() {
        return Err(BumpError::file_not_found(path));
    }

    let content = fs::read_to_string(path)?;

    match sync_versions(&content, record, marker)? {
        GradleEdit::Rewritten {
            content,
            version_code_line,
            version_name_line,
        } => {
            if dry_run {
                info!(path = %path.display(), "dry run, build.gradle left untouched");
            } else {
                fs::write(path, content)?;
                info!(path = %path.display(), version = %record, "build.gradle updated");
            }
            Ok(GradleOutcome::Updated {
                version_code_line,
                version_name_line,
            })
        }
        GradleEdit::DelegatedToDefaults => {
            info!(path = %path.display(), marker, "version properties delegated");
            Ok(GradleOutcome::DelegatedToDefaults)
        }
        GradleEdit::Partial { found } => {
            warn!(path = %path.display(), found, "partial version properties");
            Err(BumpError::partial_fields(path, found))
        }
        GradleEdit::NotFound => Err(BumpError::fields_not_found(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> VersionRecord {
        VersionRecord::new("1.2.3", 8)
    }

    #[test]
    fn test_rewrites_both_fields() {
        let content = "android {\n    defaultConfig {\n        versionCode 7\n        versionName \"1.2.3\"\n    }\n}\n";
        let edit = sync_versions(content, &record(), DEFAULT_DELEGATION_MARKER).unwrap();
        assert_eq!(
            edit,
            GradleEdit::Rewritten {
                content: "android {\n    defaultConfig {\n        versionCode 8\n        versionName \"1.2.3\"\n    }\n}\n".to_string(),
                version_code_line: 3,
                version_name_line: 4,
            }
        );
    }

    #[test]
    fn test_single_quotes_and_suffix_preserved() {
        let content = "versionName '0.1.0' // name\nversionCode 41 // code\n";
        let edit = sync_versions(content, &VersionRecord::new("0.2.0", 42), "flutter").unwrap();
        match edit {
            GradleEdit::Rewritten { content, .. } => {
                assert_eq!(content, "versionName '0.2.0' // name\nversionCode 42 // code\n");
            }
            other => panic!("unexpected edit: {:?}", other),
        }
    }

    #[test]
    fn test_first_occurrence_wins() {
        let content = "versionCode 1\nversionName \"a\"\nversionCode 2\nversionName \"b\"\n";
        let edit = sync_versions(content, &record(), "flutter").unwrap();
        match edit {
            GradleEdit::Rewritten { content, .. } => {
                assert_eq!(
                    content,
                    "versionCode 8\nversionName \"1.2.3\"\nversionCode 2\nversionName \"b\"\n"
                );
            }
            other => panic!("unexpected edit: {:?}", other),
        }
    }

    #[test]
    fn test_delegated_to_flutter() {
        let content = "versionCode flutter.versionCode\nversionName flutter.versionName\n";
        let edit = sync_versions(content, &record(), "flutter").unwrap();
        assert_eq!(edit, GradleEdit::DelegatedToDefaults);
    }

    #[test]
    fn test_custom_marker() {
        let content = "    versionCode $buildCode\n";
        let edit = sync_versions(content, &record(), "$buildCode").unwrap();
        assert_eq!(edit, GradleEdit::DelegatedToDefaults);
    }

    #[test]
    fn test_partial_version_code_only() {
        let edit = sync_versions("versionCode 7\n", &record(), "flutter").unwrap();
        assert_eq!(
            edit,
            GradleEdit::Partial {
                found: "versionCode"
            }
        );
    }

    #[test]
    fn test_partial_ignores_marker() {
        let content = "versionCode 7\nversionName flutter.versionName\n";
        let edit = sync_versions(content, &record(), "flutter").unwrap();
        assert_eq!(
            edit,
            GradleEdit::Partial {
                found: "versionCode"
            }
        );
    }

    #[test]
    fn test_not_found() {
        let edit = sync_versions("android {\n}\n", &record(), "flutter").unwrap();
        assert_eq!(edit, GradleEdit::NotFound);
    }

    #[test]
    fn test_empty_marker_never_delegates() {
        let content = "versionCode = 7\nversionName = \"1.0.0\"\n";
        for marker in ["", "  "] {
            let edit = sync_versions(content, &record(), marker).unwrap();
            assert_eq!(edit, GradleEdit::NotFound);
        }
    }

    #[test]
    fn test_validate_marker() {
        assert!(validate_marker("flutter").is_ok());
        assert!(matches!(validate_marker(""), Err(BumpError::Config(_))));
        assert!(matches!(validate_marker(" \t"), Err(BumpError::Config(_))));
    }

    #[test]
    fn test_kotlin_assignment_is_not_matched() {
        let edit = sync_versions("versionCode = 7\nversionName = \"1.0.0\"\n", &record(), "flutter")
            .unwrap();
        assert_eq!(edit, GradleEdit::NotFound);
    }
}
