use crate::error::{BumpError, Result};
use std::fmt;

/// A semantic version paired with its build number (`1.2.3+4`).
///
/// The semantic version is kept as an opaque string; only the build number
/// is ever changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    pub version_name: String,
    pub build_number: u64,
}

impl VersionRecord {
    /// Create a new version record
    pub fn new(version_name: impl Into<String>, build_number: u64) -> Self {
        VersionRecord {
            version_name: version_name.into(),
            build_number,
        }
    }

    /// Build a record from the captured digits of a version line.
    pub fn from_parts(version_name: &str, build_digits: &str) -> Result<Self> {
        let build_number =
            build_digits
                .parse::<u64>()
                .map_err(|_| BumpError::BuildNumberOverflow {
                    value: build_digits.to_string(),
                })?;
        Ok(VersionRecord::new(version_name, build_number))
    }

    /// Return the next record, with the build number incremented by one
    pub fn next_build(&self) -> Result<Self> {
        let build_number =
            self.build_number
                .checked_add(1)
                .ok_or_else(|| BumpError::BuildNumberOverflow {
                    value: self.build_number.to_string(),
                })?;
        Ok(VersionRecord {
            version_name: self.version_name.clone(),
            build_number,
        })
    }
}

impl fmt::Display for VersionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.version_name, self.build_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_build_increments_by_one() {
        let record = VersionRecord::new("1.2.3", 4);
        let next = record.next_build().unwrap();
        assert_eq!(next, VersionRecord::new("1.2.3", 5));
    }

    #[test]
    fn test_next_build_keeps_version_name() {
        let record = VersionRecord::new("10.0.1", 0);
        assert_eq!(record.next_build().unwrap().version_name, "10.0.1");
    }

    #[test]
    fn test_next_build_overflow() {
        let record = VersionRecord::new("1.0.0", u64::MAX);
        assert!(matches!(
            record.next_build(),
            Err(BumpError::BuildNumberOverflow { .. })
        ));
    }

    #[test]
    fn test_from_parts() {
        let record = VersionRecord::from_parts("2.0.0", "0041").unwrap();
        assert_eq!(record, VersionRecord::new("2.0.0", 41));
    }

    #[test]
    fn test_from_parts_too_large() {
        let digits = "99999999999999999999999";
        assert!(VersionRecord::from_parts("1.0.0", digits).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(VersionRecord::new("1.2.3", 8).to_string(), "1.2.3+8");
    }
}
