use std::path::{Path, PathBuf};

use thiserror::Error;

/// Unified error type for build-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("No version pattern found in {}", .path.display())]
    PatternNotFound { path: PathBuf },

    #[error("Build number {value} cannot be incremented")]
    BuildNumberOverflow { value: String },

    #[error("Cannot find {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Only {found} was found in {}, refusing a partial update", .path.display())]
    PartialFieldsFound { path: PathBuf, found: &'static str },

    #[error("Could not locate version properties in {}", .path.display())]
    VersionFieldsNotFound { path: PathBuf },

    #[error("Invalid line pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in build-bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    pub fn pattern_not_found(path: impl AsRef<Path>) -> Self {
        BumpError::PatternNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn file_not_found(path: impl AsRef<Path>) -> Self {
        BumpError::FileNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn partial_fields(path: impl AsRef<Path>, found: &'static str) -> Self {
        BumpError::PartialFieldsFound {
            path: path.as_ref().to_path_buf(),
            found,
        }
    }

    pub fn fields_not_found(path: impl AsRef<Path>) -> Self {
        BumpError::VersionFieldsNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }
}
