//! Error types for prompting and scaffolding

use std::path::PathBuf;
use thiserror::Error;

/// Result type for builder operations.
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors that can occur while collecting settings or writing the package skeleton.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The package name was empty or whitespace only.
    #[error("The package name can not be empty")]
    EmptyName,

    /// The package name does not look like `vendor/product`.
    #[error("The package name is invalid, format: vendor/product")]
    InvalidName { name: String },

    /// The user ran out of attempts for a validated question.
    #[error("Giving up after {attempts} attempts: {last}")]
    TooManyAttempts {
        attempts: usize,
        #[source]
        last: Box<BuildError>,
    },

    /// Failed to create a directory.
    #[error("Failed to create directory {path:?}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a file.
    #[error("Failed to write file {path:?}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The user declined to continue.
    #[error("Setup cancelled.")]
    Cancelled,
}

impl BuildError {
    /// True for errors the prompt sequence recovers from by asking again.
    pub fn is_validation(&self) -> bool {
        matches!(self, BuildError::EmptyName | BuildError::InvalidName { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_recoverable() {
        assert!(BuildError::EmptyName.is_validation());
        assert!(BuildError::InvalidName {
            name: "Foo".to_string()
        }
        .is_validation());
        assert!(!BuildError::Cancelled.is_validation());
    }

    #[test]
    fn test_too_many_attempts_keeps_last_error() {
        let err = BuildError::TooManyAttempts {
            attempts: 5,
            last: Box::new(BuildError::EmptyName),
        };
        let message = err.to_string();
        assert!(message.contains("5 attempts"));
        assert!(message.contains("can not be empty"));
    }
}
