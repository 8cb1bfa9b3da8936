//! Error types for archive reference validation.
//!
//! Runtime extraction failures are not errors in this sense: they are
//! delivered as [`ExtractionFailure`](crate::ExtractionFailure) values.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `TarxError`.
pub type Result<T> = std::result::Result<T, TarxError>;

/// Errors raised synchronously before any extraction starts.
#[derive(Error, Debug)]
pub enum TarxError {
    /// The archive path was empty or does not name a `.tar` file.
    #[error("invalid archive path '{}': {reason}", path.display())]
    InvalidArgument {
        /// The rejected path.
        path: PathBuf,
        /// Why the path was rejected.
        reason: String,
    },
}

impl TarxError {
    /// Returns the rejected path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use tarx_core::TarArchive;
    ///
    /// let err = TarArchive::new("notes.txt").unwrap_err();
    /// assert_eq!(err.path(), Path::new("notes.txt"));
    /// ```
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::InvalidArgument { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = TarxError::InvalidArgument {
            path: PathBuf::from("data/set1.zip"),
            reason: "file name does not end with '.tar'".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("data/set1.zip"));
        assert!(msg.contains(".tar"));
    }

    #[test]
    fn test_path_accessor() {
        let err = TarxError::InvalidArgument {
            path: PathBuf::from("x.gz"),
            reason: "bad".into(),
        };
        assert_eq!(err.path(), std::path::Path::new("x.gz"));
    }
}
