//! Extraction outcome records.

use crate::TarArchive;
use serde::Serialize;
use serde::Serializer;
use std::fmt;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Result of a single extraction call.
///
/// Exactly one of the two records is produced per call.
pub type ExtractionOutcome = std::result::Result<ExtractionSuccess, ExtractionFailure>;

/// Record of an extraction whose external tool exited with status zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionSuccess {
    archive: TarArchive,
    #[serde(serialize_with = "crate::types::serialize_path_lossy")]
    destination: PathBuf,
}

impl ExtractionSuccess {
    /// Creates a new success record.
    #[must_use]
    pub fn new(archive: TarArchive, destination: impl Into<PathBuf>) -> Self {
        Self {
            archive,
            destination: destination.into(),
        }
    }

    /// Returns the archive that was extracted.
    #[must_use]
    pub fn archive(&self) -> &TarArchive {
        &self.archive
    }

    /// Returns the directory the archive was extracted into.
    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

/// Classification of an unsuccessful extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The external tool ran and exited with a non-zero status.
    Failed,
    /// The external tool could not be spawned or waited upon.
    Io,
    /// Waiting on the external tool was interrupted.
    Interrupted,
}

impl FailureKind {
    /// Returns the short summary tag for this kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use tarx_core::FailureKind;
    ///
    /// assert_eq!(FailureKind::Failed.summary(), "Failed");
    /// assert_eq!(FailureKind::Io.summary(), "IOException occurred");
    /// ```
    #[must_use]
    pub const fn summary(self) -> &'static str {
        match self {
            Self::Failed => "Failed",
            Self::Io => "IOException occurred",
            Self::Interrupted => "Interrupted",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.summary())
    }
}

impl Serialize for FailureKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.summary())
    }
}

/// Record of an extraction that did not complete with status zero.
///
/// The description holds the external tool's error output for
/// [`FailureKind::Failed`], or the underlying I/O error message otherwise.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("extraction of '{archive}' failed ({kind}): {description}")]
pub struct ExtractionFailure {
    archive: TarArchive,
    #[serde(rename = "summary")]
    kind: FailureKind,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    exit_code: Option<i32>,
}

impl ExtractionFailure {
    /// Creates a failure for a tool that exited unsuccessfully.
    ///
    /// `exit_code` is `None` when the process was terminated by a signal.
    #[must_use]
    pub fn exited(archive: TarArchive, exit_code: Option<i32>, diagnostics: String) -> Self {
        Self {
            archive,
            kind: FailureKind::Failed,
            description: diagnostics,
            exit_code,
        }
    }

    /// Creates a failure for a tool that could not be run to completion.
    #[must_use]
    pub fn io(archive: TarArchive, err: &std::io::Error) -> Self {
        let kind = if err.kind() == std::io::ErrorKind::Interrupted {
            FailureKind::Interrupted
        } else {
            FailureKind::Io
        };

        Self {
            archive,
            kind,
            description: err.to_string(),
            exit_code: None,
        }
    }

    /// Returns the archive whose extraction failed.
    #[must_use]
    pub fn archive(&self) -> &TarArchive {
        &self.archive
    }

    /// Returns the failure classification.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Returns the short summary tag.
    #[must_use]
    pub const fn summary(&self) -> &'static str {
        self.kind.summary()
    }

    /// Returns the diagnostic detail.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the tool's exit code, if it exited normally with one.
    #[must_use]
    pub const fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }
}
