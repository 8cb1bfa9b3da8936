//! Validated tar archive reference type.

use crate::Result;
use crate::TarxError;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

/// File name suffix every archive reference must carry.
pub const TAR_SUFFIX: &str = ".tar";

/// A validated reference to a tar archive on disk.
///
/// Construction only checks the naming convention: the final path segment
/// must end in `.tar`. The file is not opened, and its contents are never
/// inspected; the external tool is responsible for that.
///
/// # Examples
///
/// ```
/// use tarx_core::TarArchive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let archive = TarArchive::new("/data/set1.tar")?;
/// assert_eq!(archive.name(), "set1");
/// assert_eq!(archive.parent_dir(), std::path::Path::new("/data"));
///
/// assert!(TarArchive::new("/data/set1.tar.gz").is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TarArchive(#[serde(serialize_with = "super::serialize_path_lossy")] PathBuf);

impl TarArchive {
    /// Creates a new `TarArchive` after validating the path.
    ///
    /// # Errors
    ///
    /// Returns [`TarxError::InvalidArgument`] if:
    /// - The path is empty
    /// - The path has no final segment (for example `/` or `..`)
    /// - The final segment does not end with `.tar`
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if path.as_os_str().is_empty() {
            return Err(invalid(path, "path is empty"));
        }

        let Some(file_name) = path.file_name() else {
            return Err(invalid(path, "path has no file name"));
        };

        if !file_name
            .as_encoded_bytes()
            .ends_with(TAR_SUFFIX.as_bytes())
        {
            return Err(invalid(path, "file name does not end with '.tar'"));
        }

        Ok(Self(path))
    }

    /// Returns the archive path exactly as given.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Returns the file name with the trailing `.tar` removed.
    ///
    /// Only the final suffix is stripped, so `thing.tar.backup.tar` yields
    /// `thing.tar.backup`. Non-UTF-8 bytes are replaced lossily.
    #[must_use]
    pub fn name(&self) -> String {
        let file_name = self
            .0
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();

        file_name
            .strip_suffix(TAR_SUFFIX)
            .unwrap_or(&*file_name)
            .to_string()
    }

    /// Returns the directory containing the archive.
    ///
    /// A bare file name such as `set1.tar` lives in the current directory,
    /// which is returned as `.`.
    #[must_use]
    pub fn parent_dir(&self) -> &Path {
        match self.0.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Converts into the inner `PathBuf`.
    #[inline]
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

fn invalid(path: PathBuf, reason: &str) -> TarxError {
    TarxError::InvalidArgument {
        path,
        reason: reason.to_string(),
    }
}

impl AsRef<Path> for TarArchive {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for TarArchive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl TryFrom<PathBuf> for TarArchive {
    type Error = TarxError;

    fn try_from(path: PathBuf) -> Result<Self> {
        Self::new(path)
    }
}

impl TryFrom<&Path> for TarArchive {
    type Error = TarxError;

    fn try_from(path: &Path) -> Result<Self> {
        Self::new(path)
    }
}

impl FromStr for TarArchive {
    type Err = TarxError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
