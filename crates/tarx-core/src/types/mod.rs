//! Validated value types.
//!
//! Types in this module are checked on construction and cannot be built
//! from raw paths without going through validation.

pub mod archive;

pub use archive::TAR_SUFFIX;
pub use archive::TarArchive;

use serde::Serializer;
use std::path::Path;

/// Serializes a path as a string, replacing non-UTF-8 bytes.
pub(crate) fn serialize_path_lossy<P, S>(path: &P, serializer: S) -> Result<S::Ok, S::Error>
where
    P: AsRef<Path>,
    S: Serializer,
{
    serializer.serialize_str(&path.as_ref().to_string_lossy())
}
