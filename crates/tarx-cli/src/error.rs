//! Error conversion utilities for CLI.
//!
//! Converts tarx-core's typed errors and failure records into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use std::path::Path;
use tarx_core::ExtractionFailure;
use tarx_core::FailureKind;
use tarx_core::TarxError;

/// Converts `TarxError` to user-friendly anyhow error with context
pub fn convert_tarx_error(err: TarxError, archive: &Path) -> anyhow::Error {
    match err {
        TarxError::InvalidArgument { reason, .. } => {
            anyhow!(
                "Not a tar archive: '{}' ({reason})\n\
                 HINT: Archive file names must end in '.tar'.",
                archive.display()
            )
        }
    }
}

/// Converts an `ExtractionFailure` to an anyhow error with guidance
pub fn convert_extraction_failure(failure: &ExtractionFailure) -> anyhow::Error {
    let archive = failure.archive();
    let details = failure.description().trim_end();

    match failure.kind() {
        FailureKind::Failed => {
            let status = failure
                .exit_code()
                .map_or_else(|| "terminated by signal".to_string(), |code| format!("exit code {code}"));
            anyhow!(
                "Extraction of '{archive}' failed ({status})\n{details}\n\
                 HINT: Check that the archive is intact and the destination directory exists and is writable."
            )
        }
        FailureKind::Io => {
            anyhow!(
                "Could not run tar for '{archive}': {details}\n\
                 HINT: Install tar or point --tar-program (or TARX_TAR_PROGRAM) at it."
            )
        }
        FailureKind::Interrupted => {
            anyhow!("Extraction of '{archive}' was interrupted: {details}")
        }
    }
}

/// Adds context to a validation result about an archive path
pub fn add_archive_context<T>(result: Result<T, TarxError>, archive: &Path) -> anyhow::Result<T> {
    result.map_err(|e| convert_tarx_error(e, archive))
}
