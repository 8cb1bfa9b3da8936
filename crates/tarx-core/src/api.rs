//! High-level public API for archive extraction.

use std::path::Path;

use crate::ExtractionOutcome;
use crate::ExtractorConfig;
use crate::Result;
use crate::TarArchive;
use crate::TarExtractor;

/// Extracts a tar archive into the directory that contains it.
///
/// Validates `archive_path` and runs the configured tool with the system
/// launcher.
///
/// # Arguments
///
/// * `archive_path` - Path to the `.tar` file
/// * `config` - Tool configuration
///
/// # Errors
///
/// Returns [`TarxError::InvalidArgument`](crate::TarxError::InvalidArgument)
/// if the path does not name a `.tar` file. Extraction failures are not
/// errors here; they are the `Err` side of the returned outcome.
///
/// # Examples
///
/// ```no_run
/// use tarx_core::ExtractorConfig;
/// use tarx_core::extract_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let outcome = extract_archive("/data/set1.tar", &ExtractorConfig::default())?;
/// if let Err(failure) = outcome {
///     eprintln!("{}", failure.description());
/// }
/// # Ok(())
/// # }
/// ```
pub fn extract_archive<P: AsRef<Path>>(
    archive_path: P,
    config: &ExtractorConfig,
) -> Result<ExtractionOutcome> {
    let archive = TarArchive::new(archive_path.as_ref())?;
    Ok(TarExtractor::with_config(config.clone()).extract(&archive))
}

/// Extracts a tar archive into `output_dir`.
///
/// # Arguments
///
/// * `archive_path` - Path to the `.tar` file
/// * `output_dir` - Existing directory to extract into
/// * `config` - Tool configuration
///
/// # Errors
///
/// Returns [`TarxError::InvalidArgument`](crate::TarxError::InvalidArgument)
/// if the path does not name a `.tar` file.
///
/// # Examples
///
/// ```no_run
/// use tarx_core::ExtractorConfig;
/// use tarx_core::extract_archive_to;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ExtractorConfig::default();
/// let success = extract_archive_to("/data/set1.tar", "/data/out", &config)??;
/// println!("extracted into {}", success.destination().display());
/// # Ok(())
/// # }
/// ```
pub fn extract_archive_to<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    output_dir: Q,
    config: &ExtractorConfig,
) -> Result<ExtractionOutcome> {
    let archive = TarArchive::new(archive_path.as_ref())?;
    Ok(TarExtractor::with_config(config.clone()).extract_to(&archive, output_dir))
}
