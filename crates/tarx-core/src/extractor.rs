//! Extraction orchestration.
//!
//! [`TarExtractor`] runs the external tool once per call, waits for it and
//! turns the result into an [`ExtractionOutcome`]. It holds no mutable
//! state, so one instance can serve any number of threads.

use crate::ExtractionFailure;
use crate::ExtractionOutcome;
use crate::ExtractionSuccess;
use crate::ExtractorConfig;
use crate::TarArchive;
use crate::process::ProcessLauncher;
use crate::process::SystemLauncher;
use crate::process::TarCommand;
use crate::process::read_diagnostics;
use crate::progress::BatchProgress;
use crate::progress::NoopProgress;
use log::debug;
use log::warn;
use std::path::Path;

/// Extracts tar archives by running an external `tar` process.
///
/// # Examples
///
/// ```no_run
/// use tarx_core::TarArchive;
/// use tarx_core::TarExtractor;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let extractor = TarExtractor::new();
/// let archive = TarArchive::new("/data/set1.tar")?;
///
/// match extractor.extract_to(&archive, "/data/out") {
///     Ok(done) => println!("extracted into {}", done.destination().display()),
///     Err(failure) => eprintln!("{}: {}", failure.summary(), failure.description()),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct TarExtractor<L = SystemLauncher> {
    config: ExtractorConfig,
    launcher: L,
}

impl TarExtractor {
    /// Creates an extractor that runs `tar` from `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an extractor with the given configuration.
    #[must_use]
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self {
            config,
            launcher: SystemLauncher,
        }
    }
}

impl<L: ProcessLauncher> TarExtractor<L> {
    /// Creates an extractor that starts processes through `launcher`.
    #[must_use]
    pub fn with_launcher(config: ExtractorConfig, launcher: L) -> Self {
        Self { config, launcher }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extracts `archive` into `destination`.
    ///
    /// Blocks until the external tool exits. The destination is not checked
    /// here: a missing or unwritable directory is reported by the tool and
    /// comes back as a [`FailureKind::Failed`](crate::FailureKind::Failed)
    /// outcome.
    ///
    /// # Errors
    ///
    /// Returns an [`ExtractionFailure`] if the tool exits unsuccessfully or
    /// cannot be run.
    pub fn extract_to(&self, archive: &TarArchive, destination: impl AsRef<Path>) -> ExtractionOutcome {
        let destination = destination.as_ref();
        let command = TarCommand::extract(&self.config, archive, destination);
        debug!("running `{command}`");

        let mut child = match self.launcher.spawn(&command) {
            Ok(child) => child,
            Err(err) => {
                warn!("failed to start `{}`: {err}", command.program().to_string_lossy());
                return Err(ExtractionFailure::io(archive.clone(), &err));
            }
        };

        let status = match child.wait() {
            Ok(status) => status,
            Err(err) => {
                warn!("failed waiting for extraction of '{archive}': {err}");
                return Err(ExtractionFailure::io(archive.clone(), &err));
            }
        };
        debug!("extraction of '{archive}' finished with {status}");

        if status.success() {
            return Ok(ExtractionSuccess::new(archive.clone(), destination));
        }

        let diagnostics = child.take_stderr().map(read_diagnostics).unwrap_or_default();
        warn!("extraction of '{archive}' failed with {status}");
        Err(ExtractionFailure::exited(
            archive.clone(),
            status.code(),
            diagnostics,
        ))
    }

    /// Extracts `archive` into the directory that contains it.
    ///
    /// Equivalent to `extract_to(archive, archive.parent_dir())`.
    ///
    /// # Errors
    ///
    /// See [`extract_to`](Self::extract_to).
    pub fn extract(&self, archive: &TarArchive) -> ExtractionOutcome {
        self.extract_to(archive, archive.parent_dir())
    }

    /// Extracts `archive` into `destination`, reporting through handlers.
    ///
    /// Exactly one of `on_success` or `on_failure` is called, once, on the
    /// calling thread, before this method returns.
    pub fn extract_to_with<S, F>(
        &self,
        archive: &TarArchive,
        destination: impl AsRef<Path>,
        on_success: S,
        on_failure: F,
    ) where
        S: FnOnce(ExtractionSuccess),
        F: FnOnce(ExtractionFailure),
    {
        match self.extract_to(archive, destination) {
            Ok(success) => on_success(success),
            Err(failure) => on_failure(failure),
        }
    }

    /// Extracts `archive` next to itself, reporting through handlers.
    ///
    /// See [`extract_to_with`](Self::extract_to_with).
    pub fn extract_with<S, F>(&self, archive: &TarArchive, on_success: S, on_failure: F)
    where
        S: FnOnce(ExtractionSuccess),
        F: FnOnce(ExtractionFailure),
    {
        self.extract_to_with(archive, archive.parent_dir(), on_success, on_failure);
    }

    /// Extracts each archive in turn into `destination`, or next to itself
    /// when `destination` is `None`.
    ///
    /// One outcome is returned per archive, in input order. A failure does
    /// not stop the remaining extractions.
    pub fn extract_all(&self, archives: &[TarArchive], destination: Option<&Path>) -> Vec<ExtractionOutcome> {
        self.extract_all_with_progress(archives, destination, &mut NoopProgress)
    }

    /// Like [`extract_all`](Self::extract_all), reporting each archive to
    /// `progress` before and after it is extracted.
    pub fn extract_all_with_progress(
        &self,
        archives: &[TarArchive],
        destination: Option<&Path>,
        progress: &mut dyn BatchProgress,
    ) -> Vec<ExtractionOutcome> {
        let total = archives.len();
        let mut outcomes = Vec::with_capacity(total);

        for (index, archive) in archives.iter().enumerate() {
            progress.on_archive_start(archive, total, index + 1);
            let outcome = match destination {
                Some(dir) => self.extract_to(archive, dir),
                None => self.extract(archive),
            };
            progress.on_archive_complete(&outcome);
            outcomes.push(outcome);
        }

        progress.on_complete();
        debug!(
            "batch finished: {} of {total} archives failed",
            outcomes.iter().filter(|o| o.is_err()).count()
        );
        outcomes
    }
}
