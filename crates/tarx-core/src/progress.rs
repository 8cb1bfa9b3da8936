//! Progress reporting for batch extraction.

use crate::ExtractionOutcome;
use crate::TarArchive;

/// Callback for observing a batch extraction archive by archive.
///
/// All methods run on the thread that called
/// [`TarExtractor::extract_all_with_progress`](crate::TarExtractor::extract_all_with_progress).
pub trait BatchProgress {
    /// Called before the external tool is started for `archive`.
    ///
    /// # Arguments
    ///
    /// * `archive` - Archive about to be extracted
    /// * `total` - Number of archives in the batch
    /// * `current` - Position of this archive (1-indexed)
    fn on_archive_start(&mut self, archive: &TarArchive, total: usize, current: usize);

    /// Called once the outcome for the current archive is known.
    fn on_archive_complete(&mut self, outcome: &ExtractionOutcome);

    /// Called after the last archive, even for an empty batch.
    fn on_complete(&mut self);
}

/// No-op implementation of `BatchProgress`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl BatchProgress for NoopProgress {
    fn on_archive_start(&mut self, _archive: &TarArchive, _total: usize, _current: usize) {}

    fn on_archive_complete(&mut self, _outcome: &ExtractionOutcome) {}

    fn on_complete(&mut self) {}
}
