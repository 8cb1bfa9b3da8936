//! Progress bar for batch extraction.

use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use tarx_core::BatchProgress;
use tarx_core::ExtractionOutcome;
use tarx_core::TarArchive;

/// CLI progress bar wrapper implementing `BatchProgress`.
///
/// Shows the archive currently being handed to tar. Cleans up on drop.
pub struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    /// Creates a new CLI progress bar.
    ///
    /// # Arguments
    ///
    /// * `total` - Number of archives to extract
    /// * `message` - Message to display (e.g., "Extracting")
    #[must_use]
    pub fn new(total: usize, message: &str) -> Self {
        let bar = ProgressBar::new(total as u64);

        // Template: "Extracting [████████░░░░] 3/8 archives set1.tar (12s)"
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{prefix} [{bar:40.cyan/blue}] {pos}/{len} archives {msg} ({elapsed})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓░"),
        );
        bar.set_prefix(message.to_string());

        Self { bar }
    }

    /// Creates a progress bar that draws nothing.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Checks if we should show progress (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stdout().is_term()
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

impl BatchProgress for CliProgress {
    fn on_archive_start(&mut self, archive: &TarArchive, _total: usize, _current: usize) {
        self.bar.set_message(archive.name());
    }

    fn on_archive_complete(&mut self, _outcome: &ExtractionOutcome) {
        self.bar.inc(1);
    }

    fn on_complete(&mut self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tarx_core::ExtractionSuccess;

    #[test]
    fn test_progress_counts_archives() {
        let mut progress = CliProgress::new(2, "Extracting");
        let archive = TarArchive::new("/data/set1.tar").unwrap();
        let outcome = Ok(ExtractionSuccess::new(archive.clone(), "/data"));

        progress.on_archive_start(&archive, 2, 1);
        progress.on_archive_complete(&outcome);
        progress.on_archive_start(&archive, 2, 2);
        progress.on_archive_complete(&outcome);

        assert_eq!(progress.position(), 2);
    }

    #[test]
    fn test_hidden_progress() {
        let mut progress = CliProgress::hidden();
        let archive = TarArchive::new("/data/set1.tar").unwrap();
        progress.on_archive_complete(&Ok(ExtractionSuccess::new(archive, "/data")));
        progress.on_complete();
        assert_eq!(progress.position(), 1);
    }
}
