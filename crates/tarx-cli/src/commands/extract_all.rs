//! Batch extract command implementation.

use crate::cli::ExtractAllArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use anyhow::bail;
use tarx_core::ExtractorConfig;
use tarx_core::TarArchive;
use tarx_core::TarExtractor;

pub fn execute(
    args: &ExtractAllArgs,
    config: ExtractorConfig,
    formatter: &dyn OutputFormatter,
    show_progress: bool,
) -> Result<()> {
    // Every path is validated before anything is extracted.
    let archives = args
        .archives
        .iter()
        .map(|path| add_archive_context(TarArchive::new(path), path))
        .collect::<Result<Vec<_>>>()?;

    let extractor = TarExtractor::with_config(config);
    let mut progress = if show_progress && CliProgress::should_show() {
        CliProgress::new(archives.len(), "Extracting")
    } else {
        CliProgress::hidden()
    };

    let outcomes =
        extractor.extract_all_with_progress(&archives, args.into.as_deref(), &mut progress);
    drop(progress);

    formatter.format_batch_result(&outcomes)?;

    let failed = outcomes.iter().filter(|o| o.is_err()).count();
    if failed > 0 {
        bail!("{failed} of {} archives failed to extract", outcomes.len());
    }

    Ok(())
}
