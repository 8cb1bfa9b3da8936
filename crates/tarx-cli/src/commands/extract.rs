//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::add_archive_context;
use crate::error::convert_extraction_failure;
use crate::output::OutputFormatter;
use anyhow::Result;
use tarx_core::ExtractorConfig;
use tarx_core::TarArchive;
use tarx_core::TarExtractor;

pub fn execute(
    args: &ExtractArgs,
    config: ExtractorConfig,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let archive = add_archive_context(TarArchive::new(&args.archive), &args.archive)?;
    let extractor = TarExtractor::with_config(config);

    let outcome = match &args.output_dir {
        Some(dir) => extractor.extract_to(&archive, dir),
        None => extractor.extract(&archive),
    };

    match outcome {
        Ok(success) => formatter.format_extraction_success(&success),
        Err(failure) => {
            formatter.format_extraction_failure(&failure)?;
            Err(convert_extraction_failure(&failure))
        }
    }
}
