//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;
use tarx_core::ExtractorConfig;
use tarx_core::config::DEFAULT_TAR_PROGRAM;
use tarx_core::config::TAR_PROGRAM_ENV;

#[derive(Parser)]
#[command(name = "tarx")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// External tar program to run
    #[arg(
        long,
        global = true,
        value_name = "PROGRAM",
        env = TAR_PROGRAM_ENV,
        default_value = DEFAULT_TAR_PROGRAM
    )]
    pub tar_program: PathBuf,

    /// Extra argument passed to tar before the extraction flags (repeatable)
    #[arg(long = "tar-arg", global = true, value_name = "ARG", allow_hyphen_values = true)]
    pub tar_args: Vec<String>,
}

impl Cli {
    /// Builds the extractor configuration from global flags.
    pub fn extractor_config(&self) -> ExtractorConfig {
        ExtractorConfig::new()
            .with_program(&self.tar_program)
            .with_extra_args(&self.tar_args)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract a tar archive
    Extract(ExtractArgs),
    /// Extract several tar archives one after another
    ExtractAll(ExtractAllArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Path to the .tar file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Output directory (default: the directory containing the archive)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct ExtractAllArgs {
    /// Paths to the .tar files
    #[arg(value_name = "ARCHIVE", required = true)]
    pub archives: Vec<PathBuf>,

    /// Extract every archive into this directory instead of next to itself
    #[arg(long, value_name = "DIR")]
    pub into: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}
