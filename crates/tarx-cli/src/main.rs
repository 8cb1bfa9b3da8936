//! Tarx CLI - Command-line utility for extracting tar archives through the
//! system tar tool.

mod cli;
mod commands;
mod error;
mod output;
mod progress;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let cli = cli::Cli::parse();
    log::debug!("using tar program {}", cli.tar_program.display());

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);
    let config = cli.extractor_config();

    match &cli.command {
        cli::Commands::Extract(args) => commands::extract::execute(args, config, &*formatter),
        cli::Commands::ExtractAll(args) => {
            let show_progress = !cli.quiet && !cli.json;
            commands::extract_all::execute(args, config, &*formatter, show_progress)
        }
        cli::Commands::Completion(args) => {
            commands::completion::execute(args.shell);
            Ok(())
        }
    }
}
