//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use tarx_core::ExtractionFailure;
use tarx_core::ExtractionOutcome;
use tarx_core::ExtractionSuccess;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn success_line(&self, message: &str) -> String {
        if self.use_colors {
            format!("{} {message}", style("✓").green().bold())
        } else {
            message.to_string()
        }
    }

    fn failure_line(&self, message: &str) -> String {
        if self.use_colors {
            format!("{} {message}", style("✗").red().bold())
        } else {
            format!("FAILED: {message}")
        }
    }

    fn write_success(&self, success: &ExtractionSuccess) {
        let _ = self.term.write_line(&self.success_line(&format!(
            "Extracted {} into {}",
            success.archive(),
            success.destination().display()
        )));
    }

    fn write_failure(&self, failure: &ExtractionFailure) {
        let _ = self.term.write_line(&self.failure_line(&format!(
            "{}: {}",
            failure.archive(),
            failure.summary()
        )));

        if self.verbose {
            for line in failure.description().lines() {
                let _ = self.term.write_line(&format!("    {line}"));
            }
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_extraction_success(&self, success: &ExtractionSuccess) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let _ = self.term.write_line(&self.success_line("Extraction complete"));
        let _ = self
            .term
            .write_line(&format!("  Archive:     {}", success.archive()));
        let _ = self.term.write_line(&format!(
            "  Destination: {}",
            success.destination().display()
        ));

        if self.verbose {
            let _ = self
                .term
                .write_line(&format!("  Name:        {}", success.archive().name()));
        }

        Ok(())
    }

    fn format_extraction_failure(&self, failure: &ExtractionFailure) -> Result<()> {
        // Details go to stderr through the returned error.
        if self.quiet {
            return Ok(());
        }

        let _ = self.term.write_line(&self.failure_line(&format!(
            "Extraction failed: {}",
            failure.archive()
        )));
        Ok(())
    }

    fn format_batch_result(&self, outcomes: &[ExtractionOutcome]) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for outcome in outcomes {
            match outcome {
                Ok(success) => self.write_success(success),
                Err(failure) => self.write_failure(failure),
            }
        }

        let failed = outcomes.iter().filter(|o| o.is_err()).count();
        let _ = self.term.write_line("");
        let _ = self.term.write_line(&format!(
            "  Succeeded: {}  Failed: {}",
            outcomes.len() - failed,
            failed
        ));

        Ok(())
    }
}
