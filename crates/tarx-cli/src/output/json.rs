//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use tarx_core::ExtractionFailure;
use tarx_core::ExtractionOutcome;
use tarx_core::ExtractionSuccess;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum BatchEntry<'a> {
    Success(&'a ExtractionSuccess),
    Error(&'a ExtractionFailure),
}

#[derive(Serialize)]
struct BatchOutput<'a> {
    succeeded: usize,
    failed: usize,
    results: Vec<BatchEntry<'a>>,
}

fn batch_output(outcomes: &[ExtractionOutcome]) -> BatchOutput<'_> {
    let results: Vec<BatchEntry<'_>> = outcomes
        .iter()
        .map(|outcome| match outcome {
            Ok(success) => BatchEntry::Success(success),
            Err(failure) => BatchEntry::Error(failure),
        })
        .collect();
    let failed = results
        .iter()
        .filter(|entry| matches!(entry, BatchEntry::Error(_)))
        .count();

    BatchOutput {
        succeeded: results.len() - failed,
        failed,
        results,
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_extraction_success(&self, success: &ExtractionSuccess) -> Result<()> {
        Self::output(&JsonOutput::success("extract", success))
    }

    fn format_extraction_failure(&self, failure: &ExtractionFailure) -> Result<()> {
        Self::output(&JsonOutput::failure(
            "extract",
            failure,
            failure.summary(),
        ))
    }

    fn format_batch_result(&self, outcomes: &[ExtractionOutcome]) -> Result<()> {
        let data = batch_output(outcomes);
        if data.failed == 0 {
            Self::output(&JsonOutput::success("extract-all", data))
        } else {
            let error = format!("{} of {} archives failed", data.failed, outcomes.len());
            Self::output(&JsonOutput::failure("extract-all", data, error))
        }
    }
}
