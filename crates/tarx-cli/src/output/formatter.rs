//! Output formatter trait for CLI results.

use anyhow::Result;
use serde::Serialize;
use tarx_core::ExtractionFailure;
use tarx_core::ExtractionOutcome;
use tarx_core::ExtractionSuccess;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format a successful single extraction
    fn format_extraction_success(&self, success: &ExtractionSuccess) -> Result<()>;

    /// Format a failed single extraction
    fn format_extraction_failure(&self, failure: &ExtractionFailure) -> Result<()>;

    /// Format the outcomes of a batch extraction, in input order
    fn format_batch_result(&self, outcomes: &[ExtractionOutcome]) -> Result<()>;
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(operation: impl Into<String>, data: T, error: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Error,
            data: Some(data),
            error: Some(error.into()),
        }
    }
}
