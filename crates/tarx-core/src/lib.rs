//! Tar archive extraction through the system `tar` tool.
//!
//! `tarx-core` validates archive references, runs the external tool once
//! per request, and reports every run as a typed outcome: an
//! [`ExtractionSuccess`] or an [`ExtractionFailure`] carrying the tool's
//! diagnostics. Expected failures never panic and never surface as
//! [`TarxError`]; only an invalid archive path does.
//!
//! # Examples
//!
//! ```no_run
//! use tarx_core::TarArchive;
//! use tarx_core::TarExtractor;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let archive = TarArchive::new("/data/set1.tar")?;
//! let extractor = TarExtractor::new();
//!
//! extractor.extract_with(
//!     &archive,
//!     |done| println!("extracted into {}", done.destination().display()),
//!     |failure| eprintln!("{}: {}", failure.summary(), failure.description()),
//! );
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod extractor;
pub mod outcome;
pub mod process;
pub mod progress;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export main API types
pub use api::extract_archive;
pub use api::extract_archive_to;
pub use config::ExtractorConfig;
pub use error::Result;
pub use error::TarxError;
pub use extractor::TarExtractor;
pub use outcome::ExtractionFailure;
pub use outcome::ExtractionOutcome;
pub use outcome::ExtractionSuccess;
pub use outcome::FailureKind;
pub use progress::BatchProgress;
pub use progress::NoopProgress;

pub use types::TarArchive;
