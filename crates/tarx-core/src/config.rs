//! Configuration for the external extraction tool.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable read by [`ExtractorConfig::from_env`].
pub const TAR_PROGRAM_ENV: &str = "TARX_TAR_PROGRAM";

/// Program invoked when no other is configured.
pub const DEFAULT_TAR_PROGRAM: &str = "tar";

/// Settings for invoking the external `tar` tool.
///
/// # Examples
///
/// ```
/// use tarx_core::ExtractorConfig;
///
/// let config = ExtractorConfig::default()
///     .with_program("/usr/bin/bsdtar")
///     .with_extra_arg("--no-same-owner");
/// assert_eq!(config.extra_args.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Program to run. Resolved through `PATH` when it has no directory part.
    ///
    /// Default: `tar`.
    pub program: PathBuf,

    /// Arguments placed before `-xf <archive> -C <destination>`.
    ///
    /// Default: empty.
    pub extra_args: Vec<OsString>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_TAR_PROGRAM),
            extra_args: Vec::new(),
        }
    }
}

impl ExtractorConfig {
    /// Creates a new `ExtractorConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration honoring `TARX_TAR_PROGRAM`.
    ///
    /// An unset or empty variable leaves the default program in place.
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var_os(TAR_PROGRAM_ENV) {
            Some(program) if !program.is_empty() => config.with_program(program),
            _ => config,
        }
    }

    /// Sets the program to run.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Appends one argument placed before the extraction flags.
    #[must_use]
    pub fn with_extra_arg(mut self, arg: impl Into<OsString>) -> Self {
        self.extra_args.push(arg.into());
        self
    }

    /// Replaces all extra arguments.
    #[must_use]
    pub fn with_extra_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.extra_args = args.into_iter().map(Into::into).collect();
        self
    }
}
