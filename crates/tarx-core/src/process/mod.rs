//! Process-execution seam for the external `tar` tool.
//!
//! The extractor never touches `std::process` directly. It builds a
//! [`TarCommand`] and hands it to a [`ProcessLauncher`], which makes the
//! spawn/wait/read sequence replaceable in tests.

mod diagnostics;
mod system;

pub use diagnostics::read_diagnostics;
pub use system::SystemLauncher;

use crate::ExtractorConfig;
use crate::TarArchive;
use std::ffi::OsStr;
use std::ffi::OsString;
use std::fmt;
use std::io;
use std::io::Read;
use std::path::Path;

/// A fully-formed invocation of the external tool.
///
/// Arguments are kept as separate values and are never joined into a
/// shell string, so paths containing spaces survive intact.
///
/// # Examples
///
/// ```
/// use tarx_core::ExtractorConfig;
/// use tarx_core::TarArchive;
/// use tarx_core::process::TarCommand;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let archive = TarArchive::new("/data/set1.tar")?;
/// let cmd = TarCommand::extract(&ExtractorConfig::default(), &archive, "/data/out".as_ref());
/// assert_eq!(cmd.to_string(), "tar -xf /data/set1.tar -C /data/out");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TarCommand {
    program: OsString,
    args: Vec<OsString>,
}

impl TarCommand {
    /// Builds `<program> [extra args] -xf <archive> -C <destination>`.
    #[must_use]
    pub fn extract(config: &ExtractorConfig, archive: &TarArchive, destination: &Path) -> Self {
        let mut args = config.extra_args.clone();
        args.push("-xf".into());
        args.push(archive.path().into());
        args.push("-C".into());
        args.push(destination.into());

        Self {
            program: config.program.clone().into_os_string(),
            args,
        }
    }

    /// Returns the program to run.
    #[must_use]
    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Returns the argument list, excluding the program.
    #[must_use]
    pub fn args(&self) -> &[OsString] {
        &self.args
    }
}

impl fmt::Display for TarCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Termination status of a finished process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStatus {
    code: Option<i32>,
}

impl ProcessStatus {
    /// Creates a status from an exit code.
    ///
    /// `None` means the process ended without one, e.g. killed by a signal.
    #[must_use]
    pub const fn new(code: Option<i32>) -> Self {
        Self { code }
    }

    /// Creates the status of a process that exited with `code`.
    #[must_use]
    pub const fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Returns the exit code, if any.
    #[must_use]
    pub const fn code(self) -> Option<i32> {
        self.code
    }

    /// Returns `true` for exit code zero.
    #[must_use]
    pub const fn success(self) -> bool {
        matches!(self.code, Some(0))
    }
}

impl From<std::process::ExitStatus> for ProcessStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self::new(status.code())
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {code}"),
            None => f.write_str("terminated without exit status"),
        }
    }
}

/// Starts external processes.
pub trait ProcessLauncher {
    /// Spawns `command` and returns a handle to the running process.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be found or started.
    fn spawn(&self, command: &TarCommand) -> io::Result<Box<dyn ChildProcess>>;
}

impl<L: ProcessLauncher + ?Sized> ProcessLauncher for &L {
    fn spawn(&self, command: &TarCommand) -> io::Result<Box<dyn ChildProcess>> {
        (**self).spawn(command)
    }
}

/// A running external process.
pub trait ChildProcess {
    /// Blocks until the process terminates.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be waited upon. An error of
    /// kind [`io::ErrorKind::Interrupted`] means the wait was cancelled.
    fn wait(&mut self) -> io::Result<ProcessStatus>;

    /// Takes the process's error-output stream.
    ///
    /// Returns `None` if the stream was not captured or was already taken.
    fn take_stderr(&mut self) -> Option<Box<dyn Read + Send>>;
}
