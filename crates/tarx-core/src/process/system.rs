//! Launcher backed by `std::process::Command`.

use super::ChildProcess;
use super::ProcessLauncher;
use super::ProcessStatus;
use super::TarCommand;
use log::debug;
use std::io;
use std::io::Cursor;
use std::io::Read;
use std::process::Child;
use std::process::Command;
use std::process::Stdio;
use std::thread::JoinHandle;

/// Spawns real operating-system processes.
///
/// Standard input and output are discarded. Standard error is drained on a
/// helper thread while the process runs, so a tool that writes more than a
/// pipe buffer's worth of diagnostics cannot stall. The captured bytes are
/// only read back through [`ChildProcess::take_stderr`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl SystemLauncher {
    fn start(self, command: &TarCommand) -> io::Result<SystemChild> {
        let mut child = Command::new(command.program())
            .args(command.args())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()?;

        let drain = child.stderr.take().map(|mut stderr| {
            std::thread::spawn(move || {
                let mut bytes = Vec::new();
                let fault = stderr.read_to_end(&mut bytes).err();
                (bytes, fault)
            })
        });

        Ok(SystemChild {
            child,
            drain,
            captured: None,
        })
    }
}

impl ProcessLauncher for SystemLauncher {
    fn spawn(&self, command: &TarCommand) -> io::Result<Box<dyn ChildProcess>> {
        Ok(Box::new(self.start(command)?))
    }
}

type Drain = JoinHandle<(Vec<u8>, Option<io::Error>)>;

struct SystemChild {
    child: Child,
    drain: Option<Drain>,
    captured: Option<CapturedStderr>,
}

impl ChildProcess for SystemChild {
    fn wait(&mut self) -> io::Result<ProcessStatus> {
        let status = match self.child.wait() {
            Ok(status) => status,
            Err(err) => {
                self.abandon();
                return Err(err);
            }
        };

        if let Some(drain) = self.drain.take() {
            let (bytes, fault) = drain
                .join()
                .unwrap_or_else(|_| (Vec::new(), Some(io::Error::other("stderr reader panicked"))));
            self.captured = Some(CapturedStderr {
                data: Cursor::new(bytes),
                fault,
            });
        }

        Ok(status.into())
    }

    fn take_stderr(&mut self) -> Option<Box<dyn Read + Send>> {
        self.captured
            .take()
            .map(|captured| Box::new(captured) as Box<dyn Read + Send>)
    }
}

impl SystemChild {
    /// Kills and reaps a child that could not be waited on, then joins the
    /// stderr drain.
    fn abandon(&mut self) {
        if !matches!(self.child.try_wait(), Ok(Some(_))) {
            if let Err(err) = self.child.kill() {
                debug!("could not kill tar process {}: {err}", self.child.id());
            }
            let _ = self.child.wait();
        }
        if let Some(drain) = self.drain.take() {
            let _ = drain.join();
        }
    }
}

/// Error output collected while the process ran.
///
/// Replays the collected bytes, then the read error that ended collection,
/// if there was one.
struct CapturedStderr {
    data: Cursor<Vec<u8>>,
    fault: Option<io::Error>,
}

impl Read for CapturedStderr {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.data.read(buf)?;
        if n == 0
            && !buf.is_empty()
            && let Some(fault) = self.fault.take()
        {
            return Err(fault);
        }
        Ok(n)
    }
}
