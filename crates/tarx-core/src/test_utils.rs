//! Test doubles for the process seam.
//!
//! # Panics
//!
//! Functions in this module may panic on poisoned locks since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use crate::process::ChildProcess;
use crate::process::ProcessLauncher;
use crate::process::ProcessStatus;
use crate::process::TarCommand;
use std::io;
use std::io::Cursor;
use std::io::Read;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

#[derive(Debug, Clone)]
enum Behavior {
    Exit {
        code: Option<i32>,
        stderr: String,
    },
    SpawnError(io::ErrorKind, &'static str),
    WaitError(io::ErrorKind, &'static str),
}

/// Launcher whose processes finish the way it was told to.
///
/// Records every command it was asked to spawn and whether anybody read
/// the fake process's error stream.
#[derive(Debug)]
pub struct FakeLauncher {
    behavior: Behavior,
    spawned: Mutex<Vec<TarCommand>>,
    stderr_taken: Arc<AtomicBool>,
}

impl FakeLauncher {
    fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            spawned: Mutex::new(Vec::new()),
            stderr_taken: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Processes exit with `code` after writing `stderr`.
    pub fn exiting(code: i32, stderr: &str) -> Self {
        Self::new(Behavior::Exit {
            code: Some(code),
            stderr: stderr.to_string(),
        })
    }

    /// Processes end without an exit code, as if killed by a signal.
    pub fn terminated(stderr: &str) -> Self {
        Self::new(Behavior::Exit {
            code: None,
            stderr: stderr.to_string(),
        })
    }

    /// Spawning fails with the given error.
    pub fn spawn_error(kind: io::ErrorKind, message: &'static str) -> Self {
        Self::new(Behavior::SpawnError(kind, message))
    }

    /// Spawning succeeds but waiting fails with the given error.
    pub fn wait_error(kind: io::ErrorKind, message: &'static str) -> Self {
        Self::new(Behavior::WaitError(kind, message))
    }

    /// Returns the commands spawned so far.
    pub fn spawned(&self) -> Vec<TarCommand> {
        self.spawned.lock().unwrap().clone()
    }

    /// Returns `true` once any fake process's error stream was taken.
    pub fn stderr_taken(&self) -> bool {
        self.stderr_taken.load(Ordering::SeqCst)
    }
}

impl ProcessLauncher for FakeLauncher {
    fn spawn(&self, command: &TarCommand) -> io::Result<Box<dyn ChildProcess>> {
        self.spawned.lock().unwrap().push(command.clone());

        if let Behavior::SpawnError(kind, message) = &self.behavior {
            return Err(io::Error::new(*kind, *message));
        }

        Ok(Box::new(FakeChild {
            behavior: self.behavior.clone(),
            stderr_taken: Arc::clone(&self.stderr_taken),
        }))
    }
}

struct FakeChild {
    behavior: Behavior,
    stderr_taken: Arc<AtomicBool>,
}

impl ChildProcess for FakeChild {
    fn wait(&mut self) -> io::Result<ProcessStatus> {
        match &self.behavior {
            Behavior::Exit { code, .. } => Ok(ProcessStatus::new(*code)),
            Behavior::SpawnError(kind, message) | Behavior::WaitError(kind, message) => {
                Err(io::Error::new(*kind, *message))
            }
        }
    }

    fn take_stderr(&mut self) -> Option<Box<dyn Read + Send>> {
        self.stderr_taken.store(true, Ordering::SeqCst);
        match &self.behavior {
            Behavior::Exit { stderr, .. } => Some(Box::new(Cursor::new(stderr.clone().into_bytes()))),
            _ => None,
        }
    }
}
