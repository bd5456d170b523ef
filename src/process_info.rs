//! Process enumeration and termination
//!
//! The enforcer only talks to the OS through [`ProcessSource`], so tests can
//! hand it a scripted process table instead of real processes.

use std::ffi::OsStr;
use std::path::Path;

use sysinfo::{Pid, Process, ProcessRefreshKind, ProcessesToUpdate, System, ThreadKind, UpdateKind};

use crate::error::BlockKillError;
use crate::signal::Signal;

/// One process as seen by a single snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessEntry {
    /// Process ID
    pub pid: u32,
    /// Executable name, `None` when it could not be read
    pub name: Option<String>,
}

impl ProcessEntry {
    /// Entry with a known name
    pub fn new(pid: u32, name: impl Into<String>) -> Self {
        Self {
            pid,
            name: Some(name.into()),
        }
    }

    /// Entry whose name is unavailable
    pub fn unnamed(pid: u32) -> Self {
        Self { pid, name: None }
    }
}

/// Expected outcomes of a kill request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillOutcome {
    /// Signal delivered
    Killed,
    /// Process exited before the signal was sent
    Vanished,
    /// Caller lacks the rights to signal the process
    PermissionDenied,
}

impl KillOutcome {
    /// Classify a signal delivery result
    ///
    /// Vanished and protected processes are ordinary outcomes; only other
    /// failures stay errors.
    pub fn from_send(result: Result<(), BlockKillError>) -> Result<Self, BlockKillError> {
        match result {
            Ok(()) => Ok(KillOutcome::Killed),
            Err(BlockKillError::ProcessNotFound(_)) => Ok(KillOutcome::Vanished),
            Err(BlockKillError::PermissionDenied(_)) => Ok(KillOutcome::PermissionDenied),
            Err(e) => Err(e),
        }
    }
}

/// Capability to list and terminate processes
pub trait ProcessSource {
    /// Take a fresh snapshot of every visible process
    fn snapshot(&mut self) -> Vec<ProcessEntry>;

    /// Request termination of a process
    fn kill(&mut self, pid: u32) -> Result<KillOutcome, BlockKillError>;
}

/// [`ProcessSource`] backed by sysinfo
pub struct SystemProcessSource {
    system: System,
    signal: Signal,
}

impl SystemProcessSource {
    /// Create a source that terminates processes with `signal`
    pub fn new(signal: Signal) -> Self {
        Self {
            system: System::new(),
            signal,
        }
    }

    /// Signal used by [`ProcessSource::kill`]
    pub fn signal(&self) -> Signal {
        self.signal
    }

    /// Refresh the process table, dropping processes that have exited
    pub fn refresh(&mut self) {
        self.system.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing(),
        );
    }

    /// Fetch exe and cmd for processes whose name looks cut off
    fn refresh_truncated(&mut self) {
        let truncated: Vec<Pid> = self
            .system
            .processes()
            .iter()
            .filter(|(_, proc)| proc.name().len() == TRUNCATED_NAME_LEN)
            .map(|(pid, _)| *pid)
            .collect();
        if truncated.is_empty() {
            return;
        }
        self.system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&truncated),
            false,
            ProcessRefreshKind::nothing()
                .with_exe(UpdateKind::OnlyIfNotSet)
                .with_cmd(UpdateKind::OnlyIfNotSet),
        );
    }
}

/// Length at which Linux cuts the `comm` name of a process
pub const TRUNCATED_NAME_LEN: usize = 15;

/// Recover the full executable name from a name cut to [`TRUNCATED_NAME_LEN`]
///
/// The executable path is tried first, then `argv[0]`; a candidate is only
/// accepted when it extends the cut-off name.
pub fn full_name(name: &str, exe: Option<&Path>, argv0: Option<&OsStr>) -> String {
    if name.len() != TRUNCATED_NAME_LEN {
        return name.to_string();
    }
    exe.and_then(Path::file_name)
        .into_iter()
        .chain(argv0.and_then(|arg| Path::new(arg).file_name()))
        .map(|candidate| candidate.to_string_lossy())
        .find(|candidate| candidate.len() > name.len() && candidate.starts_with(name))
        .map(|candidate| candidate.into_owned())
        .unwrap_or_else(|| name.to_string())
}

fn entry_name(proc: &Process) -> Option<String> {
    let name = proc.name().to_string_lossy();
    if name.is_empty() {
        return None;
    }
    Some(full_name(
        &name,
        proc.exe(),
        proc.cmd().first().map(|arg| arg.as_os_str()),
    ))
}

impl Default for SystemProcessSource {
    fn default() -> Self {
        Self::new(Signal::default())
    }
}

impl ProcessSource for SystemProcessSource {
    fn snapshot(&mut self) -> Vec<ProcessEntry> {
        self.refresh();
        self.refresh_truncated();
        self.system
            .processes()
            .iter()
            // Signalling a thread id would take down its whole process.
            .filter(|(_, proc)| proc.thread_kind() != Some(ThreadKind::Userland))
            .map(|(pid, proc)| ProcessEntry {
                pid: pid.as_u32(),
                name: entry_name(proc),
            })
            .collect()
    }

    #[cfg(unix)]
    fn kill(&mut self, pid: u32) -> Result<KillOutcome, BlockKillError> {
        KillOutcome::from_send(crate::signal::SignalSender::send(pid, self.signal))
    }

    #[cfg(not(unix))]
    fn kill(&mut self, pid: u32) -> Result<KillOutcome, BlockKillError> {
        let Some(process) = self.system.process(Pid::from_u32(pid)) else {
            return Ok(KillOutcome::Vanished);
        };
        // kill_with returns None when the platform has no such signal
        let delivered = process
            .kill_with(self.signal.to_sysinfo())
            .unwrap_or_else(|| process.kill());
        if delivered {
            Ok(KillOutcome::Killed)
        } else {
            Ok(KillOutcome::PermissionDenied)
        }
    }
}
