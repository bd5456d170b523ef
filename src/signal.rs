//! Termination signals for block-kill
//!
//! Parses the `--signal` option and delivers signals with the nix crate on Unix.

use crate::error::BlockKillError;

/// Signals usable for terminating a blocked process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Signal {
    /// SIGHUP (1) - Hangup
    SIGHUP,
    /// SIGINT (2) - Interrupt
    SIGINT,
    /// SIGQUIT (3) - Quit
    SIGQUIT,
    /// SIGKILL (9) - Kill (cannot be caught)
    #[default]
    SIGKILL,
    /// SIGTERM (15) - Terminate
    SIGTERM,
}

impl Signal {
    #[cfg(unix)]
    fn to_nix(self) -> nix::sys::signal::Signal {
        use nix::sys::signal::Signal as NixSignal;
        match self {
            Signal::SIGHUP => NixSignal::SIGHUP,
            Signal::SIGINT => NixSignal::SIGINT,
            Signal::SIGQUIT => NixSignal::SIGQUIT,
            Signal::SIGKILL => NixSignal::SIGKILL,
            Signal::SIGTERM => NixSignal::SIGTERM,
        }
    }

    /// Convert to the sysinfo signal used where nix is unavailable
    #[cfg(not(unix))]
    pub(crate) fn to_sysinfo(self) -> sysinfo::Signal {
        match self {
            Signal::SIGHUP => sysinfo::Signal::Hangup,
            Signal::SIGINT => sysinfo::Signal::Interrupt,
            Signal::SIGQUIT => sysinfo::Signal::Quit,
            Signal::SIGKILL => sysinfo::Signal::Kill,
            Signal::SIGTERM => sysinfo::Signal::Term,
        }
    }

    /// Get signal number (identical on every POSIX platform for these signals)
    pub fn number(&self) -> i32 {
        match self {
            Signal::SIGHUP => 1,
            Signal::SIGINT => 2,
            Signal::SIGQUIT => 3,
            Signal::SIGKILL => 9,
            Signal::SIGTERM => 15,
        }
    }

    /// Get signal name
    pub fn name(&self) -> &'static str {
        match self {
            Signal::SIGHUP => "SIGHUP",
            Signal::SIGINT => "SIGINT",
            Signal::SIGQUIT => "SIGQUIT",
            Signal::SIGKILL => "SIGKILL",
            Signal::SIGTERM => "SIGTERM",
        }
    }
}

/// Signal parsing and delivery
pub struct SignalSender;

impl SignalSender {
    /// Parse signal from string (name or number)
    ///
    /// Accepts:
    /// - Signal names: "SIGKILL", "SIGTERM", "KILL", "TERM", etc.
    /// - Signal numbers: "9", "15", etc.
    pub fn parse_signal(s: &str) -> Result<Signal, BlockKillError> {
        let s = s.trim().to_uppercase();

        if let Ok(num) = s.parse::<i32>() {
            return Self::from_number(num);
        }

        Self::from_name(&s)
    }

    fn from_number(num: i32) -> Result<Signal, BlockKillError> {
        match num {
            1 => Ok(Signal::SIGHUP),
            2 => Ok(Signal::SIGINT),
            3 => Ok(Signal::SIGQUIT),
            9 => Ok(Signal::SIGKILL),
            15 => Ok(Signal::SIGTERM),
            _ => Err(BlockKillError::InvalidSignal(num.to_string())),
        }
    }

    fn from_name(s: &str) -> Result<Signal, BlockKillError> {
        let name = s.strip_prefix("SIG").unwrap_or(s);

        match name {
            "HUP" => Ok(Signal::SIGHUP),
            "INT" => Ok(Signal::SIGINT),
            "QUIT" => Ok(Signal::SIGQUIT),
            "KILL" => Ok(Signal::SIGKILL),
            "TERM" => Ok(Signal::SIGTERM),
            _ => Err(BlockKillError::InvalidSignal(s.to_string())),
        }
    }

    /// Send signal to process
    ///
    /// ESRCH maps to `ProcessNotFound` and EPERM to `PermissionDenied` so the
    /// caller can tell the expected races apart from real failures.
    #[cfg(unix)]
    pub fn send(pid: u32, signal: Signal) -> Result<(), BlockKillError> {
        use nix::errno::Errno;
        use nix::unistd::Pid;

        // 0 and pids above i32::MAX would address process groups, not a process.
        let raw = i32::try_from(pid)
            .ok()
            .filter(|raw| *raw > 0)
            .ok_or(BlockKillError::ProcessNotFound(pid))?;

        nix::sys::signal::kill(Pid::from_raw(raw), signal.to_nix()).map_err(|e| match e {
            Errno::ESRCH => BlockKillError::ProcessNotFound(pid),
            Errno::EPERM => BlockKillError::PermissionDenied(pid),
            _ => BlockKillError::SystemError(format!("Failed to send signal: {}", e)),
        })
    }
}
