//! Enforcement loop for block-kill
//!
//! Snapshots the process table, terminates every process whose executable
//! name is on the blocklist, waits, and starts over.

use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info, warn};

use crate::blocklist::Blocklist;
use crate::error::BlockKillError;
use crate::process_info::{KillOutcome, ProcessSource};
use crate::status::StatusSink;
use crate::ticker::Ticker;

/// Counters for one sweep over a snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Entries in the snapshot
    pub seen: usize,
    /// Entries skipped because their name was unavailable
    pub unnamed: usize,
    /// Entries whose name is on the blocklist
    pub matched: usize,
    /// Processes signalled successfully
    pub killed: usize,
    /// Processes that exited before they could be signalled
    pub vanished: usize,
    /// Processes we were not allowed to signal
    pub denied: usize,
    /// Kill requests that failed for any other reason
    pub failed: usize,
    /// Names of the killed processes, in snapshot order
    pub killed_names: Vec<String>,
}

impl SweepReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one kill request
    pub fn add(&mut self, name: &str, outcome: KillOutcome) {
        match outcome {
            KillOutcome::Killed => {
                self.killed += 1;
                self.killed_names.push(name.to_string());
            }
            KillOutcome::Vanished => self.vanished += 1,
            KillOutcome::PermissionDenied => self.denied += 1,
        }
    }

    /// Check if any process was killed
    pub fn any_killed(&self) -> bool {
        self.killed > 0
    }
}

/// Periodic blocklist enforcer
pub struct Enforcer<P, S> {
    blocklist: Blocklist,
    source: P,
    sink: S,
    dry_run: bool,
    own_pid: u32,
}

impl<P: ProcessSource, S: StatusSink> Enforcer<P, S> {
    /// Create an enforcer; performs no I/O
    pub fn new(blocklist: Blocklist, source: P, sink: S) -> Self {
        Self {
            blocklist,
            source,
            sink,
            dry_run: false,
            own_pid: std::process::id(),
        }
    }

    /// Report matches instead of signalling them
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn source(&self) -> &P {
        &self.source
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Take the collaborators back
    pub fn into_parts(self) -> (P, S) {
        (self.source, self.sink)
    }

    /// Emit the startup banner
    pub fn start(&mut self) -> Result<(), BlockKillError> {
        info!(
            "enforcing {} blocked name(s){}",
            self.blocklist.len(),
            if self.dry_run { " (dry run)" } else { "" }
        );
        self.sink.banner()?;
        Ok(())
    }

    /// Run a single snapshot-match-kill pass
    ///
    /// Per-process failures never end the sweep. The only error returned is a
    /// failure to write to the status sink.
    pub fn sweep(&mut self) -> Result<SweepReport, BlockKillError> {
        let mut report = SweepReport::new();

        for entry in self.source.snapshot() {
            report.seen += 1;

            let Some(name) = entry.name else {
                report.unnamed += 1;
                continue;
            };

            if !self.blocklist.contains(&name) || entry.pid == self.own_pid {
                continue;
            }
            report.matched += 1;

            if self.dry_run {
                self.sink.would_kill(&name, entry.pid)?;
                continue;
            }

            match self.source.kill(entry.pid) {
                Ok(outcome) => {
                    if outcome == KillOutcome::Killed {
                        self.sink.killed(&name)?;
                    } else {
                        debug!("skipped {} (PID {}): {:?}", name, entry.pid, outcome);
                    }
                    report.add(&name, outcome);
                }
                Err(e) => {
                    warn!("failed to kill {} (PID {}): {}", name, entry.pid, e);
                    report.failed += 1;
                }
            }
        }

        Ok(report)
    }

    /// Sweep, wait for the ticker, repeat
    ///
    /// Only returns once `shutdown` is set, or when the status sink breaks.
    pub fn run<T: Ticker>(
        &mut self,
        ticker: &mut T,
        shutdown: &AtomicBool,
    ) -> Result<(), BlockKillError> {
        self.start()?;

        while !shutdown.load(Ordering::SeqCst) {
            let report = self.sweep()?;
            if report.matched > 0 {
                debug!("sweep: {:?}", report);
            }
            if shutdown.load(Ordering::SeqCst) {
                break;
            }
            ticker.wait();
        }

        info!("shutdown requested, stopping");
        Ok(())
    }
}
