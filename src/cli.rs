//! CLI argument parser for block-kill
//!
//! Provides type-safe argument parsing using clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::error::BlockKillError;
use crate::signal::{Signal, SignalSender};

/// Execution mode determined from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Enforce the blocklist until interrupted
    Enforce,
    /// Run a single sweep and exit
    Once,
    /// Print the effective blocklist
    ListBlocklist,
    /// Write a sample configuration file
    InitConfig { force: bool },
}

/// CLI arguments for block-kill
#[derive(Parser, Debug)]
#[command(
    name = "block-kill",
    version,
    about = "Terminate processes whose executable name is on a blocklist",
    long_about = "Polls the process table every 300 ms and terminates any process whose\n\
                  executable name matches an entry of the blocklist (case-insensitive,\n\
                  whole name). Runs until interrupted."
)]
pub struct CliArgs {
    /// Configuration file (default: ~/.config/block-kill/config.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Signal used to terminate blocked processes (name or number)
    #[arg(short, long, default_value = "SIGKILL", value_name = "SIGNAL")]
    pub signal: String,

    /// Run one sweep and exit
    #[arg(long)]
    pub once: bool,

    /// Report matches without sending signals
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print the effective blocklist and exit
    #[arg(short, long)]
    pub list: bool,

    /// Write a sample configuration file and exit
    #[arg(long)]
    pub init: bool,

    /// With --init, overwrite an existing file without asking
    #[arg(long, requires = "init")]
    pub force: bool,
}

impl CliArgs {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments and determine execution mode
    ///
    /// `--once`, `--list` and `--init` are mutually exclusive.
    pub fn validate(&self) -> Result<ExecutionMode, BlockKillError> {
        let selected: Vec<&str> = [
            (self.once, "--once"),
            (self.list, "--list"),
            (self.init, "--init"),
        ]
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, flag)| *flag)
        .collect();

        match selected.as_slice() {
            [] => Ok(ExecutionMode::Enforce),
            ["--once"] => Ok(ExecutionMode::Once),
            ["--list"] => Ok(ExecutionMode::ListBlocklist),
            ["--init"] => Ok(ExecutionMode::InitConfig { force: self.force }),
            flags => Err(BlockKillError::ConflictingModes(format!(
                "{} cannot be combined",
                flags.join(" and ")
            ))),
        }
    }

    /// Parse the signal argument into a Signal enum
    pub fn parse_signal(&self) -> Result<Signal, BlockKillError> {
        SignalSender::parse_signal(&self.signal)
    }
}
