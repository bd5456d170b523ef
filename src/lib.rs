//! block-kill: blocklist enforcer for running processes
//!
//! This library periodically snapshots the process table and terminates every
//! process whose executable name is on an immutable, case-insensitive blocklist.

pub mod blocklist;
pub mod cli;
pub mod config;
pub mod enforcer;
pub mod error;
pub mod init;
pub mod process_info;
pub mod signal;
pub mod status;
pub mod ticker;
