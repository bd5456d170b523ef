//! Error types and exit codes for block-kill
//!
//! Per-process failures (vanished or protected processes) never surface here as
//! fatal errors; the enforcer absorbs them. These types cover startup and
//! anything that should stop the binary.

use std::process::ExitCode;
use thiserror::Error;

/// Exit codes for block-kill command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKillExitCode {
    /// Successful execution (single sweep, list, init or graceful shutdown)
    Success = 0,
    /// Invalid command line usage
    Usage = 1,
    /// Configuration file error
    ConfigError = 3,
    /// General/other error
    GeneralError = 255,
}

impl From<BlockKillExitCode> for ExitCode {
    fn from(code: BlockKillExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Error types for block-kill operations
#[derive(Error, Debug)]
pub enum BlockKillError {
    // User input errors
    /// Invalid signal specification
    #[error("Invalid signal: {0}")]
    InvalidSignal(String),

    /// More than one exclusive mode was requested
    #[error("Conflicting options: {0}")]
    ConflictingModes(String),

    // Process errors
    /// Process exited before it could be signalled
    #[error("Process {0} not found")]
    ProcessNotFound(u32),

    /// Permission denied for operation
    #[error("Permission denied for PID {0}")]
    PermissionDenied(u32),

    // Configuration errors
    /// Configuration file parse error
    #[error("Config parse error: {0}")]
    ConfigError(String),

    /// Configuration file creation error
    #[error("Config creation error: {0}")]
    ConfigCreationError(String),

    /// Blocklist has no usable entries
    #[error("Blocklist is empty; nothing to enforce")]
    EmptyBlocklist,

    // System errors
    /// Status stream could not be written
    #[error("Failed to write status output: {0}")]
    StatusOutput(#[from] std::io::Error),

    /// Generic system error
    #[error("System error: {0}")]
    SystemError(String),
}

impl BlockKillError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> BlockKillExitCode {
        match self {
            BlockKillError::InvalidSignal(_) | BlockKillError::ConflictingModes(_) => {
                BlockKillExitCode::Usage
            }
            BlockKillError::ConfigError(_)
            | BlockKillError::ConfigCreationError(_)
            | BlockKillError::EmptyBlocklist => BlockKillExitCode::ConfigError,
            _ => BlockKillExitCode::GeneralError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(BlockKillExitCode::Success as u8, 0);
        assert_eq!(BlockKillExitCode::Usage as u8, 1);
        assert_eq!(BlockKillExitCode::ConfigError as u8, 3);
        assert_eq!(BlockKillExitCode::GeneralError as u8, 255);
    }

    #[test]
    fn test_invalid_signal_error_message() {
        let err = BlockKillError::InvalidSignal("SIGFOO".to_string());
        assert_eq!(err.to_string(), "Invalid signal: SIGFOO");
    }

    #[test]
    fn test_conflicting_modes_error_message() {
        let err = BlockKillError::ConflictingModes("--list and --once".to_string());
        assert_eq!(err.to_string(), "Conflicting options: --list and --once");
    }

    #[test]
    fn test_process_not_found_error_message() {
        let err = BlockKillError::ProcessNotFound(9999);
        assert_eq!(err.to_string(), "Process 9999 not found");
    }

    #[test]
    fn test_permission_denied_error_message() {
        let err = BlockKillError::PermissionDenied(1);
        assert_eq!(err.to_string(), "Permission denied for PID 1");
    }

    #[test]
    fn test_empty_blocklist_error_message() {
        let err = BlockKillError::EmptyBlocklist;
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_status_output_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: BlockKillError = io.into();
        assert!(matches!(err, BlockKillError::StatusOutput(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_error_to_exit_code_usage() {
        assert_eq!(
            BlockKillError::InvalidSignal("x".to_string()).exit_code(),
            BlockKillExitCode::Usage
        );
        assert_eq!(
            BlockKillError::ConflictingModes("x".to_string()).exit_code(),
            BlockKillExitCode::Usage
        );
    }

    #[test]
    fn test_per_process_errors_are_general() {
        // vanished and protected processes are absorbed by the sweep
        assert_eq!(
            BlockKillError::PermissionDenied(1).exit_code(),
            BlockKillExitCode::GeneralError
        );
        assert_eq!(
            BlockKillError::ProcessNotFound(1).exit_code(),
            BlockKillExitCode::GeneralError
        );
    }

    #[test]
    fn test_error_to_exit_code_config() {
        assert_eq!(
            BlockKillError::ConfigError("bad".to_string()).exit_code(),
            BlockKillExitCode::ConfigError
        );
        assert_eq!(
            BlockKillError::ConfigCreationError("bad".to_string()).exit_code(),
            BlockKillExitCode::ConfigError
        );
        assert_eq!(
            BlockKillError::EmptyBlocklist.exit_code(),
            BlockKillExitCode::ConfigError
        );
    }

    #[test]
    fn test_error_to_exit_code_general_errors() {
        assert_eq!(
            BlockKillError::ProcessNotFound(1).exit_code(),
            BlockKillExitCode::GeneralError
        );
        assert_eq!(
            BlockKillError::SystemError("x".to_string()).exit_code(),
            BlockKillExitCode::GeneralError
        );
    }
}
