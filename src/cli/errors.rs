//! CLI-specific error types
//!
//! Every CLI error terminates the command with a non-zero exit.

use std::fmt;

use crate::config::ConfigError;
use crate::pipeline::{BootstrapError, LookupError};
use crate::store::StoreError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// Store file error
    StoreError,
    /// Bootstrap failed
    BootFailed,
    /// Lookup failed
    LookupFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "LEXI_CLI_CONFIG_ERROR",
            Self::StoreError => "LEXI_CLI_STORE_ERROR",
            Self::BootFailed => "LEXI_CLI_BOOT_FAILED",
            Self::LookupFailed => "LEXI_CLI_LOOKUP_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::new(CliErrorCode::ConfigError, e.to_string())
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        Self::new(CliErrorCode::StoreError, e.to_string())
    }
}

impl From<BootstrapError> for CliError {
    fn from(e: BootstrapError) -> Self {
        Self::new(CliErrorCode::BootFailed, e.to_string())
    }
}

impl From<LookupError> for CliError {
    fn from(e: LookupError) -> Self {
        Self::new(CliErrorCode::LookupFailed, e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_code() {
        let err = CliError::new(CliErrorCode::ConfigError, "missing store_path");
        assert_eq!(
            err.to_string(),
            "[LEXI_CLI_CONFIG_ERROR] missing store_path"
        );
    }

    #[test]
    fn test_bootstrap_error_converts_to_boot_failed() {
        let err: CliError = BootstrapError::NoHeader.into();
        assert_eq!(err.code(), CliErrorCode::BootFailed);
    }
}
