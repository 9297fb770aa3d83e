//! CLI error types

use thiserror::Error;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// Errors that abort the process with a non-zero exit code
#[derive(Debug, Error)]
pub enum CliError {
    /// The server could not be started
    #[error("boot failed: {0}")]
    Boot(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_error_display() {
        let err = CliError::Boot("port in use".to_string());
        assert_eq!(err.to_string(), "boot failed: port in use");
    }
}
