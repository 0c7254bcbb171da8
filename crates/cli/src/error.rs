//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: computation error (unknown source, bad dimensions, shape mismatch)
//! - 12: input error (bad JSON params, bad bounds)
//! - 13: serialization error

use lic_core::LicError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
pub enum CliError {
    /// A LIC-level error (unknown source, bad dimensions, thread pool).
    Lic(LicError),
    /// A user input error (bad JSON params, bad bounds).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Lic(_) => 10,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Lic(e) => write!(f, "{e}"),
            CliError::Input(msg) | CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<LicError> for CliError {
    fn from(e: LicError) -> Self {
        match e {
            LicError::InvalidBounds(_) => CliError::Input(e.to_string()),
            other => CliError::Lic(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lic_error_exit_code_is_10() {
        let err = CliError::Lic(LicError::UnknownSource("foo".into()));
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn input_error_exit_code_is_12() {
        let err = CliError::Input("bad params".into());
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        let err = CliError::Serialization("json fail".into());
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn from_invalid_bounds_routes_to_input() {
        let cli_err = CliError::from(LicError::InvalidBounds("1,0,0,1".into()));
        assert_eq!(cli_err.exit_code(), 12);
        assert!(cli_err.to_string().contains("1,0,0,1"));
    }

    #[test]
    fn from_other_lic_error_routes_to_lic() {
        let cli_err = CliError::from(LicError::UnknownSource("xyz".into()));
        assert_eq!(cli_err.exit_code(), 10);
        assert!(cli_err.to_string().contains("xyz"));
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!(cli_err.exit_code(), 13);
    }
}
