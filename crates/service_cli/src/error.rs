//! CLI error types.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Errors surfaced by `sweep-cli` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Library error: invalid argument or configuration misuse.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TOML configuration.
    #[error("Failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON serialisation failure.
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialisation failure.
    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    /// No sweep with the requested name in the configuration.
    #[error("No sweep named '{0}' in configuration")]
    SweepNotFound(String),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_is_transparent() {
        let err: CliError = PricingError::invalid_argument("Unknown parameter: q").into();
        assert_eq!(err.to_string(), "Invalid argument: Unknown parameter: q");
    }

    #[test]
    fn test_toml_error_converts() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("log_level = ");
        let err: CliError = parse.unwrap_err().into();
        assert!(matches!(err, CliError::Toml(_)));
    }
}
