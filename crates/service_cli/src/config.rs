//! CLI configuration management
//!
//! Configuration is read from a TOML file (default `sweep.toml`), then
//! overridden by environment variables and finally by command-line flags.
//! A missing file is not an error: every section has defaults.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use pricer_core::types::{PricingError, PricingResult};
use pricer_risk::greeks::DEFAULT_STUDY_STEPS;
use pricer_risk::parallel::ParallelConfig;
use pricer_risk::sweep::SweepRequest;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Environment variable overriding the configured log level.
pub const LOG_LEVEL_ENV: &str = "SWEEP_LOG_LEVEL";

/// Log levels accepted in configuration and on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = PricingError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(PricingError::invalid_argument(format!(
                "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                s
            ))),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// Output formats for sweep results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = PricingError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(PricingError::invalid_argument(format!(
                "Unknown format: {}. Supported: table, csv, json",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => f.write_str("table"),
            OutputFormat::Csv => f.write_str("csv"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,
    /// Decimal places in table and CSV output
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            precision: 4,
        }
    }
}

/// `[finite_difference]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FiniteDifferenceConfig {
    /// Step sizes for the analytic vs numerical comparison
    pub step_sizes: Vec<f64>,
    /// Step sizes for the delta mesh comparison
    pub mesh_step_sizes: Vec<f64>,
}

impl Default for FiniteDifferenceConfig {
    fn default() -> Self {
        Self {
            step_sizes: DEFAULT_STUDY_STEPS.to_vec(),
            mesh_step_sizes: vec![0.01, 0.001],
        }
    }
}

/// Top-level CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level, used when `RUST_LOG` is unset
    pub log_level: LogLevel,
    /// Output formatting
    pub output: OutputConfig,
    /// Finite-difference step sizes
    pub finite_difference: FiniteDifferenceConfig,
    /// Rayon scheduling for sweeps
    pub parallel: ParallelConfig,
    /// Named sweeps run by `sweep-cli sweep` without inline axes
    pub sweeps: Vec<SweepRequest>,
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CliConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Apply environment overrides from the process environment
    pub fn apply_env(&mut self) -> PricingResult<()> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides using `lookup` to read variables
    pub fn apply_env_with<F>(&mut self, lookup: F) -> PricingResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            self.log_level = level.parse()?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(
        &mut self,
        log_level: Option<&str>,
        format: Option<&str>,
    ) -> PricingResult<()> {
        if let Some(level) = log_level {
            self.log_level = level.parse()?;
        }
        if let Some(format) = format {
            self.output.format = format.parse()?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> PricingResult<()> {
        self.parallel.validate()?;

        if self.output.precision > 17 {
            return Err(PricingError::configuration_misuse(format!(
                "output.precision must be at most 17, got {}",
                self.output.precision
            )));
        }

        let steps = self
            .finite_difference
            .step_sizes
            .iter()
            .chain(&self.finite_difference.mesh_step_sizes);
        for &h in steps {
            if !(h.is_finite() && h > 0.0) {
                return Err(PricingError::configuration_misuse(format!(
                    "finite_difference step sizes must be positive and finite, got {}",
                    h
                )));
            }
        }

        for (i, sweep) in self.sweeps.iter().enumerate() {
            sweep.validate().map_err(|e| {
                let label = sweep.name.clone().unwrap_or_else(|| format!("#{}", i + 1));
                PricingError::invalid_argument(format!("sweep {}: {}", label, e))
            })?;
        }

        Ok(())
    }

    /// Find a configured sweep by name
    pub fn sweep(&self, name: &str) -> Option<&SweepRequest> {
        self.sweeps
            .iter()
            .find(|s| s.name.as_deref() == Some(name))
    }
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(
    path: &Path,
    log_level: Option<&str>,
    format: Option<&str>,
) -> Result<CliConfig> {
    let mut config = CliConfig::load(path)?;
    config.apply_env()?;
    config.merge_with_cli(log_level, format)?;
    config.validate()?;
    Ok(config)
}
