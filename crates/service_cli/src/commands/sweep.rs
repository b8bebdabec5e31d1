//! Sweep command implementation
//!
//! Runs one inline sweep described by flags, one named sweep from the
//! configuration, or every configured sweep in order.

use clap::Args;
use pricer_core::types::BaseParameters;
use pricer_risk::sweep::{AxisSpec, SweepEngine, SweepOutput, SweepRequest};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::{CliConfig, OutputFormat};
use crate::output::render;
use crate::{CliError, Result};

/// Arguments of `sweep-cli sweep`
#[derive(Debug, Clone, Args)]
pub struct SweepArgs {
    /// Run only the configured sweep with this name
    #[arg(short, long, conflicts_with = "row")]
    pub name: Option<String>,

    /// Valuation kind (price, put-price, call-delta, gamma, american-call, ...)
    #[arg(short, long, default_value = "price")]
    pub kind: String,

    /// Row axis as NAME=START:END:STEP (e.g. S=10:50:1)
    #[arg(long)]
    pub row: Option<AxisSpec>,

    /// Column axis as NAME=START:END:STEP (e.g. K=20:40:2)
    #[arg(long, requires = "row")]
    pub col: Option<AxisSpec>,

    /// Spot price (S)
    #[arg(long, default_value_t = 100.0)]
    pub spot: f64,

    /// Strike price (K)
    #[arg(long, default_value_t = 100.0)]
    pub strike: f64,

    /// Time to expiry in years (T)
    #[arg(long, default_value_t = 1.0)]
    pub expiry: f64,

    /// Risk-free rate (r)
    #[arg(long, default_value_t = 0.05)]
    pub rate: f64,

    /// Volatility (sig)
    #[arg(long, default_value_t = 0.2)]
    pub volatility: f64,

    /// Cost of carry (b); defaults to the rate
    #[arg(long)]
    pub carry: Option<f64>,
}

impl SweepArgs {
    /// Base parameters from the flags.
    pub fn base(&self) -> BaseParameters {
        BaseParameters::new(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
            self.carry.unwrap_or(self.rate),
        )
    }

    /// Inline request, if a row axis was given.
    pub fn inline_request(&self) -> Option<SweepRequest> {
        let rows = self.row.clone()?;
        let request = match self.col.clone() {
            Some(cols) => SweepRequest::matrix(self.kind.clone(), self.base(), rows, cols),
            None => SweepRequest::vector(self.kind.clone(), self.base(), rows),
        };
        Some(request)
    }
}

#[derive(Serialize)]
struct NamedOutput<'a> {
    name: Option<&'a str>,
    #[serde(flatten)]
    output: &'a SweepOutput,
}

/// Select the requests to run
fn select(args: &SweepArgs, config: &CliConfig) -> Result<Vec<SweepRequest>> {
    if let Some(request) = args.inline_request() {
        request.validate()?;
        return Ok(vec![request]);
    }
    if let Some(name) = &args.name {
        let request = config
            .sweep(name)
            .ok_or_else(|| CliError::SweepNotFound(name.clone()))?;
        return Ok(vec![request.clone()]);
    }
    Ok(config.sweeps.clone())
}

/// Run the sweep command
pub fn run(args: &SweepArgs, config: &CliConfig) -> Result<()> {
    let requests = select(args, config)?;
    if requests.is_empty() {
        warn!("No sweeps to run: pass --row or add [[sweeps]] to the configuration");
        return Ok(());
    }

    let engine = SweepEngine::new(config.parallel.clone())?;
    info!(
        "Running {} sweep(s) (batch size {}, parallel threshold {})",
        requests.len(),
        engine.config().batch_size,
        engine.config().parallel_threshold
    );

    let mut outputs = Vec::with_capacity(requests.len());
    for request in &requests {
        let output = request.run(&engine)?;
        info!(
            "  {}: {} values",
            request.name.as_deref().unwrap_or(&request.kind),
            output.len()
        );
        outputs.push(output);
    }

    match config.output.format {
        OutputFormat::Json => {
            let named: Vec<NamedOutput<'_>> = requests
                .iter()
                .zip(&outputs)
                .map(|(request, output)| NamedOutput {
                    name: request.name.as_deref(),
                    output,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&named)?);
        }
        _ => {
            for (request, output) in requests.iter().zip(&outputs) {
                if let Some(name) = &request.name {
                    println!("\n=== {} ===", name);
                }
                print!("{}", render(output, None, &config.output)?);
            }
        }
    }

    info!("Sweep complete");
    Ok(())
}
