//! Check command implementation
//!
//! Validates the loaded configuration and summarises it.

use std::path::Path;

use pricer_risk::sweep::ValuationKind;
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run(path: &Path, config: &CliConfig) -> Result<()> {
    info!("Checking configuration...");
    config.validate()?;

    if path.exists() {
        println!("Configuration file: {}", path.display());
    } else {
        println!("Configuration file: {} (not found, using defaults)", path.display());
    }
    println!("  Log level:          {}", config.log_level);
    println!(
        "  Output:             {} (precision {})",
        config.output.format, config.output.precision
    );
    println!(
        "  Parallel:           batch size {}, threshold {} cells",
        config.parallel.batch_size, config.parallel.parallel_threshold
    );
    println!("  FD step sizes:      {:?}", config.finite_difference.step_sizes);
    println!("  FD mesh step sizes: {:?}", config.finite_difference.mesh_step_sizes);
    println!("  Sweeps:             {}", config.sweeps.len());

    for (i, sweep) in config.sweeps.iter().enumerate() {
        let name = sweep.name.clone().unwrap_or_else(|| format!("#{}", i + 1));
        let axes = match (&sweep.rows, &sweep.columns) {
            (Some(r), Some(c)) => format!("{} x {}", r.parameter, c.parameter),
            (Some(r), None) => r.parameter.clone(),
            _ => String::from("-"),
        };
        println!("    {:<20} {:<14} {}", name, sweep.kind, axes);
    }

    let kinds: Vec<&str> = ValuationKind::ALL.iter().map(|k| k.name()).collect();
    println!("  Available kinds:    {}", kinds.join(", "));

    info!("Configuration OK");
    Ok(())
}
