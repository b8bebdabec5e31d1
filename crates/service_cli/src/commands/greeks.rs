//! Greeks command implementation
//!
//! Compares the closed-form Greeks with bump-and-revalue estimates across
//! the configured step sizes, then across a spot mesh.

use pricer_core::math::Mesh;
use pricer_core::types::{BaseParameters, ParameterSlot};
use pricer_models::analytical::{call_delta, call_theta, gamma, vega};
use pricer_models::reference::greeks_reference;
use pricer_risk::greeks::{convergence_study, ConvergenceRow, FiniteDifference, FiniteDifferenceGreek};
use pricer_risk::sweep::ValuationKind;
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Convergence rows for every finite-difference Greek, in
/// [`FiniteDifferenceGreek::ALL`] order.
pub fn study(
    params: &BaseParameters,
    steps: &[f64],
) -> Result<Vec<(FiniteDifferenceGreek, Vec<ConvergenceRow>)>> {
    let mut oracle = FiniteDifference::with_default_step(ValuationKind::Price);
    let mut out = Vec::with_capacity(FiniteDifferenceGreek::ALL.len());

    for greek in FiniteDifferenceGreek::ALL {
        let rows = match greek {
            FiniteDifferenceGreek::Delta => {
                convergence_study(&mut oracle, greek, &call_delta, params, steps)?
            }
            FiniteDifferenceGreek::Gamma => convergence_study(&mut oracle, greek, &gamma, params, steps)?,
            FiniteDifferenceGreek::Theta => {
                convergence_study(&mut oracle, greek, &call_theta, params, steps)?
            }
            FiniteDifferenceGreek::Vega => convergence_study(&mut oracle, greek, &vega, params, steps)?,
        };
        out.push((greek, rows));
    }
    Ok(out)
}

/// Numerical and analytic call delta at each spot, for one step size.
pub fn delta_mesh(params: &BaseParameters, spots: &Mesh, h: f64) -> Result<Vec<(f64, f64, f64)>> {
    let oracle = FiniteDifference::new(ValuationKind::Price, h)?;
    let rows = spots
        .iter()
        .map(|&s| {
            let p = params.with(ParameterSlot::Spot, s);
            let exact = call_delta(s, p.strike, p.expiry, p.rate, p.volatility, p.cost_of_carry);
            (s, oracle.delta(&p), exact)
        })
        .collect();
    Ok(rows)
}

/// Run the greeks command
pub fn run(config: &CliConfig) -> Result<()> {
    let params = greeks_reference().params;
    let precision = config.output.precision.max(6);
    let fd = &config.finite_difference;

    info!("Comparing analytic and finite-difference Greeks...");
    println!(
        "S={}, K={}, T={}, r={}, sig={}, b={}",
        params.spot, params.strike, params.expiry, params.rate, params.volatility, params.cost_of_carry
    );

    for (greek, rows) in study(&params, &fd.step_sizes)? {
        let Some(first) = rows.first() else {
            continue;
        };
        println!("\n{} (analytic {:.prec$})", greek.name(), first.analytic, prec = precision);
        println!("{:>10} {:>16} {:>12}", "h", "numerical", "error");
        for row in &rows {
            println!(
                "{:>10} {:>16.prec$} {:>12.3e}",
                row.step,
                row.numerical,
                row.abs_error,
                prec = precision
            );
        }
    }

    let spots = Mesh::generate(80.0, 120.0, 5.0)?;
    for &h in &fd.mesh_step_sizes {
        println!("\nNumerical delta with h={}:", h);
        println!("{:>8} {:>14} {:>14} {:>12}", "S", "numerical", "exact", "error");
        for (s, numerical, exact) in delta_mesh(&params, &spots, h)? {
            println!(
                "{:>8.2} {:>14.prec$} {:>14.prec$} {:>12.3e}",
                s,
                numerical,
                exact,
                (numerical - exact).abs(),
                prec = precision
            );
        }
    }

    info!("Greeks comparison complete");
    Ok(())
}
