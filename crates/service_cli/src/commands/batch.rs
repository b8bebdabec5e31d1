//! Batch command implementation
//!
//! Prices the textbook batches and reference points, printing computed
//! values next to the quoted ones.

use pricer_models::analytical::{
    american_call, american_put, call_delta, call_from_put, call_price, gamma, put_delta,
    put_from_call, put_price, satisfies_parity, DEFAULT_PARITY_TOLERANCE,
};
use pricer_models::reference::{american_reference, greeks_reference, textbook_batches};
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::Result;

/// Absolute difference tolerated against a quoted reference value.
const REFERENCE_TOLERANCE: f64 = 1e-3;

/// One computed value compared with its quoted counterpart
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// What was computed
    pub label: String,
    /// Computed value
    pub computed: f64,
    /// Quoted value
    pub expected: f64,
}

impl Comparison {
    fn new(label: impl Into<String>, computed: f64, expected: f64) -> Self {
        Self {
            label: label.into(),
            computed,
            expected,
        }
    }

    /// Absolute difference.
    pub fn error(&self) -> f64 {
        (self.computed - self.expected).abs()
    }

    /// Whether the computed value matches within the reference tolerance.
    pub fn matches(&self) -> bool {
        self.error() <= REFERENCE_TOLERANCE
    }
}

/// Every comparison printed by the command, grouped by section.
pub fn comparisons() -> Vec<(&'static str, Vec<Comparison>)> {
    let batches = textbook_batches();

    let pricing = batches
        .iter()
        .enumerate()
        .flat_map(|(i, batch)| {
            let [s, k, t, r, v, b] = batch.parameters().to_array();
            [
                Comparison::new(format!("Batch {} call", i + 1), call_price(s, k, t, r, v, b), batch.call),
                Comparison::new(format!("Batch {} put", i + 1), put_price(s, k, t, r, v, b), batch.put),
            ]
        })
        .collect();

    let parity = batches
        .iter()
        .enumerate()
        .flat_map(|(i, batch)| {
            let (s, k, t, r) = (batch.spot, batch.strike, batch.expiry, batch.rate);
            [
                Comparison::new(
                    format!("Batch {} call from parity", i + 1),
                    call_from_put(batch.put, s, k, t, r),
                    batch.call,
                ),
                Comparison::new(
                    format!("Batch {} put from parity", i + 1),
                    put_from_call(batch.call, s, k, t, r),
                    batch.put,
                ),
            ]
        })
        .collect();

    let greeks = greeks_reference();
    let [s, k, t, r, v, b] = greeks.params.to_array();
    let greeks = vec![
        Comparison::new("Call delta", call_delta(s, k, t, r, v, b), greeks.call_delta),
        Comparison::new("Put delta", put_delta(s, k, t, r, v, b), greeks.put_delta),
    ];

    let american = american_reference();
    let [s, k, t, r, v, b] = american.params.to_array();
    let american = vec![
        Comparison::new("Perpetual American call", american_call(s, k, t, r, v, b), american.call),
        Comparison::new("Perpetual American put", american_put(s, k, t, r, v, b), american.put),
    ];

    vec![
        ("Pricing batches", pricing),
        ("Put-call parity", parity),
        ("Greeks reference", greeks),
        ("American reference", american),
    ]
}

/// Run the batch command
pub fn run(config: &CliConfig) -> Result<()> {
    info!("Running textbook batches...");
    let precision = config.output.precision;
    let mut mismatches = 0;

    for (section, rows) in comparisons() {
        println!("\n=== {} ===", section);
        println!("{:<28} {:>14} {:>14} {:>12}", "", "Computed", "Expected", "Error");
        for row in &rows {
            if !row.matches() {
                mismatches += 1;
                warn!("{} differs from the quoted value by {:e}", row.label, row.error());
            }
            println!(
                "{:<28} {:>14.prec$} {:>14.prec$} {:>12.3e}",
                row.label,
                row.computed,
                row.expected,
                row.error(),
                prec = precision
            );
        }
    }

    println!("\n=== Parity of computed prices ===");
    for (i, batch) in textbook_batches().iter().enumerate() {
        let [s, k, t, r, v, b] = batch.parameters().to_array();
        let valid = satisfies_parity(
            call_price(s, k, t, r, v, b),
            put_price(s, k, t, r, v, b),
            s,
            k,
            t,
            r,
            DEFAULT_PARITY_TOLERANCE,
        );
        println!("Batch {}: {}", i + 1, if valid { "Yes" } else { "No" });
    }

    let greeks = greeks_reference();
    let [s, k, t, r, v, b] = greeks.params.to_array();
    println!("\nGamma at the Greeks reference point: {:.prec$}", gamma(s, k, t, r, v, b), prec = precision);

    let american = american_reference();
    let [s, k, _, r, v, b] = american.params.to_array();
    println!(
        "European call / put at the American reference point (T=1): {:.prec$} / {:.prec$}",
        call_price(s, k, 1.0, r, v, b),
        put_price(s, k, 1.0, r, v, b),
        prec = precision
    );

    if mismatches > 0 {
        warn!("{} value(s) outside tolerance {}", mismatches, REFERENCE_TOLERANCE);
    }
    info!("Batch complete");
    Ok(())
}
